// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

/// The type of a widget property, as listed by
/// [`Widget::property_list`](crate::core::Widget::property_list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// `true` or `false`.
    Bool,
    /// A number.
    Number,
    /// A quoted string.
    String,
    /// An `(x, y)` pair.
    Vector,
    /// A color.
    Color,
    /// A file path, given as a quoted string.
    Path,
}

impl PropertyKind {
    /// Name of the kind, as used in property listings.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Vector => "vector",
            Self::Color => "color",
            Self::Path => "path",
        }
    }
}

/// An error which happened while setting a property from text.
#[derive(Debug, thiserror::Error)]
pub enum PropertyError {
    /// No property with that name exists on the widget.
    #[error("unknown property '{0}'")]
    Unknown(String),
    /// The value could not be parsed as the expected kind.
    #[error("failed to parse '{value}' as {expected}")]
    InvalidValue {
        /// The kind of value which was expected.
        expected: &'static str,
        /// The text which failed to parse.
        value: String,
    },
    /// A texture named by the property could not be loaded.
    #[error(transparent)]
    Texture(#[from] crate::core::TextureError),
}

impl PropertyError {
    /// Create an [`InvalidValue`](Self::InvalidValue) error.
    pub fn invalid(expected: &'static str, value: &str) -> Self {
        Self::InvalidValue {
            expected,
            value: value.to_string(),
        }
    }
}
