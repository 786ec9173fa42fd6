// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! Reading and writing widget and theme files.
//!
//! Both use the same text format, parsed into a tree of [`DataNode`]s.
//! The `parse_*` and `format_*` helpers convert between property values
//! and their textual form.

mod data_node;
mod factory;
mod value;
mod widget_file;

pub use data_node::{DataNode, MAX_NESTING_DEPTH, ParseError, split_header};
pub use factory::WidgetFactory;
pub use value::{
    format_bool, format_color, format_number, format_outline, format_pair, parse_bool,
    parse_color, parse_number, parse_outline, parse_point, parse_size, quote_string,
    unquote_string,
};

pub(crate) use widget_file::{load_widgets, save_widgets};

use crate::core::PropertyError;

/// An error which happened while loading a widget or theme file.
///
/// When loading widgets fails, the widget tree is left unchanged.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read file")]
    Io(#[from] std::io::Error),
    /// The file is not valid text format.
    #[error("syntax error")]
    Parse(#[from] ParseError),
    /// No widget type with this name is registered in the factory.
    #[error("line {line}: unknown widget type '{widget_type}'")]
    UnknownType {
        /// The type name found in the file.
        widget_type: String,
        /// The line of the section.
        line: usize,
    },
    /// A property value was rejected.
    #[error("invalid property '{property}' on '{widget}'")]
    Property {
        /// The widget (or theme section) being loaded.
        widget: String,
        /// The property name.
        property: String,
        /// Why the value was rejected.
        #[source]
        source: PropertyError,
    },
    /// Sections are nested or named in a way that can't be loaded.
    #[error("{0}")]
    Structure(String),
}
