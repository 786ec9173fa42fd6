// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! Renderer properties: the style of widgets.
//!
//! Each widget has a [`Renderer`] holding its own property values, and the
//! [`Theme`] holds default values per widget type. Widgets read the merged
//! view through [`RendererRef`]: a value set on the widget wins over the
//! theme's default.
//!
//! Property names are case-insensitive.

use std::collections::BTreeMap;
use std::path::Path;

use hashbrown::HashMap;
use kurbo::{Rect, Size};
use peniko::Color;

use crate::core::{PropertyError, Texture, TextureCache};
use crate::file::{self, DataNode, LoadError};

/// Widths of the four sides of a box, used for borders and padding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Outline {
    /// Left side.
    pub left: f64,
    /// Top side.
    pub top: f64,
    /// Right side.
    pub right: f64,
    /// Bottom side.
    pub bottom: f64,
}

impl Outline {
    /// An outline with all sides set to zero.
    pub const ZERO: Self = Self::uniform(0.);

    /// Create an outline from its four sides.
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create an outline with the same width on every side.
    pub const fn uniform(width: f64) -> Self {
        Self::new(width, width, width, width)
    }

    /// Sum of the left and right sides.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of the top and bottom sides.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// The rectangle left inside a box of the given size once this outline is removed.
    pub fn inner_rect(&self, size: Size) -> Rect {
        let x1 = (size.width - self.right).max(self.left);
        let y1 = (size.height - self.bottom).max(self.top);
        Rect::new(self.left, self.top, x1, y1)
    }

    /// Returns `true` if every side is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// The value of a renderer property.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A color.
    Color(Color),
    /// A string.
    String(String),
    /// Borders or padding.
    Outline(Outline),
    /// An image.
    Texture(Texture),
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Color> for PropertyValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Outline> for PropertyValue {
    fn from(value: Outline) -> Self {
        Self::Outline(value)
    }
}

impl From<Texture> for PropertyValue {
    fn from(value: Texture) -> Self {
        Self::Texture(value)
    }
}

impl PropertyValue {
    /// Parse a value from its textual form.
    ///
    /// The property name decides how ambiguous text is read: names starting with
    /// `Texture` are image paths (resolved against `resource_path` and loaded through
    /// `textures`), names containing `Color` are colors, and `Borders`, `Padding` and
    /// names ending in `Outline` are outlines. Other values are read as a bool,
    /// a number or a string, in that order.
    pub fn parse(
        name: &str,
        text: &str,
        textures: &mut TextureCache,
        resource_path: &Path,
    ) -> Result<Self, PropertyError> {
        let lower = name.to_ascii_lowercase();
        let text = text.trim();

        if lower.starts_with("texture") {
            let relative = file::unquote_string(text)?;
            let texture = textures.load(resource_path.join(relative))?;
            return Ok(Self::Texture(texture));
        }
        if lower.contains("color") {
            return file::parse_color(text).map(Self::Color);
        }
        if lower == "borders" || lower == "padding" || lower.ends_with("outline") {
            return file::parse_outline(text).map(Self::Outline);
        }

        if let Ok(value) = file::parse_bool(text) {
            return Ok(Self::Bool(value));
        }
        if let Ok(value) = file::parse_number(text) {
            return Ok(Self::Number(value));
        }
        file::unquote_string(text).map(Self::String)
    }

    /// The textual form of this value, as written in widget and theme files.
    ///
    /// Texture paths are written relative to `resource_path` when possible.
    pub fn to_text(&self, resource_path: &Path) -> String {
        match self {
            Self::Bool(value) => file::format_bool(*value),
            Self::Number(value) => file::format_number(*value),
            Self::Color(color) => file::format_color(*color),
            Self::String(value) => file::quote_string(value),
            Self::Outline(outline) => file::format_outline(outline),
            Self::Texture(texture) => {
                let path = texture.path();
                let path = path.strip_prefix(resource_path).unwrap_or(path);
                file::quote_string(&path.to_string_lossy())
            }
        }
    }

    /// The value as a bool, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The value as a number, if it is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// The value as a color, if it is one.
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(color) => Some(*color),
            _ => None,
        }
    }

    /// The value as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// The value as an outline. Numbers are read as uniform outlines.
    pub fn as_outline(&self) -> Option<Outline> {
        match self {
            Self::Outline(outline) => Some(*outline),
            Self::Number(width) => Some(Outline::uniform(*width)),
            _ => None,
        }
    }

    /// The value as a texture, if it is one.
    pub fn as_texture(&self) -> Option<&Texture> {
        match self {
            Self::Texture(texture) => Some(texture),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
struct PropertyEntry {
    name: String,
    value: PropertyValue,
}

/// A case-insensitive map of property names to values.
///
/// Names keep the casing they were first inserted with, which is the casing
/// used when saving.
#[derive(Debug, Clone, Default)]
pub struct PropertyMap {
    entries: BTreeMap<String, PropertyEntry>,
}

impl PropertyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property. Returns the previous value if it was already set.
    pub fn insert(&mut self, name: &str, value: impl Into<PropertyValue>) -> Option<PropertyValue> {
        let value = value.into();
        match self.entries.get_mut(&name.to_ascii_lowercase()) {
            Some(entry) => Some(std::mem::replace(&mut entry.value, value)),
            None => {
                self.entries.insert(
                    name.to_ascii_lowercase(),
                    PropertyEntry {
                        name: name.to_string(),
                        value,
                    },
                );
                None
            }
        }
    }

    /// Get the value of a property.
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(|entry| &entry.value)
    }

    /// Returns `true` if the property is set.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    /// Remove a property. Returns the previous value if it was set.
    pub fn remove(&mut self, name: &str) -> Option<PropertyValue> {
        self.entries
            .remove(&name.to_ascii_lowercase())
            .map(|entry| entry.value)
    }

    /// Iterate over `(name, value)` pairs, sorted by lowercase name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries
            .values()
            .map(|entry| (entry.name.as_str(), &entry.value))
    }

    /// Number of properties set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no property is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every property.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// The renderer properties set directly on one widget.
pub type Renderer = PropertyMap;

/// Default renderer properties for each widget type.
///
/// Sections are keyed by the widget's [short type name](crate::core::Widget::short_type_name),
/// e.g. `Button`.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    sections: HashMap<String, PropertyMap>,
    empty: PropertyMap,
}

impl Theme {
    /// Create a theme without any default.
    ///
    /// An empty theme is probably not what you want: widgets will be drawn
    /// without colors or borders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default value of a property for a widget type.
    pub fn insert(
        &mut self,
        widget_type: &str,
        name: &str,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.sections
            .entry(widget_type.to_ascii_lowercase())
            .or_default()
            .insert(name, value)
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with(mut self, widget_type: &str, name: &str, value: impl Into<PropertyValue>) -> Self {
        self.insert(widget_type, name, value);
        self
    }

    /// The defaults for a widget type. Empty if the theme has no section for it.
    pub fn for_widget(&self, widget_type: &str) -> &PropertyMap {
        self.sections
            .get(&widget_type.to_ascii_lowercase())
            .unwrap_or(&self.empty)
    }

    /// Mutable access to the defaults of a widget type, creating the section if needed.
    pub fn for_widget_mut(&mut self, widget_type: &str) -> &mut PropertyMap {
        self.sections
            .entry(widget_type.to_ascii_lowercase())
            .or_default()
    }

    /// Returns `true` if the theme has a section for the widget type.
    pub fn has_section(&self, widget_type: &str) -> bool {
        self.sections.contains_key(&widget_type.to_ascii_lowercase())
    }

    /// Load a theme from the text format.
    ///
    /// Every top-level section names a widget type and lists its properties:
    ///
    /// ```text
    /// Button {
    ///     BackgroundColor = #3C3C3C;
    ///     Borders = (1, 1, 1, 1);
    /// }
    /// ```
    pub fn from_text(
        text: &str,
        textures: &mut TextureCache,
        resource_path: &Path,
    ) -> Result<Self, LoadError> {
        let document = DataNode::parse(text)?;
        let mut theme = Self::new();
        for section in &document.children {
            let widget_type = section.header.trim();
            if let Some(child) = section.children.first() {
                return Err(LoadError::Structure(format!(
                    "theme section '{widget_type}' contains a nested section '{}'",
                    child.header
                )));
            }
            let defaults = theme.for_widget_mut(widget_type);
            for (name, text) in &section.properties {
                let value = PropertyValue::parse(name, text, textures, resource_path).map_err(
                    |source| LoadError::Property {
                        widget: widget_type.to_string(),
                        property: name.clone(),
                        source,
                    },
                )?;
                defaults.insert(name, value);
            }
        }
        Ok(theme)
    }

    /// Load a theme file. See [`from_text`](Self::from_text).
    pub fn load(
        path: impl AsRef<Path>,
        textures: &mut TextureCache,
        resource_path: &Path,
    ) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_text(&text, textures, resource_path)
    }
}

/// Merged, read-only view of a widget's renderer and its theme defaults.
#[derive(Clone, Copy, Debug)]
pub struct RendererRef<'a> {
    pub(crate) map: &'a PropertyMap,
    pub(crate) defaults: &'a PropertyMap,
}

impl<'a> RendererRef<'a> {
    /// Create a view from a widget's own properties and its type's defaults.
    pub fn new(map: &'a PropertyMap, defaults: &'a PropertyMap) -> Self {
        Self { map, defaults }
    }

    /// Get a property, from the widget if it is set there, else from the theme.
    pub fn get(&self, name: &str) -> Option<&'a PropertyValue> {
        self.map.get(name).or_else(|| self.defaults.get(name))
    }

    /// Returns `true` if the property is set on the widget itself.
    pub fn is_overridden(&self, name: &str) -> bool {
        self.map.contains(name)
    }

    /// The first color found among `names`, in order.
    ///
    /// Used for state-dependent colors, e.g. `["BackgroundColorHover", "BackgroundColor"]`.
    pub fn color(&self, names: &[&str]) -> Option<Color> {
        names
            .iter()
            .find_map(|name| self.get(name).and_then(PropertyValue::as_color))
    }

    /// The first texture found among `names`, in order.
    pub fn texture(&self, names: &[&str]) -> Option<&'a Texture> {
        names
            .iter()
            .find_map(|name| self.get(name).and_then(PropertyValue::as_texture))
    }

    /// A number, or `default` if it isn't set.
    pub fn number(&self, name: &str, default: f64) -> f64 {
        self.get(name)
            .and_then(PropertyValue::as_number)
            .unwrap_or(default)
    }

    /// A bool, or `default` if it isn't set.
    pub fn bool(&self, name: &str, default: bool) -> bool {
        self.get(name)
            .and_then(PropertyValue::as_bool)
            .unwrap_or(default)
    }

    /// An outline, or zero if it isn't set.
    pub fn outline(&self, name: &str) -> Outline {
        self.get(name)
            .and_then(PropertyValue::as_outline)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use assert_matches::assert_matches;

    use super::*;

    fn rgba(color: Color) -> (u8, u8, u8, u8) {
        let c = color.to_rgba8();
        (c.r, c.g, c.b, c.a)
    }

    #[test]
    fn property_names_are_case_insensitive() {
        let mut map = PropertyMap::new();
        assert!(map.insert("BackgroundColor", Color::BLACK).is_none());
        assert!(map.contains("backgroundcolor"));
        assert!(map.insert("BACKGROUNDCOLOR", Color::WHITE).is_some());
        assert_eq!(map.len(), 1);

        let (name, value) = map.iter().next().unwrap();
        assert_eq!(name, "BackgroundColor");
        assert_eq!(rgba(value.as_color().unwrap()), (255, 255, 255, 255));

        assert!(map.remove("backgroundColor").is_some());
        assert!(map.is_empty());
    }

    #[test]
    fn overrides_win_over_theme() {
        let theme = Theme::new()
            .with("Button", "TextColor", Color::BLACK)
            .with("Button", "Borders", Outline::uniform(2.));
        let mut renderer = Renderer::new();
        renderer.insert("TextColor", Color::WHITE);

        let view = RendererRef::new(&renderer, theme.for_widget("button"));
        assert_eq!(rgba(view.color(&["TextColor"]).unwrap()), (255, 255, 255, 255));
        assert_eq!(view.outline("Borders"), Outline::uniform(2.));
        assert!(view.is_overridden("textcolor"));
        assert!(!view.is_overridden("Borders"));
        assert!(view.color(&["TextColorHover"]).is_none());
        assert_eq!(view.number("TextDistanceRatio", 0.2), 0.2);
        assert!(theme.for_widget("Label").is_empty());
    }

    #[test]
    fn state_colors_fall_back() {
        let theme = Theme::new().with("Button", "BackgroundColor", Color::BLACK);
        let renderer = Renderer::new();
        let view = RendererRef::new(&renderer, theme.for_widget("Button"));
        let color = view
            .color(&["BackgroundColorHover", "BackgroundColor"])
            .unwrap();
        assert_eq!(rgba(color), (0, 0, 0, 255));
    }

    #[test]
    fn parse_by_name() {
        let mut textures = TextureCache::new();
        let root = PathBuf::new();
        let parse = |name: &str, text: &str, textures: &mut TextureCache| {
            PropertyValue::parse(name, text, textures, &root)
        };

        assert_matches!(
            parse("BorderColor", "#FF0000", &mut textures),
            Ok(PropertyValue::Color(_))
        );
        assert_matches!(
            parse("Borders", "(1, 2, 3, 4)", &mut textures),
            Ok(PropertyValue::Outline(_))
        );
        assert_matches!(
            parse("Padding", "3", &mut textures),
            Ok(PropertyValue::Outline(o)) if o == Outline::uniform(3.)
        );
        assert_matches!(
            parse("TextDistanceRatio", "0.5", &mut textures),
            Ok(PropertyValue::Number(n)) if n == 0.5
        );
        assert_matches!(
            parse("Bold", "True", &mut textures),
            Ok(PropertyValue::Bool(true))
        );
        assert_matches!(
            parse("Font", "\"mono\"", &mut textures),
            Ok(PropertyValue::String(s)) if s == "mono"
        );
        assert_matches!(
            parse("TextColor", "not a color", &mut textures),
            Err(PropertyError::InvalidValue { .. })
        );
        assert_matches!(
            parse("Texture", "\"missing.png\"", &mut textures),
            Err(PropertyError::Texture(_))
        );
    }

    #[test]
    fn values_round_trip_through_text() {
        let mut textures = TextureCache::new();
        let root = PathBuf::new();
        for (name, text) in [
            ("TextColor", "#10203040"),
            ("Borders", "(1, 2, 3, 4)"),
            ("Opacity", "0.5"),
            ("Bold", "false"),
            ("Font", "\"a \\\"b\\\"\""),
        ] {
            let value = PropertyValue::parse(name, text, &mut textures, &root).unwrap();
            assert_eq!(value.to_text(&root), text, "property {name}");
        }
    }

    #[test]
    fn theme_from_text() {
        let mut textures = TextureCache::new();
        let theme = Theme::from_text(
            "Button {\n    BackgroundColor = #3C3C3C;\n    Borders = 1;\n}\n\
             // comment\nLabel { TextColor = white; }\n",
            &mut textures,
            Path::new(""),
        )
        .unwrap();
        assert!(theme.has_section("button"));
        assert_eq!(
            theme.for_widget("Button").get("borders").unwrap().as_outline(),
            Some(Outline::uniform(1.))
        );
        assert_eq!(
            rgba(theme.for_widget("Label").get("TextColor").unwrap().as_color().unwrap()),
            (255, 255, 255, 255)
        );

        assert_matches!(
            Theme::from_text("Button { TextColor = nope; }", &mut textures, Path::new("")),
            Err(LoadError::Property { .. })
        );
        assert_matches!(
            Theme::from_text("Button { Inner { } }", &mut textures, Path::new("")),
            Err(LoadError::Structure(_))
        );
    }

    #[test]
    fn outline_inner_rect() {
        let outline = Outline::new(1., 2., 3., 4.);
        assert_eq!(outline.inner_rect(Size::new(10., 10.)), Rect::new(1., 2., 7., 6.));
        assert_eq!(outline.horizontal(), 4.);
        assert_eq!(outline.vertical(), 6.);
        assert!(Outline::ZERO.is_zero());
    }
}
