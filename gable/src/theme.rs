// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! Default values used by the widgets in their paint methods.

#![allow(missing_docs, reason = "Names are self-explanatory.")]

use gable_core::core::{Outline, Theme};
use gable_core::peniko::Color;

pub const TEXT_COLOR: Color = Color::from_rgb8(0x3C, 0x3C, 0x3C);
pub const TEXT_COLOR_HOVER: Color = Color::from_rgb8(0x00, 0x00, 0x00);
pub const DISABLED_TEXT_COLOR: Color = Color::from_rgb8(0x7D, 0x7D, 0x7D);

pub const BACKGROUND_COLOR: Color = Color::from_rgb8(0xF5, 0xF5, 0xF5);
pub const BACKGROUND_COLOR_HOVER: Color = Color::from_rgb8(0xFF, 0xFF, 0xFF);
pub const BACKGROUND_COLOR_DOWN: Color = Color::from_rgb8(0xEB, 0xEB, 0xEB);
pub const BACKGROUND_COLOR_DISABLED: Color = Color::from_rgb8(0xE6, 0xE6, 0xE6);

pub const BORDER_COLOR: Color = Color::from_rgb8(0x3C, 0x3C, 0x3C);
pub const BORDER_COLOR_HOVER: Color = Color::from_rgb8(0x00, 0x00, 0x00);
pub const FOCUS_COLOR: Color = Color::from_rgb8(0x1E, 0x1E, 0xB4);

pub const PANEL_BACKGROUND_COLOR: Color = Color::from_rgb8(0xFF, 0xFF, 0xFF);
pub const TOOLTIP_BACKGROUND_COLOR: Color = Color::from_rgb8(0xFF, 0xFF, 0xE1);

pub const BORDER_WIDTH: f64 = 1.;
/// Side of the box of check boxes and radio buttons which weren't given a size.
pub const BASIC_WIDGET_HEIGHT: f64 = 18.;
/// Gap between a check box or radio button and its text, as a fraction of the box width.
pub const TEXT_DISTANCE_RATIO: f64 = 0.2;

/// The look used by [`default_gui`](crate::default_gui).
pub fn default_theme() -> Theme {
    let mut theme = Theme::new();

    // Button
    let button = theme.for_widget_mut("Button");
    button.insert("TextColor", TEXT_COLOR);
    button.insert("TextColorHover", TEXT_COLOR_HOVER);
    button.insert("TextColorDown", TEXT_COLOR_HOVER);
    button.insert("TextColorDisabled", DISABLED_TEXT_COLOR);
    button.insert("BackgroundColor", BACKGROUND_COLOR);
    button.insert("BackgroundColorHover", BACKGROUND_COLOR_HOVER);
    button.insert("BackgroundColorDown", BACKGROUND_COLOR_DOWN);
    button.insert("BackgroundColorDisabled", BACKGROUND_COLOR_DISABLED);
    button.insert("BorderColor", BORDER_COLOR);
    button.insert("BorderColorHover", BORDER_COLOR_HOVER);
    button.insert("BorderColorDown", BORDER_COLOR_HOVER);
    button.insert("BorderColorDisabled", DISABLED_TEXT_COLOR);
    button.insert("BorderColorFocused", FOCUS_COLOR);
    button.insert("Borders", Outline::uniform(BORDER_WIDTH));

    // Label
    let label = theme.for_widget_mut("Label");
    label.insert("TextColor", TEXT_COLOR);
    label.insert("BackgroundColor", Color::TRANSPARENT);
    label.insert("BorderColor", BORDER_COLOR);
    label.insert("Borders", Outline::ZERO);
    label.insert("Padding", Outline::ZERO);

    // CheckBox and RadioButton
    for widget_type in ["CheckBox", "RadioButton"] {
        let check = theme.for_widget_mut(widget_type);
        check.insert("TextColor", TEXT_COLOR);
        check.insert("TextColorHover", TEXT_COLOR_HOVER);
        check.insert("TextColorDisabled", DISABLED_TEXT_COLOR);
        check.insert("BackgroundColor", BACKGROUND_COLOR);
        check.insert("BackgroundColorHover", BACKGROUND_COLOR_HOVER);
        check.insert("BackgroundColorDisabled", BACKGROUND_COLOR_DISABLED);
        check.insert("BorderColor", BORDER_COLOR);
        check.insert("BorderColorHover", BORDER_COLOR_HOVER);
        check.insert("BorderColorDisabled", DISABLED_TEXT_COLOR);
        check.insert("BorderColorFocused", FOCUS_COLOR);
        check.insert("CheckColor", TEXT_COLOR);
        check.insert("CheckColorHover", TEXT_COLOR_HOVER);
        check.insert("CheckColorDisabled", DISABLED_TEXT_COLOR);
        check.insert("Borders", Outline::uniform(BORDER_WIDTH));
        check.insert("TextDistanceRatio", TEXT_DISTANCE_RATIO);
    }

    // Panel
    let panel = theme.for_widget_mut("Panel");
    panel.insert("BackgroundColor", PANEL_BACKGROUND_COLOR);
    panel.insert("BorderColor", BORDER_COLOR);
    panel.insert("Borders", Outline::ZERO);

    theme
}

/// Renderer properties which make a [`Label`](crate::widgets::Label) look like a tooltip.
///
/// Apply them with [`WidgetMut::set_renderer_property`](gable_core::core::WidgetMut::set_renderer_property)
/// on the label passed to [`Gui::set_tooltip`](gable_core::app::Gui::set_tooltip).
pub fn tooltip_label_properties() -> [(&'static str, gable_core::core::PropertyValue); 4] {
    [
        ("BackgroundColor", TOOLTIP_BACKGROUND_COLOR.into()),
        ("BorderColor", BORDER_COLOR.into()),
        ("Borders", Outline::uniform(BORDER_WIDTH).into()),
        ("Padding", Outline::new(2., 1., 2., 1.).into()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_widget_has_a_section() {
        let theme = default_theme();
        for widget_type in ["Button", "Label", "CheckBox", "RadioButton", "Panel"] {
            assert!(theme.has_section(widget_type), "missing section {widget_type}");
        }
        assert!(!theme.has_section("Picture"));
    }
}
