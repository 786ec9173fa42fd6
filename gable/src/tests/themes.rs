// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use assert_matches::assert_matches;
use gable_core::core::{DrawCommand, DrawList, TextureCache, Theme};
use gable_core::file::LoadError;

use super::harness;
use crate::widgets::{Button, Label};

fn fill_colors(scene: &DrawList) -> Vec<[u8; 4]> {
    scene
        .commands()
        .iter()
        .filter_map(|command| match command {
            DrawCommand::FillRect { color, .. } => {
                let rgba = color.to_rgba8();
                Some([rgba.r, rgba.g, rgba.b, rgba.a])
            }
            _ => None,
        })
        .collect()
}

#[test]
fn loaded_theme_replaces_defaults() {
    let theme = Theme::from_text(
        "Button {\n    BackgroundColor = #FF0000;\n    Borders = (0, 0, 0, 0);\n}\n",
        &mut TextureCache::new(),
        Path::new(""),
    )
    .unwrap();

    let mut harness = harness();
    harness.add(Button::new("Ok"), "ok");
    harness.gui_mut().set_theme(theme);

    let colors = fill_colors(&harness.draw());
    assert_eq!(colors[0], [255, 0, 0, 255]);
}

#[test]
fn renderer_overrides_win_over_theme() {
    let mut harness = harness();
    let button = harness.add(Button::new("Ok"), "ok");
    harness
        .gui_mut()
        .set_renderer_property(button, "BackgroundColor", "#00FF00")
        .unwrap();
    assert_eq!(fill_colors(&harness.draw())[0], [0, 255, 0, 255]);

    // Hover falls back to the theme's hover color, which isn't overridden.
    harness.mouse_move((5., 5.));
    let hover = crate::theme::BACKGROUND_COLOR_HOVER.to_rgba8();
    assert_eq!(
        fill_colors(&harness.draw())[0],
        [hover.r, hover.g, hover.b, hover.a]
    );
}

#[test]
fn theme_change_refits_labels() {
    let mut harness = harness();
    let label = harness.add(Label::new("Hello"), "label");
    let before = harness.get_widget(label).ctx().size();

    let mut theme = crate::theme::default_theme();
    theme
        .for_widget_mut("Label")
        .insert("Padding", gable_core::core::Outline::uniform(5.));
    harness.gui_mut().set_theme(theme);

    let after = harness.get_widget(label).ctx().size();
    assert!((after.width - before.width - 10.).abs() < 1e-9);
}

#[test]
fn invalid_theme_is_rejected() {
    let result = Theme::from_text(
        "Button {\n    BackgroundColor = #GG0000;\n}\n",
        &mut TextureCache::new(),
        Path::new(""),
    );
    assert_matches!(result, Err(LoadError::Property { property, .. }) if property == "BackgroundColor");

    let result = Theme::from_text(
        "Button {\n    Text {\n    }\n}\n",
        &mut TextureCache::new(),
        Path::new(""),
    );
    assert_matches!(result, Err(LoadError::Structure(_)));
}
