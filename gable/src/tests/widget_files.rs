// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

use assert_matches::assert_matches;
use gable_core::file::LoadError;
use gable_core::kurbo::{Point, Size};

use super::harness;
use crate::default_gui;
use crate::widgets::{Button, CheckBox, CheckedChanged, Label, RadioButton};

const FORM: &str = r#"
// A small form.
Panel."Options" {
    Position = (10, 10);
    Size = (200, 100);

    RadioButton."Small" {
        Text = "Small";
        Checked = true;
    }

    RadioButton."Large" {
        Position = (0, 30);
        Text = "Large";
    }

    Renderer {
        BackgroundColor = #DDDDDD;
    }
}

Button."Ok" {
    Position = (10, 150);
    Text = "Ok";
}
"#;

#[test]
fn load_builds_the_tree() {
    let mut gui = default_gui(Size::new(400., 300.));
    gui.load_widgets_from_str(FORM, false).unwrap();

    let panel = gui.get("Options").unwrap();
    assert_eq!(gui.children_of(panel).len(), 2);
    let large = gui.get_in(panel, "Large").unwrap();
    assert_eq!(gui.widget_origin(large), Some(Point::new(10., 40.)));

    let small = gui.get("Small").unwrap();
    let small = gui.get_widget(small).unwrap();
    assert!(small.downcast::<RadioButton>().unwrap().is_checked());
    assert_eq!(small.ctx().size(), Size::new(18., 18.));

    let ok = gui.get("Ok").unwrap();
    let ok = gui.get_widget(ok).unwrap();
    assert_eq!(ok.downcast::<Button>().unwrap().text(), "Ok");
}

#[test]
fn save_then_load_gives_the_same_file() {
    let mut harness = harness();
    harness.gui_mut().load_widgets_from_str(FORM, false).unwrap();
    let label = harness.add(Label::new("Name:"), "name");
    harness.edit_widget(label, |mut label| {
        label.set_position(Point::new(10., 200.));
        label.set_opacity(0.5);
    });
    let check = harness.add(CheckBox::new("Remember me").with_checked(true), "remember");
    harness.edit_widget(check, |mut check| {
        check.set_position(Point::new(10., 230.));
        check.set_enabled(false);
        check.set_text_size(16.);
    });
    let saved = harness.gui().save_widgets_to_string();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("form.txt");
    harness.gui().save_widgets_to_file(&path).unwrap();

    let mut gui = default_gui(Size::new(400., 300.));
    gui.load_widgets_from_file(&path, false).unwrap();
    assert_eq!(gui.save_widgets_to_string(), saved);

    let check = gui.get("remember").unwrap();
    let check = gui.get_widget(check).unwrap();
    assert!(check.ctx().is_disabled());
    assert!((check.ctx().text_size() - 16.).abs() < 1e-9);
}

#[test]
fn failed_load_leaves_tree_untouched() {
    let mut gui = default_gui(Size::new(400., 300.));
    gui.add(Button::new("Existing"), "existing").unwrap();

    let unknown = "Slider.\"Volume\" {\n    Size = (100, 10);\n}\n";
    assert_matches!(
        gui.load_widgets_from_str(unknown, true),
        Err(LoadError::UnknownType { widget_type, .. }) if widget_type == "Slider"
    );

    let invalid = "Button.\"A\" {\n    Text = \"A\";\n}\nCheckBox.\"B\" {\n    Checked = maybe;\n}\n";
    assert_matches!(
        gui.load_widgets_from_str(invalid, true),
        Err(LoadError::Property { property, .. }) if property == "Checked"
    );

    assert_matches!(
        gui.load_widgets_from_str("Button {", true),
        Err(LoadError::Parse(_))
    );

    assert_eq!(gui.widgets().len(), 1);
    assert!(gui.get("existing").is_some());
    assert!(gui.get("A").is_none());
}

#[test]
fn failed_load_drops_actions_of_staged_widgets() {
    let mut gui = default_gui(Size::new(400., 300.));
    let existing = gui.add(CheckBox::new("Existing"), "existing").unwrap();
    gui.edit_widget(existing, |mut check| {
        CheckBox::set_checked(&mut check.downcast(), true);
    })
    .unwrap();

    let text = "CheckBox.\"c\" {\n    Checked = true;\n}\nGadget {\n}\n";
    assert_matches!(
        gui.load_widgets_from_str(text, false),
        Err(LoadError::UnknownType { .. })
    );
    // Actions queued before the load are kept.
    assert_eq!(
        gui.pop_action_of::<CheckedChanged>(),
        Some((CheckedChanged(true), existing))
    );
    assert!(gui.pop_action().is_none());
}

#[test]
fn loaded_button_keeps_fitting_its_text() {
    let mut harness = harness();
    let button = harness.add(Button::new("Hi"), "b");
    let saved = harness.gui().save_widgets_to_string();
    assert!(saved.contains("AutoSize = true;"));

    let mut gui = default_gui(Size::new(400., 300.));
    gui.load_widgets_from_str(&saved, false).unwrap();
    let loaded = gui.get("b").unwrap();

    harness.edit_widget(button, |mut button| {
        Button::set_text(&mut button.downcast(), "A much longer text here");
    });
    gui.edit_widget(loaded, |mut button| {
        Button::set_text(&mut button.downcast(), "A much longer text here");
    })
    .unwrap();

    let expected = harness.get_widget(button).ctx().size();
    let widget = gui.get_widget(loaded).unwrap();
    assert!(widget.downcast::<Button>().unwrap().is_auto_size());
    assert_eq!(widget.ctx().size(), expected);

    // An explicit size survives the round trip too.
    harness.edit_widget(button, |mut button| button.set_size(Size::new(80., 30.)));
    let saved = harness.gui().save_widgets_to_string();
    let mut gui = default_gui(Size::new(400., 300.));
    gui.load_widgets_from_str(&saved, false).unwrap();
    let loaded = gui.get("b").unwrap();
    let widget = gui.get_widget(loaded).unwrap();
    assert!(!widget.downcast::<Button>().unwrap().is_auto_size());
    assert_eq!(widget.ctx().size(), Size::new(80., 30.));
}

#[test]
fn replacing_existing_widgets() {
    let mut gui = default_gui(Size::new(400., 300.));
    gui.add(Button::new("Existing"), "existing").unwrap();
    gui.load_widgets_from_str(FORM, true).unwrap();
    assert!(gui.get("existing").is_none());
    assert_eq!(gui.widgets().len(), 2);
}

#[test]
fn duplicate_names_are_rejected() {
    let mut gui = default_gui(Size::new(400., 300.));
    gui.load_widgets_from_str(FORM, false).unwrap();
    assert_matches!(
        gui.load_widgets_from_str(FORM, false),
        Err(LoadError::Structure(_))
    );
    assert_eq!(gui.widgets().len(), 2);
}
