// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

use gable_core::core::WidgetId;
use gable_core::kurbo::{Point, Size};
use gable_testing::TestHarness;

use super::harness;
use crate::widgets::{CheckBox, CheckedChanged, Panel, RadioButton};

fn is_checked(harness: &TestHarness, id: WidgetId) -> bool {
    harness
        .get_widget(id)
        .downcast::<RadioButton>()
        .unwrap()
        .is_checked()
}

#[test]
fn panels_separate_groups() {
    let mut harness = harness();
    let size_panel = harness.add(Panel::new(), "size");
    let color_panel = harness.add(Panel::new(), "color");
    harness.edit_widget(size_panel, |mut panel| panel.set_size(Size::new(100., 100.)));
    harness.edit_widget(color_panel, |mut panel| {
        panel.set_position(Point::new(200., 0.));
        panel.set_size(Size::new(100., 100.));
    });

    let small = harness.add_to(size_panel, RadioButton::new("Small").with_checked(true), "small");
    let large = harness.add_to(size_panel, RadioButton::new("Large"), "large");
    let red = harness.add_to(color_panel, RadioButton::new("Red").with_checked(true), "red");
    let blue = harness.add_to(color_panel, RadioButton::new("Blue"), "blue");
    for id in [large, blue] {
        harness.edit_widget(id, |mut radio| radio.set_position(Point::new(0., 40.)));
    }

    harness.mouse_click_on(large);
    assert!(!is_checked(&harness, small));
    assert!(is_checked(&harness, large));
    assert!(is_checked(&harness, red));
    assert!(!is_checked(&harness, blue));
}

#[test]
fn check_boxes_are_left_alone() {
    let mut harness = harness();
    let check = harness.add(CheckBox::new("Check").with_checked(true), "check");
    let radio = harness.add(RadioButton::new("Radio"), "radio");
    harness.edit_widget(radio, |mut radio| radio.set_position(Point::new(0., 40.)));

    harness.mouse_click_on(radio);
    let check = harness.get_widget(check);
    assert!(check.downcast::<CheckBox>().unwrap().is_checked());
}

#[test]
fn unchecking_top_level_buttons() {
    let mut harness = harness();
    let panel = harness.add(Panel::new(), "panel");
    let nested = harness.add_to(panel, RadioButton::new("Nested").with_checked(true), "nested");
    let top = harness.add(RadioButton::new("Top").with_checked(true), "top");
    while harness.pop_action::<CheckedChanged>().is_some() {}

    harness.gui_mut().uncheck_radio_buttons();
    assert!(!is_checked(&harness, top));
    // Buttons inside containers belong to the container's group.
    assert!(is_checked(&harness, nested));
    assert_eq!(
        harness.pop_action::<CheckedChanged>(),
        Some((CheckedChanged(false), top))
    );
    assert!(harness.pop_action::<CheckedChanged>().is_none());
}

#[test]
fn disabled_radio_button_cannot_be_checked() {
    let mut harness = harness();
    let radio = harness.add(RadioButton::new("Radio"), "radio");
    harness.edit_widget(radio, |mut radio| radio.set_enabled(false));

    harness.mouse_move((5., 5.));
    harness.mouse_button_press(gable_core::core::PointerButton::Left);
    harness.mouse_button_release(gable_core::core::PointerButton::Left);
    assert!(!is_checked(&harness, radio));
}
