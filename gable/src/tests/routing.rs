// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

use gable_core::core::{
    DrawCommand, InputEvent, Key, PointerButton, PointerEvent, Update, WidgetId,
};
use gable_core::kurbo::{Point, Rect, Size};
use gable_testing::{ModularWidget, Record, Recording, TestHarness, TestWidgetExt};

use super::harness;
use crate::theme;
use crate::widgets::{Button, ButtonPressed, Label, Panel};

fn place(harness: &mut TestHarness, id: WidgetId, rect: Rect) {
    harness.edit_widget(id, |mut widget| {
        widget.set_position(rect.origin());
        widget.set_size(rect.size());
    });
}

fn add_box(harness: &mut TestHarness, name: &str, rect: Rect) -> WidgetId {
    let id = harness.add(ModularWidget::new(()), name);
    place(harness, id, rect);
    id
}

/// Pointer events, and the hover updates which go with them.
fn pointer_records(recording: &Recording) -> Vec<Record> {
    recording
        .drain()
        .into_iter()
        .filter(|record| {
            matches!(
                record,
                Record::PE(_) | Record::U(Update::HoveredChanged(_))
            )
        })
        .collect()
}

#[test]
fn front_widget_wins_the_hit_test() {
    let mut harness = harness();
    let back = add_box(&mut harness, "back", Rect::new(0., 0., 100., 100.));
    let front = add_box(&mut harness, "front", Rect::new(50., 50., 150., 150.));

    assert_eq!(harness.gui().find_widget_at(Point::new(75., 75.)), Some(front));
    assert_eq!(harness.gui().find_widget_at(Point::new(25., 25.)), Some(back));
    assert_eq!(harness.gui().find_widget_at(Point::new(125., 25.)), None);

    assert!(harness.mouse_move((75., 75.)));
    assert_eq!(harness.hovered_widget(), Some(front));
    assert!(!harness.mouse_move((125., 25.)));
    assert_eq!(harness.hovered_widget(), None);
}

#[test]
fn z_order_changes_which_widget_is_hit() {
    let mut harness = harness();
    let back = add_box(&mut harness, "back", Rect::new(0., 0., 100., 100.));
    let front = add_box(&mut harness, "front", Rect::new(50., 50., 150., 150.));

    assert!(harness.gui_mut().move_widget_to_back(front));
    assert_eq!(harness.gui().widgets(), &[front, back]);
    harness.mouse_move((75., 75.));
    assert_eq!(harness.hovered_widget(), Some(back));

    assert!(harness.gui_mut().move_widget_to_front(front));
    assert_eq!(harness.gui().widgets(), &[back, front]);
    harness.mouse_move((76., 76.));
    assert_eq!(harness.hovered_widget(), Some(front));
}

#[test]
fn disabled_widget_blocks_the_widgets_behind_it() {
    let mut harness = harness();
    let button = harness.add(Button::new("Behind"), "button");
    place(&mut harness, button, Rect::new(0., 0., 80., 30.));
    let cover = add_box(&mut harness, "cover", Rect::new(0., 0., 100., 100.));
    harness.edit_widget(cover, |mut cover| cover.set_enabled(false));

    // The pointer is on a widget, but nothing is hovered.
    assert!(harness.mouse_move((40., 15.)));
    assert_eq!(harness.gui().find_widget_at(Point::new(40., 15.)), Some(cover));
    assert_eq!(harness.hovered_widget(), None);

    harness.mouse_button_press(PointerButton::Left);
    harness.mouse_button_release(PointerButton::Left);
    assert!(harness.pop_action::<ButtonPressed>().is_none());
    assert_eq!(harness.focused_widget(), None);

    // Once enabled, the cover is a regular widget.
    harness.edit_widget(cover, |mut cover| cover.set_enabled(true));
    harness.mouse_move((41., 15.));
    assert_eq!(harness.hovered_widget(), Some(cover));
}

#[test]
fn hover_moves_between_widgets() {
    let mut harness = harness();
    let first_recording = Recording::default();
    let second_recording = Recording::default();
    let first = harness.add(ModularWidget::new(()).record(&first_recording), "first");
    place(&mut harness, first, Rect::new(0., 0., 50., 50.));
    let second = harness.add(ModularWidget::new(()).record(&second_recording), "second");
    place(&mut harness, second, Rect::new(100., 0., 150., 50.));
    first_recording.clear();
    second_recording.clear();

    harness.mouse_move((10., 10.));
    assert_eq!(
        pointer_records(&first_recording),
        [
            Record::PE(PointerEvent::Enter),
            Record::U(Update::HoveredChanged(true)),
            Record::PE(PointerEvent::Move(Point::new(10., 10.))),
        ]
    );
    assert!(harness.get_widget(first).ctx().is_hovered());

    harness.mouse_move((110., 20.));
    assert_eq!(
        pointer_records(&first_recording),
        [
            Record::PE(PointerEvent::Leave),
            Record::U(Update::HoveredChanged(false)),
        ]
    );
    assert_eq!(
        pointer_records(&second_recording),
        [
            Record::PE(PointerEvent::Enter),
            Record::U(Update::HoveredChanged(true)),
            Record::PE(PointerEvent::Move(Point::new(10., 20.))),
        ]
    );

    harness.mouse_leave();
    assert_eq!(
        pointer_records(&second_recording),
        [
            Record::PE(PointerEvent::Leave),
            Record::U(Update::HoveredChanged(false)),
        ]
    );
    assert!(!harness.get_widget(second).ctx().is_hovered());
    assert!(first_recording.is_empty());
}

#[test]
fn pointer_events_bubble_until_handled() {
    let mut harness = harness();
    let parent_recording = Recording::default();
    let child_recording = Recording::default();
    let parent = harness.add(ModularWidget::new_parent().record(&parent_recording), "parent");
    place(&mut harness, parent, Rect::new(100., 100., 200., 200.));
    let child = harness.add_to(
        parent,
        ModularWidget::new(())
            .pointer_event_fn(|_, ctx, event| {
                if matches!(event, PointerEvent::Down { .. }) {
                    ctx.set_handled();
                }
            })
            .record(&child_recording),
        "child",
    );
    place(&mut harness, child, Rect::new(10., 10., 30., 30.));

    harness.mouse_move((115., 115.));
    harness.mouse_button_press(PointerButton::Left);
    harness.mouse_button_release(PointerButton::Left);

    let up_and_down = |recording: &Recording| -> Vec<PointerEvent> {
        recording
            .drain()
            .into_iter()
            .filter_map(|record| match record {
                Record::PE(event @ (PointerEvent::Down { .. } | PointerEvent::Up { .. })) => {
                    Some(event)
                }
                _ => None,
            })
            .collect()
    };
    let local = Point::new(5., 5.);
    assert_eq!(
        up_and_down(&child_recording),
        [
            PointerEvent::Down {
                button: PointerButton::Left,
                pos: local
            },
            PointerEvent::Up {
                button: PointerButton::Left,
                pos: local
            },
        ]
    );
    // The child handled the press, but not the release.
    assert_eq!(
        up_and_down(&parent_recording),
        [PointerEvent::Up {
            button: PointerButton::Left,
            pos: Point::new(15., 15.)
        }]
    );
}

#[test]
fn view_maps_pixels_to_coordinates() {
    let mut harness = TestHarness::create_with_size(
        theme::default_theme(),
        crate::default_factory(),
        Size::new(800., 600.),
    );
    let target = add_box(&mut harness, "target", Rect::new(100., 50., 120., 70.));

    harness.gui_mut().set_view(Rect::new(0., 0., 400., 300.));
    assert_eq!(
        harness.gui().map_pixel_to_coords(Point::new(220., 110.)),
        Point::new(110., 55.)
    );
    harness.mouse_move((220., 110.));
    assert_eq!(harness.hovered_widget(), Some(target));
    harness.mouse_move((110., 55.));
    assert_eq!(harness.hovered_widget(), None);

    harness.gui_mut().set_view(Rect::new(100., 50., 500., 350.));
    harness.mouse_move((10., 10.));
    assert_eq!(harness.hovered_widget(), Some(target));

    // The view no longer follows the window once it was set.
    harness.process_event(InputEvent::Resized(Size::new(400., 300.)));
    assert_eq!(harness.gui().view(), Rect::new(100., 50., 500., 350.));
    assert_eq!(
        harness.gui().map_pixel_to_coords(Point::new(10., 10.)),
        Point::new(110., 60.)
    );
}

#[test]
fn losing_window_focus_cancels_the_press_and_blocks_keys() {
    let mut harness = harness();
    let button = harness.add(Button::new("Ok"), "ok");

    harness.mouse_move_to(button);
    harness.mouse_button_press(PointerButton::Left);
    assert_eq!(harness.gui().active_widget(), Some(button));
    assert_eq!(harness.focused_widget(), Some(button));

    harness.process_event(InputEvent::LostFocus);
    assert!(!harness.gui().is_window_focused());
    assert_eq!(harness.gui().active_widget(), None);
    assert!(!harness.get_widget(button).ctx().is_active());

    harness.mouse_button_release(PointerButton::Left);
    assert!(harness.pop_action::<ButtonPressed>().is_none());
    assert!(!harness.press_key(Key::Enter));
    assert!(harness.pop_action::<ButtonPressed>().is_none());

    harness.process_event(InputEvent::GainedFocus);
    assert!(harness.press_key(Key::Enter));
    assert_eq!(
        harness.pop_action::<ButtonPressed>(),
        Some((ButtonPressed { button: None }, button))
    );
}

#[test]
fn focus_previous_wraps_around() {
    let mut harness = harness();
    let first = harness.add(Button::new("First"), "first");
    harness.add(Button::new("Second"), "second");
    let third = harness.add(Button::new("Third"), "third");

    harness.focus_on(Some(first));
    assert!(harness.gui_mut().focus_previous_widget());
    assert_eq!(harness.focused_widget(), Some(third));
    assert!(harness.gui_mut().focus_next_widget());
    assert_eq!(harness.focused_widget(), Some(first));

    let mut empty = super::harness();
    empty.add(Label::new("Not focusable"), "label");
    assert!(!empty.gui_mut().focus_previous_widget());
    assert_eq!(empty.focused_widget(), None);
}

#[test]
fn gui_opacity_multiplies_widget_opacity() {
    let mut harness = harness();
    let panel = harness.add(Panel::new(), "panel");
    harness.edit_widget(panel, |mut panel| {
        panel.set_size(Size::new(50., 50.));
        panel.set_opacity(0.5);
    });
    harness.gui_mut().set_opacity(0.5);

    let scene = harness.draw();
    let background = scene
        .commands()
        .iter()
        .find_map(|command| match command {
            DrawCommand::FillRect { color, .. } => Some(*color),
            _ => None,
        })
        .unwrap();
    assert_eq!(
        background.to_rgba8(),
        theme::PANEL_BACKGROUND_COLOR
            .multiply_alpha(0.25)
            .to_rgba8()
    );

    harness.gui_mut().set_opacity(2.0);
    assert_eq!(harness.gui().opacity(), 1.0);
}
