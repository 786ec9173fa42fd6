// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! A container widget.

use gable_core::core::{DrawList, EventCtx, PaintCtx, PointerEvent, Widget, WidgetId};
use tracing::{Span, trace_span};

use crate::paint_helpers::paint_borders;
use crate::widgets::clickable::submit_click;

/// A rectangle which holds other widgets.
///
/// Children are positioned relative to the panel's top-left corner and clipped
/// to its size. Radio buttons inside a panel form their own group.
///
/// Renderer properties: `BackgroundColor`, `BorderColor` and `Borders`.
///
/// Emits [`Clicked`](super::Clicked) when its background is clicked.
#[derive(Debug, Clone, Default)]
pub struct Panel;

impl Panel {
    /// Create an empty panel.
    ///
    /// Panels have no size until they are given one.
    pub fn new() -> Self {
        Self
    }
}

impl Widget for Panel {
    fn on_pointer_event(&mut self, ctx: &mut EventCtx<'_>, event: &PointerEvent) {
        submit_click(ctx, event);
    }

    fn paint(&self, ctx: &PaintCtx<'_>, scene: &mut DrawList) {
        let renderer = ctx.renderer();
        let size = ctx.size();
        let borders = renderer.outline("Borders");
        if let Some(background) = renderer.color(&["BackgroundColor"]) {
            scene.fill_rect(borders.inner_rect(size), background);
        }
        if let Some(border) = renderer.color(&["BorderColor"]) {
            paint_borders(scene, size, borders, border);
        }
    }

    fn is_container(&self) -> bool {
        true
    }

    fn make_trace_span(&self, id: WidgetId) -> Span {
        trace_span!("Panel", id = id.trace())
    }
}

#[cfg(test)]
mod tests {
    use gable_core::core::DrawCommand;
    use gable_core::kurbo::{Point, Size};
    use gable_testing::TestHarness;

    use super::*;
    use crate::default_factory;
    use crate::theme::{self, default_theme};
    use crate::widgets::{Button, ButtonPressed, Clicked};

    #[test]
    fn children_are_relative_and_clipped() {
        let mut harness = TestHarness::create(default_theme(), default_factory());
        let panel = harness.add(Panel::new(), "panel");
        harness.edit_widget(panel, |mut panel| {
            panel.set_position(Point::new(100., 100.));
            panel.set_size(Size::new(50., 50.));
        });
        let button = harness.add_to(panel, Button::new("Hi"), "button");
        harness.edit_widget(button, |mut button| {
            button.set_position(Point::new(10., 10.));
            button.set_size(Size::new(60., 20.));
        });
        assert_eq!(
            harness.gui().widget_origin(button),
            Some(Point::new(110., 110.))
        );

        // The part of the button outside of the panel can't be clicked.
        harness.mouse_move((160., 115.));
        assert_eq!(harness.hovered_widget(), None);

        harness.mouse_click_on(button);
        assert!(harness.pop_action::<ButtonPressed>().is_some());
        assert!(harness.pop_action::<Clicked>().is_none());

        harness.mouse_move((105., 140.));
        harness.mouse_button_press(gable_core::core::PointerButton::Left);
        harness.mouse_button_release(gable_core::core::PointerButton::Left);
        assert_eq!(
            harness.pop_action::<Clicked>(),
            Some((Clicked { pos: Point::new(5., 40.) }, panel))
        );
    }

    #[test]
    fn paints_background_before_children() {
        let mut harness = TestHarness::create(default_theme(), default_factory());
        let panel = harness.add(Panel::new(), "panel");
        harness.edit_widget(panel, |mut panel| panel.set_size(Size::new(50., 50.)));
        harness.add_to(panel, Button::new("Hi"), "button");

        let scene = harness.draw();
        let first = scene
            .commands()
            .iter()
            .find_map(|command| match command {
                DrawCommand::FillRect { color, .. } => Some(*color),
                _ => None,
            })
            .unwrap();
        assert_eq!(first.to_rgba8(), theme::PANEL_BACKGROUND_COLOR.to_rgba8());
        assert!(
            scene
                .commands()
                .iter()
                .any(|command| matches!(command, DrawCommand::PushClip(_)))
        );
    }
}
