// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

use gable_core::core::{EventCtx, PointerButton, PointerEvent};
use gable_core::kurbo::Point;
use tracing::trace;

/// The action type emitted by [`Label`](super::Label), [`Picture`](super::Picture)
/// and [`Panel`](super::Panel) when they are clicked with the left mouse button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clicked {
    /// The mouse position when the button was released, relative to the widget.
    pub pos: Point,
}

/// Submit [`Clicked`] when the left button is released on the widget it was pressed on.
pub(crate) fn submit_click(ctx: &mut EventCtx<'_>, event: &PointerEvent) {
    if let PointerEvent::Up {
        button: PointerButton::Left,
        pos,
    } = event
        && ctx.is_active()
    {
        trace!("Widget {} clicked", ctx.widget_id());
        ctx.submit_action(Clicked { pos: *pos });
    }
}
