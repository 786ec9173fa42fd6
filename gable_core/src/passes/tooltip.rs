// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! Tooltip timing.
//!
//! Moving the mouse hides the tooltip and restarts the timer. Once the mouse
//! has rested for the initial delay, the tooltip of the deepest widget under
//! it (or of its nearest ancestor which has one) is shown next to the mouse.

use std::time::Duration;

use kurbo::{Point, Vec2};
use tracing::debug;

use crate::app::Gui;
use crate::passes::event::find_widget_under_pointer;

/// Timer and visibility state of the tooltip.
#[derive(Debug, Clone)]
pub(crate) struct TooltipState {
    pub(crate) delay: Duration,
    pub(crate) distance: Vec2,
    /// Time the mouse has rested since it last moved.
    pub(crate) elapsed: Duration,
    /// The tooltip widget currently shown, and where (in GUI coordinates).
    pub(crate) visible: Option<(crate::core::WidgetId, Point)>,
}

impl TooltipState {
    pub(crate) fn new(delay: Duration, distance: Vec2) -> Self {
        Self {
            delay,
            distance,
            elapsed: Duration::ZERO,
            visible: None,
        }
    }

    /// Hide the tooltip and restart the timer.
    pub(crate) fn mouse_moved(&mut self) {
        if let Some((tooltip, _)) = self.visible.take() {
            debug!("Hiding tooltip {tooltip}");
        }
        self.elapsed = Duration::ZERO;
    }
}

/// Advance the tooltip timer. Returns `true` if a tooltip was shown.
pub(crate) fn run_tooltip_pass(gui: &mut Gui, elapsed: Duration) -> bool {
    let before = gui.tooltip.elapsed;
    gui.tooltip.elapsed = before.saturating_add(elapsed);

    let delay = gui.tooltip.delay;
    if gui.tooltip.visible.is_some() || before > delay || gui.tooltip.elapsed < delay {
        return false;
    }
    let Some(mouse) = gui.global_state.last_mouse_position else {
        return false;
    };
    let Some(hit) = find_widget_under_pointer(gui, mouse) else {
        return false;
    };

    let tooltip = gui.arena.path_to_root(hit).into_iter().find_map(|id| {
        gui.arena
            .get(id)
            .and_then(|node| node.state.tooltip)
            .filter(|tooltip| gui.arena.contains(*tooltip))
    });
    let Some(tooltip) = tooltip else {
        return false;
    };

    let position = mouse + gui.tooltip.distance;
    debug!("Showing tooltip {tooltip} at {position:?}");
    gui.tooltip.visible = Some((tooltip, position));
    true
}
