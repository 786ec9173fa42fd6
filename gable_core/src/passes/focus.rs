// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! Keyboard focus.
//!
//! Only one widget is focused at a time. Tab order is the depth-first order of
//! the tree, children in z-order; hidden and disabled subtrees are skipped.

use tracing::{debug, info_span};

use crate::app::Gui;
use crate::core::{Update, WidgetId};
use crate::passes::{is_interactive, send_update};

/// Widgets which can get focus, in tab order.
pub(crate) fn focusable_widgets(gui: &Gui) -> Vec<WidgetId> {
    let mut out = Vec::new();
    let mut stack: Vec<WidgetId> = gui.arena.roots().iter().rev().copied().collect();
    while let Some(id) = stack.pop() {
        let Some(node) = gui.arena.get(id) else {
            continue;
        };
        if !node.state.is_interactive() {
            continue;
        }
        if node.widget.accepts_focus() {
            out.push(id);
        }
        stack.extend(node.children.iter().rev().copied());
    }
    out
}

/// The widget which Tab (or Shift+Tab if `forward` is false) should focus next.
///
/// Wraps around at the end of the tab order.
pub(crate) fn find_next_focusable(gui: &Gui, forward: bool) -> Option<WidgetId> {
    let focusable = focusable_widgets(gui);
    let count = focusable.len();
    if count == 0 {
        return None;
    }
    let current = gui
        .global_state
        .focused_widget
        .and_then(|focused| focusable.iter().position(|id| *id == focused));
    let index = match (current, forward) {
        (Some(index), true) => (index + 1) % count,
        (Some(index), false) => (index + count - 1) % count,
        (None, true) => 0,
        (None, false) => count - 1,
    };
    Some(focusable[index])
}

/// The widget which should get focus when `target` is clicked: the nearest
/// focusable widget among it and its ancestors.
pub(crate) fn focus_target_for(gui: &Gui, target: WidgetId) -> Option<WidgetId> {
    gui.arena.path_to_root(target).into_iter().find(|id| {
        gui.arena
            .get(*id)
            .is_some_and(|node| node.widget.accepts_focus())
    })
}

/// Move focus to `next`, notifying the widgets losing and gaining it.
///
/// Focusing a widget which can't be focused clears the focus instead.
pub(crate) fn set_focus(gui: &mut Gui, next: Option<WidgetId>) {
    let next = next.filter(|id| {
        let accepted = is_interactive(gui, *id)
            && gui
                .arena
                .get(*id)
                .is_some_and(|node| node.widget.accepts_focus());
        if !accepted {
            debug!("Widget {id} can't be focused");
        }
        accepted
    });

    let previous = gui.global_state.focused_widget;
    if previous == next {
        return;
    }
    let _span = info_span!("update_focus").entered();
    debug!("Focus moves from {previous:?} to {next:?}");

    gui.global_state.focused_widget = next;
    if let Some(previous) = previous
        && let Some(node) = gui.arena.get_mut(previous)
    {
        node.state.is_focused = false;
        send_update(gui, previous, &Update::FocusChanged(false));
    }
    if let Some(next) = next
        && let Some(node) = gui.arena.get_mut(next)
    {
        node.state.is_focused = true;
        send_update(gui, next, &Update::FocusChanged(true));
    }
}
