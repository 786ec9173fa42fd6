// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! Bookkeeping run after every event and every mutation.
//!
//! Widgets request changes through their contexts (focus, radio groups);
//! these requests are applied here. Status flags which no longer hold
//! (a hidden widget still hovered, a disabled widget still focused) are
//! cleared as well.

use tracing::{debug, info_span, trace};

use crate::app::Gui;
use crate::core::WidgetId;
use crate::passes::event::{clear_active, find_widget_under_pointer, update_hovered_path};
use crate::passes::focus::set_focus;
use crate::passes::{is_interactive, with_update_ctx};

// --- MARK: RADIO GROUPS
/// Uncheck the radio siblings of every member checked since the last run.
fn run_radio_group_pass(gui: &mut Gui) {
    // Unchecking a member may queue more checks, so loop until nothing is left.
    loop {
        let checked = std::mem::take(&mut gui.global_state.radio_checks);
        if checked.is_empty() {
            return;
        }
        for id in checked {
            let siblings = gui.arena.siblings_of(id);
            uncheck_radio_members(gui, &siblings, Some(id));
        }
    }
}

/// Uncheck every checked radio member among `ids`, except `keep`.
pub(crate) fn uncheck_radio_members(gui: &mut Gui, ids: &[WidgetId], keep: Option<WidgetId>) {
    for &sibling in ids {
        if Some(sibling) == keep {
            continue;
        }
        with_update_ctx(gui, sibling, |widget, ctx| {
            if let Some(radio) = widget.as_radio()
                && radio.is_checked()
            {
                trace!("Unchecking radio member {sibling}");
                radio.uncheck(ctx);
            }
        });
    }
}

// --- MARK: FOCUS
fn run_focus_pass(gui: &mut Gui) {
    if let Some(request) = gui.global_state.focus_request.take() {
        set_focus(gui, request);
    }
    if let Some(focused) = gui.global_state.focused_widget
        && !is_interactive(gui, focused)
    {
        debug!("Focused widget {focused} became hidden or disabled");
        set_focus(gui, None);
    }
}

// --- MARK: POINTER STATUS
fn run_pointer_status_pass(gui: &mut Gui) {
    if let Some(active) = gui.global_state.active_widget
        && !is_interactive(gui, active)
    {
        debug!("Active widget {active} became hidden or disabled");
        clear_active(gui);
    }

    let stale_hover = gui
        .global_state
        .hovered_path
        .iter()
        .any(|id| !is_interactive(gui, *id));
    if stale_hover {
        let new_path = match gui.global_state.last_mouse_position {
            Some(pos) => find_widget_under_pointer(gui, pos)
                .filter(|id| is_interactive(gui, *id))
                .map(|id| gui.arena.path_to_root(id))
                .unwrap_or_default(),
            None => Vec::new(),
        };
        update_hovered_path(gui, new_path);
    }

    if let Some((tooltip, _)) = gui.tooltip.visible
        && !gui.arena.contains(tooltip)
    {
        gui.tooltip.visible = None;
    }
}

/// Apply the requests made by widgets during the last event or mutation.
pub(crate) fn run_update_pass(gui: &mut Gui) {
    let _span = info_span!("update").entered();
    run_radio_group_pass(gui);
    run_focus_pass(gui);
    run_pointer_status_pass(gui);
    // Unchecking radio members or changing focus can't request more focus
    // changes, but a widget reacting to FocusChanged may.
    if gui.global_state.focus_request.is_some() || !gui.global_state.radio_checks.is_empty() {
        run_radio_group_pass(gui);
        run_focus_pass(gui);
    }
}
