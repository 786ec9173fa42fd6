// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

use keyboard_types::Key;
use kurbo::{Point, Vec2};
use tracing::{debug, info_span, trace};

use crate::app::Gui;
use crate::core::{Handled, PointerButton, PointerEvent, TextEvent, Update, WidgetId};
use crate::passes::focus::{find_next_focusable, focus_target_for, set_focus};
use crate::passes::{absolute_origin, is_interactive, query_widget, send_update, with_event_ctx};

// --- MARK: HIT TEST

/// Find the frontmost visible widget under `pos` (in GUI coordinates).
///
/// The result may be disabled: disabled widgets block the pointer for the
/// widgets behind them, but don't receive events.
pub(crate) fn find_widget_under_pointer(gui: &Gui, pos: Point) -> Option<WidgetId> {
    hit_test_children(gui, None, Vec2::ZERO, pos)
}

fn hit_test_children(
    gui: &Gui,
    parent: Option<WidgetId>,
    parent_origin: Vec2,
    pos: Point,
) -> Option<WidgetId> {
    for &child in gui.arena.children_of(parent).iter().rev() {
        let hit = query_widget(gui, child, |widget, ctx| {
            if !ctx.is_visible() {
                return None;
            }
            let origin = parent_origin + ctx.position().to_vec2() + widget.widget_offset(ctx);
            let is_hit = widget.hit_test(ctx, pos - origin);
            Some((is_hit, origin, widget.is_container() && !ctx.is_disabled()))
        })
        .flatten();

        let Some((true, origin, descend)) = hit else {
            continue;
        };
        if descend && let Some(hit) = hit_test_children(gui, Some(child), origin, pos) {
            return Some(hit);
        }
        return Some(child);
    }
    None
}

// --- MARK: DISPATCH

/// Send a pointer event to `target`, then to its ancestors until one of them handles it.
///
/// `event` carries positions in GUI coordinates; each widget gets them in its local coordinates.
fn run_pointer_event(gui: &mut Gui, target: WidgetId, event: &PointerEvent) -> Handled {
    let trace = !matches!(event, PointerEvent::Move(_) | PointerEvent::Wheel { .. });
    for widget_id in gui.arena.path_to_root(target) {
        let local_event = event.translated(absolute_origin(gui, widget_id));
        if trace {
            trace!("Widget {widget_id} visited");
        }
        let handled = with_event_ctx(gui, widget_id, target, |widget, ctx| {
            widget.on_pointer_event(ctx, &local_event);
        });
        if handled {
            return Handled::Yes;
        }
    }
    Handled::No
}

/// Send a text event to `target`, then to its ancestors until one of them handles it.
fn run_text_event(gui: &mut Gui, target: WidgetId, event: &TextEvent) -> Handled {
    for widget_id in gui.arena.path_to_root(target) {
        let handled = with_event_ctx(gui, widget_id, target, |widget, ctx| {
            widget.on_text_event(ctx, event);
        });
        if handled {
            return Handled::Yes;
        }
    }
    Handled::No
}

// --- MARK: HOVER

/// Replace the hovered path, notifying widgets which stop or start being hovered.
pub(crate) fn update_hovered_path(gui: &mut Gui, new_path: Vec<WidgetId>) {
    let old_path = std::mem::take(&mut gui.global_state.hovered_path);
    if old_path == new_path {
        gui.global_state.hovered_path = old_path;
        return;
    }

    for &id in old_path.iter().filter(|id| !new_path.contains(id)) {
        let Some(node) = gui.arena.get_mut(id) else {
            continue;
        };
        node.state.is_hovered = false;
        with_event_ctx(gui, id, id, |widget, ctx| {
            widget.on_pointer_event(ctx, &PointerEvent::Leave);
        });
        send_update(gui, id, &Update::HoveredChanged(false));
    }
    for &id in new_path.iter().rev().filter(|id| !old_path.contains(id)) {
        let Some(node) = gui.arena.get_mut(id) else {
            continue;
        };
        node.state.is_hovered = true;
        with_event_ctx(gui, id, id, |widget, ctx| {
            widget.on_pointer_event(ctx, &PointerEvent::Enter);
        });
        send_update(gui, id, &Update::HoveredChanged(true));
    }

    gui.global_state.hovered_path = new_path;
}

/// The path which should be hovered when the pointer is on `hit`.
fn hover_path_for(gui: &Gui, hit: Option<WidgetId>) -> Vec<WidgetId> {
    match hit {
        Some(id) if gui.arena.get(id).is_some_and(|node| node.state.enabled) => {
            gui.arena.path_to_root(id)
        }
        _ => Vec::new(),
    }
}

// --- MARK: ACTIVE

fn set_active(gui: &mut Gui, id: WidgetId) {
    if gui.global_state.active_widget == Some(id) {
        return;
    }
    clear_active(gui);
    let Some(node) = gui.arena.get_mut(id) else {
        return;
    };
    node.state.is_active = true;
    gui.global_state.active_widget = Some(id);
    send_update(gui, id, &Update::ActiveChanged(true));
}

/// Release the active widget, if any. The widget learns about it through
/// [`Update::ActiveChanged(false)`](Update::ActiveChanged).
pub(crate) fn clear_active(gui: &mut Gui) {
    let Some(id) = gui.global_state.active_widget.take() else {
        return;
    };
    if let Some(node) = gui.arena.get_mut(id) {
        node.state.is_active = false;
        send_update(gui, id, &Update::ActiveChanged(false));
    }
}

// --- MARK: POINTER PASS

/// The kind of pointer input handled by [`run_on_pointer_event_pass`].
#[derive(Debug, Clone, Copy)]
pub(crate) enum PointerInput {
    Move,
    Down(PointerButton),
    Up(PointerButton),
    Wheel(f64),
}

/// Route a pointer event at `pos` (in GUI coordinates).
///
/// Returns `true` if the pointer is on a widget, even a disabled one.
pub(crate) fn run_on_pointer_event_pass(gui: &mut Gui, input: PointerInput, pos: Point) -> bool {
    let _span = info_span!("dispatch_pointer_event").entered();
    if matches!(input, PointerInput::Move | PointerInput::Wheel(_)) {
        trace!("Running ON_POINTER_EVENT pass with {input:?}");
    } else {
        debug!("Running ON_POINTER_EVENT pass with {input:?}");
    }

    gui.global_state.last_mouse_position = Some(pos);
    if matches!(input, PointerInput::Move) {
        gui.tooltip.mouse_moved();
    }

    let hit = find_widget_under_pointer(gui, pos);
    let new_path = hover_path_for(gui, hit);
    update_hovered_path(gui, new_path);

    let target = hit.filter(|id| gui.arena.get(*id).is_some_and(|node| node.state.enabled));

    let handled = match input {
        PointerInput::Move => target.map(|target| {
            run_pointer_event(gui, target, &PointerEvent::Move(pos))
        }),
        PointerInput::Down(button) => {
            let next_focus = target.and_then(|target| focus_target_for(gui, target));
            set_focus(gui, next_focus);
            target.map(|target| {
                set_active(gui, target);
                run_pointer_event(gui, target, &PointerEvent::Down { button, pos })
            })
        }
        PointerInput::Up(button) => {
            let handled = target
                .map(|target| run_pointer_event(gui, target, &PointerEvent::Up { button, pos }));
            clear_active(gui);
            handled
        }
        PointerInput::Wheel(delta) => target.map(|target| {
            let event = PointerEvent::Wheel {
                delta: Vec2::new(0., delta),
                pos,
            };
            run_pointer_event(gui, target, &event)
        }),
    };

    if !matches!(input, PointerInput::Move | PointerInput::Wheel(_)) {
        debug!(
            focused_widget = gui.global_state.focused_widget.map(WidgetId::to_raw),
            handled = handled.is_some_and(Handled::is_handled),
            "ON_POINTER_EVENT finished",
        );
    }

    hit.is_some()
}

/// The mouse left the window: nothing is hovered any more.
pub(crate) fn run_pointer_left_pass(gui: &mut Gui) {
    let _span = info_span!("dispatch_pointer_event").entered();
    debug!("Running ON_POINTER_EVENT pass with MouseLeft");
    gui.global_state.last_mouse_position = None;
    gui.tooltip.mouse_moved();
    update_hovered_path(gui, Vec::new());
}

// --- MARK: TEXT PASS

/// Route a keyboard event to the focused widget, and handle Tab if nobody did.
pub(crate) fn run_on_text_event_pass(gui: &mut Gui, event: &TextEvent) -> Handled {
    let _span = info_span!("dispatch_text_event").entered();
    debug!("Running ON_TEXT_EVENT pass with {}", event.short_name());

    if !gui.global_state.window_focused {
        debug!("Window is not focused, ignoring {}", event.short_name());
        return Handled::No;
    }

    let target = gui
        .global_state
        .focused_widget
        .filter(|id| is_interactive(gui, *id));
    if let Some(focused) = gui.global_state.focused_widget
        && target.is_none()
    {
        debug!("Focused widget {focused} is hidden or disabled, skipping it");
    }

    let mut handled = match target {
        Some(target) => run_text_event(gui, target, event),
        None => Handled::No,
    };

    if let TextEvent::KeyDown(key) = event
        && key.key == Key::Tab
        && !handled.is_handled()
        && gui.tab_key_usage
    {
        let forward = !key.shift();
        let next = find_next_focusable(gui, forward);
        set_focus(gui, next);
        handled = Handled::Yes;
    }

    debug!(
        focused_widget = gui.global_state.focused_widget.map(WidgetId::to_raw),
        handled = handled.is_handled(),
        "ON_TEXT_EVENT finished",
    );
    handled
}

/// The window lost focus: cancel the active widget and stop keyboard input.
pub(crate) fn run_window_focus_pass(gui: &mut Gui, focused: bool) {
    let _span = info_span!("window_focus_change").entered();
    debug!("Window focus changed to {focused}");
    gui.global_state.window_focused = focused;
    if !focused {
        clear_active(gui);
    }
}
