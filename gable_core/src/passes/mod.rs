// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! Internal passes run by the [`Gui`].
//!
//! Each pass walks part of the widget tree and calls one widget method with
//! the matching context. This file includes utility functions used by
//! multiple passes.

use kurbo::Vec2;

use crate::app::Gui;
use crate::core::{EventCtx, QueryCtx, Update, UpdateCtx, Widget, WidgetId};

pub(crate) mod event;
pub(crate) mod focus;
pub(crate) mod paint;
pub(crate) mod tooltip;
pub(crate) mod update;

/// Call `f` with a query context for the widget, if it exists.
pub(crate) fn query_widget<R>(
    gui: &Gui,
    id: WidgetId,
    f: impl FnOnce(&dyn Widget, &QueryCtx<'_>) -> R,
) -> Option<R> {
    let node = gui.arena.get(id)?;
    let ctx = QueryCtx {
        global_state: &gui.global_state,
        widget_state: &node.state,
        renderer: &node.renderer,
        defaults: gui.theme.for_widget(node.widget.short_type_name()),
    };
    Some(f(&*node.widget, &ctx))
}

/// Send an [`Update`] to a single widget.
pub(crate) fn send_update(gui: &mut Gui, id: WidgetId, update: &Update) {
    with_update_ctx(gui, id, |widget, ctx| widget.update(ctx, update));
}

/// Call `f` with an update context for the widget, if it exists.
pub(crate) fn with_update_ctx<R>(
    gui: &mut Gui,
    id: WidgetId,
    f: impl FnOnce(&mut dyn Widget, &mut UpdateCtx<'_>) -> R,
) -> Option<R> {
    let Gui {
        arena,
        global_state,
        theme,
        ..
    } = gui;
    let node = arena.get_mut(id)?;
    let _span = node.widget.make_trace_span(id).entered();
    let mut ctx = UpdateCtx {
        global_state,
        widget_state: &mut node.state,
        renderer: &node.renderer,
        defaults: theme.for_widget(node.widget.short_type_name()),
    };
    Some(f(&mut *node.widget, &mut ctx))
}

/// Call `f` with an event context for the widget. Returns whether the widget handled the event.
pub(crate) fn with_event_ctx(
    gui: &mut Gui,
    id: WidgetId,
    target: WidgetId,
    f: impl FnOnce(&mut dyn Widget, &mut EventCtx<'_>),
) -> bool {
    let Gui {
        arena,
        global_state,
        theme,
        ..
    } = gui;
    let Some(node) = arena.get_mut(id) else {
        return false;
    };
    let _span = node.widget.make_trace_span(id).entered();
    let mut ctx = EventCtx {
        global_state,
        widget_state: &mut node.state,
        renderer: &node.renderer,
        defaults: theme.for_widget(node.widget.short_type_name()),
        target,
        is_handled: false,
    };
    f(&mut *node.widget, &mut ctx);
    ctx.is_handled
}

/// The offset of a widget's local origin from its parent's origin:
/// its position plus its [widget offset](Widget::widget_offset).
pub(crate) fn local_origin(gui: &Gui, id: WidgetId) -> Vec2 {
    query_widget(gui, id, |widget, ctx| {
        ctx.position().to_vec2() + widget.widget_offset(ctx)
    })
    .unwrap_or_default()
}

/// The offset of a widget's local origin from the GUI origin.
pub(crate) fn absolute_origin(gui: &Gui, id: WidgetId) -> Vec2 {
    gui.arena
        .path_to_root(id)
        .into_iter()
        .map(|ancestor| local_origin(gui, ancestor))
        .fold(Vec2::ZERO, |sum, origin| sum + origin)
}

/// Whether the widget is in the tree, and it and all its ancestors are visible and enabled.
pub(crate) fn is_interactive(gui: &Gui, id: WidgetId) -> bool {
    gui.arena.is_attached(id)
        && gui.arena.path_to_root(id).into_iter().all(|ancestor| {
            gui.arena
                .get(ancestor)
                .is_some_and(|node| node.state.is_interactive())
        })
}
