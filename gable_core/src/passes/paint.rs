// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::{Point, Rect, Vec2};
use tracing::{info_span, trace};

use crate::app::Gui;
use crate::core::{DrawList, PaintCtx, WidgetId};

// --- MARK: PAINT WIDGET
fn paint_widget(gui: &Gui, id: WidgetId, origin: Vec2, scene: &mut DrawList) {
    let Some(node) = gui.arena.get(id) else {
        return;
    };
    if !node.state.visible {
        return;
    }

    let widget = &*node.widget;
    let ctx = PaintCtx {
        global_state: &gui.global_state,
        widget_state: &node.state,
        renderer: &node.renderer,
        defaults: gui.theme.for_widget(widget.short_type_name()),
    };
    let _span = widget.make_trace_span(id).entered();
    let offset = origin + widget.widget_offset(&ctx.query_ctx());

    scene.push_layer(offset, node.state.opacity);
    widget.paint(&ctx, scene);
    trace!("Painted widget {id}");

    if !node.children.is_empty() {
        let clip = Rect::from_origin_size(Point::ORIGIN, node.state.size);
        scene.push_clip(clip);
        for &child in &node.children {
            let child_origin = gui
                .arena
                .get(child)
                .map(|child| child.state.position.to_vec2())
                .unwrap_or_default();
            paint_widget(gui, child, child_origin, scene);
        }
        scene.pop_clip();
    }
    scene.pop_layer();
}

// --- MARK: ROOT
/// Paint the whole tree, back to front, then the visible tooltip.
pub(crate) fn run_paint_pass(gui: &Gui) -> DrawList {
    let _span = info_span!("paint").entered();
    let mut scene = DrawList::new();

    scene.push_layer(Vec2::ZERO, gui.opacity);
    for &root in gui.arena.roots() {
        let origin = gui
            .arena
            .get(root)
            .map(|node| node.state.position.to_vec2())
            .unwrap_or_default();
        paint_widget(gui, root, origin, &mut scene);
    }

    if let Some((tooltip, position)) = gui.tooltip.visible {
        paint_widget(gui, tooltip, position.to_vec2(), &mut scene);
    }
    scene.pop_layer();

    scene
}
