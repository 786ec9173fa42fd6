// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! A check box widget.

use gable_core::core::{
    DrawList, EventCtx, PaintCtx, PointerButton, PointerEvent, PropertyError, PropertyKind,
    QueryCtx, TextEvent, Update, UpdateCtx, Widget, WidgetId, WidgetMut,
};
use gable_core::file::{format_bool, parse_bool, quote_string, unquote_string};
use gable_core::kurbo::{Point, Rect, Size, Vec2};
use gable_core::util::names_match;
use tracing::{Span, trace, trace_span};

use super::CheckedChanged;
use super::radio_button::{CheckLayout, default_box_size, paint_check};

/// A box which can be checked and unchecked independently of other widgets.
///
/// It looks and is laid out like a [`RadioButton`](super::RadioButton), but
/// clicking it toggles it and it never belongs to a radio group.
///
/// When the `TextureChecked` texture is taller than `TextureUnchecked` (a check
/// mark sticking out of the box), the extra height is drawn above the widget's
/// position.
///
/// Emits [`CheckedChanged`] whenever it is checked or unchecked.
#[derive(Debug, Clone)]
pub struct CheckBox {
    checked: bool,
    text: String,
    text_clickable: bool,
}

// --- MARK: BUILDERS
impl CheckBox {
    /// Create a new unchecked check box with a text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            checked: false,
            text: text.into(),
            text_clickable: true,
        }
    }

    /// Builder-style method to create the check box already checked.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Whether the box is checked.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// The text next to the box.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether clicking the text toggles the box.
    pub fn is_text_clickable(&self) -> bool {
        self.text_clickable
    }

    fn toggle(&mut self, ctx: &mut EventCtx<'_>) {
        self.checked = !self.checked;
        ctx.submit_action(CheckedChanged(self.checked));
    }

    /// The size the checked texture is drawn at, when both textures are set.
    fn checked_texture_size(&self, ctx: &QueryCtx<'_>) -> Option<Size> {
        let renderer = ctx.renderer();
        let checked = renderer.texture(&["TextureChecked"])?.size();
        let unchecked = renderer.texture(&["TextureUnchecked"])?.size();
        if unchecked.height <= 0. {
            return None;
        }
        let scale = ctx.size().height / unchecked.height;
        Some(Size::new(checked.width * scale, checked.height * scale))
    }

    /// How far the checked texture sticks out above the box.
    fn extra_height(&self, ctx: &QueryCtx<'_>) -> f64 {
        self.checked_texture_size(ctx)
            .map_or(0., |checked| (checked.height - ctx.size().height).max(0.))
    }

    fn layout(&self, ctx: &QueryCtx<'_>) -> CheckLayout {
        let mut layout = CheckLayout::new(ctx, &self.text, self.extra_height(ctx));
        if let Some(checked) = self.checked_texture_size(ctx) {
            // Bottom-aligned with the box.
            let origin = Point::new(0., layout.box_rect.y1 - checked.height);
            layout.checked_rect = Rect::from_origin_size(origin, checked);
        }
        layout
    }
}

impl Default for CheckBox {
    fn default() -> Self {
        Self::new("")
    }
}

// --- MARK: WIDGETMUT
impl CheckBox {
    /// Check or uncheck the box.
    pub fn set_checked(this: &mut WidgetMut<'_, Self>, checked: bool) {
        if this.widget.checked != checked {
            this.widget.checked = checked;
            this.ctx.submit_action(CheckedChanged(checked));
        }
    }

    /// Set the text.
    pub fn set_text(this: &mut WidgetMut<'_, Self>, text: impl Into<String>) {
        this.widget.text = text.into();
    }

    /// Choose whether clicking the text toggles the box.
    pub fn set_text_clickable(this: &mut WidgetMut<'_, Self>, clickable: bool) {
        this.widget.text_clickable = clickable;
    }
}

// --- MARK: IMPL WIDGET
impl Widget for CheckBox {
    fn on_pointer_event(&mut self, ctx: &mut EventCtx<'_>, event: &PointerEvent) {
        if let PointerEvent::Up {
            button: PointerButton::Left,
            ..
        } = event
            && ctx.is_active()
        {
            trace!("CheckBox {} toggled", ctx.widget_id());
            self.toggle(ctx);
        }
    }

    fn on_text_event(&mut self, ctx: &mut EventCtx<'_>, event: &TextEvent) {
        if let TextEvent::KeyDown(key) = event
            && key.is_activation()
        {
            self.toggle(ctx);
            ctx.set_handled();
        }
    }

    fn update(&mut self, ctx: &mut UpdateCtx<'_>, event: &Update) {
        if let Update::WidgetAdded = event {
            default_box_size(ctx);
        }
    }

    fn paint(&self, ctx: &PaintCtx<'_>, scene: &mut DrawList) {
        let layout = self.layout(&ctx.query_ctx());
        paint_check(ctx, scene, &layout, &self.text, self.checked, |scene, inner, color| {
            let width = (inner.width() / 8.).max(1.);
            let left = Point::new(inner.x0 + inner.width() / 5., inner.y0 + inner.height() / 2.);
            let bottom = Point::new(
                inner.x0 + inner.width() * 2. / 5.,
                inner.y0 + inner.height() * 3. / 4.,
            );
            let right = Point::new(inner.x0 + inner.width() * 4. / 5., inner.y0 + inner.height() / 4.);
            scene.line(left, bottom, color, width);
            scene.line(bottom, right, color, width);
        });
    }

    fn hit_test(&self, ctx: &QueryCtx<'_>, pos: Point) -> bool {
        self.layout(ctx).hit(pos, self.text_clickable)
    }

    fn full_size(&self, ctx: &QueryCtx<'_>) -> Size {
        self.layout(ctx).full_size
    }

    fn widget_offset(&self, ctx: &QueryCtx<'_>) -> Vec2 {
        Vec2::new(0., -self.extra_height(ctx))
    }

    fn accepts_focus(&self) -> bool {
        true
    }

    fn set_property(
        &mut self,
        ctx: &mut UpdateCtx<'_>,
        name: &str,
        value: &str,
    ) -> Result<bool, PropertyError> {
        if names_match(name, "Text") {
            self.text = unquote_string(value)?;
        } else if names_match(name, "Checked") {
            let checked = parse_bool(value)?;
            if checked != self.checked {
                self.checked = checked;
                ctx.submit_action(CheckedChanged(checked));
            }
        } else if names_match(name, "TextClickable") {
            self.text_clickable = parse_bool(value)?;
        } else {
            return Ok(false);
        }
        Ok(true)
    }

    fn get_property(&self, _ctx: &QueryCtx<'_>, name: &str) -> Option<String> {
        if names_match(name, "Text") {
            Some(quote_string(&self.text))
        } else if names_match(name, "Checked") {
            Some(format_bool(self.checked))
        } else if names_match(name, "TextClickable") {
            Some(format_bool(self.text_clickable))
        } else {
            None
        }
    }

    fn property_list(&self) -> Vec<(&'static str, PropertyKind)> {
        vec![
            ("Text", PropertyKind::String),
            ("Checked", PropertyKind::Bool),
            ("TextClickable", PropertyKind::Bool),
        ]
    }

    fn make_trace_span(&self, id: WidgetId) -> Span {
        trace_span!("CheckBox", id = id.trace())
    }

    fn get_debug_text(&self) -> Option<String> {
        let mark = if self.checked { "[x]" } else { "[ ]" };
        Some(format!("{mark} {}", self.text))
    }
}
