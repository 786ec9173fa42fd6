// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! A radio button widget.

use gable_core::core::{
    DrawList, EventCtx, PaintCtx, PointerButton, PointerEvent, PropertyError, PropertyKind,
    QueryCtx, RadioMember, TextEvent, Update, UpdateCtx, Widget, WidgetId, WidgetMut,
};
use gable_core::file::{format_bool, parse_bool, quote_string, unquote_string};
use gable_core::kurbo::{Point, Rect, Size};
use gable_core::peniko::Color;
use gable_core::util::names_match;
use tracing::{Span, trace, trace_span};

use crate::paint_helpers::{
    VisualState, paint_borders, paint_text, state_color, state_texture, text_size,
};
use crate::theme;

/// A button which is part of a group, of which only one can be checked.
///
/// All radio buttons sharing a parent form a group: checking one unchecks the
/// others. A radio button can't be unchecked by clicking it again.
///
/// The widget's size is the size of its box; the text is drawn to the right of
/// it, and counts for hit-testing unless [`set_text_clickable`](Self::set_text_clickable)
/// turned that off.
///
/// Emits [`CheckedChanged`] whenever it is checked or unchecked.
///
/// Renderer properties: `BackgroundColor`, `BorderColor`, `CheckColor` and
/// `TextColor` (with `Hover` and `Disabled` variants), `BorderColorFocused`,
/// `Borders`, `TextDistanceRatio`, and the `TextureUnchecked` and
/// `TextureChecked` textures (with `Hover` and `Disabled` variants).
#[derive(Debug, Clone)]
pub struct RadioButton {
    checked: bool,
    text: String,
    text_clickable: bool,
}

// --- MARK: BUILDERS
impl RadioButton {
    /// Create a new unchecked radio button with a text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            checked: false,
            text: text.into(),
            text_clickable: true,
        }
    }

    /// Builder-style method to create the radio button already checked.
    ///
    /// The other members of the group are unchecked once it is added.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Whether the radio button is checked.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// The text next to the box.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether clicking the text checks the radio button.
    pub fn is_text_clickable(&self) -> bool {
        self.text_clickable
    }

    fn check(&mut self, ctx: &mut EventCtx<'_>) {
        if self.checked {
            return;
        }
        self.checked = true;
        ctx.uncheck_radio_siblings();
        ctx.submit_action(CheckedChanged(true));
    }
}

impl Default for RadioButton {
    fn default() -> Self {
        Self::new("")
    }
}

// --- MARK: WIDGETMUT
impl RadioButton {
    /// Check or uncheck the radio button.
    ///
    /// Checking it unchecks the other members of its group.
    pub fn set_checked(this: &mut WidgetMut<'_, Self>, checked: bool) {
        if this.widget.checked == checked {
            return;
        }
        this.widget.checked = checked;
        if checked {
            this.ctx.uncheck_radio_siblings();
        }
        this.ctx.submit_action(CheckedChanged(checked));
    }

    /// Set the text.
    pub fn set_text(this: &mut WidgetMut<'_, Self>, text: impl Into<String>) {
        this.widget.text = text.into();
    }

    /// Choose whether clicking the text checks the radio button.
    pub fn set_text_clickable(this: &mut WidgetMut<'_, Self>, clickable: bool) {
        this.widget.text_clickable = clickable;
    }
}

/// The action type emitted by [`RadioButton`] and [`CheckBox`](super::CheckBox)
/// when they are checked or unchecked.
///
/// The field is the new state.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CheckedChanged(pub bool);

// --- MARK: LAYOUT
/// Where the parts of a check box or radio button go, in local coordinates.
pub(super) struct CheckLayout {
    /// The box, of the widget's size.
    pub(super) box_rect: Rect,
    /// Where the checked texture goes, which may be larger than the box.
    pub(super) checked_rect: Rect,
    pub(super) text_origin: Point,
    /// The box and the text.
    pub(super) full_size: Size,
}

impl CheckLayout {
    /// Lay out a box of the widget's size, `top` pixels below the local origin,
    /// followed by `text`.
    pub(super) fn new(ctx: &QueryCtx<'_>, text: &str, top: f64) -> Self {
        let size = ctx.size();
        let box_rect = Rect::from_origin_size(Point::new(0., top), size);
        let box_full_size = Size::new(size.width, size.height + top);
        if text.is_empty() {
            return Self {
                box_rect,
                checked_rect: box_rect,
                text_origin: Point::new(size.width, top),
                full_size: box_full_size,
            };
        }

        let text = text_size(ctx.font(), text, ctx.text_size());
        let ratio = ctx
            .renderer()
            .number("TextDistanceRatio", theme::TEXT_DISTANCE_RATIO);
        let gap = size.width * ratio;
        Self {
            box_rect,
            checked_rect: box_rect,
            text_origin: Point::new(size.width + gap, top + (size.height - text.height) / 2.),
            full_size: Size::new(
                size.width + gap + text.width,
                box_full_size.height.max(text.height),
            ),
        }
    }

    /// Whether a local position checks the widget.
    pub(super) fn hit(&self, pos: Point, text_clickable: bool) -> bool {
        if text_clickable {
            Rect::from_origin_size(Point::ORIGIN, self.full_size).contains(pos)
        } else {
            self.box_rect.contains(pos)
        }
    }
}

/// Paint the box, its check mark and the text.
///
/// `mark` draws the check mark inside the given rectangle, when the widget is
/// checked and isn't drawn with textures.
pub(super) fn paint_check(
    ctx: &PaintCtx<'_>,
    scene: &mut DrawList,
    layout: &CheckLayout,
    text: &str,
    checked: bool,
    mark: impl FnOnce(&mut DrawList, Rect, Color),
) {
    let renderer = ctx.renderer();
    let state = VisualState::of(ctx);

    let texture_name = if checked {
        "TextureChecked"
    } else {
        "TextureUnchecked"
    };
    if let Some(texture) = state_texture(&renderer, texture_name, state) {
        let rect = if checked {
            layout.checked_rect
        } else {
            layout.box_rect
        };
        scene.texture(texture, rect, true);
    } else {
        let size = layout.box_rect.size();
        let borders = renderer.outline("Borders");
        scene.push_layer(layout.box_rect.origin().to_vec2(), 1.0);
        let inner = borders.inner_rect(size);
        if let Some(background) = state_color(&renderer, "BackgroundColor", state) {
            scene.fill_rect(inner, background);
        }
        let border = if ctx.is_focused() && state != VisualState::Disabled {
            renderer.color(&["BorderColorFocused"])
        } else {
            None
        };
        if let Some(border) = border.or_else(|| state_color(&renderer, "BorderColor", state)) {
            paint_borders(scene, size, borders, border);
        }
        if checked && let Some(color) = state_color(&renderer, "CheckColor", state) {
            mark(scene, inner, color);
        }
        scene.pop_layer();
    }

    if let Some(color) = state_color(&renderer, "TextColor", state) {
        paint_text(scene, text, layout.text_origin, ctx, color);
    }
}

/// Give a box which wasn't sized yet its default size.
pub(super) fn default_box_size(ctx: &mut UpdateCtx<'_>) {
    if ctx.size() == Size::ZERO {
        ctx.set_size(Size::new(
            theme::BASIC_WIDGET_HEIGHT,
            theme::BASIC_WIDGET_HEIGHT,
        ));
    }
}

// --- MARK: IMPL WIDGET
impl Widget for RadioButton {
    fn on_pointer_event(&mut self, ctx: &mut EventCtx<'_>, event: &PointerEvent) {
        match event {
            PointerEvent::Down { .. } => {
                trace!("RadioButton {} pressed", ctx.widget_id());
            }
            PointerEvent::Up {
                button: PointerButton::Left,
                ..
            } if ctx.is_active() => {
                trace!("RadioButton {} released", ctx.widget_id());
                self.check(ctx);
            }
            _ => (),
        }
    }

    fn on_text_event(&mut self, ctx: &mut EventCtx<'_>, event: &TextEvent) {
        if let TextEvent::KeyDown(key) = event
            && key.is_activation()
        {
            self.check(ctx);
            ctx.set_handled();
        }
    }

    fn update(&mut self, ctx: &mut UpdateCtx<'_>, event: &Update) {
        if let Update::WidgetAdded = event {
            default_box_size(ctx);
            if self.checked {
                ctx.uncheck_radio_siblings();
            }
        }
    }

    fn paint(&self, ctx: &PaintCtx<'_>, scene: &mut DrawList) {
        let layout = CheckLayout::new(&ctx.query_ctx(), &self.text, 0.);
        paint_check(ctx, scene, &layout, &self.text, self.checked, |scene, inner, color| {
            let inset_x = inner.width() / 4.;
            let inset_y = inner.height() / 4.;
            scene.fill_rect(inner.inset((-inset_x, -inset_y)), color);
        });
    }

    fn hit_test(&self, ctx: &QueryCtx<'_>, pos: Point) -> bool {
        CheckLayout::new(ctx, &self.text, 0.).hit(pos, self.text_clickable)
    }

    fn full_size(&self, ctx: &QueryCtx<'_>) -> Size {
        CheckLayout::new(ctx, &self.text, 0.).full_size
    }

    fn accepts_focus(&self) -> bool {
        true
    }

    fn as_radio(&mut self) -> Option<&mut dyn RadioMember> {
        Some(self)
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
                if checked {
                    ctx.uncheck_radio_siblings();
                }
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
        trace_span!("RadioButton", id = id.trace())
    }

    fn get_debug_text(&self) -> Option<String> {
        let mark = if self.checked { "(*)" } else { "( )" };
        Some(format!("{mark} {}", self.text))
    }
}

impl RadioMember for RadioButton {
    fn is_checked(&self) -> bool {
        self.checked
    }

    fn uncheck(&mut self, ctx: &mut UpdateCtx<'_>) {
        if self.checked {
            self.checked = false;
            ctx.submit_action(CheckedChanged(false));
        }
    }
}
