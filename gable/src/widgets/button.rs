// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! A button widget.

use gable_core::core::{
    DrawList, EventCtx, PaintCtx, PointerButton, PointerEvent, PropertyError, PropertyKind,
    QueryCtx, TextEvent, Update, UpdateCtx, Widget, WidgetId, WidgetMut,
};
use gable_core::file::{format_bool, parse_bool, quote_string, unquote_string};
use gable_core::kurbo::{Point, Rect, Size};
use gable_core::util::names_match;
use tracing::{Span, trace, trace_span};

use crate::paint_helpers::{
    VisualState, paint_borders, paint_text, state_color, state_texture, text_size,
};

/// A button with a text label.
///
/// Emits [`ButtonPressed`] when clicked, or when Space or Enter is pressed
/// while it has focus.
///
/// Until it is given an explicit size, the button sizes itself around its text.
/// [`Button::set_auto_size`] turns this back on.
///
/// Renderer properties:
/// - `TextColor`, `BackgroundColor` and `BorderColor`, each with `Hover`,
///   `Down` and `Disabled` variants (e.g. `BackgroundColorHover`).
/// - `BorderColorFocused`, used while the button has focus.
/// - `Borders`.
/// - `Texture`, `TextureHover`, `TextureDown` and `TextureDisabled`. When set,
///   the texture replaces the background and borders. `TextureFocused` is
///   drawn on top while the button has focus.
#[derive(Debug, Clone)]
pub struct Button {
    text: String,
    auto_size: bool,
}

// --- MARK: BUILDERS
impl Button {
    /// Create a new button with a text label.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            auto_size: true,
        }
    }

    /// The text of the button.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the button sizes itself around its text.
    pub fn is_auto_size(&self) -> bool {
        self.auto_size
    }

    fn fitted_size(&self, ctx: &QueryCtx<'_>) -> Size {
        let borders = ctx.renderer().outline("Borders");
        let text = text_size(ctx.font(), &self.text, ctx.text_size());
        let height = ctx.font().line_height(ctx.text_size()) * 1.5;
        Size::new(
            text.width + height + borders.horizontal(),
            text.height.max(height) + borders.vertical(),
        )
    }

    fn refit(&self, ctx: &mut UpdateCtx<'_>) {
        if self.auto_size {
            let size = self.fitted_size(&ctx.query_ctx());
            ctx.set_size(size);
        }
    }
}

impl Default for Button {
    fn default() -> Self {
        Self::new("")
    }
}

// --- MARK: WIDGETMUT
impl Button {
    /// Set the text.
    pub fn set_text(this: &mut WidgetMut<'_, Self>, text: impl Into<String>) {
        this.widget.text = text.into();
        if this.widget.auto_size {
            let size = this.widget.fitted_size(&this.ctx.query_ctx());
            this.ctx.set_size(size);
        }
    }

    /// Turn automatic sizing on or off.
    ///
    /// Setting a size with [`WidgetMut::set_size`] turns it off.
    pub fn set_auto_size(this: &mut WidgetMut<'_, Self>, auto_size: bool) {
        this.widget.auto_size = auto_size;
        if auto_size {
            let size = this.widget.fitted_size(&this.ctx.query_ctx());
            this.ctx.set_size(size);
        }
    }
}

/// The action type emitted by [`Button`] when it is activated.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct ButtonPressed {
    /// The mouse button used, or `None` if the button was activated with the keyboard.
    pub button: Option<PointerButton>,
}

// --- MARK: IMPL WIDGET
impl Widget for Button {
    fn on_pointer_event(&mut self, ctx: &mut EventCtx<'_>, event: &PointerEvent) {
        match event {
            PointerEvent::Down { .. } => {
                trace!("Button {} pressed", ctx.widget_id());
            }
            PointerEvent::Up { button, .. } => {
                if ctx.is_active() {
                    ctx.submit_action(ButtonPressed {
                        button: Some(*button),
                    });
                    trace!("Button {} released", ctx.widget_id());
                }
            }
            _ => (),
        }
    }

    fn on_text_event(&mut self, ctx: &mut EventCtx<'_>, event: &TextEvent) {
        if let TextEvent::KeyDown(key) = event
            && key.is_activation()
        {
            ctx.submit_action(ButtonPressed { button: None });
            ctx.set_handled();
        }
    }

    fn update(&mut self, ctx: &mut UpdateCtx<'_>, event: &Update) {
        match event {
            Update::WidgetAdded | Update::TextSizeChanged(_) | Update::RendererChanged => {
                self.refit(ctx);
            }
            Update::SizeChanged(_) => {
                self.auto_size = false;
            }
            _ => {}
        }
    }

    fn property_changed(&mut self, ctx: &mut UpdateCtx<'_>, name: &str) {
        if names_match(name, "Borders") {
            self.refit(ctx);
        }
    }

    fn accepts_focus(&self) -> bool {
        true
    }

    fn paint(&self, ctx: &PaintCtx<'_>, scene: &mut DrawList) {
        let renderer = ctx.renderer();
        let state = VisualState::of(ctx);
        let size = ctx.size();
        let rect = Rect::from_origin_size(Point::ORIGIN, size);
        let borders = renderer.outline("Borders");

        if let Some(texture) = state_texture(&renderer, "Texture", state) {
            scene.texture(texture, rect, true);
            if ctx.is_focused()
                && let Some(focused) = renderer.texture(&["TextureFocused"])
            {
                scene.texture(focused, rect, true);
            }
        } else {
            if let Some(background) = state_color(&renderer, "BackgroundColor", state) {
                scene.fill_rect(borders.inner_rect(size), background);
            }
            let border = if ctx.is_focused() && state != VisualState::Disabled {
                renderer.color(&["BorderColorFocused"])
            } else {
                None
            };
            if let Some(border) = border.or_else(|| state_color(&renderer, "BorderColor", state)) {
                paint_borders(scene, size, borders, border);
            }
        }

        let Some(color) = state_color(&renderer, "TextColor", state) else {
            return;
        };
        let text = text_size(ctx.font(), &self.text, ctx.text_size());
        let origin = Point::new(
            (size.width - text.width) / 2.,
            (size.height - text.height) / 2.,
        );
        scene.push_clip(borders.inner_rect(size));
        paint_text(scene, &self.text, origin, ctx, color);
        scene.pop_clip();
    }

    fn set_property(
        &mut self,
        ctx: &mut UpdateCtx<'_>,
        name: &str,
        value: &str,
    ) -> Result<bool, PropertyError> {
        if names_match(name, "Text") {
            self.text = unquote_string(value)?;
        } else if names_match(name, "AutoSize") {
            self.auto_size = parse_bool(value)?;
        } else {
            return Ok(false);
        }
        self.refit(ctx);
        Ok(true)
    }

    fn get_property(&self, _ctx: &QueryCtx<'_>, name: &str) -> Option<String> {
        if names_match(name, "Text") {
            Some(quote_string(&self.text))
        } else if names_match(name, "AutoSize") {
            Some(format_bool(self.auto_size))
        } else {
            None
        }
    }

    fn property_list(&self) -> Vec<(&'static str, PropertyKind)> {
        vec![("Text", PropertyKind::String), ("AutoSize", PropertyKind::Bool)]
    }

    fn make_trace_span(&self, id: WidgetId) -> Span {
        trace_span!("Button", id = id.trace())
    }

    fn get_debug_text(&self) -> Option<String> {
        Some(self.text.clone())
    }
}
