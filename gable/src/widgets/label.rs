// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! A label widget.

use gable_core::core::{
    DrawList, EventCtx, PaintCtx, PointerEvent, PropertyError, PropertyKind, QueryCtx, Update,
    UpdateCtx, Widget, WidgetId, WidgetMut,
};
use gable_core::file::{format_bool, parse_bool, quote_string, unquote_string};
use gable_core::kurbo::{Point, Size};
use gable_core::util::names_match;
use tracing::{Span, trace_span};

use crate::paint_helpers::{paint_borders, paint_text, text_size};
use crate::widgets::clickable::submit_click;

/// A widget displaying non-editable text.
///
/// A label sizes itself to fit its text, borders and padding until it is
/// given an explicit size. [`Label::set_auto_size`] turns this back on.
///
/// Renderer properties: `TextColor`, `BackgroundColor`, `BorderColor`,
/// `Borders` and `Padding`.
///
/// Emits [`Clicked`](super::Clicked) when clicked.
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
    auto_size: bool,
}

// --- MARK: BUILDERS
impl Label {
    /// Create a new label.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            auto_size: true,
        }
    }

    /// The displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the label sizes itself to fit its text.
    pub fn is_auto_size(&self) -> bool {
        self.auto_size
    }

    /// The size which fits the text, borders and padding.
    fn fitted_size(&self, ctx: &QueryCtx<'_>) -> Size {
        let renderer = ctx.renderer();
        let borders = renderer.outline("Borders");
        let padding = renderer.outline("Padding");
        let text = text_size(ctx.font(), &self.text, ctx.text_size());
        Size::new(
            text.width + borders.horizontal() + padding.horizontal(),
            text.height + borders.vertical() + padding.vertical(),
        )
    }

    fn refit(&self, ctx: &mut UpdateCtx<'_>) {
        if self.auto_size {
            let size = self.fitted_size(&ctx.query_ctx());
            ctx.set_size(size);
        }
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::new("")
    }
}

// --- MARK: WIDGETMUT
impl Label {
    /// Replace the text.
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

// --- MARK: IMPL WIDGET
impl Widget for Label {
    fn on_pointer_event(&mut self, ctx: &mut EventCtx<'_>, event: &PointerEvent) {
        submit_click(ctx, event);
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
        if names_match(name, "Borders") || names_match(name, "Padding") {
            self.refit(ctx);
        }
    }

    fn paint(&self, ctx: &PaintCtx<'_>, scene: &mut DrawList) {
        let renderer = ctx.renderer();
        let size = ctx.size();
        let borders = renderer.outline("Borders");
        let padding = renderer.outline("Padding");
        let inner = borders.inner_rect(size);

        if let Some(background) = renderer.color(&["BackgroundColor"]) {
            scene.fill_rect(inner, background);
        }
        if let Some(border) = renderer.color(&["BorderColor"]) {
            paint_borders(scene, size, borders, border);
        }

        let Some(color) = renderer.color(&["TextColor"]) else {
            return;
        };
        let origin = Point::new(inner.x0 + padding.left, inner.y0 + padding.top);
        // A label which was given a size may be too small for its text.
        let clip = !self.auto_size;
        if clip {
            scene.push_clip(inner);
        }
        paint_text(scene, &self.text, origin, ctx, color);
        if clip {
            scene.pop_clip();
        }
    }

    fn set_property(
        &mut self,
        ctx: &mut UpdateCtx<'_>,
        name: &str,
        value: &str,
    ) -> Result<bool, PropertyError> {
        if names_match(name, "Text") {
            self.text = unquote_string(value)?;
            self.refit(ctx);
        } else if names_match(name, "AutoSize") {
            self.auto_size = parse_bool(value)?;
            self.refit(ctx);
        } else {
            return Ok(false);
        }
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
        trace_span!("Label", id = id.trace())
    }

    fn get_debug_text(&self) -> Option<String> {
        Some(self.text.clone())
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use gable_core::core::{DrawCommand, Outline};
    use gable_testing::{Record, TestHarness, TestWidgetExt};

    use super::*;
    use crate::default_factory;
    use crate::theme::default_theme;
    use crate::widgets::Clicked;

    fn harness() -> TestHarness {
        TestHarness::create(default_theme(), default_factory())
    }

    #[test]
    fn label_fits_text() {
        let mut harness = harness();
        let id = harness.add(Label::new("abcd"), "label");
        // Default text size is 13: 4 * 13 * 0.6 wide, 13 * 1.25 high.
        let size = harness.get_widget(id).ctx().size();
        assert!((size.width - 31.2).abs() < 1e-9);
        assert!((size.height - 16.25).abs() < 1e-9);

        harness.edit_widget(id, |mut label| {
            let mut label = label.downcast::<Label>();
            Label::set_text(&mut label, "ab");
        });
        let size = harness.get_widget(id).ctx().size();
        assert!((size.width - 15.6).abs() < 1e-9);
    }

    #[test]
    fn padding_and_borders_grow_label() {
        let mut harness = harness();
        let id = harness.add(Label::new("ab"), "label");
        let before = harness.get_widget(id).ctx().size();

        harness.edit_widget(id, |mut label| {
            label.set_renderer_property("Padding", Outline::uniform(3.));
            label.set_renderer_property("Borders", Outline::uniform(1.));
        });
        let after = harness.get_widget(id).ctx().size();
        assert!((after.width - before.width - 8.).abs() < 1e-9);
        assert!((after.height - before.height - 8.).abs() < 1e-9);
    }

    #[test]
    fn explicit_size_stops_auto_size() {
        let mut harness = harness();
        let id = harness.add(Label::new("Hello"), "label");
        harness.edit_widget(id, |mut label| label.set_size(Size::new(100., 40.)));

        let widget = harness.get_widget(id);
        assert!(!widget.downcast::<Label>().unwrap().is_auto_size());

        harness.edit_widget(id, |mut label| {
            let mut label = label.downcast::<Label>();
            Label::set_text(&mut label, "A much longer text");
        });
        assert_eq!(harness.get_widget(id).ctx().size(), Size::new(100., 40.));

        harness.edit_widget(id, |mut label| {
            Label::set_auto_size(&mut label.downcast(), true);
        });
        assert_ne!(harness.get_widget(id).ctx().size(), Size::new(100., 40.));
    }

    #[test]
    fn text_size_change_resizes() {
        let mut harness = harness();
        let id = harness.add(Label::new("ab"), "label");
        harness.gui_mut().set_text_size(20.);
        let size = harness.get_widget(id).ctx().size();
        assert!((size.height - 25.).abs() < 1e-9);
    }

    #[test]
    fn text_properties() {
        let mut harness = harness();
        let id = harness.add(Label::default(), "label");
        harness.gui_mut().set_widget_property(id, "Text", "\"Hi \\\"you\\\"\"").unwrap();

        let widget = harness.get_widget(id);
        assert_eq!(widget.downcast::<Label>().unwrap().text(), "Hi \"you\"");
        assert_eq!(
            widget.get_property("text").as_deref(),
            Some("\"Hi \\\"you\\\"\"")
        );
        assert_eq!(widget.get_property("AutoSize").as_deref(), Some("true"));
        assert!(harness.gui_mut().set_widget_property(id, "Text", "\"unterminated").is_err());
    }

    #[test]
    fn click_emits_action() {
        let mut harness = harness();
        let id = harness.add(Label::new("Click me"), "label");
        harness.mouse_click_on(id);
        let (action, source) = harness.pop_action::<Clicked>().unwrap();
        assert_eq!(source, id);
        let size = harness.get_widget(id).ctx().size();
        assert!((action.pos.x - size.width / 2.).abs() < 1e-9);
    }

    #[test]
    fn paints_text_with_theme_color() {
        let mut harness = harness();
        harness.add(Label::new("one\ntwo"), "label");
        let scene = harness.draw();
        let texts: Vec<_> = scene
            .commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, origin, .. } => Some((text.to_string(), *origin)),
                _ => None,
            })
            .collect();
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0].0, "one");
        assert_eq!(texts[1].0, "two");
        assert!(texts[1].1.y > texts[0].1.y);
    }

    #[test]
    fn label_is_told_when_added() {
        let mut harness = harness();
        let recording = Default::default();
        harness.add(Label::new("x").record(&recording), "label");
        assert_eq!(recording.next(), Some(Record::U(Update::WidgetAdded)));
    }
}
