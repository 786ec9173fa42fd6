// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::{Point, Size};
use tracing::warn;

use crate::core::{
    FromDynWidget, MutateCtx, PropertyError, PropertyKind, PropertyValue, Update, Widget,
    WidgetId, WidgetRef, WidgetState,
};
use crate::file;
use crate::util::{names_match, sanitize_opacity};

/// Properties shared by every widget, handled by the library itself.
pub const BASE_PROPERTIES: &[(&str, PropertyKind)] = &[
    ("Position", PropertyKind::Vector),
    ("Size", PropertyKind::Vector),
    ("Visible", PropertyKind::Bool),
    ("Enabled", PropertyKind::Bool),
    ("Opacity", PropertyKind::Number),
    ("TextSize", PropertyKind::Number),
];

/// Textual value of a base property, or `None` if `name` isn't one.
pub(crate) fn base_property(state: &WidgetState, global_text_size: f64, name: &str) -> Option<String> {
    let value = match name.to_ascii_lowercase().as_str() {
        "position" => file::format_pair(state.position.x, state.position.y),
        "size" => file::format_pair(state.size.width, state.size.height),
        "visible" => file::format_bool(state.visible),
        "enabled" => file::format_bool(state.enabled),
        "opacity" => file::format_number(f64::from(state.opacity)),
        "textsize" => file::format_number(state.text_size.unwrap_or(global_text_size)),
        _ => return None,
    };
    Some(value)
}

/// A rich mutable reference to a [`Widget`].
///
/// Widgets can't be mutated directly. All mutations go through a `WidgetMut`
/// wrapper, which lets the library notify the widget of changes to its generic
/// state and fix up focus and hover status afterwards.
///
/// You get a `WidgetMut` from [`Gui::edit_widget`](crate::app::Gui::edit_widget).
#[non_exhaustive]
pub struct WidgetMut<'a, W: Widget + ?Sized> {
    /// The widget we're mutating.
    pub widget: &'a mut W,
    /// A context handle that points to the widget state and other relevant data.
    pub ctx: MutateCtx<'a>,
}

impl<W: Widget + ?Sized> WidgetMut<'_, W> {
    /// Get a `WidgetMut` for the same underlying widget with a shorter lifetime.
    pub fn reborrow_mut(&mut self) -> WidgetMut<'_, W> {
        let widget = &mut self.widget;
        WidgetMut {
            widget,
            ctx: self.ctx.reborrow_mut(),
        }
    }

    /// The widget's id.
    pub fn id(&self) -> WidgetId {
        self.ctx.widget_id()
    }

    fn send_update(&mut self, update: Update) {
        self.widget.update(&mut self.ctx.update_ctx(), &update);
    }

    // --- MARK: BASE STATE

    /// Set the position of the widget, relative to its parent.
    pub fn set_position(&mut self, position: Point) {
        self.ctx.widget_state.position = position;
    }

    /// Set the size of the widget.
    ///
    /// Widgets which size themselves (e.g. labels) stop doing so once a size is set here.
    pub fn set_size(&mut self, size: Size) {
        if !(size.width >= 0.0 && size.height >= 0.0) {
            warn!("Ignoring invalid size {size:?} for widget {}", self.id());
            return;
        }
        self.ctx.widget_state.size = size;
        self.send_update(Update::SizeChanged(size));
    }

    /// Show or hide the widget.
    ///
    /// A hidden widget loses focus and hover status once the mutation ends.
    pub fn set_visible(&mut self, visible: bool) {
        if self.ctx.widget_state.visible == visible {
            return;
        }
        self.ctx.widget_state.visible = visible;
        self.send_update(Update::VisibleChanged(visible));
    }

    /// Enable or disable the widget.
    ///
    /// A disabled widget loses focus and hover status once the mutation ends.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.ctx.widget_state.enabled == enabled {
            return;
        }
        self.ctx.widget_state.enabled = enabled;
        self.send_update(Update::DisabledChanged(!enabled));
    }

    /// Set the opacity of the widget. The value is clamped to `0.0..=1.0`.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.ctx.widget_state.opacity = sanitize_opacity(opacity);
    }

    /// Set the text size of this widget, overriding the one set on the `Gui`.
    pub fn set_text_size(&mut self, text_size: f64) {
        if !(text_size.is_finite() && text_size > 0.0) {
            warn!("Ignoring invalid text size {text_size} for widget {}", self.id());
            return;
        }
        self.ctx.widget_state.text_size = Some(text_size);
        self.send_update(Update::TextSizeChanged(text_size));
    }

    // --- MARK: RENDERER

    /// Set a renderer property on this widget, overriding the theme.
    ///
    /// Returns the previous override, if any. This also calls
    /// [`Widget::property_changed`].
    pub fn set_renderer_property(
        &mut self,
        name: &str,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        let previous = self.ctx.renderer.insert(name, value);
        self.widget.property_changed(&mut self.ctx.update_ctx(), name);
        previous
    }

    /// Parse and set a renderer property from its textual form.
    ///
    /// Textures are loaded through the `Gui`'s texture cache.
    pub fn set_renderer_property_text(&mut self, name: &str, text: &str) -> Result<(), PropertyError> {
        let global = &mut *self.ctx.global_state;
        let value = PropertyValue::parse(name, text, &mut global.textures, &global.resource_path)?;
        self.set_renderer_property(name, value);
        Ok(())
    }

    /// Remove a renderer property override. The theme default applies again.
    pub fn remove_renderer_property(&mut self, name: &str) -> Option<PropertyValue> {
        let previous = self.ctx.renderer.remove(name)?;
        self.widget.property_changed(&mut self.ctx.update_ctx(), name);
        Some(previous)
    }

    // --- MARK: STRING PROPERTIES

    /// Set a property from its textual representation.
    ///
    /// Base properties (see [`BASE_PROPERTIES`]) are handled here, others are
    /// forwarded to [`Widget::set_property`].
    pub fn set_property(&mut self, name: &str, value: &str) -> Result<(), PropertyError> {
        if names_match(name, "Position") {
            let position = file::parse_point(value)?;
            self.set_position(position);
        } else if names_match(name, "Size") {
            let size = file::parse_size(value)?;
            self.set_size(size);
        } else if names_match(name, "Visible") {
            let visible = file::parse_bool(value)?;
            self.set_visible(visible);
        } else if names_match(name, "Enabled") {
            let enabled = file::parse_bool(value)?;
            self.set_enabled(enabled);
        } else if names_match(name, "Opacity") {
            let opacity = file::parse_number(value)?;
            #[allow(clippy::cast_possible_truncation, reason = "Opacity is clamped to 0..=1")]
            self.set_opacity(opacity as f32);
        } else if names_match(name, "TextSize") {
            let text_size = file::parse_number(value)?;
            if text_size <= 0.0 {
                return Err(PropertyError::invalid("positive number", value));
            }
            self.set_text_size(text_size);
        } else if !self
            .widget
            .set_property(&mut self.ctx.update_ctx(), name, value)?
        {
            return Err(PropertyError::Unknown(name.to_string()));
        }
        Ok(())
    }

    /// Get the textual representation of a property, base or widget-specific.
    pub fn get_property(&self, name: &str) -> Option<String> {
        let ctx = self.ctx.query_ctx();
        base_property(ctx.widget_state, ctx.global_state.text_size, name)
            .or_else(|| self.widget.get_property(&ctx, name))
    }

    // --- MARK: DOWNCAST

    /// Attempt to downcast to `WidgetMut` of concrete Widget type.
    pub fn try_downcast<W2: Widget + FromDynWidget + ?Sized>(
        &mut self,
    ) -> Option<WidgetMut<'_, W2>> {
        Some(WidgetMut {
            ctx: self.ctx.reborrow_mut(),
            widget: W2::from_dyn_mut(self.widget.as_mut_dyn())?,
        })
    }

    /// Downcasts to `WidgetMut` of concrete Widget type.
    ///
    /// ## Panics
    ///
    /// Panics if the downcast fails, with an error message that shows the
    /// discrepancy between the expected and actual types.
    pub fn downcast<W2: Widget + FromDynWidget + ?Sized>(&mut self) -> WidgetMut<'_, W2> {
        let w1_name = self.widget.type_name();
        match W2::from_dyn_mut(self.widget.as_mut_dyn()) {
            Some(widget) => WidgetMut {
                widget,
                ctx: self.ctx.reborrow_mut(),
            },
            None => {
                panic!(
                    "failed to downcast widget: expected widget of type `{}`, found `{}`",
                    std::any::type_name::<W2>(),
                    w1_name,
                );
            }
        }
    }
}

impl<W: Widget + ?Sized> WidgetRef<'_, W> {
    /// Get the textual representation of a property, base or widget-specific.
    pub fn get_property(&self, name: &str) -> Option<String> {
        base_property(
            self.ctx.widget_state,
            self.ctx.global_state.text_size,
            name,
        )
        .or_else(|| self.widget.get_property(&self.ctx, name))
    }
}
