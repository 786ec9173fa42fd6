// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

use std::any::Any;
use std::fmt::{Debug, Display};
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

use kurbo::{Point, Rect, Size, Vec2};
use tracing::field::DisplayValue;
use tracing::{Span, trace_span};

use crate::core::{
    DrawList, EventCtx, PaintCtx, PointerEvent, PropertyError, PropertyKind, QueryCtx, TextEvent,
    Update, UpdateCtx,
};

/// A unique identifier for a single [`Widget`].
///
/// `WidgetId`s are generated automatically when a widget is added to a [`Gui`](crate::app::Gui).
/// They are the handles used to route events and to fetch a specific widget for
/// inspection or mutation.
///
/// Ids are never reused during the lifetime of the process.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WidgetId(pub(crate) NonZeroU64);

impl WidgetId {
    /// Allocate a new, unique `WidgetId`.
    pub(crate) fn next() -> Self {
        static WIDGET_ID_COUNTER: AtomicU64 = AtomicU64::new(1);
        let id = WIDGET_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(NonZeroU64::new(id).unwrap())
    }

    /// The raw value of this id.
    pub fn to_raw(self) -> u64 {
        self.0.into()
    }

    /// A serialized representation of the `WidgetId` for debugging purposes.
    pub fn trace(self) -> DisplayValue<Self> {
        tracing::field::display(self)
    }
}

impl Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[doc(hidden)]
/// A trait to access a [`Widget`] value as a trait object. It is implemented for all types that implement `Widget`.
pub trait AsDynWidget {
    fn as_box_dyn(self: Box<Self>) -> Box<dyn Widget>;
    fn as_dyn(&self) -> &dyn Widget;
    fn as_mut_dyn(&mut self) -> &mut dyn Widget;
}

impl<T: Widget> AsDynWidget for T {
    fn as_box_dyn(self: Box<Self>) -> Box<dyn Widget> {
        self
    }

    fn as_dyn(&self) -> &dyn Widget {
        self as &dyn Widget
    }

    fn as_mut_dyn(&mut self) -> &mut dyn Widget {
        self as &mut dyn Widget
    }
}

/// A trait that lets functions either downcast to a `Sized` widget or keep a `dyn Widget`.
pub trait FromDynWidget {
    /// Downcasts `widget` if `Self: Sized`, else returns it as-is.
    fn from_dyn(widget: &dyn Widget) -> Option<&Self>;
    /// Downcasts `widget` if `Self: Sized`, else returns it as-is.
    fn from_dyn_mut(widget: &mut dyn Widget) -> Option<&mut Self>;
}

impl<T: Widget> FromDynWidget for T {
    fn from_dyn(widget: &dyn Widget) -> Option<&Self> {
        (widget as &dyn Any).downcast_ref()
    }

    fn from_dyn_mut(widget: &mut dyn Widget) -> Option<&mut Self> {
        (widget as &mut dyn Any).downcast_mut()
    }
}

impl FromDynWidget for dyn Widget {
    fn from_dyn(widget: &dyn Widget) -> Option<&Self> {
        Some(widget)
    }

    fn from_dyn_mut(widget: &mut dyn Widget) -> Option<&mut Self> {
        Some(widget)
    }
}

/// A widget taking part in a radio group.
///
/// All radio members sharing a parent form a group: when one of them
/// becomes checked, the others are unchecked.
pub trait RadioMember {
    /// Whether this member is currently checked.
    fn is_checked(&self) -> bool;

    /// Uncheck this member because a sibling was checked, or because
    /// [`Gui::uncheck_radio_buttons`](crate::app::Gui::uncheck_radio_buttons) was called.
    fn uncheck(&mut self, ctx: &mut UpdateCtx<'_>);
}

/// The trait implemented by all widgets.
///
/// Whenever external events affect the given widget, methods
/// [`on_pointer_event`](Self::on_pointer_event),
/// [`on_text_event`](Self::on_text_event) and [`update`](Self::update) are called.
///
/// When the tree is drawn, [`paint`](Self::paint) is called on every visible widget,
/// parents before children.
///
/// These methods are provided with a corresponding context. The widget can
/// request things and cause actions by calling methods on that context.
///
/// Widgets don't own their children. The tree structure lives in the arena
/// of the [`Gui`](crate::app::Gui); only widgets which return `true` from
/// [`is_container`](Self::is_container) may be given children.
///
/// Generic per-widget state (position, size, visibility, ...) is also stored by the
/// library, and exposed through the contexts and [`WidgetMut`](crate::core::WidgetMut).
#[allow(unused_variables, reason = "Default impls don't use method arguments")]
pub trait Widget: AsDynWidget + Any {
    /// Handles a pointer event.
    ///
    /// Pointer events will target the widget under the pointer, and then the
    /// event will bubble to each of its parents until one of them calls
    /// [`EventCtx::set_handled`].
    fn on_pointer_event(&mut self, ctx: &mut EventCtx<'_>, event: &PointerEvent) {}

    /// Handles a text event.
    ///
    /// Text events will target the focused widget, then bubble to each parent.
    fn on_text_event(&mut self, ctx: &mut EventCtx<'_>, event: &TextEvent) {}

    /// Handles an update to the widget's status.
    ///
    /// Updates are never bubbled.
    fn update(&mut self, ctx: &mut UpdateCtx<'_>, event: &Update) {}

    /// Called when a renderer property of this widget was set or removed.
    ///
    /// `name` is the property name as it was passed to the setter.
    fn property_changed(&mut self, ctx: &mut UpdateCtx<'_>, name: &str) {}

    /// Paint the widget's appearance into the given draw list.
    ///
    /// Coordinates are local: the origin is the widget's top-left corner.
    fn paint(&self, ctx: &PaintCtx<'_>, scene: &mut DrawList);

    /// Returns `true` if the given local position is on the widget.
    ///
    /// The default implementation checks the [`full_size`](Self::full_size) rectangle.
    fn hit_test(&self, ctx: &QueryCtx<'_>, pos: Point) -> bool {
        Rect::from_origin_size(Point::ORIGIN, self.full_size(ctx)).contains(pos)
    }

    /// The size of the widget including parts drawn outside of its size, such as
    /// the text next to a check box.
    fn full_size(&self, ctx: &QueryCtx<'_>) -> Size {
        ctx.size()
    }

    /// The distance between the position where the widget is drawn and where it is placed.
    ///
    /// This is usually zero.
    fn widget_offset(&self, ctx: &QueryCtx<'_>) -> Vec2 {
        Vec2::ZERO
    }

    /// Whether this widget gets keyboard focus, either by clicking on it or with Tab.
    fn accepts_focus(&self) -> bool {
        false
    }

    /// Whether this widget may be given children.
    fn is_container(&self) -> bool {
        false
    }

    /// Returns the radio-group view of this widget, if it is part of radio groups.
    fn as_radio(&mut self) -> Option<&mut dyn RadioMember> {
        None
    }

    /// Set a widget-specific property from its textual representation.
    ///
    /// Returns `Ok(false)` if the widget doesn't know the property.
    /// Base properties shared by all widgets (position, size, ...) are handled by
    /// the library before this is called.
    fn set_property(
        &mut self,
        ctx: &mut UpdateCtx<'_>,
        name: &str,
        value: &str,
    ) -> Result<bool, PropertyError> {
        Ok(false)
    }

    /// Get the textual representation of a widget-specific property.
    fn get_property(&self, ctx: &QueryCtx<'_>, name: &str) -> Option<String> {
        None
    }

    /// The widget-specific properties understood by [`set_property`](Self::set_property),
    /// in the order they are saved.
    fn property_list(&self) -> Vec<(&'static str, PropertyKind)> {
        Vec::new()
    }

    /// Return a span for tracing.
    ///
    /// As methods recurse through the widget tree, trace spans are added for each child
    /// widget visited, and popped when control flow goes back to the parent. This method
    /// returns a static span (that you can use to filter traces and logs).
    fn make_trace_span(&self, id: WidgetId) -> Span {
        trace_span!("Widget", r#type = self.short_type_name(), id = id.trace())
    }

    /// Return a small string representing important info (e.g. text for labels).
    ///
    /// Used in debug output.
    fn get_debug_text(&self) -> Option<String> {
        None
    }

    /// Get the (verbose) type name of the widget for debugging purposes.
    /// You should not override this method.
    #[doc(hidden)]
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Get the (abridged) type name of the widget.
    ///
    /// This is the name used for theme sections and in widget files.
    /// You should not override this method.
    #[doc(hidden)]
    fn short_type_name(&self) -> &'static str {
        let name = self.type_name();
        name.split('<')
            .next()
            .unwrap_or(name)
            .split("::")
            .last()
            .unwrap_or(name)
    }
}

impl Debug for dyn Widget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.get_debug_text() {
            Some(text) => write!(f, "{}<{}>", self.short_type_name(), text),
            None => f.write_str(self.short_type_name()),
        }
    }
}
