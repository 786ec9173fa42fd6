// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

use gable_core::core::{
    DrawList, EventCtx, PaintCtx, PointerEvent, PropertyError, QueryCtx, TextEvent,
    Update, UpdateCtx, Widget,
};
use gable_core::kurbo::{Point, Rect};

pub(crate) type PointerEventFn<S> = dyn FnMut(&mut S, &mut EventCtx<'_>, &PointerEvent);
pub(crate) type TextEventFn<S> = dyn FnMut(&mut S, &mut EventCtx<'_>, &TextEvent);
pub(crate) type UpdateFn<S> = dyn FnMut(&mut S, &mut UpdateCtx<'_>, &Update);
pub(crate) type PropertyChangeFn<S> = dyn FnMut(&mut S, &mut UpdateCtx<'_>, &str);
pub(crate) type SetPropertyFn<S> =
    dyn FnMut(&mut S, &mut UpdateCtx<'_>, &str, &str) -> Result<bool, PropertyError>;
pub(crate) type GetPropertyFn<S> = dyn Fn(&S, &QueryCtx<'_>, &str) -> Option<String>;
pub(crate) type PaintFn<S> = dyn Fn(&S, &PaintCtx<'_>, &mut DrawList);
pub(crate) type HitTestFn<S> = dyn Fn(&S, &QueryCtx<'_>, Point) -> bool;

/// A widget that can be constructed from individual functions, builder-style.
///
/// This widget is generic over its state, which is passed in at construction time.
pub struct ModularWidget<S> {
    /// The state passed to all the callbacks of this widget
    pub state: S,
    accepts_focus: bool,
    is_container: bool,
    on_pointer_event: Option<Box<PointerEventFn<S>>>,
    on_text_event: Option<Box<TextEventFn<S>>>,
    update: Option<Box<UpdateFn<S>>>,
    property_change: Option<Box<PropertyChangeFn<S>>>,
    set_property: Option<Box<SetPropertyFn<S>>>,
    get_property: Option<Box<GetPropertyFn<S>>>,
    paint: Option<Box<PaintFn<S>>>,
    hit_test: Option<Box<HitTestFn<S>>>,
}

impl<S> ModularWidget<S> {
    /// Creates a new `ModularWidget`.
    ///
    /// By default none of its methods do anything.
    pub fn new(state: S) -> Self {
        Self {
            state,
            accepts_focus: false,
            is_container: false,
            on_pointer_event: None,
            on_text_event: None,
            update: None,
            property_change: None,
            set_property: None,
            get_property: None,
            paint: None,
            hit_test: None,
        }
    }
}

impl ModularWidget<()> {
    /// Creates a new `ModularWidget` which may be given children.
    pub fn new_parent() -> Self {
        Self::new(()).is_container(true)
    }
}

/// Builder methods.
///
/// Each method takes a flag which is then returned by the matching [`Widget`] method.
impl<S> ModularWidget<S> {
    /// See [`Widget::accepts_focus`]
    pub fn accepts_focus(mut self, flag: bool) -> Self {
        self.accepts_focus = flag;
        self
    }

    /// See [`Widget::is_container`]
    pub fn is_container(mut self, flag: bool) -> Self {
        self.is_container = flag;
        self
    }
}

/// Builder methods.
///
/// Each method takes a callback that matches the behavior of the matching [`Widget`] method.
impl<S> ModularWidget<S> {
    /// See [`Widget::on_pointer_event`]
    pub fn pointer_event_fn(
        mut self,
        f: impl FnMut(&mut S, &mut EventCtx<'_>, &PointerEvent) + 'static,
    ) -> Self {
        self.on_pointer_event = Some(Box::new(f));
        self
    }

    /// See [`Widget::on_text_event`]
    pub fn text_event_fn(
        mut self,
        f: impl FnMut(&mut S, &mut EventCtx<'_>, &TextEvent) + 'static,
    ) -> Self {
        self.on_text_event = Some(Box::new(f));
        self
    }

    /// See [`Widget::update`]
    pub fn update_fn(mut self, f: impl FnMut(&mut S, &mut UpdateCtx<'_>, &Update) + 'static) -> Self {
        self.update = Some(Box::new(f));
        self
    }

    /// See [`Widget::property_changed`]
    pub fn property_change_fn(
        mut self,
        f: impl FnMut(&mut S, &mut UpdateCtx<'_>, &str) + 'static,
    ) -> Self {
        self.property_change = Some(Box::new(f));
        self
    }

    /// See [`Widget::set_property`]
    pub fn set_property_fn(
        mut self,
        f: impl FnMut(&mut S, &mut UpdateCtx<'_>, &str, &str) -> Result<bool, PropertyError> + 'static,
    ) -> Self {
        self.set_property = Some(Box::new(f));
        self
    }

    /// See [`Widget::get_property`]
    pub fn get_property_fn(
        mut self,
        f: impl Fn(&S, &QueryCtx<'_>, &str) -> Option<String> + 'static,
    ) -> Self {
        self.get_property = Some(Box::new(f));
        self
    }

    /// See [`Widget::paint`]
    pub fn paint_fn(mut self, f: impl Fn(&S, &PaintCtx<'_>, &mut DrawList) + 'static) -> Self {
        self.paint = Some(Box::new(f));
        self
    }

    /// See [`Widget::hit_test`]
    pub fn hit_test_fn(mut self, f: impl Fn(&S, &QueryCtx<'_>, Point) -> bool + 'static) -> Self {
        self.hit_test = Some(Box::new(f));
        self
    }
}

impl<S: 'static> Widget for ModularWidget<S> {
    fn on_pointer_event(&mut self, ctx: &mut EventCtx<'_>, event: &PointerEvent) {
        if let Some(f) = self.on_pointer_event.as_mut() {
            f(&mut self.state, ctx, event);
        }
    }

    fn on_text_event(&mut self, ctx: &mut EventCtx<'_>, event: &TextEvent) {
        if let Some(f) = self.on_text_event.as_mut() {
            f(&mut self.state, ctx, event);
        }
    }

    fn update(&mut self, ctx: &mut UpdateCtx<'_>, event: &Update) {
        if let Some(f) = self.update.as_mut() {
            f(&mut self.state, ctx, event);
        }
    }

    fn property_changed(&mut self, ctx: &mut UpdateCtx<'_>, name: &str) {
        if let Some(f) = self.property_change.as_mut() {
            f(&mut self.state, ctx, name);
        }
    }

    fn paint(&self, ctx: &PaintCtx<'_>, scene: &mut DrawList) {
        if let Some(f) = self.paint.as_ref() {
            f(&self.state, ctx, scene);
        }
    }

    fn hit_test(&self, ctx: &QueryCtx<'_>, pos: Point) -> bool {
        match self.hit_test.as_ref() {
            Some(f) => f(&self.state, ctx, pos),
            None => Rect::from_origin_size(Point::ORIGIN, ctx.size()).contains(pos),
        }
    }

    fn accepts_focus(&self) -> bool {
        self.accepts_focus
    }

    fn is_container(&self) -> bool {
        self.is_container
    }

    fn set_property(
        &mut self,
        ctx: &mut UpdateCtx<'_>,
        name: &str,
        value: &str,
    ) -> Result<bool, PropertyError> {
        match self.set_property.as_mut() {
            Some(f) => f(&mut self.state, ctx, name, value),
            None => Ok(false),
        }
    }

    fn get_property(&self, ctx: &QueryCtx<'_>, name: &str) -> Option<String> {
        self.get_property
            .as_ref()
            .and_then(|f| f(&self.state, ctx, name))
    }
}
