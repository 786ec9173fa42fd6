// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! A widget wrapper recording the calls made on it.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use gable_core::core::{
    DrawList, EventCtx, PaintCtx, PointerEvent, PropertyError, PropertyKind, QueryCtx,
    RadioMember, TextEvent, Update, UpdateCtx, Widget,
};
use gable_core::kurbo::{Point, Size, Vec2};

/// A wrapper widget that records each time one of its methods is called.
///
/// Its intent is to let you observe the methods called on a widget in a test.
///
/// ```
/// use assert_matches::assert_matches;
/// use gable_core::core::{Theme, Update};
/// use gable_core::file::WidgetFactory;
/// use gable_testing::{ModularWidget, Record, Recording, TestHarness, TestWidgetExt};
///
/// let recording = Recording::default();
/// let widget = ModularWidget::new(()).record(&recording);
///
/// let mut harness = TestHarness::create(Theme::new(), WidgetFactory::new());
/// harness.add(widget, "recorded");
/// assert_matches!(recording.next(), Some(Record::U(Update::WidgetAdded)));
/// ```
pub struct Recorder<W> {
    recording: Recording,
    child: W,
}

/// A recording of widget method calls.
///
/// Internally stores a queue of [`Records`](Record).
#[derive(Debug, Clone, Default)]
pub struct Recording(Rc<RefCell<VecDeque<Record>>>);

/// A recording of a method call on a widget.
///
/// Each member of the enum corresponds to one of the methods on `Widget`.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// Pointer event.
    PE(PointerEvent),
    /// Text event.
    TE(TextEvent),
    /// Update
    U(Update),
    /// Renderer property change.
    PC(String),
    /// Paint.
    Paint,
}

impl Recording {
    /// True if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// The number of events in the recording.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Clear recorded events.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Returns the next event in the recording, if one exists.
    ///
    /// This consumes the event.
    pub fn next(&self) -> Option<Record> {
        self.0.borrow_mut().pop_front()
    }

    /// Returns a vec of events drained from the recording.
    pub fn drain(&self) -> Vec<Record> {
        self.0.borrow_mut().drain(..).collect::<Vec<_>>()
    }

    fn push(&self, event: Record) {
        self.0.borrow_mut().push_back(event);
    }
}

impl<W: Widget> Recorder<W> {
    /// Wrap child widget in a Recorder that records all method calls.
    pub fn new(child: W, recording: &Recording) -> Self {
        Self {
            child,
            recording: recording.clone(),
        }
    }
}

impl<W: Widget> Widget for Recorder<W> {
    fn on_pointer_event(&mut self, ctx: &mut EventCtx<'_>, event: &PointerEvent) {
        self.recording.push(Record::PE(event.clone()));
        self.child.on_pointer_event(ctx, event);
    }

    fn on_text_event(&mut self, ctx: &mut EventCtx<'_>, event: &TextEvent) {
        self.recording.push(Record::TE(event.clone()));
        self.child.on_text_event(ctx, event);
    }

    fn update(&mut self, ctx: &mut UpdateCtx<'_>, event: &Update) {
        self.recording.push(Record::U(event.clone()));
        self.child.update(ctx, event);
    }

    fn property_changed(&mut self, ctx: &mut UpdateCtx<'_>, name: &str) {
        self.recording.push(Record::PC(name.to_string()));
        self.child.property_changed(ctx, name);
    }

    fn paint(&self, ctx: &PaintCtx<'_>, scene: &mut DrawList) {
        self.recording.push(Record::Paint);
        self.child.paint(ctx, scene);
    }

    fn hit_test(&self, ctx: &QueryCtx<'_>, pos: Point) -> bool {
        self.child.hit_test(ctx, pos)
    }

    fn full_size(&self, ctx: &QueryCtx<'_>) -> Size {
        self.child.full_size(ctx)
    }

    fn widget_offset(&self, ctx: &QueryCtx<'_>) -> Vec2 {
        self.child.widget_offset(ctx)
    }

    fn accepts_focus(&self) -> bool {
        self.child.accepts_focus()
    }

    fn is_container(&self) -> bool {
        self.child.is_container()
    }

    fn as_radio(&mut self) -> Option<&mut dyn RadioMember> {
        self.child.as_radio()
    }

    fn set_property(
        &mut self,
        ctx: &mut UpdateCtx<'_>,
        name: &str,
        value: &str,
    ) -> Result<bool, PropertyError> {
        self.child.set_property(ctx, name, value)
    }

    fn get_property(&self, ctx: &QueryCtx<'_>, name: &str) -> Option<String> {
        self.child.get_property(ctx, name)
    }

    fn property_list(&self) -> Vec<(&'static str, PropertyKind)> {
        self.child.property_list()
    }

    fn get_debug_text(&self) -> Option<String> {
        self.child.get_debug_text()
    }
}
