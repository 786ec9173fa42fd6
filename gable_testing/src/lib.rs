// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! Headless runner for testing Gable widgets.
//!
//! The primary type from this crate is [`TestHarness`], which owns a [`Gui`](gable_core::app::Gui)
//! and drives it the way a window would: mouse moves and clicks, key presses, the flow of time.
//! No window is opened and nothing is rasterized; the state of the tree is checked through
//! [`WidgetRef`](gable_core::core::WidgetRef)s, actions and the drawn [`DrawList`](gable_core::core::DrawList).
//!
//! [`ModularWidget`] builds throwaway widgets from closures, and [`Recorder`] wraps a widget
//! to observe which of its methods are called.

#![expect(missing_debug_implementations, reason = "Widget wrappers hold closures and boxed widgets")]

mod harness;
mod modular_widget;
mod recorder_widget;

pub use harness::TestHarness;
pub use modular_widget::ModularWidget;
pub use recorder_widget::{Record, Recorder, Recording};

use gable_core::core::Widget;

/// External trait implemented for all widgets.
///
/// Implements helper methods useful for unit testing.
pub trait TestWidgetExt: Widget + Sized + 'static {
    /// Wrap this widget in a [`Recorder`] that records all method calls.
    fn record(self, recording: &Recording) -> Recorder<Self> {
        Recorder::new(self, recording)
    }
}

impl<W: Widget + 'static> TestWidgetExt for W {}
