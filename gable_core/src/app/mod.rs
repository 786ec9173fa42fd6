// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! The [`Gui`] type and its configuration.

mod gui;
mod gui_state;
mod options;
mod tracing_backend;

pub use gui::{Gui, GuiError};
pub use options::GuiOptions;
pub use tracing_backend::{
    TracingSubscriberHasBeenSetError, try_init_test_tracing, try_init_tracing,
};

pub(crate) use gui_state::GuiState;
