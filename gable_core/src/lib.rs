// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! Gable Core provides the engine of the Gable widget toolkit.
//!
//! Gable's widgets are implemented in the Gable crate, which re-exports this crate as `gable::core`
//! and `gable::app`. Most users should depend on `gable` directly.
//!
//! Gable Core provides:
//!
//! - [`Widget`][core::Widget], the trait for GUI widgets in Gable.
//! - The [`Gui`][app::Gui], which owns the widget tree and routes the host
//!   application's window events to it.
//! - Event bubbling, hover and pressed tracking, keyboard focus with Tab cycling,
//!   and delayed tooltips.
//! - Renderer properties: per-widget overrides on top of a [`Theme`][core::Theme].
//! - Painting into a backend-independent [`DrawList`][core::DrawList].
//! - APIs for widget manipulation (such as [`WidgetMut`][core::WidgetMut]).
//! - Loading and saving widget trees in a small [text format][file].
//! - Actions, by which widgets notify the application of user interaction.
//!
//! Gable Core doesn't open windows or rasterize anything. The host application
//! translates its window events into [`InputEvent`][core::InputEvent]s and draws
//! the commands returned by [`Gui::draw`][app::Gui::draw] with whatever
//! renderer it uses.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use keyboard_types;
pub use {image, kurbo, peniko};

#[macro_use]
pub mod util;

mod passes;

pub mod app;
pub mod core;
pub mod file;
