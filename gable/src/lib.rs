// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! Gable is a retained-mode widget toolkit.
//!
//! The engine (widget tree, event routing, focus, tooltips, renderer properties
//! and the widget file format) lives in `gable_core`, re-exported here as
//! [`core`], [`app`] and [`file`]. This crate adds the widget catalog and a
//! default look.
//!
//! ## Example
//!
//! ```
//! use gable::default_gui;
//! use gable::core::InputEvent;
//! use gable::kurbo::{Point, Size};
//! use gable::widgets::{Button, ButtonPressed};
//!
//! let mut gui = default_gui(Size::new(400., 300.));
//! let button = gui.add(Button::new("Quit"), "quit").unwrap();
//! gui.edit_widget(button, |mut button| {
//!     button.set_position(Point::new(10., 10.));
//!     button.set_size(Size::new(80., 30.));
//! })
//! .unwrap();
//!
//! gui.handle_event(InputEvent::MouseMoved(Point::new(20., 20.)));
//! gui.handle_event(InputEvent::MouseButtonPressed {
//!     button: gable::core::PointerButton::Left,
//!     position: Point::new(20., 20.),
//! });
//! gui.handle_event(InputEvent::MouseButtonReleased {
//!     button: gable::core::PointerButton::Left,
//!     position: Point::new(20., 20.),
//! });
//!
//! let (_, source) = gui.pop_action_of::<ButtonPressed>().unwrap();
//! assert_eq!(source, button);
//! ```
//!
//! The host application owns the window: it forwards window events with
//! [`Gui::handle_event`](app::Gui::handle_event), calls
//! [`Gui::update_time`](app::Gui::update_time) once per frame and draws the
//! commands returned by [`Gui::draw`](app::Gui::draw).

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

pub use gable_core::{app, core, file, util};
pub use gable_core::{image, keyboard_types, kurbo, peniko};

mod defaults;
mod paint_helpers;

pub mod theme;
pub mod widgets;

pub use defaults::{default_factory, default_gui};

#[cfg(test)]
mod tests;
