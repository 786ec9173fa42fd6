// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! Common widgets.

mod button;
mod check_box;
mod clickable;
mod label;
mod panel;
mod picture;
mod radio_button;

pub use self::button::*;
pub use self::check_box::*;
pub use self::clickable::Clicked;
pub use self::label::*;
pub use self::panel::*;
pub use self::picture::*;
pub use self::radio_button::{CheckedChanged, RadioButton};
