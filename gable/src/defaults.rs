// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

use gable_core::app::{Gui, GuiOptions};
use gable_core::file::WidgetFactory;
use gable_core::kurbo::Size;

use crate::theme::default_theme;
use crate::widgets::{Button, CheckBox, Label, Panel, Picture, RadioButton};

/// A factory which knows every widget of this crate, for loading widget files.
pub fn default_factory() -> WidgetFactory {
    WidgetFactory::new()
        .with::<Button>()
        .with::<CheckBox>()
        .with::<Label>()
        .with::<Panel>()
        .with::<Picture>()
        .with::<RadioButton>()
}

/// An empty [`Gui`] for a window of the given size, using the
/// [default theme](default_theme) and [factory](default_factory).
pub fn default_gui(window_size: Size) -> Gui {
    Gui::new(
        default_theme(),
        default_factory(),
        GuiOptions::default().with_window_size(window_size),
    )
}
