// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use std::time::Duration;

use kurbo::{Size, Vec2};

use crate::core::Font;

/// Options for creating a [`Gui`](crate::app::Gui).
#[derive(Debug, Clone)]
pub struct GuiOptions {
    /// Size of the window, in pixels. The initial view covers the whole window.
    pub window_size: Size,
    /// Whether pressing Tab moves focus between widgets.
    pub tab_key_usage: bool,
    /// How long the mouse has to rest on a widget before its tooltip shows up.
    pub tooltip_delay: Duration,
    /// Offset of the tooltip from the mouse position.
    pub tooltip_distance: Vec2,
    /// Directory that relative texture paths are resolved against.
    pub resource_path: PathBuf,
    /// Text size used by widgets which don't set their own.
    pub text_size: f64,
    /// Opacity applied to everything drawn.
    pub opacity: f32,
    /// Font used by all widgets.
    pub font: Font,
}

impl Default for GuiOptions {
    fn default() -> Self {
        Self {
            window_size: Size::new(800., 600.),
            tab_key_usage: true,
            tooltip_delay: Duration::from_millis(500),
            tooltip_distance: Vec2::new(5., 20.),
            resource_path: PathBuf::new(),
            text_size: 13.,
            opacity: 1.,
            font: Font::default(),
        }
    }
}

impl GuiOptions {
    /// Set the window size.
    pub fn with_window_size(mut self, window_size: Size) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the resource path.
    pub fn with_resource_path(mut self, resource_path: impl Into<PathBuf>) -> Self {
        self.resource_path = resource_path.into();
        self
    }

    /// Set the tooltip delay.
    pub fn with_tooltip_delay(mut self, delay: Duration) -> Self {
        self.tooltip_delay = delay;
        self
    }

    /// Set the global text size.
    pub fn with_text_size(mut self, text_size: f64) -> Self {
        self.text_size = text_size;
        self
    }
}
