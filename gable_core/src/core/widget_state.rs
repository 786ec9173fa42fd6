// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::{Point, Size};

use crate::core::WidgetId;

/// Generic state for all widgets in the tree.
///
/// This struct contains the widget's position and size, flags set by the
/// user (visibility, enabled state...) and status flags set by the passes
/// (hovered, active, focused).
///
/// The name "active" follows the usual GUI meaning: a widget is active while
/// the mouse button which was pressed on it is held down.
#[derive(Clone, Debug)]
pub struct WidgetState {
    pub(crate) id: WidgetId,
    /// Name of the widget, unique among its siblings. May be empty.
    pub(crate) name: String,

    // --- USER-SET ---
    /// Position relative to the parent's origin.
    pub(crate) position: Point,
    pub(crate) size: Size,
    pub(crate) visible: bool,
    pub(crate) enabled: bool,
    pub(crate) opacity: f32,
    /// Text size set on this widget, overriding the one from the [`Gui`](crate::app::Gui).
    pub(crate) text_size: Option<f64>,
    /// Detached widget shown when the mouse rests on this widget.
    pub(crate) tooltip: Option<WidgetId>,

    // --- STATUS ---
    pub(crate) is_hovered: bool,
    pub(crate) is_active: bool,
    pub(crate) is_focused: bool,
}

impl WidgetState {
    pub(crate) fn new(id: WidgetId, name: String) -> Self {
        Self {
            id,
            name,
            position: Point::ORIGIN,
            size: Size::ZERO,
            visible: true,
            enabled: true,
            opacity: 1.0,
            text_size: None,
            tooltip: None,
            is_hovered: false,
            is_active: false,
            is_focused: false,
        }
    }

    /// The widget's id.
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// The widget's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position relative to the parent.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Size of the widget.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Whether the widget is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the widget reacts to input.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Opacity in the `0.0..=1.0` range.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// The text size set on this widget, if any.
    pub fn text_size_override(&self) -> Option<f64> {
        self.text_size
    }

    /// Id of the tooltip widget, if one is set.
    pub fn tooltip(&self) -> Option<WidgetId> {
        self.tooltip
    }

    /// Whether the mouse is on this widget or one of its descendants.
    pub fn is_hovered(&self) -> bool {
        self.is_hovered
    }

    /// Whether a mouse button was pressed on this widget and not released yet.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Whether this widget has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    /// Whether the widget can receive input: visible and enabled.
    pub(crate) fn is_interactive(&self) -> bool {
        self.visible && self.enabled
    }
}
