// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! Events.

use keyboard_types::{Key, Modifiers};
use kurbo::{Point, Size, Vec2};

/// A mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// The left button.
    Left,
    /// The right button.
    Right,
    /// The middle button (usually the wheel).
    Middle,
}

/// A key press or release, with the modifiers held at the time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// The logical key.
    pub key: Key,
    /// Modifier keys held down.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a key event without modifiers.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// Create a key event with the given modifiers.
    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Returns `true` if Shift is held.
    pub fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// Returns `true` for keys that activate buttons: Space and Enter.
    pub fn is_activation(&self) -> bool {
        match &self.key {
            Key::Enter => true,
            Key::Character(c) => c == " ",
            _ => false,
        }
    }
}

/// A raw input event, as delivered by the host application's window.
///
/// Positions are in window pixels; the [`Gui`](crate::app::Gui) maps
/// them to GUI coordinates through its view.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The window was resized.
    Resized(Size),
    /// The window lost keyboard focus.
    LostFocus,
    /// The window gained keyboard focus.
    GainedFocus,
    /// The mouse moved.
    MouseMoved(Point),
    /// A mouse button was pressed.
    MouseButtonPressed {
        /// Which button.
        button: PointerButton,
        /// Where, in window pixels.
        position: Point,
    },
    /// A mouse button was released.
    MouseButtonReleased {
        /// Which button.
        button: PointerButton,
        /// Where, in window pixels.
        position: Point,
    },
    /// The mouse wheel was scrolled.
    MouseWheelScrolled {
        /// Scroll amount, in lines.
        delta: f64,
        /// Where, in window pixels.
        position: Point,
    },
    /// The mouse left the window.
    MouseLeft,
    /// A key was pressed.
    KeyPressed(KeyEvent),
    /// A key was released.
    KeyReleased(KeyEvent),
    /// A character was typed.
    TextEntered(char),
}

impl InputEvent {
    /// Short name, for logs.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Resized(_) => "Resized",
            Self::LostFocus => "LostFocus",
            Self::GainedFocus => "GainedFocus",
            Self::MouseMoved(_) => "MouseMoved",
            Self::MouseButtonPressed { .. } => "MouseButtonPressed",
            Self::MouseButtonReleased { .. } => "MouseButtonReleased",
            Self::MouseWheelScrolled { .. } => "MouseWheelScrolled",
            Self::MouseLeft => "MouseLeft",
            Self::KeyPressed(_) => "KeyPressed",
            Self::KeyReleased(_) => "KeyReleased",
            Self::TextEntered(_) => "TextEntered",
        }
    }

    /// `true` if this event type is likely to occur every frame.
    pub fn is_very_frequent(&self) -> bool {
        matches!(self, Self::MouseMoved(_) | Self::MouseWheelScrolled { .. })
    }
}

/// A pointer event, as seen by a widget.
///
/// Positions are in the widget's local coordinate space.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    /// A button was pressed over the widget.
    Down {
        /// Which button.
        button: PointerButton,
        /// Local position.
        pos: Point,
    },
    /// A button was released over the widget.
    Up {
        /// Which button.
        button: PointerButton,
        /// Local position.
        pos: Point,
    },
    /// The pointer moved over the widget.
    Move(Point),
    /// The wheel was scrolled over the widget.
    Wheel {
        /// Scroll amount, in lines.
        delta: Vec2,
        /// Local position.
        pos: Point,
    },
    /// The pointer entered the widget.
    Enter,
    /// The pointer left the widget.
    Leave,
}

impl PointerEvent {
    /// Short name, for logs.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Down { .. } => "Down",
            Self::Up { .. } => "Up",
            Self::Move(_) => "Move",
            Self::Wheel { .. } => "Wheel",
            Self::Enter => "Enter",
            Self::Leave => "Leave",
        }
    }

    /// The local position, if the event has one.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::Down { pos, .. } | Self::Up { pos, .. } | Self::Wheel { pos, .. } => Some(*pos),
            Self::Move(pos) => Some(*pos),
            Self::Enter | Self::Leave => None,
        }
    }

    pub(crate) fn translated(&self, offset: Vec2) -> Self {
        match self {
            Self::Down { button, pos } => Self::Down {
                button: *button,
                pos: *pos - offset,
            },
            Self::Up { button, pos } => Self::Up {
                button: *button,
                pos: *pos - offset,
            },
            Self::Move(pos) => Self::Move(*pos - offset),
            Self::Wheel { delta, pos } => Self::Wheel {
                delta: *delta,
                pos: *pos - offset,
            },
            Self::Enter => Self::Enter,
            Self::Leave => Self::Leave,
        }
    }
}

/// A keyboard event, sent to the focused widget.
#[derive(Debug, Clone, PartialEq)]
pub enum TextEvent {
    /// A key was pressed.
    KeyDown(KeyEvent),
    /// A key was released.
    KeyUp(KeyEvent),
    /// A character was typed.
    Text(char),
}

impl TextEvent {
    /// Short name, for logs.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::KeyDown(_) => "KeyDown",
            Self::KeyUp(_) => "KeyUp",
            Self::Text(_) => "Text",
        }
    }
}

/// Changes to a widget's status, generated by the library.
///
/// Unlike [`PointerEvent`]s and [`TextEvent`]s, updates are not caused
/// directly by user input, and are never bubbled.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// Sent when the widget is added to the tree. This is the first message a widget receives.
    WidgetAdded,
    /// The hovered status changed.
    HoveredChanged(bool),
    /// The active status changed.
    ///
    /// A widget is active between a mouse press on it and the next mouse release.
    /// `ActiveChanged(false)` without a release on the widget means the press was cancelled.
    ActiveChanged(bool),
    /// The focused status changed.
    FocusChanged(bool),
    /// The widget was enabled or disabled. The payload is `true` for disabled.
    DisabledChanged(bool),
    /// The widget was shown or hidden.
    VisibleChanged(bool),
    /// The size was set explicitly.
    SizeChanged(Size),
    /// The effective text size changed.
    TextSizeChanged(f64),
    /// The theme was replaced, so any renderer property may have changed.
    RendererChanged,
}

/// Whether an event was handled by a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// The event was handled.
    Yes,
    /// The event was not handled.
    No,
}

impl Handled {
    /// `true` if this is `Handled::Yes`.
    #[inline]
    pub fn is_handled(self) -> bool {
        self == Self::Yes
    }
}

impl From<bool> for Handled {
    /// Returns `Handled::Yes` if `handled` is true, and `Handled::No` otherwise.
    fn from(handled: bool) -> Self {
        if handled { Self::Yes } else { Self::No }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_keys() {
        assert!(KeyEvent::new(Key::Enter).is_activation());
        assert!(KeyEvent::new(Key::Character(" ".into())).is_activation());
        assert!(!KeyEvent::new(Key::Tab).is_activation());
        assert!(KeyEvent::with_modifiers(Key::Tab, Modifiers::SHIFT).shift());
    }

    #[test]
    fn translate_pointer_event() {
        let event = PointerEvent::Down {
            button: PointerButton::Left,
            pos: Point::new(15., 25.),
        };
        let local = event.translated(Vec2::new(10., 20.));
        assert_eq!(local.position(), Some(Point::new(5., 5.)));
        assert_eq!(PointerEvent::Leave.translated(Vec2::new(1., 1.)), PointerEvent::Leave);
    }
}
