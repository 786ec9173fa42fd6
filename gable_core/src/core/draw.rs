// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! Backend-neutral drawing.
//!
//! Widgets paint into a [`DrawList`], which records draw commands in window
//! coordinates. The host application hands the list to whatever 2D renderer it
//! uses; Gable never talks to a graphics API itself.

use std::sync::Arc;

use kurbo::{Point, Rect, Vec2};
use peniko::Color;

use crate::core::Texture;

/// A single recorded draw command.
///
/// All coordinates are absolute (already translated to the window's GUI coordinates),
/// and colors already include the opacity of the widget and its ancestors.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// Fill a rectangle with a solid color.
    FillRect {
        /// The rectangle.
        rect: Rect,
        /// The fill color.
        color: Color,
    },
    /// Draw the outline of a rectangle, inside its bounds.
    StrokeRect {
        /// The rectangle.
        rect: Rect,
        /// The stroke color.
        color: Color,
        /// The stroke width.
        width: f64,
    },
    /// Draw a line segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Line color.
        color: Color,
        /// Line width.
        width: f64,
    },
    /// Draw a texture stretched over a rectangle.
    Texture {
        /// The texture.
        texture: Texture,
        /// Destination rectangle.
        rect: Rect,
        /// Color the texture is multiplied with (used for opacity).
        tint: Color,
        /// Whether to use smooth (bilinear) filtering.
        smooth: bool,
    },
    /// Draw a single line of text.
    Text {
        /// The text.
        text: Arc<str>,
        /// The top-left corner of the text.
        origin: Point,
        /// Character size, in pixels.
        size: f64,
        /// Text color.
        color: Color,
        /// Font family.
        font: Arc<str>,
    },
    /// Restrict following commands to a rectangle, until the matching `PopClip`.
    PushClip(Rect),
    /// Undo the last `PushClip`.
    PopClip,
}

/// A list of draw commands.
///
/// The list keeps a stack of offsets and opacities. Widgets draw in their local
/// coordinates; [`DrawList`] translates and fades commands as they are recorded.
#[derive(Debug, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    offset: Vec2,
    opacity: f32,
    stack: Vec<(Vec2, f32)>,
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            offset: Vec2::ZERO,
            opacity: 1.0,
            stack: Vec::new(),
        }
    }

    /// The recorded commands.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Consume the list, returning the recorded commands.
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Returns `true` if nothing was drawn.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The current translation applied to local coordinates.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// The current opacity multiplier.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Start a nested layer translated by `offset` and faded by `opacity`.
    ///
    /// Must be matched by a call to [`pop_layer`](Self::pop_layer).
    pub fn push_layer(&mut self, offset: Vec2, opacity: f32) {
        self.stack.push((self.offset, self.opacity));
        self.offset += offset;
        self.opacity *= opacity;
    }

    /// End the layer started by the last [`push_layer`](Self::push_layer).
    pub fn pop_layer(&mut self) {
        if let Some((offset, opacity)) = self.stack.pop() {
            self.offset = offset;
            self.opacity = opacity;
        } else {
            crate::debug_panic!("DrawList::pop_layer called without a matching push_layer");
        }
    }

    fn fade(&self, color: Color) -> Color {
        if self.opacity >= 1.0 {
            color
        } else {
            color.multiply_alpha(self.opacity)
        }
    }

    /// Fill a rectangle given in local coordinates.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rect = rect + self.offset;
        let color = self.fade(color);
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    /// Stroke a rectangle given in local coordinates.
    pub fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        if width <= 0.0 {
            return;
        }
        let rect = rect + self.offset;
        let color = self.fade(color);
        self.commands
            .push(DrawCommand::StrokeRect { rect, color, width });
    }

    /// Draw a line between two local points.
    pub fn line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        let from = from + self.offset;
        let to = to + self.offset;
        let color = self.fade(color);
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    /// Draw a texture stretched over a local rectangle.
    pub fn texture(&mut self, texture: &Texture, rect: Rect, smooth: bool) {
        let rect = rect + self.offset;
        let tint = self.fade(Color::WHITE);
        self.commands.push(DrawCommand::Texture {
            texture: texture.clone(),
            rect,
            tint,
            smooth,
        });
    }

    /// Draw text with its top-left corner at a local point.
    pub fn text(&mut self, text: &str, origin: Point, size: f64, color: Color, font: &Font) {
        if text.is_empty() {
            return;
        }
        let origin = origin + self.offset;
        let color = self.fade(color);
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            origin,
            size,
            color,
            font: font.family.clone(),
        });
    }

    /// Clip following commands to a local rectangle.
    pub fn push_clip(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::PushClip(rect + self.offset));
    }

    /// Undo the last [`push_clip`](Self::push_clip).
    pub fn pop_clip(&mut self) {
        self.commands.push(DrawCommand::PopClip);
    }
}

/// A font, identified by its family name.
///
/// Gable does not rasterize text; the backend picks the actual typeface.
/// The metrics here are approximations used to size widgets around their text.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Family name, passed through to the backend.
    pub family: Arc<str>,
    /// Average glyph advance, as a fraction of the character size.
    pub advance_ratio: f64,
    /// Line height, as a fraction of the character size.
    pub line_spacing: f64,
}

impl Default for Font {
    fn default() -> Self {
        Self::new("sans-serif")
    }
}

impl Font {
    /// Create a font with default metrics.
    pub fn new(family: impl Into<Arc<str>>) -> Self {
        Self {
            family: family.into(),
            advance_ratio: 0.6,
            line_spacing: 1.25,
        }
    }

    /// Approximate width of a single line of text.
    pub fn text_width(&self, text: &str, size: f64) -> f64 {
        text.chars().count() as f64 * size * self.advance_ratio
    }

    /// Height of a line of text.
    pub fn line_height(&self, size: f64) -> f64 {
        size * self.line_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_translate_and_fade() {
        let mut list = DrawList::new();
        list.push_layer(Vec2::new(10., 20.), 0.5);
        list.fill_rect(Rect::new(0., 0., 5., 5.), Color::from_rgba8(255, 0, 0, 255));
        list.push_layer(Vec2::new(1., 1.), 0.5);
        list.line(Point::ZERO, Point::new(1., 0.), Color::BLACK, 1.);
        list.pop_layer();
        list.pop_layer();
        list.fill_rect(Rect::new(0., 0., 1., 1.), Color::WHITE);

        assert_eq!(list.commands().len(), 3);
        match &list.commands()[0] {
            DrawCommand::FillRect { rect, color } => {
                assert_eq!(*rect, Rect::new(10., 20., 15., 25.));
                assert!((color.components[3] - 0.5).abs() < 1e-6);
            }
            other => panic!("unexpected command {other:?}"),
        }
        match &list.commands()[1] {
            DrawCommand::Line { from, color, .. } => {
                assert_eq!(*from, Point::new(11., 21.));
                assert!((color.components[3] - 0.25).abs() < 1e-6);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(list.offset(), Vec2::ZERO);
        assert_eq!(list.opacity(), 1.0);
    }

    #[test]
    fn empty_text_is_skipped() {
        let mut list = DrawList::new();
        list.text("", Point::ZERO, 12., Color::BLACK, &Font::default());
        assert!(list.is_empty());
    }

    #[test]
    fn font_metrics() {
        let font = Font::default();
        assert_eq!(font.text_width("abcd", 10.), 24.);
        assert_eq!(font.line_height(16.), 20.);
    }
}
