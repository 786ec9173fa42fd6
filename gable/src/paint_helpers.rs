// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! Helper functions shared by the `paint` methods of widgets.

use gable_core::core::{DrawList, Font, Outline, PaintCtx, RendererRef, Texture};
use gable_core::kurbo::{Point, Rect, Size};
use gable_core::peniko::Color;

/// The interaction state a widget is drawn in.
///
/// Renderer properties may have a variant per state, named by appending the
/// state's suffix: `BackgroundColorHover`, `TextureDown`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VisualState {
    Normal,
    Hover,
    Down,
    Disabled,
}

impl VisualState {
    pub(crate) fn of(ctx: &PaintCtx<'_>) -> Self {
        if ctx.is_disabled() {
            Self::Disabled
        } else if ctx.is_active() && ctx.is_hovered() {
            Self::Down
        } else if ctx.is_hovered() {
            Self::Hover
        } else {
            Self::Normal
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Hover => "Hover",
            Self::Down => "Down",
            Self::Disabled => "Disabled",
        }
    }
}

/// The color `base` has in `state`, falling back to `base` itself.
pub(crate) fn state_color(
    renderer: &RendererRef<'_>,
    base: &str,
    state: VisualState,
) -> Option<Color> {
    if state == VisualState::Normal {
        return renderer.color(&[base]);
    }
    let specific = format!("{base}{}", state.suffix());
    renderer.color(&[&specific, base])
}

/// The texture `base` has in `state`, falling back to `base` itself.
pub(crate) fn state_texture<'a>(
    renderer: &RendererRef<'a>,
    base: &str,
    state: VisualState,
) -> Option<&'a Texture> {
    if state == VisualState::Normal {
        return renderer.texture(&[base]);
    }
    let specific = format!("{base}{}", state.suffix());
    renderer.texture(&[&specific, base])
}

/// Fill the four sides of `borders` around a box of the given size.
pub(crate) fn paint_borders(scene: &mut DrawList, size: Size, borders: Outline, color: Color) {
    if borders.is_zero() {
        return;
    }
    let (w, h) = (size.width, size.height);
    scene.fill_rect(Rect::new(0., 0., borders.left, h), color);
    scene.fill_rect(Rect::new(w - borders.right, 0., w, h), color);
    scene.fill_rect(Rect::new(borders.left, 0., w - borders.right, borders.top), color);
    scene.fill_rect(
        Rect::new(borders.left, h - borders.bottom, w - borders.right, h),
        color,
    );
}

/// The size taken by `text`, one line per `\n`.
pub(crate) fn text_size(font: &Font, text: &str, text_size: f64) -> Size {
    if text.is_empty() {
        return Size::ZERO;
    }
    let width = text
        .lines()
        .map(|line| font.text_width(line, text_size))
        .fold(0., f64::max);
    let lines = text.lines().count().max(1);
    #[allow(clippy::cast_precision_loss, reason = "Line counts are small")]
    let height = font.line_height(text_size) * lines as f64;
    Size::new(width, height)
}

/// Draw `text` line by line, starting at `origin`.
pub(crate) fn paint_text(
    scene: &mut DrawList,
    text: &str,
    origin: Point,
    ctx: &PaintCtx<'_>,
    color: Color,
) {
    let font = ctx.font();
    let size = ctx.text_size();
    let line_height = font.line_height(size);
    let mut y = origin.y;
    for line in text.lines() {
        scene.text(line, Point::new(origin.x, y), size, color, font);
        y += line_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiline_text_size() {
        let font = Font::default();
        assert_eq!(text_size(&font, "", 10.), Size::ZERO);
        // 0.6 advance and 1.25 line spacing.
        assert_eq!(text_size(&font, "abcd", 10.), Size::new(24., 12.5));
        assert_eq!(text_size(&font, "ab\nabcd", 10.), Size::new(24., 25.));
    }

    #[test]
    fn borders_are_four_rects() {
        let mut scene = DrawList::new();
        paint_borders(&mut scene, Size::new(10., 10.), Outline::uniform(1.), Color::BLACK);
        assert_eq!(scene.commands().len(), 4);

        let mut scene = DrawList::new();
        paint_borders(&mut scene, Size::new(10., 10.), Outline::ZERO, Color::BLACK);
        assert!(scene.is_empty());
    }
}
