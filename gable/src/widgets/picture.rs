// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! A widget displaying an image.

use std::path::{Path, PathBuf};

use gable_core::core::{
    DrawList, EventCtx, PaintCtx, PointerEvent, PropertyError, PropertyKind, QueryCtx, Texture,
    TextureError, Update, UpdateCtx, Widget, WidgetId, WidgetMut,
};
use gable_core::file::{format_bool, parse_bool, quote_string, unquote_string};
use gable_core::kurbo::{Point, Rect, Size};
use gable_core::util::names_match;
use tracing::{Span, debug, trace_span, warn};

use crate::widgets::clickable::submit_click;

/// A widget displaying an image loaded from a file.
///
/// Relative file names are resolved against the resource path of the
/// [`Gui`](gable_core::app::Gui). The image is stretched to the widget's size;
/// loading an image sets the size to the image's size unless the picture
/// was given a size before.
///
/// Fully transparent pixels are not part of the widget: clicks on them go to
/// the widgets behind it.
///
/// Emits [`Clicked`](super::Clicked) when clicked.
#[derive(Debug, Clone, Default)]
pub struct Picture {
    texture: Option<Texture>,
    filename: PathBuf,
    smooth: bool,
    custom_size: bool,
}

// --- MARK: BUILDERS
impl Picture {
    /// Create a picture without an image.
    ///
    /// Use [`Picture::load`] once the widget is in a [`Gui`](gable_core::app::Gui).
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an image is loaded.
    pub fn is_loaded(&self) -> bool {
        self.texture.is_some()
    }

    /// The file name the image was loaded from, as it was given.
    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// The loaded image.
    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }

    /// Whether the image is smoothed when it is stretched.
    ///
    /// This is always `false` for a picture without an image.
    pub fn is_smooth(&self) -> bool {
        if self.texture.is_none() {
            warn!("Picture::is_smooth called before an image was loaded");
            return false;
        }
        self.smooth
    }

    fn load_file(&mut self, ctx: &mut UpdateCtx<'_>, path: &Path) -> Result<(), TextureError> {
        match ctx.load_texture(path) {
            Ok(texture) => {
                debug!("Picture {} loaded {}", ctx.widget_id(), path.display());
                if !self.custom_size {
                    ctx.set_size(texture.size());
                }
                self.texture = Some(texture);
                self.filename = path.to_path_buf();
                Ok(())
            }
            Err(err) => {
                self.unload();
                ctx.set_size(Size::ZERO);
                Err(err)
            }
        }
    }

    fn unload(&mut self) {
        self.texture = None;
        self.filename = PathBuf::new();
        self.smooth = false;
        self.custom_size = false;
    }
}

// --- MARK: WIDGETMUT
impl Picture {
    /// Load an image, replacing the current one.
    ///
    /// The widget takes the size of the image. On failure, the picture is left
    /// without an image and with an empty size.
    pub fn load(this: &mut WidgetMut<'_, Self>, path: impl AsRef<Path>) -> Result<(), TextureError> {
        let path = path.as_ref();
        match this.ctx.load_texture(path) {
            Ok(texture) => {
                debug!("Picture {} loaded {}", this.ctx.widget_id(), path.display());
                this.ctx.set_size(texture.size());
                this.widget.texture = Some(texture);
                this.widget.filename = path.to_path_buf();
                this.widget.custom_size = false;
                Ok(())
            }
            Err(err) => {
                this.widget.unload();
                this.ctx.set_size(Size::ZERO);
                Err(err)
            }
        }
    }

    /// Choose whether the image is smoothed when it is stretched.
    ///
    /// Ignored when no image is loaded.
    pub fn set_smooth(this: &mut WidgetMut<'_, Self>, smooth: bool) {
        if this.widget.texture.is_none() {
            warn!("Picture::set_smooth called before an image was loaded");
            return;
        }
        this.widget.smooth = smooth;
    }
}

// --- MARK: IMPL WIDGET
impl Widget for Picture {
    fn on_pointer_event(&mut self, ctx: &mut EventCtx<'_>, event: &PointerEvent) {
        submit_click(ctx, event);
    }

    fn update(&mut self, ctx: &mut UpdateCtx<'_>, event: &Update) {
        if let Update::SizeChanged(_) = event {
            if self.texture.is_none() && !ctx.is_loading_widgets() {
                warn!(
                    "Picture {} was given a size before an image was loaded",
                    ctx.widget_id()
                );
            }
            self.custom_size = true;
        }
    }

    fn paint(&self, ctx: &PaintCtx<'_>, scene: &mut DrawList) {
        if let Some(texture) = &self.texture {
            let rect = Rect::from_origin_size(Point::ORIGIN, ctx.size());
            scene.texture(texture, rect, self.smooth);
        }
    }

    fn hit_test(&self, ctx: &QueryCtx<'_>, pos: Point) -> bool {
        let Some(texture) = &self.texture else {
            return false;
        };
        let size = ctx.size();
        if !Rect::from_origin_size(Point::ORIGIN, size).contains(pos) {
            return false;
        }
        let pixels = texture.size();
        let x = pos.x * pixels.width / size.width;
        let y = pos.y * pixels.height / size.height;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Position was checked to be inside the image."
        )]
        let (x, y) = (x as u32, y as u32);
        !texture.is_transparent_pixel(x, y)
    }

    fn set_property(
        &mut self,
        ctx: &mut UpdateCtx<'_>,
        name: &str,
        value: &str,
    ) -> Result<bool, PropertyError> {
        if names_match(name, "Filename") {
            let path = PathBuf::from(unquote_string(value)?);
            if let Err(err) = self.load_file(ctx, &path) {
                warn!("{err}");
                return Err(PropertyError::invalid("image file", value));
            }
        } else if names_match(name, "Smooth") {
            let smooth = parse_bool(value)?;
            if self.texture.is_some() {
                self.smooth = smooth;
            }
        } else {
            return Ok(false);
        }
        Ok(true)
    }

    fn get_property(&self, _ctx: &QueryCtx<'_>, name: &str) -> Option<String> {
        self.texture.as_ref()?;
        if names_match(name, "Filename") {
            Some(quote_string(&self.filename.to_string_lossy()))
        } else if names_match(name, "Smooth") {
            Some(format_bool(self.smooth))
        } else {
            None
        }
    }

    fn property_list(&self) -> Vec<(&'static str, PropertyKind)> {
        vec![("Filename", PropertyKind::Path), ("Smooth", PropertyKind::Bool)]
    }

    fn make_trace_span(&self, id: WidgetId) -> Span {
        trace_span!("Picture", id = id.trace())
    }

    fn get_debug_text(&self) -> Option<String> {
        Some(self.filename.display().to_string())
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use gable_core::app::GuiOptions;
    use gable_core::core::{DrawCommand, PointerButton};
    use gable_testing::TestHarness;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    use super::*;
    use crate::default_factory;
    use crate::theme::default_theme;
    use crate::widgets::Clicked;

    /// A 4x2 image whose right half is transparent.
    fn write_image(dir: &TempDir, name: &str) {
        let image = RgbaImage::from_fn(4, 2, |x, _| {
            if x < 2 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        image.save(dir.path().join(name)).unwrap();
    }

    fn harness(dir: &TempDir) -> TestHarness {
        let options = GuiOptions::default().with_resource_path(dir.path());
        TestHarness::create_with(default_theme(), default_factory(), options)
    }

    fn load(harness: &mut TestHarness, id: WidgetId, path: &str) -> Result<(), TextureError> {
        harness.edit_widget(id, |mut picture| {
            Picture::load(&mut picture.downcast(), path)
        })
    }

    #[test]
    fn load_sets_size() {
        let dir = tempfile::tempdir().unwrap();
        write_image(&dir, "image.png");
        let mut harness = harness(&dir);
        let id = harness.add(Picture::new(), "picture");
        assert_eq!(harness.get_widget(id).ctx().size(), Size::ZERO);

        load(&mut harness, id, "image.png").unwrap();
        let widget = harness.get_widget(id);
        assert_eq!(widget.ctx().size(), Size::new(4., 2.));
        assert_eq!(
            widget.get_property("Filename").as_deref(),
            Some("\"image.png\"")
        );
        assert!(widget.downcast::<Picture>().unwrap().is_loaded());
    }

    #[test]
    fn failed_load_unloads() {
        let dir = tempfile::tempdir().unwrap();
        write_image(&dir, "image.png");
        let mut harness = harness(&dir);
        let id = harness.add(Picture::new(), "picture");
        load(&mut harness, id, "image.png").unwrap();

        assert_matches!(
            load(&mut harness, id, "missing.png"),
            Err(TextureError::Image { .. })
        );
        let widget = harness.get_widget(id);
        assert!(!widget.downcast::<Picture>().unwrap().is_loaded());
        assert_eq!(widget.ctx().size(), Size::ZERO);
        assert_eq!(widget.get_property("Filename"), None);

        assert_matches!(load(&mut harness, id, ""), Err(TextureError::EmptyPath));
    }

    #[test]
    fn transparent_pixels_are_not_hit() {
        let dir = tempfile::tempdir().unwrap();
        write_image(&dir, "image.png");
        let mut harness = harness(&dir);
        let id = harness.add(Picture::new(), "picture");
        load(&mut harness, id, "image.png").unwrap();
        harness.edit_widget(id, |mut picture| picture.set_size(Size::new(40., 20.)));

        harness.mouse_move((10., 10.));
        assert_eq!(harness.hovered_widget(), Some(id));
        harness.mouse_move((30., 10.));
        assert_eq!(harness.hovered_widget(), None);
    }

    #[test]
    fn click_emits_action() {
        let dir = tempfile::tempdir().unwrap();
        write_image(&dir, "image.png");
        let mut harness = harness(&dir);
        let id = harness.add(Picture::new(), "picture");
        load(&mut harness, id, "image.png").unwrap();
        harness.edit_widget(id, |mut picture| picture.set_size(Size::new(40., 20.)));

        harness.mouse_move((5., 5.));
        harness.mouse_button_press(PointerButton::Left);
        harness.mouse_button_release(PointerButton::Left);
        assert_eq!(
            harness.pop_action::<Clicked>(),
            Some((Clicked { pos: Point::new(5., 5.) }, id))
        );
    }

    #[test]
    fn smooth_needs_an_image() {
        let dir = tempfile::tempdir().unwrap();
        write_image(&dir, "image.png");
        let mut harness = harness(&dir);
        let id = harness.add(Picture::new(), "picture");

        harness.edit_widget(id, |mut picture| {
            Picture::set_smooth(&mut picture.downcast(), true);
        });
        let picture = harness.get_widget(id);
        assert!(!picture.downcast::<Picture>().unwrap().is_smooth());

        load(&mut harness, id, "image.png").unwrap();
        harness.edit_widget(id, |mut picture| {
            Picture::set_smooth(&mut picture.downcast(), true);
        });
        let scene = harness.draw();
        assert!(scene.commands().iter().any(|command| matches!(
            command,
            DrawCommand::Texture { smooth: true, .. }
        )));
    }

    #[test]
    fn filename_property_keeps_explicit_size() {
        let dir = tempfile::tempdir().unwrap();
        write_image(&dir, "image.png");
        let mut harness = harness(&dir);
        let id = harness.add(Picture::new(), "picture");
        harness.edit_widget(id, |mut picture| picture.set_size(Size::new(8., 8.)));
        harness
            .gui_mut()
            .set_widget_property(id, "Filename", "\"image.png\"")
            .unwrap();
        assert_eq!(harness.get_widget(id).ctx().size(), Size::new(8., 8.));

        assert!(
            harness
                .gui_mut()
                .set_widget_property(id, "Filename", "\"nope.png\"")
                .is_err()
        );
    }

    #[test]
    fn loads_from_widget_file_with_saved_size() {
        let dir = tempfile::tempdir().unwrap();
        write_image(&dir, "image.png");
        let mut harness = harness(&dir);
        let id = harness.add(Picture::new(), "picture");
        load(&mut harness, id, "image.png").unwrap();
        harness.edit_widget(id, |mut picture| picture.set_size(Size::new(40., 20.)));
        let saved = harness.gui().save_widgets_to_string();

        // The saved size comes before the file name.
        let size = saved.find("Size").unwrap();
        assert!(size < saved.find("Filename").unwrap());

        let mut other = self::harness(&dir);
        other.gui_mut().load_widgets_from_str(&saved, false).unwrap();
        let loaded = other.gui().get("picture").unwrap();
        let widget = other.get_widget(loaded);
        assert!(widget.downcast::<Picture>().unwrap().is_loaded());
        assert_eq!(widget.ctx().size(), Size::new(40., 20.));
        assert_eq!(other.gui().save_widgets_to_string(), saved);
    }

    #[test]
    fn resource_path_can_change() {
        let dir = tempfile::tempdir().unwrap();
        write_image(&dir, "image.png");
        let mut harness = TestHarness::create(default_theme(), default_factory());
        let id = harness.add(Picture::new(), "picture");
        assert!(load(&mut harness, id, "image.png").is_err());

        harness.gui_mut().set_resource_path(dir.path());
        load(&mut harness, id, "image.png").unwrap();
    }
}
