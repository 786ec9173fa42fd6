// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! Texture loading and sharing.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Weak};

use hashbrown::HashMap;
use image::RgbaImage;
use kurbo::Size;
use tracing::{debug, trace};

/// An error which happened while loading a texture.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    /// The path was empty.
    #[error("cannot load a texture from an empty path")]
    EmptyPath,
    /// The file could not be opened or decoded.
    #[error("failed to load texture '{path}': {source}")]
    Image {
        /// The path which failed to load.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: image::ImageError,
    },
}

struct TextureData {
    path: PathBuf,
    pixels: RgbaImage,
}

/// A shared, immutable image.
///
/// Cloning a `Texture` is cheap: all clones share the same pixel data.
#[derive(Clone)]
pub struct Texture {
    data: Arc<TextureData>,
}

impl fmt::Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("path", &self.data.path)
            .field("width", &self.data.pixels.width())
            .field("height", &self.data.pixels.height())
            .finish()
    }
}

impl PartialEq for Texture {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl Texture {
    /// Create a texture from pixels which don't come from a file.
    ///
    /// Such textures are not shared through a [`TextureCache`].
    pub fn from_pixels(path: impl Into<PathBuf>, pixels: RgbaImage) -> Self {
        Self {
            data: Arc::new(TextureData {
                path: path.into(),
                pixels,
            }),
        }
    }

    /// The path this texture was loaded from.
    pub fn path(&self) -> &Path {
        &self.data.path
    }

    /// The size of the image, in pixels.
    pub fn size(&self) -> Size {
        Size::new(
            f64::from(self.data.pixels.width()),
            f64::from(self.data.pixels.height()),
        )
    }

    /// The decoded pixels.
    pub fn pixels(&self) -> &RgbaImage {
        &self.data.pixels
    }

    /// Returns `true` if the pixel at the given coordinates is fully transparent.
    ///
    /// Coordinates outside of the image count as transparent.
    pub fn is_transparent_pixel(&self, x: u32, y: u32) -> bool {
        match self.data.pixels.get_pixel_checked(x, y) {
            Some(pixel) => pixel.0[3] == 0,
            None => true,
        }
    }

    /// Number of live handles to this texture's pixel data.
    pub fn share_count(&self) -> usize {
        Arc::strong_count(&self.data)
    }
}

/// A cache of textures keyed by their resolved path.
///
/// The cache only keeps weak references: a texture is freed as soon as no widget
/// uses it any more, and loaded again from disk the next time it's requested.
#[derive(Default)]
pub struct TextureCache {
    entries: HashMap<PathBuf, Weak<TextureData>>,
}

impl fmt::Debug for TextureCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextureCache")
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl TextureCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the texture for `path`, loading it from disk if it isn't alive already.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<Texture, TextureError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(TextureError::EmptyPath);
        }

        if let Some(data) = self.entries.get(path).and_then(Weak::upgrade) {
            trace!("Reusing cached texture {}", path.display());
            return Ok(Texture { data });
        }

        let pixels = image::open(path)
            .map_err(|source| TextureError::Image {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();
        debug!(
            "Loaded texture {} ({}x{})",
            path.display(),
            pixels.width(),
            pixels.height()
        );

        let data = Arc::new(TextureData {
            path: path.to_path_buf(),
            pixels,
        });
        self.entries.insert(path.to_path_buf(), Arc::downgrade(&data));
        Ok(Texture { data })
    }

    /// Returns `true` if a live texture is cached for `path`.
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.entries
            .get(path.as_ref())
            .is_some_and(|entry| entry.strong_count() > 0)
    }

    /// Forget entries whose texture is no longer used.
    pub fn purge(&mut self) {
        self.entries.retain(|_, entry| entry.strong_count() > 0);
    }

    /// Number of entries, including ones which haven't been purged yet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    fn write_png(dir: &Path, name: &str) -> PathBuf {
        let mut image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        let path = dir.join(name);
        image.save(&path).unwrap();
        path
    }

    #[test]
    fn load_shares_pixel_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "red.png");

        let mut cache = TextureCache::new();
        let first = cache.load(&path).unwrap();
        let second = cache.load(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.share_count(), 2);
        assert_eq!(first.size(), Size::new(4., 2.));
        assert!(first.is_transparent_pixel(0, 0));
        assert!(!first.is_transparent_pixel(1, 0));
        assert!(first.is_transparent_pixel(10, 10));
    }

    #[test]
    fn unused_textures_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "red.png");

        let mut cache = TextureCache::new();
        let texture = cache.load(&path).unwrap();
        assert!(cache.contains(&path));

        drop(texture);
        assert!(!cache.contains(&path));
        cache.purge();
        assert!(cache.is_empty());
    }

    #[test]
    fn load_errors() {
        let mut cache = TextureCache::new();
        assert!(matches!(cache.load(""), Err(TextureError::EmptyPath)));
        assert!(matches!(
            cache.load("does/not/exist.png"),
            Err(TextureError::Image { .. })
        ));
        assert!(cache.is_empty());
    }
}
