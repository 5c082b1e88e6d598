//! Image files as pixel sources

use crate::error::IoError;
use image::{DynamicImage, RgbaImage};
use paintcloud_core::{PixelBuffer, PixelSource, Result, CHANNELS};
use std::path::Path;

/// A decoded raster that hands out RGBA regions like a canvas pixel read
#[derive(Debug, Clone)]
pub struct ImagePixelSource {
    image: RgbaImage,
}

impl ImagePixelSource {
    /// Decode an image file (PNG or JPEG)
    pub fn open<P: AsRef<Path>>(path: P) -> std::result::Result<Self, IoError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        match path.extension().and_then(|s| s.to_str()).map(|s| s.to_ascii_lowercase()) {
            Some(ext) if matches!(ext.as_str(), "png" | "jpg" | "jpeg") => {}
            other => {
                return Err(IoError::UnsupportedFormat {
                    format: other.unwrap_or_else(|| "<none>".to_string()),
                })
            }
        }

        let image = image::open(path)?;
        tracing::debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "Decoded raster"
        );
        Ok(Self::from_image(image))
    }

    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            image: image.into_rgba8(),
        }
    }

    pub fn from_rgba(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> usize {
        self.image.width() as usize
    }

    pub fn height(&self) -> usize {
        self.image.height() as usize
    }

    /// The whole raster as one buffer
    pub fn to_pixel_buffer(&self) -> PixelBuffer {
        PixelBuffer::from_raw(self.width(), self.height(), self.image.as_raw().clone())
    }
}

impl PixelSource for ImagePixelSource {
    fn pixel_buffer(&self, x: usize, y: usize, width: usize, height: usize) -> Result<PixelBuffer> {
        let mut data = vec![0u8; width * height * CHANNELS];

        let cols = self.width().saturating_sub(x).min(width);
        let rows = self.height().saturating_sub(y).min(height);
        if cols == 0 || rows == 0 {
            return Ok(PixelBuffer::from_raw(width, height, data));
        }
        let stride = self.width() * CHANNELS;
        let raw = self.image.as_raw();

        for row in 0..rows {
            let src = (y + row) * stride + x * CHANNELS;
            let dst = row * width * CHANNELS;
            let len = cols * CHANNELS;
            data[dst..dst + len].copy_from_slice(&raw[src..src + len]);
        }

        Ok(PixelBuffer::from_raw(width, height, data))
    }
}

/// Decode `path` and read its top-left `width x height` region
pub fn read_pixel_buffer<P: AsRef<Path>>(
    path: P,
    width: usize,
    height: usize,
) -> Result<PixelBuffer> {
    let source = ImagePixelSource::open(path)?;
    source.pixel_buffer(0, 0, width, height)
}
