//! Raster pixel buffers shared by the depth map and the painting

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Number of channels per pixel (red, green, blue, alpha)
pub const CHANNELS: usize = 4;

/// Width and height of a raster in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of pixels covered by these dimensions
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Number of channel values a buffer needs to be fully addressable
    pub fn required_len(&self) -> usize {
        self.pixel_count() * CHANNELS
    }
}

/// Flat RGBA channel data, row-major with the origin at the top-left.
///
/// A buffer is captured once from a rasterized source and never mutated
/// afterwards. Construction through [`PixelBuffer::from_raw`] does not check
/// the data length against the dimensions; use [`PixelBuffer::validate`] or
/// [`PixelBuffer::from_raw_checked`] when that matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelBuffer {
    dimensions: Dimensions,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw channel data without validating its length
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            dimensions: Dimensions::new(width, height),
            data,
        }
    }

    /// Wrap raw channel data, rejecting buffers too short for `width x height`
    pub fn from_raw_checked(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let buffer = Self::from_raw(width, height, data);
        buffer.validate()?;
        Ok(buffer)
    }

    /// Create a buffer where every pixel holds the same RGBA value
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Self {
        let data = rgba
            .iter()
            .copied()
            .cycle()
            .take(width * height * CHANNELS)
            .collect();
        Self::from_raw(width, height, data)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn width(&self) -> usize {
        self.dimensions.width
    }

    pub fn height(&self) -> usize {
        self.dimensions.height
    }

    /// Raw channel values
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Number of channel values held
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read one channel value; reads past the end yield 0
    #[inline]
    pub fn channel(&self, idx: usize) -> u8 {
        self.data.get(idx).copied().unwrap_or(0)
    }

    /// Read the RGBA value starting at channel offset `idx`
    pub fn rgba_at(&self, idx: usize) -> [u8; 4] {
        [
            self.channel(idx),
            self.channel(idx + 1),
            self.channel(idx + 2),
            self.channel(idx + 3),
        ]
    }

    /// Channel offset of the pixel at column `x`, row `y`
    pub fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.dimensions.width + x) * CHANNELS
    }

    /// RGBA value of the pixel at column `x`, row `y`
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        self.rgba_at(self.offset(x, y))
    }

    /// Whether the buffer can be addressed at every pixel of `dimensions`
    pub fn covers(&self, dimensions: Dimensions) -> bool {
        self.data.len() >= dimensions.required_len()
    }

    /// Check the data length against the buffer's own dimensions
    pub fn validate(&self) -> Result<()> {
        if self.covers(self.dimensions) {
            Ok(())
        } else {
            Err(Error::InvalidInput(format!(
                "pixel buffer holds {} channel values, {}x{} needs {}",
                self.data.len(),
                self.dimensions.width,
                self.dimensions.height,
                self.dimensions.required_len()
            )))
        }
    }
}
