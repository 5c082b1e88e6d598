//! I/O operations for paintcloud
//!
//! This crate loads the inputs of a reconstruction: painting and depth map
//! rasters (PNG, JPEG) exposed as [`PixelSource`]s, and JSON scene
//! configuration files.

pub mod raster;
pub mod config;
pub mod error;

pub use error::*;
pub use raster::{read_pixel_buffer, ImagePixelSource};
pub use config::{load_config, parse_config};

use paintcloud_core::{PixelSource, Result};
use std::path::Path;

/// A painting paired with its depth map
pub struct PaintingSources {
    pub painting: ImagePixelSource,
    pub depth_map: ImagePixelSource,
}

impl PaintingSources {
    /// Open both rasters, warning when their sizes disagree
    pub fn open<P: AsRef<Path>, Q: AsRef<Path>>(painting: P, depth_map: Q) -> Result<Self> {
        let painting = ImagePixelSource::open(painting)?;
        let depth_map = ImagePixelSource::open(depth_map)?;

        if painting.width() != depth_map.width() || painting.height() != depth_map.height() {
            tracing::warn!(
                painting_width = painting.width(),
                painting_height = painting.height(),
                depth_width = depth_map.width(),
                depth_height = depth_map.height(),
                "Painting and depth map sizes differ; pixels are paired by index"
            );
        }

        Ok(Self { painting, depth_map })
    }

    pub fn painting(&self) -> &dyn PixelSource {
        &self.painting
    }

    pub fn depth_map(&self) -> &dyn PixelSource {
        &self.depth_map
    }
}
