//! # Paintcloud Reconstruction
//!
//! Turns a painting and its depth map into scene geometry.
//!
//! - [`depth_mesh`]: per-pixel triangle soup with depth-derived z and
//!   painting colors
//! - [`bounding_grid`]: translucent reference lines framing the volume
//! - [`pipeline`]: both of the above with the configured sampling size and
//!   rotation applied

pub mod depth_mesh;
pub mod bounding_grid;
pub mod pipeline;

// Re-export commonly used items
pub use depth_mesh::*;
pub use bounding_grid::*;
pub use pipeline::*;
