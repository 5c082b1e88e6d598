//! Core data structures and traits for paintcloud
//!
//! This crate provides the shared vocabulary of the workspace: RGBA pixel
//! buffers, the per-pixel point cloud mesh, bounding grid primitives, the
//! scene layout configuration, and the traits through which pixel sources
//! and scene graphs plug in.

pub mod pixel;
pub mod vertex;
pub mod mesh;
pub mod grid;
pub mod config;
pub mod traits;
pub mod transform;
pub mod error;

pub use pixel::*;
pub use vertex::*;
pub use mesh::*;
pub use grid::*;
pub use config::*;
pub use traits::*;
pub use transform::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3, Matrix4, UnitQuaternion};
