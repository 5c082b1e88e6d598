//! Visualization for reconstructed paintings
//!
//! This crate drives a scene graph through the [`GeometrySink`] capability
//! rather than owning a renderer:
//! - [`PointCloudViewer`]: camera setup, grid installation, mesh reloads and
//!   render-on-demand bookkeeping
//! - [`Camera`] with focal-length based field of view
//! - [`OrbitControls`] for rotate, zoom and pan input
//! - [`Scene`], an in-memory sink that records installed geometry
//!
//! [`GeometrySink`]: paintcloud_core::GeometrySink

pub mod viewer;
pub mod camera;
pub mod controls;
pub mod scene;

pub use viewer::*;
pub use camera::*;
pub use controls::*;
pub use scene::*;
