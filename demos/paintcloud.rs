//! paintcloud - reconstruct a painting as a point cloud from its depth map
//!
//! Loads the painting and its depth map, builds the point cloud mesh and the
//! bounding grid into an in-memory scene, and prints a summary of the result.
//!
//! Usage: cargo run --bin paintcloud -- <painting> <depth-map> [--config scene.json]

use anyhow::{Context, Result};
use clap::Parser;
use paintcloud_core::{Drawable, SceneConfig};
use paintcloud_io::{load_config, PaintingSources};
use paintcloud_visualization::{PointCloudViewer, Scene};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "paintcloud")]
#[command(
    about = "Reconstruct a painting as a 3D point cloud from its depth map",
    long_about = None
)]
struct Cli {
    /// The painting (PNG or JPEG)
    painting: PathBuf,

    /// Depth map aligned pixel for pixel with the painting
    depth_map: PathBuf,

    /// JSON scene configuration; missing fields keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pixel rows to sample (defaults to the configured point cloud width)
    #[arg(long)]
    width: Option<usize>,

    /// Pixel columns to sample (defaults to the configured point cloud height)
    #[arg(long)]
    height: Option<usize>,

    /// Rotation of the cloud about the vertical axis, in radians
    #[arg(long)]
    rotation_y: Option<f32>,

    /// Viewport size as WIDTHxHEIGHT
    #[arg(long, default_value = "800x600", value_parser = parse_viewport)]
    viewport: (u32, u32),

    /// Disable orbit rotation
    #[arg(long)]
    no_rotate: bool,
}

fn parse_viewport(s: &str) -> std::result::Result<(u32, u32), String> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s}"))?;
    let w = w.parse().map_err(|e| format!("bad viewport width: {e}"))?;
    let h = h.parse().map_err(|e| format!("bad viewport height: {e}"))?;
    Ok((w, h))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SceneConfig::default(),
    };
    if let Some(width) = cli.width {
        config.point_cloud_width = width;
    }
    if let Some(height) = cli.height {
        config.point_cloud_height = height;
    }
    if let Some(rotation_y) = cli.rotation_y {
        config.rotation_y = rotation_y;
    }
    tracing::debug!(?config, "Scene configuration");

    let sources = PaintingSources::open(&cli.painting, &cli.depth_map).with_context(|| {
        format!(
            "Failed to open {} and {}",
            cli.painting.display(),
            cli.depth_map.display()
        )
    })?;

    let (viewport_width, viewport_height) = cli.viewport;
    let mut viewer = PointCloudViewer::new(
        Scene::new(),
        viewport_width,
        viewport_height,
        !cli.no_rotate,
        config,
    )
    .context("Invalid scene configuration")?;

    viewer
        .load_point_cloud(sources.painting(), sources.depth_map())
        .context("Failed to reconstruct point cloud")?;

    let scene = viewer.sink();
    let camera = viewer.camera();

    println!("paintcloud");
    println!("==========");
    println!("Painting:   {}", cli.painting.display());
    println!("Depth map:  {}", cli.depth_map.display());
    println!(
        "Sampled:    {}x{} pixels",
        viewer.config().point_cloud_width,
        viewer.config().point_cloud_height
    );
    println!("Vertices:   {}", scene.vertex_count());
    println!("Grid lines: {}", scene.lines().len());

    if let Some(node) = scene.meshes().first() {
        let (min, max) = node.mesh.bounding_box();
        println!(
            "Mesh bounds: ({:.1}, {:.1}, {:.1}) - ({:.1}, {:.1}, {:.1})",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
    }
    if let Some((min, max)) = scene.bounding_box() {
        println!(
            "Scene bounds: ({:.1}, {:.1}, {:.1}) - ({:.1}, {:.1}, {:.1})",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
    }
    println!(
        "Camera: at ({:.1}, {:.1}, {:.1}), focal length {:.1}mm, fov {:.1} deg",
        camera.position.x,
        camera.position.y,
        camera.position.z,
        camera.focal_length(),
        camera.fov.to_degrees()
    );

    Ok(())
}
