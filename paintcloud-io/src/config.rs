//! Scene configuration files

use crate::error::IoError;
use paintcloud_core::{Result, SceneConfig};
use std::path::Path;

/// Parse a JSON scene configuration; absent fields keep their defaults
pub fn parse_config(json: &str) -> Result<SceneConfig> {
    let config: SceneConfig = serde_json::from_str(json).map_err(IoError::from)?;
    config.validate()?;
    Ok(config)
}

/// Read and validate a JSON scene configuration file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SceneConfig> {
    let path = path.as_ref();
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => {}
        other => {
            return Err(IoError::UnsupportedFormat {
                format: other.unwrap_or("<none>").to_string(),
            }
            .into())
        }
    }

    let json = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => IoError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => IoError::Io(e),
    })?;
    let config = parse_config(&json)?;
    tracing::debug!(path = %path.display(), "Loaded scene config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use paintcloud_core::Error;
    use std::fs;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let json = r#"{ "rotation_y": 0.25, "translate": { "x": 0, "y": 0, "z": 0 } }"#;
        let config = parse_config(json).unwrap();
        assert_eq!(config.rotation_y, 0.25);
        assert_eq!(config.translate.z, 0.0);
        assert_eq!(config.grid_interval, 10);
        assert_eq!(config.line_color, 0x555555);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(parse_config("{}").unwrap(), SceneConfig::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(parse_config(r#"{ "grid_interval": 0 }"#), Err(Error::Config(_))));
        assert!(matches!(parse_config("not json"), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_config_file() {
        let temp_file = "test_scene_config.json";
        fs::write(temp_file, r#"{ "point_cloud_width": 256, "point_cloud_height": 128 }"#).unwrap();

        let config = load_config(temp_file).unwrap();
        assert_eq!(config.point_cloud_width, 256);
        assert_eq!(config.point_cloud_height, 128);

        // Cleanup
        let _ = fs::remove_file(temp_file);
    }

    #[test]
    fn test_load_config_errors() {
        assert!(matches!(load_config("scene.toml"), Err(Error::Unsupported(_))));
        assert!(matches!(load_config("missing_scene.json"), Err(Error::InvalidData(_))));
    }
}
