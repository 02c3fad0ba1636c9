// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Observation and config file deserialization.
//!
//! Observations are always JSON, whatever their extension. Viewer
//! configs are read as YAML or JSON depending on the file extension.

use crate::config::ViewerConfig;
use crate::error::{ObservationError, Result};
use crate::models::observation::Observation;
use std::path::Path;

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ObservationError::FileNotFound(path.to_path_buf()),
        _ => ObservationError::parse(path, e.to_string()),
    })
}

/// Parse observation JSON. `path` is only used for error reporting.
pub fn parse_observation(json: &str, path: &Path) -> Result<Observation> {
    serde_json::from_str(json).map_err(|e| ObservationError::parse(path, e.to_string()))
}

/// Import an observation document from JSON.
pub fn import_observation(path: &Path) -> Result<Observation> {
    let json = read_file(path)?;
    parse_observation(&json, path)
}

/// Import viewer config from YAML (`.yaml`, `.yml`) or JSON (`.json`).
pub fn import_config(path: &Path) -> Result<ViewerConfig> {
    let config_error = |message: String| ObservationError::Config {
        path: path.to_path_buf(),
        message,
    };

    let extension = path.extension().and_then(|s| s.to_str());
    let text = read_file(path)?;
    match extension {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&text).map_err(|e| config_error(e.to_string()))
        }
        Some("json") => serde_json::from_str(&text).map_err(|e| config_error(e.to_string())),
        _ => Err(config_error(format!(
            "unsupported config extension: {:?}",
            extension
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::timeline::TimestampUnit;
    use std::io::Write;

    const OBSERVATION: &str = r#"{
        "file_path": "/data/session.mp4",
        "objects": [{
            "actions": [{
                "desc": "blink",
                "roi": {"x": 0.1, "y": 0.1, "width": 0.2, "height": 0.2},
                "feeds": [
                    {"timestamp": 0, "rotation": {"pitch": 1, "yaw": 2, "roll": 3},
                     "tracked_positions": [[0.4, 0.5]]}
                ]
            }]
        }]
    }"#;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_import_observation() {
        let file = write_temp(".txt", OBSERVATION);
        let observation = import_observation(file.path()).unwrap();
        assert_eq!(observation.file_path, "/data/session.mp4");
        assert_eq!(observation.objects[0].actions[0].desc, "blink");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = import_observation(Path::new("/nonexistent/observation.json"));
        assert!(matches!(result, Err(ObservationError::FileNotFound(_))));
    }

    #[test]
    fn test_missing_actions_is_parse_error() {
        let json = r#"{"file_path": "a.mp4", "objects": [{"name": "face"}]}"#;
        match parse_observation(json, Path::new("obs.json")) {
            Err(ObservationError::Parse { message, .. }) => assert!(message.contains("actions")),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_path_is_parse_error() {
        let json = r#"{"objects": []}"#;
        let err = parse_observation(json, Path::new("obs.json")).unwrap_err();
        assert!(err.to_string().contains("file_path"));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let file = write_temp(".json", "{ not json");
        assert!(matches!(
            import_observation(file.path()),
            Err(ObservationError::Parse { .. })
        ));
    }

    #[test]
    fn test_import_yaml_config() {
        let file = write_temp(
            ".yaml",
            "window_size: [640, 480]\nobservation_path: obs.json\ninitial_action: 2\ntimestamp_unit: seconds\n",
        );
        let config = import_config(file.path()).unwrap();
        assert_eq!(config.window_size, [640.0, 480.0]);
        assert_eq!(config.initial_action, 2);
        assert_eq!(config.timestamp_unit, TimestampUnit::Seconds);
        assert!(config.show_rotation_plot);
    }

    #[test]
    fn test_import_json_config() {
        let file = write_temp(".json", r#"{"mode": "display", "reference_path": "ref.png"}"#);
        let config = import_config(file.path()).unwrap();
        assert_eq!(config.mode, crate::config::ViewMode::Display);
        assert_eq!(config.timestamp_unit, TimestampUnit::Milliseconds);
    }

    #[test]
    fn test_unsupported_config_extension() {
        let file = write_temp(".toml", "mode = 'play'");
        assert!(matches!(
            import_config(file.path()),
            Err(ObservationError::Config { .. })
        ));
    }
}
