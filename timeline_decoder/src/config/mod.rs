//! Decoder configuration, loadable from TOML.
//!
//! ```toml
//! parallel_frames = true
//! parallel_threshold = 8
//! strict_participant_keys = false
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Configuration for [`crate::TimelineDecoder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Decode frames on the rayon pool. Output order is preserved either way.
    pub parallel_frames: bool,

    /// Minimum number of frames before the parallel path is taken.
    pub parallel_threshold: usize,

    /// Fail on participant-frame keys that are not integers, or that collide
    /// once parsed (`"1"` and `"01"`). When off, such keys are skipped with a
    /// warning and the first entry for an id wins.
    pub strict_participant_keys: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            parallel_frames: true,
            parallel_threshold: 8,
            strict_participant_keys: false,
        }
    }
}

impl DecoderConfig {
    /// Parse a config from TOML text. Keys that are left out keep their
    /// default value.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_toml_str(&contents)
    }

    /// Whether a timeline with `frame_count` frames takes the parallel path.
    pub fn use_parallel(&self, frame_count: usize) -> bool {
        self.parallel_frames && frame_count >= self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = DecoderConfig::default();
        assert!(config.parallel_frames);
        assert_eq!(config.parallel_threshold, 8);
        assert!(!config.strict_participant_keys);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = DecoderConfig::from_toml_str("strict_participant_keys = true").unwrap();

        assert!(config.strict_participant_keys);
        assert!(config.parallel_frames);
        assert_eq!(config.parallel_threshold, 8);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = DecoderConfig::from_toml_str("parallel_threshold = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "parallel_frames = false").unwrap();
        writeln!(file, "parallel_threshold = 2").unwrap();

        let config = DecoderConfig::load(file.path()).unwrap();

        assert!(!config.parallel_frames);
        assert_eq!(config.parallel_threshold, 2);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = DecoderConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_use_parallel() {
        let config = DecoderConfig::default();
        assert!(!config.use_parallel(3));
        assert!(config.use_parallel(8));

        let serial = DecoderConfig {
            parallel_frames: false,
            ..Default::default()
        };
        assert!(!serial.use_parallel(1000));
    }
}
