//! # Allocator Configuration
//!
//! Loaded once at startup from TOML:
//!
//! ```toml
//! # 64 MiB arena, 0 selects the 20 MiB default
//! capacity_bytes = 67108864
//! default_alignment = 16
//! ```
//!
//! Both keys are optional. The descriptor table size is fixed at compile time
//! and cannot be configured.

use std::path::{Path, PathBuf};

use pooled_malloc_core::{DEFAULT_ALIGNMENT, DEFAULT_CAPACITY};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has the wrong shape.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// `default_alignment` is not a power of two.
    #[error("default_alignment {0} is not a power of two")]
    InvalidAlignment(usize),
}

/// Sizing of a pooled allocator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocatorConfig {
    /// Arena size in bytes. `0` means [`DEFAULT_CAPACITY`].
    pub capacity_bytes: usize,
    /// Alignment applied when a caller passes `0`.
    pub default_alignment: usize,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            capacity_bytes: DEFAULT_CAPACITY,
            default_alignment: DEFAULT_ALIGNMENT,
        }
    }
}

impl AllocatorConfig {
    /// Creates a config with the given capacity and the default alignment.
    #[must_use]
    pub fn with_capacity(capacity_bytes: usize) -> Self {
        Self {
            capacity_bytes,
            ..Self::default()
        }
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed TOML, [`ConfigError::InvalidAlignment`]
    /// for a bad alignment.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`AllocatorConfig::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Checks the alignment.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidAlignment`] if `default_alignment` is not a power
    /// of two.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_alignment.is_power_of_two() {
            Ok(())
        } else {
            Err(ConfigError::InvalidAlignment(self.default_alignment))
        }
    }

    /// Capacity the arena will actually have.
    #[inline]
    #[must_use]
    pub const fn effective_capacity(&self) -> usize {
        if self.capacity_bytes == 0 {
            DEFAULT_CAPACITY
        } else {
            self.capacity_bytes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AllocatorConfig::default();
        assert_eq!(config.capacity_bytes, 20 * 1024 * 1024);
        assert_eq!(config.default_alignment, 16);
    }

    #[test]
    fn test_parse_full() {
        let config = AllocatorConfig::from_toml_str(
            "capacity_bytes = 4096\ndefault_alignment = 64\n",
        )
        .unwrap();
        assert_eq!(config.capacity_bytes, 4096);
        assert_eq!(config.default_alignment, 64);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = AllocatorConfig::from_toml_str("capacity_bytes = 2048").unwrap();
        assert_eq!(config.default_alignment, 16);
        assert_eq!(AllocatorConfig::from_toml_str("").unwrap(), AllocatorConfig::default());
    }

    #[test]
    fn test_zero_capacity_means_default() {
        let config = AllocatorConfig::from_toml_str("capacity_bytes = 0").unwrap();
        assert_eq!(config.effective_capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_rejects_bad_alignment() {
        assert!(matches!(
            AllocatorConfig::from_toml_str("default_alignment = 24"),
            Err(ConfigError::InvalidAlignment(24))
        ));
        assert!(matches!(
            AllocatorConfig::from_toml_str("default_alignment = 0"),
            Err(ConfigError::InvalidAlignment(0))
        ));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(matches!(
            AllocatorConfig::from_toml_str("capacity_bytes = \"lots\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = AllocatorConfig::from_toml_file("/nonexistent/pooled_malloc.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_round_trip_through_file() {
        let id = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path = std::env::temp_dir().join(format!("pooled_malloc_{id}.toml"));
        let config = AllocatorConfig {
            capacity_bytes: 1 << 20,
            default_alignment: 32,
        };
        std::fs::write(&path, toml::to_string(&config).unwrap()).unwrap();

        assert_eq!(AllocatorConfig::from_toml_file(&path).unwrap(), config);
        std::fs::remove_file(&path).ok();
    }
}
