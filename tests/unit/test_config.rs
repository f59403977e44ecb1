//! Unit tests for the config module
//!
//! Tests cover:
//! - Config defaults
//! - Loading from an explicit TOML file
//! - Validation failures
//! - Building a ring buffer from config

use linear_collections::config::{Config, LoggingConfig, RingConfig};
use linear_collections::RingBuffer;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Default Tests
// ============================================================================

mod default_tests {
    use super::*;

    #[test]
    fn test_ring_default_capacity_matches_constructor_default() {
        let ring: RingBuffer<i32> = RingBuffer::default();
        assert_eq!(RingConfig::default().initial_capacity, ring.capacity());
    }

    #[test]
    fn test_logging_default_filter() {
        assert_eq!(LoggingConfig::default().filter, "warn");
    }
}

// ============================================================================
// Loading Tests
// ============================================================================

mod loading_tests {
    use super::*;

    #[test]
    fn test_load_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("collections.toml");
        fs::write(
            &path,
            "[ring]\ninitial_capacity = 0\n\n[logging]\nfilter = \"linear_collections=trace\"\n",
        )
        .unwrap();

        let config = Config::load(path.to_str()).unwrap();
        assert_eq!(config.ring.initial_capacity, 0);
        assert_eq!(config.logging.filter, "linear_collections=trace");

        let mut ring = RingBuffer::from_config(&config.ring);
        ring.prepend(1);
        assert_eq!(ring.capacity(), 2);
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("collections.toml");
        fs::write(&path, "[logging]\nfilter = \"info\"\n").unwrap();

        let config = Config::load(path.to_str()).unwrap();
        assert_eq!(config.ring, RingConfig::default());
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("collections.toml");
        fs::write(&path, "[ring]\ninitial_capacity = \"many\"\n").unwrap();

        let err = Config::load(path.to_str()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_load_negative_capacity_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("collections.toml");
        fs::write(&path, "[ring]\ninitial_capacity = -1\n").unwrap();

        assert!(Config::load(path.to_str()).is_err());
    }

    #[test]
    fn test_load_empty_filter_fails_validation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("collections.toml");
        fs::write(&path, "[logging]\nfilter = \"\"\n").unwrap();

        let err = Config::load(path.to_str()).unwrap_err();
        assert!(err.to_string().contains("logging.filter"));
    }

    #[test]
    fn test_toml_roundtrip_of_defaults() {
        let config = Config::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
