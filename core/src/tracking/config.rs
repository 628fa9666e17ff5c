//! Configuration loading for flagday definitions
//!
//! Definitions live in a single TOML file of `[[flagday]]` tables. A
//! malformed record fails the whole load; there is no partial load of the
//! good records alongside the bad ones.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::definitions::FlagdayConfig;

/// Load and validate a flagday config file
pub fn load_file(path: &Path) -> Result<FlagdayConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: FlagdayConfig =
        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

    validate(&config)?;
    Ok(config)
}

/// Parse and validate config from a TOML string
pub fn load_str(contents: &str) -> Result<FlagdayConfig, ConfigError> {
    let config: FlagdayConfig =
        toml::from_str(contents).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            source: e,
        })?;

    validate(&config)?;
    Ok(config)
}

/// Save a config to a TOML file
pub fn save_file(path: &Path, config: &FlagdayConfig) -> Result<(), ConfigError> {
    let contents =
        toml::to_string_pretty(config).map_err(|e| ConfigError::Serialize {
            path: path.to_path_buf(),
            source: e,
        })?;

    fs::write(path, contents).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Reject configs with unusable records.
///
/// Serde already guarantees each record has a name and a parsable date;
/// this layer rejects names that slug down to nothing and identity
/// collisions between records.
pub fn validate(config: &FlagdayConfig) -> Result<(), ConfigError> {
    let mut seen: HashSet<String> = HashSet::new();

    for (index, definition) in config.flagdays.iter().enumerate() {
        if flagdays_types::identity::slugify(&definition.name).is_empty() {
            return Err(ConfigError::EmptyName { index });
        }

        let unique_id = definition.unique_id();
        if !seen.insert(unique_id.clone()) {
            return Err(ConfigError::DuplicateEntity { unique_id });
        }
    }

    Ok(())
}

/// Default config file location: `<config_dir>/flagdays/flagdays.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("flagdays").join("flagdays.toml"))
}

/// Errors that can occur during config loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("serialize error for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: toml::ser::Error,
    },

    #[error("flagday record #{index} has a name with no usable characters")]
    EmptyName { index: usize },

    #[error("duplicate flagday entity {unique_id}")]
    DuplicateEntity { unique_id: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::definitions::DEFAULT_ICON;

    #[test]
    fn test_parse_flagday_toml() {
        let toml = r#"
[[flagday]]
name = "Founding Day"
date_of_flag = "1990-03-15"
icon = "mdi:flag"

[[flagday]]
name = "Liberation Day"
date_of_flag = "1945-05-08"
"#;

        let config = load_str(toml).unwrap();
        assert_eq!(config.flagdays.len(), 2);
        assert_eq!(config.flagdays[0].name, "Founding Day");
        assert_eq!(config.flagdays[0].icon, "mdi:flag");
        assert_eq!(config.flagdays[0].month(), 3);
        assert_eq!(config.flagdays[0].day(), 15);
        // Input order is preserved
        assert_eq!(config.flagdays[1].name, "Liberation Day");
        // Icon falls back to the default
        assert_eq!(config.flagdays[1].icon, DEFAULT_ICON);
        assert!(config.flagdays[1].enabled);
    }

    #[test]
    fn test_missing_name_fails_load() {
        let toml = r#"
[[flagday]]
date_of_flag = "1990-03-15"
"#;
        assert!(matches!(load_str(toml), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_unparsable_date_fails_load() {
        let toml = r#"
[[flagday]]
name = "Bad Date"
date_of_flag = "1990-13-40"
"#;
        assert!(matches!(load_str(toml), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_wrong_type_fails_load() {
        let toml = r#"
[[flagday]]
name = 42
date_of_flag = "1990-03-15"
"#;
        assert!(matches!(load_str(toml), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_blank_name_fails_validation() {
        let toml = r#"
[[flagday]]
name = "  --  "
date_of_flag = "1990-03-15"
"#;
        assert!(matches!(
            load_str(toml),
            Err(ConfigError::EmptyName { index: 0 })
        ));
    }

    #[test]
    fn test_one_bad_record_fails_the_whole_load() {
        let toml = r#"
[[flagday]]
name = "Good"
date_of_flag = "1990-03-15"

[[flagday]]
name = ""
date_of_flag = "2000-01-01"
"#;
        assert!(matches!(
            load_str(toml),
            Err(ConfigError::EmptyName { index: 1 })
        ));
    }

    #[test]
    fn test_duplicate_identity_fails_validation() {
        let toml = r#"
[[flagday]]
name = "Founding Day"
date_of_flag = "1990-03-15"

[[flagday]]
name = "Founding Day"
date_of_flag = "1971-03-15"
"#;
        let err = load_str(toml).unwrap_err();
        match err {
            ConfigError::DuplicateEntity { unique_id } => {
                assert_eq!(unique_id, "flagday.founding_day.0315");
            }
            other => panic!("expected DuplicateEntity, got {other:?}"),
        }
    }

    #[test]
    fn test_same_name_different_date_is_allowed() {
        let toml = r#"
[[flagday]]
name = "Founding Day"
date_of_flag = "1990-03-15"

[[flagday]]
name = "Founding Day"
date_of_flag = "1990-10-02"
"#;
        let config = load_str(toml).unwrap();
        assert_eq!(config.flagdays.len(), 2);
    }
}
