//! Application configuration.
//!
//! Settings are read from an optional TOML file; every key has a compiled
//! default, so a missing section or key falls back silently. The binary
//! layers `--log` / `JOIN_BOARD_LOG` on top of `[logging] filter`.
//!
//! ```toml
//! [collections]
//! tasks = "tasks"
//! contacts = "contacts"
//!
//! [contacts]
//! limit = 15
//!
//! [form]
//! title_min_len = 3
//! title_max_len = 100
//! subtask_rule = "any-but-one"
//!
//! [logging]
//! filter = "info"
//! ```

use crate::store::{CollectionName, StoreError};
use crate::task::domain::{FormRules, SubtaskRule, TitleRules};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// A collection name is blank.
    #[error("invalid collection name: {0}")]
    Collection(#[from] StoreError),

    /// The contact listing limit is zero.
    #[error("contacts.limit must be at least 1")]
    ZeroContactLimit,

    /// The title length bounds are empty or inverted.
    #[error("form title bounds {min}..={max} are invalid")]
    TitleBounds {
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
    },
}

/// `[collections]` section: document collection names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CollectionsConfig {
    /// Task collection.
    pub tasks: String,
    /// Contact collection.
    pub contacts: String,
}

impl Default for CollectionsConfig {
    fn default() -> Self {
        Self {
            tasks: CollectionName::TASKS.to_owned(),
            contacts: CollectionName::CONTACTS.to_owned(),
        }
    }
}

/// `[contacts]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactsConfig {
    /// Maximum number of contacts listed.
    pub limit: usize,
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self { limit: 15 }
    }
}

/// `[form]` section: task form rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Minimum title length in characters.
    pub title_min_len: usize,
    /// Maximum title length in characters.
    pub title_max_len: usize,
    /// Accepted subtask counts.
    pub subtask_rule: SubtaskRule,
}

impl Default for FormConfig {
    fn default() -> Self {
        let title = TitleRules::default();
        Self {
            title_min_len: title.min_len,
            title_max_len: title.max_len,
            subtask_rule: SubtaskRule::default(),
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `info` or `join_board=debug`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
        }
    }
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Collection names.
    pub collections: CollectionsConfig,
    /// Contact listing.
    pub contacts: ContactsConfig,
    /// Task form rules.
    pub form: FormConfig,
    /// Logging.
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Parses and validates TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseToml`] for malformed TOML and the
    /// validation errors of [`AppConfig::validate`].
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`, or the defaults when no path is
    /// given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadFile`] when the file cannot be read, plus
    /// the errors of [`AppConfig::from_toml_str`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(file) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(file).map_err(|source| ConfigError::ReadFile {
            path: file.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Collection`] for blank collection names,
    /// [`ConfigError::ZeroContactLimit`] and [`ConfigError::TitleBounds`]
    /// when `title_min_len` is zero or exceeds `title_max_len`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.task_collection()?;
        self.contact_collection()?;
        if self.contacts.limit == 0 {
            return Err(ConfigError::ZeroContactLimit);
        }
        let FormConfig {
            title_min_len: min,
            title_max_len: max,
            ..
        } = self.form;
        if min == 0 || min > max {
            return Err(ConfigError::TitleBounds { min, max });
        }
        Ok(())
    }

    /// Returns the task collection name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Collection`] when the name is blank.
    pub fn task_collection(&self) -> Result<CollectionName, ConfigError> {
        Ok(CollectionName::new(self.collections.tasks.as_str())?)
    }

    /// Returns the contact collection name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Collection`] when the name is blank.
    pub fn contact_collection(&self) -> Result<CollectionName, ConfigError> {
        Ok(CollectionName::new(self.collections.contacts.as_str())?)
    }

    /// Returns the task form rules.
    #[must_use]
    pub const fn form_rules(&self) -> FormRules {
        FormRules {
            title: TitleRules {
                min_len: self.form.title_min_len,
                max_len: self.form.title_max_len,
            },
            subtasks: self.form.subtask_rule,
        }
    }
}
