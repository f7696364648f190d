use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// How the classifier reports failures it cannot classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslatorConfig {
    /// Include the `source()` chain of the original failure in the diagnostic entry.
    pub log_cause_chain: bool,
    /// Capture a backtrace at the point of translation.
    pub capture_backtrace: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            log_cause_chain: true,
            capture_backtrace: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Relations registered when the store is created.
    pub tables: Vec<String>,
    /// Whether the store accepts work right away.
    pub open: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            tables: Vec::new(),
            open: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DbConfig {
    pub translator: TranslatorConfig,
    pub store: StoreConfig,
}

/** Raw TOML mapping for the [translator] table. */
#[derive(Debug, Default, Deserialize)]
struct RawTranslator {
    #[serde(default)]
    log_cause_chain: Option<bool>,
    #[serde(default)]
    capture_backtrace: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct RawStore {
    #[serde(default)]
    tables: Option<Vec<String>>,
    #[serde(default)]
    open: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    translator: RawTranslator,
    #[serde(default)]
    store: RawStore,
}

impl DbConfig {
    /// Parse a configuration from a TOML string.
    ///
    /// Example TOML:
    /// [translator]
    /// log_cause_chain = true
    /// capture_backtrace = false
    ///
    /// [store]
    /// tables = ["ward", "admission"]
    /// open = true
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(input)?;
        let defaults = DbConfig::default();

        let translator = TranslatorConfig {
            log_cause_chain: raw
                .translator
                .log_cause_chain
                .unwrap_or(defaults.translator.log_cause_chain),
            capture_backtrace: raw
                .translator
                .capture_backtrace
                .unwrap_or(defaults.translator.capture_backtrace),
        };

        let mut tables = raw.store.tables.unwrap_or_default();
        tables.sort();
        tables.dedup();
        let store = StoreConfig {
            tables,
            open: raw.store.open.unwrap_or(defaults.store.open),
        };

        Ok(DbConfig { translator, store })
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Compute the default config file path.
    /// Uses $XDG_CONFIG_HOME/openhospital/db.toml or ~/.config/openhospital/db.toml.
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|p| p.join(".config")))
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("openhospital").join("db.toml"))
    }

    /// Load configuration from the default path.
    /// Returns both the parsed config and the resolved path for diagnostics.
    pub fn load_default_file() -> Result<(Self, PathBuf), ConfigError> {
        let path = Self::default_config_path()?;
        let cfg = Self::load_from_path(&path)?;
        Ok((cfg, path))
    }
}
