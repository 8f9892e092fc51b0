//! History formats
//!
//! [`HistoryFormat`] is the seam between the in-memory model and an
//! on-disk history encoding. [`ViperHistoryFormat`] implements it for
//! Viper per-session logs. Viper logs can be written but not read back:
//! `load_history` always reports [`Error::NotImplemented`].

use crate::config::ViperConfig;
use crate::paths::LogPaths;
use crate::writer::{dump_history, DumpReport};
use std::hash::Hash;
use std::path::Path;
use viper_core::{convert_with_options, Error, History, Result};

/// An on-disk history encoding
pub trait HistoryFormat {
    /// Read a history from storage
    fn load_history(&self) -> Result<History<u64, u64>>;

    /// Write a history to storage, replacing previous output
    fn dump_history(&self, history: &History<u64, u64>) -> Result<DumpReport>;

    /// Re-key an arbitrary history onto the integer ids this format stores
    fn convert_from<K, V>(&self, history: &History<K, V>) -> Result<History<u64, u64>>
    where
        K: Hash + Eq,
        V: Hash + Eq;
}

/// Viper per-session log directory
#[derive(Debug, Clone)]
pub struct ViperHistoryFormat {
    config: ViperConfig,
    paths: LogPaths,
}

impl ViperHistoryFormat {
    /// Open a Viper log directory
    ///
    /// Fails with a configuration error if the config is invalid or the
    /// directory does not exist.
    pub fn new(config: ViperConfig) -> Result<Self> {
        config.validate()?;
        let paths = LogPaths::from_root(&config.log_dir);
        paths.validate()?;
        Ok(ViperHistoryFormat { config, paths })
    }

    /// Open `log_dir` with default settings
    pub fn open(log_dir: impl AsRef<Path>) -> Result<Self> {
        Self::new(ViperConfig::new(log_dir))
    }

    /// Active configuration
    pub fn config(&self) -> &ViperConfig {
        &self.config
    }

    /// Directory layout
    pub fn paths(&self) -> &LogPaths {
        &self.paths
    }
}

impl HistoryFormat for ViperHistoryFormat {
    fn load_history(&self) -> Result<History<u64, u64>> {
        Err(Error::NotImplemented("loading Viper histories"))
    }

    fn dump_history(&self, history: &History<u64, u64>) -> Result<DumpReport> {
        dump_history(self.paths.root(), history)
    }

    fn convert_from<K, V>(&self, history: &History<K, V>) -> Result<History<u64, u64>>
    where
        K: Hash + Eq,
        V: Hash + Eq,
    {
        convert_with_options(history, self.config.convert)
    }
}
