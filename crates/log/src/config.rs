//! Viper output configuration
//!
//! Where logs go and which id bases conversion uses.

use std::path::{Path, PathBuf};
use viper_core::{reserved_name, ConvertOptions, Error, Result};

/// Configuration for a Viper log directory
#[derive(Debug, Clone)]
pub struct ViperConfig {
    /// Directory receiving `J<session_id>.log` files
    pub log_dir: PathBuf,
    /// Id bases for key/value conversion (default: 1 / 1)
    pub convert: ConvertOptions,
}

impl ViperConfig {
    /// Create a configuration with default id bases
    pub fn new(log_dir: impl AsRef<Path>) -> Self {
        ViperConfig {
            log_dir: log_dir.as_ref().to_path_buf(),
            convert: ConvertOptions::default(),
        }
    }

    /// Set key id base (builder pattern)
    pub fn with_key_base(mut self, base: u64) -> Self {
        self.convert.key_base = base;
        self
    }

    /// Set value id base (builder pattern)
    pub fn with_value_base(mut self, base: u64) -> Self {
        self.convert.value_base = base;
        self
    }

    /// Validate id bases
    ///
    /// The log directory is checked separately, when it is used.
    pub fn validate(&self) -> Result<()> {
        for (what, base) in [
            ("key", self.convert.key_base),
            ("value", self.convert.value_base),
        ] {
            if base == 0 {
                return Err(Error::configuration(format!(
                    "{} id base must be at least 1",
                    what
                )));
            }
            if let Some(name) = reserved_name(base) {
                return Err(Error::configuration(format!(
                    "{} id base {:#x} is the reserved id {}",
                    what, base, name
                )));
            }
        }
        Ok(())
    }
}
