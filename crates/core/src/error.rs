//! Errors raised while building, converting and dumping histories
//!
//! Every fallible operation in the workspace returns [`Result`]; nothing
//! is retried or recovered locally.

use std::fmt;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Result type alias for Viper operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which side of an event an identifier mapping failed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingRole {
    /// The event key
    Key,
    /// The event value
    Value,
}

impl fmt::Display for MappingRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingRole::Key => write!(f, "key"),
            MappingRole::Value => write!(f, "value"),
        }
    }
}

/// Error types for history conversion and export
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration (log path is not a directory, bad id base, ...)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Capability intentionally absent
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    /// An event key or value has no entry in its identifier map
    #[error(
        "Unmapped {role} in session {session_id}, transaction {transaction_id}, event {event_index}"
    )]
    UnmappedValue {
        /// Which side of the event was missing
        role: MappingRole,
        /// Session containing the event
        session_id: u64,
        /// Transaction containing the event
        transaction_id: u64,
        /// Position of the event within its transaction
        event_index: usize,
    },

    /// A generated identifier would coincide with a protocol sentinel
    #[error("Generated id {id:#x} collides with reserved id {name}")]
    ReservedIdCollision {
        /// The colliding identifier
        id: u64,
        /// Name of the reserved sentinel
        name: &'static str,
    },

    /// No ids left between the map's base and `u64::MAX`
    #[error("Id space exhausted: base {base} cannot hold more than {assigned} distinct values")]
    IdSpaceExhausted {
        /// First id of the exhausted map
        base: u64,
        /// Ids assigned before running out
        assigned: usize,
    },

    /// Two sessions in one history share an id
    #[error("Duplicate session id: {0}")]
    DuplicateSession(u64),

    /// I/O error (directory listing, file creation, writes)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create the error raised when a log path is not a directory
    pub fn not_a_directory(path: &Path) -> Self {
        Self::Configuration(format!("{} is not a directory", path.display()))
    }

    /// Whether this error signals an absent capability
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Error::NotImplemented(_))
    }
}
