//! Viper log output for Viper histories
//!
//! This crate handles everything that touches disk:
//!
//! - Codec: one line of Viper text per transaction
//! - Paths: `J<session_id>.log` naming and directory clearing
//! - Writer: per-session files and dump reports
//! - Format: the `HistoryFormat` seam and its Viper implementation
//! - Config: log directory and id bases

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod config;
pub mod format;
pub mod paths;
pub mod writer;

pub use codec::{
    encode_event, encode_line, encode_transaction, op_code, session_file_name, LINE_TERMINATOR,
    SESSION_FILE_EXTENSION, SESSION_FILE_PREFIX,
};
pub use config::ViperConfig;
pub use format::{HistoryFormat, ViperHistoryFormat};
pub use paths::{clear_directory, LogPaths};
pub use writer::{dump_history, write_session, write_sessions, DumpReport, SessionFileInfo};
