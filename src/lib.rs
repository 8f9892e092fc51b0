//! Viper history export
//!
//! Converts an in-memory transactional history into the per-session
//! text logs read by the Viper isolation checker.
//!
//! # Quick Start
//!
//! ```ignore
//! use viper_history::{Event, History, HistoryFormat, Session, Transaction, ViperHistoryFormat};
//!
//! let history = History::from_sessions(vec![Session::with_transactions(
//!     0,
//!     vec![Transaction::with_events(1, vec![Event::write("x", "a")])],
//! )])?;
//!
//! let viper = ViperHistoryFormat::open("./logs")?;
//! let ids = viper.convert_from(&history)?;
//! viper.dump_history(&ids)?; // ./logs/J0.log
//! ```
//!
//! # Architecture
//!
//! - `viper-core`: history model, identifier maps, conversion, errors
//! - `viper-log`: line codec, log directory handling, writer

pub use viper_core::*;
pub use viper_log::*;
