//! Core types for Viper history export
//!
//! This crate defines the in-memory history model and the conversions
//! that prepare it for serialization:
//! - History, Session, Transaction, Event: the recorded execution
//! - IdMap: first-occurrence integer ids for arbitrary values
//! - Conversion: re-keying a history onto `u64` ids
//! - Reserved: sentinel ids owned by the Viper protocol
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod convert;
pub mod error;
pub mod history;
pub mod id_map;
pub mod reserved;

pub use convert::{
    convert_history, convert_with_options, map_history, ConvertOptions, EventPosition,
};
pub use error::{Error, MappingRole, Result};
pub use history::{Event, EventType, History, Session, Transaction};
pub use id_map::IdMap;
pub use reserved::{
    first_reserved_in, reserved_name, GC_WID_FALSE, GC_WID_TRUE, INIT_TXN_ID, INIT_WRITE_ID,
    NULL_TXN_ID, RESERVED_IDS,
};
