//! Viper line encoding
//!
//! One transaction becomes one line:
//!
//! ```text
//! {"value": [["w", 1, 1, true], ["r", 2, 1, true]]}
//! ```
//!
//! Each event is `["<op>", <key>, <value>, true]` where `<op>` is `r` or
//! `w`. The trailing `true` is a fixed protocol marker and is always
//! written as-is. Events are separated by `", "`; an empty transaction
//! encodes as `{"value": []}`. The checker parses this exact shape, so
//! the spacing matters.

use std::fmt::Write;
use viper_core::{Event, EventType, Transaction};

/// Prefix of every session log file name
pub const SESSION_FILE_PREFIX: &str = "J";

/// Extension of every session log file
pub const SESSION_FILE_EXTENSION: &str = "log";

/// Line terminator; the checker expects `\n` on every platform
pub const LINE_TERMINATOR: char = '\n';

/// File name holding the log of session `session_id`
pub fn session_file_name(session_id: u64) -> String {
    format!("{}{}.{}", SESSION_FILE_PREFIX, session_id, SESSION_FILE_EXTENSION)
}

/// Single-letter op code
pub fn op_code(event_type: EventType) -> &'static str {
    match event_type {
        EventType::Read => "r",
        EventType::Write => "w",
    }
}

/// Append one encoded event to `buf`
pub fn encode_event(buf: &mut String, event: &Event<u64, u64>) {
    // writing into a String cannot fail
    let _ = write!(
        buf,
        "[\"{}\", {}, {}, true]",
        op_code(event.event_type()),
        event.key(),
        event.value()
    );
}

/// Encode a transaction, without the line terminator
pub fn encode_transaction(txn: &Transaction<u64, u64>) -> String {
    let mut line = String::from("{\"value\": [");
    for (i, event) in txn.events().iter().enumerate() {
        if i > 0 {
            line.push_str(", ");
        }
        encode_event(&mut line, event);
    }
    line.push_str("]}");
    line
}

/// Encode a transaction as a complete, terminated line
pub fn encode_line(txn: &Transaction<u64, u64>) -> String {
    let mut line = encode_transaction(txn);
    line.push(LINE_TERMINATOR);
    line
}
