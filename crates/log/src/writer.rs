//! Viper history writer
//!
//! Writes an integer-keyed history as one log file per session:
//! - `clear_directory` removes previous output
//! - `write_sessions` emits `J<session_id>.log` for every session
//! - `dump_history` checks the directory, then runs both in order
//!
//! Sessions are written sequentially. Each file is opened, written,
//! flushed, and closed before the next session starts. Nothing is rolled
//! back on failure: files finished before the error remain on disk.

use crate::codec::encode_line;
use crate::paths::{clear_directory, LogPaths};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use viper_core::{History, Result, Session};

/// Summary of one session file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionFileInfo {
    /// Session the file belongs to
    pub session_id: u64,
    /// Where the file was written
    pub path: PathBuf,
    /// Lines (transactions) written
    pub transactions: usize,
    /// Events written across all lines
    pub events: usize,
    /// Bytes written, terminators included
    pub bytes: u64,
}

/// Summary of a complete dump
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DumpReport {
    /// Entries removed from the directory before writing
    pub cleared_entries: usize,
    /// One record per session, in history order
    pub files: Vec<SessionFileInfo>,
}

impl DumpReport {
    /// Number of session files written
    pub fn sessions_written(&self) -> usize {
        self.files.len()
    }

    /// Total transactions written
    pub fn transactions_written(&self) -> usize {
        self.files.iter().map(|f| f.transactions).sum()
    }

    /// Total events written
    pub fn events_written(&self) -> usize {
        self.files.iter().map(|f| f.events).sum()
    }

    /// Total bytes written
    pub fn bytes_written(&self) -> u64 {
        self.files.iter().map(|f| f.bytes).sum()
    }
}

/// Write one session to `path`, truncating any existing file
pub fn write_session(path: &Path, session: &Session<u64, u64>) -> Result<SessionFileInfo> {
    let mut out = BufWriter::new(File::create(path)?);
    let mut info = SessionFileInfo {
        session_id: session.id(),
        path: path.to_path_buf(),
        transactions: 0,
        events: 0,
        bytes: 0,
    };

    for txn in session.transactions() {
        let line = encode_line(txn);
        out.write_all(line.as_bytes())?;
        info.transactions += 1;
        info.events += txn.len();
        info.bytes += line.len() as u64;
    }
    out.flush()?;

    debug!(
        target: "viper::dump",
        session_id = info.session_id,
        transactions = info.transactions,
        path = %path.display(),
        "Wrote session log"
    );
    Ok(info)
}

/// Write every session of `history` into `dir`
///
/// Existing files for the same sessions are overwritten; other files are
/// left alone. Use [`dump_history`] for a clean directory.
pub fn write_sessions(dir: &Path, history: &History<u64, u64>) -> Result<DumpReport> {
    let paths = LogPaths::from_root(dir);
    let mut report = DumpReport::default();

    for session in history.sessions() {
        let info = write_session(&paths.session_file(session.id()), session)?;
        report.files.push(info);
    }

    Ok(report)
}

/// Replace the contents of `dir` with the Viper logs of `history`
///
/// Fails with a configuration error before touching anything if `dir`
/// is not a directory.
pub fn dump_history(dir: &Path, history: &History<u64, u64>) -> Result<DumpReport> {
    LogPaths::from_root(dir).validate()?;

    let cleared_entries = clear_directory(dir)?;
    let mut report = write_sessions(dir, history)?;
    report.cleared_entries = cleared_entries;

    info!(
        target: "viper::dump",
        dir = %dir.display(),
        sessions = report.sessions_written(),
        transactions = report.transactions_written(),
        events = report.events_written(),
        "Dumped history"
    );
    Ok(report)
}
