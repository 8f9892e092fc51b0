//! Dumping replaces whatever the directory held before.

use crate::common::*;
use std::fs;
use tempfile::tempdir;
use viper_history::{clear_directory, dump_history, encode_transaction, write_sessions, Error};

#[test]
fn test_stale_file_removed() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("stale.txt"), "old").unwrap();

    dump_history(dir.path(), &grid_history(2, 1, 1)).unwrap();
    assert_eq!(file_names(dir.path()), vec!["J0.log", "J1.log"]);
}

#[test]
fn test_previous_dump_replaced() {
    let dir = tempdir().unwrap();
    dump_history(dir.path(), &grid_history(4, 2, 2)).unwrap();
    dump_history(dir.path(), &grid_history(1, 1, 1)).unwrap();

    assert_eq!(file_names(dir.path()), vec!["J0.log"]);
    assert_eq!(read_lines(&dir.path().join("J0.log")).len(), 1);
}

#[test]
fn test_clear_and_write_are_separate_steps() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("stale.txt"), "old").unwrap();

    // writing alone leaves unrelated files
    write_sessions(dir.path(), &grid_history(1, 1, 1)).unwrap();
    assert_eq!(file_names(dir.path()), vec!["J0.log", "stale.txt"]);

    assert_eq!(clear_directory(dir.path()).unwrap(), 2);
    assert!(file_names(dir.path()).is_empty());
}

#[test]
fn test_non_directory_untouched() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("J0.log");
    fs::write(&target, "precious").unwrap();

    let err = dump_history(&target, &grid_history(1, 1, 1)).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
    assert_eq!(fs::read_to_string(&target).unwrap(), "precious");
}

#[test]
fn test_failed_write_keeps_earlier_sessions() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("stale.txt"), "old").unwrap();
    fs::write(dir.path().join("J7.log"), "old").unwrap();
    // a directory where session 1's log should go makes its create fail
    fs::create_dir(dir.path().join("J1.log")).unwrap();

    let history = grid_history(2, 3, 2);
    let err = dump_history(dir.path(), &history).unwrap_err();
    assert!(matches!(err, Error::Io(_)));

    // clearing ran, session 0 was written in full, nothing was rolled back
    assert_eq!(file_names(dir.path()), vec!["J0.log", "J1.log"]);
    assert!(dir.path().join("J1.log").is_dir());
    let expected: Vec<String> = history.sessions()[0]
        .transactions()
        .iter()
        .map(encode_transaction)
        .collect();
    assert_eq!(read_lines(&dir.path().join("J0.log")), expected);
}
