//! Loading Viper logs is not supported.

use crate::common::*;
use std::fs;
use tempfile::tempdir;
use viper_history::{Error, HistoryFormat, ViperHistoryFormat};

#[test]
fn test_load_empty_directory() {
    let dir = tempdir().unwrap();
    let viper = ViperHistoryFormat::open(dir.path()).unwrap();
    assert!(matches!(viper.load_history(), Err(Error::NotImplemented(_))));
}

#[test]
fn test_load_after_dump() {
    let dir = tempdir().unwrap();
    let viper = ViperHistoryFormat::open(dir.path()).unwrap();
    viper.dump_history(&grid_history(2, 2, 2)).unwrap();

    for _ in 0..3 {
        let err = viper.load_history().unwrap_err();
        assert!(err.is_not_implemented());
    }
    // the failed loads leave the logs alone
    assert_eq!(file_names(dir.path()), vec!["J0.log", "J1.log"]);
}

#[test]
fn test_load_with_unrelated_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("J0.log"), "{\"value\": []}\n").unwrap();
    fs::write(dir.path().join("README"), "hi").unwrap();

    let viper = ViperHistoryFormat::open(dir.path()).unwrap();
    assert!(viper.load_history().unwrap_err().is_not_implemented());
}
