//! Shared test utilities for the integration suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use viper_history::{Event, EventType, History, Session, Transaction};

/// Build a `sessions × transactions × events` history of integer ids.
///
/// Event `e` of transaction `t` in session `s` writes key `s * 1000 + t * 10 + e`
/// on even positions and reads it on odd ones, so every event is distinguishable.
pub fn grid_history(sessions: u64, transactions: u64, events: u64) -> History<u64, u64> {
    let mut history = History::new();
    for s in 0..sessions {
        let mut session = Session::new(s);
        for t in 0..transactions {
            let mut txn = Transaction::new(s * transactions + t);
            for e in 0..events {
                let key = s * 1000 + t * 10 + e;
                let event_type = if e % 2 == 0 {
                    EventType::Write
                } else {
                    EventType::Read
                };
                txn.push_event(Event::new(event_type, key, key + 1));
            }
            session.push_transaction(txn);
        }
        history.push_session(session).unwrap();
    }
    history
}

/// A small bank-transfer style history keyed by account names.
pub fn named_history() -> History<String, String> {
    let s = |v: &str| v.to_string();
    History::from_sessions(vec![
        Session::with_transactions(
            0,
            vec![
                Transaction::with_events(
                    1,
                    vec![
                        Event::read(s("alice"), s("init")),
                        Event::write(s("alice"), s("90")),
                        Event::write(s("bob"), s("110")),
                    ],
                ),
                Transaction::with_events(2, vec![Event::read(s("bob"), s("110"))]),
            ],
        ),
        Session::with_transactions(
            1,
            vec![Transaction::with_events(
                3,
                vec![
                    Event::read(s("carol"), s("init")),
                    Event::read(s("alice"), s("90")),
                ],
            )],
        ),
    ])
    .unwrap()
}

/// Sorted file names directly inside `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

/// Lines of a session log, without terminators.
pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
