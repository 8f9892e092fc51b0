//! History data model
//!
//! A recorded execution is a strict ownership tree:
//!
//! ```text
//! History
//! └── Session (id)            one client, session-local order
//!     └── Transaction (id)    program order
//!         └── Event           read/write of (key, value)
//! ```
//!
//! Sessions, transactions and events keep insertion order. Nothing here
//! is shared between trees; conversions build a fresh `History`.

use crate::error::{Error, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Kind of operation an event records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// Read of `key`, observing `value`
    Read,
    /// Write of `value` to `key`
    Write,
}

/// One read or write inside a transaction
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event<K, V> {
    event_type: EventType,
    key: K,
    value: V,
}

impl<K, V> Event<K, V> {
    /// Create an event
    pub fn new(event_type: EventType, key: K, value: V) -> Self {
        Event {
            event_type,
            key,
            value,
        }
    }

    /// Create a read event
    pub fn read(key: K, value: V) -> Self {
        Self::new(EventType::Read, key, value)
    }

    /// Create a write event
    pub fn write(key: K, value: V) -> Self {
        Self::new(EventType::Write, key, value)
    }

    /// Operation kind
    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    /// Key the operation touched
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Value read or written
    pub fn value(&self) -> &V {
        &self.value
    }
}

/// Ordered group of events executed atomically
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction<K, V> {
    id: u64,
    events: Vec<Event<K, V>>,
}

impl<K, V> Transaction<K, V> {
    /// Create an empty transaction
    pub fn new(id: u64) -> Self {
        Transaction {
            id,
            events: Vec::new(),
        }
    }

    /// Create a transaction from events in program order
    pub fn with_events(id: u64, events: Vec<Event<K, V>>) -> Self {
        Transaction { id, events }
    }

    /// Transaction id
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Events in program order
    pub fn events(&self) -> &[Event<K, V>] {
        &self.events
    }

    /// Append an event
    pub fn push_event(&mut self, event: Event<K, V>) {
        self.events.push(event);
    }

    /// Number of events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if the transaction has no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// One client's ordered sequence of transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session<K, V> {
    id: u64,
    transactions: Vec<Transaction<K, V>>,
}

impl<K, V> Session<K, V> {
    /// Create an empty session
    pub fn new(id: u64) -> Self {
        Session {
            id,
            transactions: Vec::new(),
        }
    }

    /// Create a session from transactions in execution order
    pub fn with_transactions(id: u64, transactions: Vec<Transaction<K, V>>) -> Self {
        Session { id, transactions }
    }

    /// Session id, unique within its history
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Transactions in session order
    pub fn transactions(&self) -> &[Transaction<K, V>] {
        &self.transactions
    }

    /// Append a transaction
    pub fn push_transaction(&mut self, transaction: Transaction<K, V>) {
        self.transactions.push(transaction);
    }
}

/// Full recorded execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History<K, V> {
    sessions: Vec<Session<K, V>>,
    /// Session id -> index into `sessions`
    #[serde(skip)]
    index: FxHashMap<u64, usize>,
}

impl<K, V> Default for History<K, V> {
    fn default() -> Self {
        History {
            sessions: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}

// Rebuilds the session index and rejects duplicate ids on the way in.
impl<'de, K, V> Deserialize<'de> for History<K, V>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Sessions<K, V> {
            sessions: Vec<Session<K, V>>,
        }

        let raw = Sessions::deserialize(deserializer)?;
        History::from_sessions(raw.sessions).map_err(serde::de::Error::custom)
    }
}

impl<K, V> History<K, V> {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from sessions
    ///
    /// Fails with [`Error::DuplicateSession`] if two sessions share an id.
    pub fn from_sessions(sessions: Vec<Session<K, V>>) -> Result<Self> {
        let mut history = History::new();
        for session in sessions {
            history.push_session(session)?;
        }
        Ok(history)
    }

    /// Append a session
    ///
    /// Session ids name output files, so a repeated id is rejected.
    pub fn push_session(&mut self, session: Session<K, V>) -> Result<()> {
        if self.index.contains_key(&session.id()) {
            return Err(Error::DuplicateSession(session.id()));
        }
        self.index.insert(session.id(), self.sessions.len());
        self.sessions.push(session);
        Ok(())
    }

    /// Sessions in insertion order
    pub fn sessions(&self) -> &[Session<K, V>] {
        &self.sessions
    }

    /// Look up a session by id
    pub fn session(&self, id: u64) -> Option<&Session<K, V>> {
        self.index.get(&id).map(|&i| &self.sessions[i])
    }

    /// Every event, flattened in session → transaction → event order
    pub fn events(&self) -> impl Iterator<Item = &Event<K, V>> + '_ {
        self.sessions
            .iter()
            .flat_map(|s| s.transactions.iter())
            .flat_map(|t| t.events.iter())
    }

    /// Total number of transactions across all sessions
    pub fn transaction_count(&self) -> usize {
        self.sessions.iter().map(|s| s.transactions.len()).sum()
    }

    /// Total number of events across all sessions
    pub fn event_count(&self) -> usize {
        self.sessions
            .iter()
            .flat_map(|s| s.transactions.iter())
            .map(|t| t.events.len())
            .sum()
    }
}
