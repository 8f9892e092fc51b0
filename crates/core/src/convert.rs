//! History conversion
//!
//! Rebuilds a history with new key/value types while keeping its shape:
//! session order, transaction ids and order, and event order are carried
//! over unchanged. Filtered-out events leave their transaction in place,
//! possibly empty.

use crate::error::{Error, MappingRole, Result};
use crate::history::{Event, History, Session, Transaction};
use crate::id_map::IdMap;
use std::borrow::Borrow;
use std::hash::Hash;

/// Where an event sits in its history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventPosition {
    /// Owning session
    pub session_id: u64,
    /// Owning transaction
    pub transaction_id: u64,
    /// Index within the transaction (before filtering)
    pub event_index: usize,
}

impl EventPosition {
    fn unmapped(self, role: MappingRole) -> Error {
        Error::UnmappedValue {
            role,
            session_id: self.session_id,
            transaction_id: self.transaction_id,
            event_index: self.event_index,
        }
    }
}

/// Id bases used when building identifier maps for a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// First id handed to keys (default: 1)
    pub key_base: u64,
    /// First id handed to values (default: 1)
    pub value_base: u64,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            key_base: 1,
            value_base: 1,
        }
    }
}

impl ConvertOptions {
    /// Create options with default bases
    pub fn new() -> Self {
        Self::default()
    }

    /// Set key base (builder pattern)
    pub fn with_key_base(mut self, base: u64) -> Self {
        self.key_base = base;
        self
    }

    /// Set value base (builder pattern)
    pub fn with_value_base(mut self, base: u64) -> Self {
        self.value_base = base;
        self
    }
}

/// Rebuild `history`, passing every accepted event through `map`
///
/// `map` receives the event and its position and returns the new key
/// and value; the event type is preserved. Events rejected by `keep`
/// are dropped from their transaction.
pub fn map_history<K, V, K2, V2, F, P>(
    history: &History<K, V>,
    mut map: F,
    mut keep: P,
) -> Result<History<K2, V2>>
where
    F: FnMut(&Event<K, V>, EventPosition) -> Result<(K2, V2)>,
    P: FnMut(&Event<K, V>) -> bool,
{
    let mut converted = History::new();

    for session in history.sessions() {
        let mut new_session = Session::new(session.id());

        for txn in session.transactions() {
            let mut new_txn = Transaction::new(txn.id());

            for (event_index, event) in txn.events().iter().enumerate() {
                if !keep(event) {
                    continue;
                }
                let position = EventPosition {
                    session_id: session.id(),
                    transaction_id: txn.id(),
                    event_index,
                };
                let (key, value) = map(event, position)?;
                new_txn.push_event(Event::new(event.event_type(), key, value));
            }

            new_session.push_transaction(new_txn);
        }

        converted.push_session(new_session)?;
    }

    Ok(converted)
}

/// Replace every key and value with its id from `keys` / `values`
///
/// The maps are expected to have been built from this history's full
/// event stream; a missing entry fails with [`Error::UnmappedValue`].
pub fn convert_history<K, V, KM, VM, P>(
    history: &History<K, V>,
    keys: &IdMap<KM>,
    values: &IdMap<VM>,
    keep: P,
) -> Result<History<u64, u64>>
where
    K: Hash + Eq,
    V: Hash + Eq,
    KM: Borrow<K> + Hash + Eq,
    VM: Borrow<V> + Hash + Eq,
    P: FnMut(&Event<K, V>) -> bool,
{
    map_history(
        history,
        |event, position| {
            let key = keys
                .get(event.key())
                .ok_or_else(|| position.unmapped(MappingRole::Key))?;
            let value = values
                .get(event.value())
                .ok_or_else(|| position.unmapped(MappingRole::Value))?;
            Ok((key, value))
        },
        keep,
    )
}

/// Map keys and values of `history` onto integers, keeping every event
///
/// Key and value maps are built from `history.events()` in flattened
/// order, checked against the reserved sentinels, then applied.
pub fn convert_with_options<K, V>(
    history: &History<K, V>,
    options: ConvertOptions,
) -> Result<History<u64, u64>>
where
    K: Hash + Eq,
    V: Hash + Eq,
{
    let keys = IdMap::build(history.events().map(Event::key), options.key_base)?;
    let values = IdMap::build(history.events().map(Event::value), options.value_base)?;
    keys.check_reserved()?;
    values.check_reserved()?;

    convert_history(history, &keys, &values, |_| true)
}
