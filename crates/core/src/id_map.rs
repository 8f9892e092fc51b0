//! Identifier mapping
//!
//! Normalizes values of an arbitrary `Hash + Eq` type to a dense integer
//! domain. Ids are handed out in first-occurrence order starting at a
//! configurable base, so the same input sequence always produces the
//! same mapping.
//!
//! The map is append-only: once a value has an id it keeps it.

use crate::error::{Error, Result};
use crate::reserved::first_reserved_in;
use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::hash::Hash;
use std::ops::Range;

/// Append-only mapping from distinct values to integer ids
#[derive(Debug, Clone)]
pub struct IdMap<T> {
    ids: FxHashMap<T, u64>,
    base: u64,
    next_id: u64,
}

impl<T: Hash + Eq> IdMap<T> {
    /// Create an empty map whose first id will be `base`
    pub fn new(base: u64) -> Self {
        IdMap {
            ids: FxHashMap::default(),
            base,
            next_id: base,
        }
    }

    /// Build a map from a sequence in a single pass
    ///
    /// Duplicates keep the id of their first occurrence. Fails with
    /// [`Error::IdSpaceExhausted`] if the distinct values do not fit
    /// between `base` and `u64::MAX`.
    pub fn build<I>(values: I, base: u64) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut map = IdMap::new(base);
        for value in values {
            map.insert(value)?;
        }
        Ok(map)
    }

    /// Id for `value`, assigning the next one if it is new
    ///
    /// `next_id` must stay representable, so the last assignable id is
    /// `u64::MAX - 1`.
    pub fn insert(&mut self, value: T) -> Result<u64> {
        if let Some(id) = self.ids.get(&value) {
            return Ok(*id);
        }
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(Error::IdSpaceExhausted {
            base: self.base,
            assigned: self.ids.len(),
        })?;
        self.ids.insert(value, id);
        Ok(id)
    }

    /// Id previously assigned to `value`
    pub fn get<Q>(&self, value: &Q) -> Option<u64>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.ids.get(value).copied()
    }

    /// Number of distinct values
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True if no value has been mapped
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// First id this map assigns
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Id the next new value would receive
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Half-open range of assigned ids
    pub fn id_range(&self) -> Range<u64> {
        self.base..self.next_id
    }

    /// Entries sorted by id
    pub fn entries(&self) -> Vec<(&T, u64)> {
        let mut entries: Vec<_> = self.ids.iter().map(|(v, id)| (v, *id)).collect();
        entries.sort_unstable_by_key(|(_, id)| *id);
        entries
    }

    /// Fail if any assigned id coincides with a protocol sentinel
    pub fn check_reserved(&self) -> Result<()> {
        match first_reserved_in(self.base, self.next_id) {
            Some((name, id)) => Err(Error::ReservedIdCollision { id, name }),
            None => Ok(()),
        }
    }
}
