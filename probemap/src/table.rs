use std::fmt;

use crate::config::TableConfig;
use crate::error::{Result, TableError};
use crate::hash::{Djb2, StrHasher};
use crate::probe::ProbeSeq;
use crate::slot::Slot;

/// Counters describing the current shape of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableStats {
    pub capacity: usize,
    pub live: usize,
    pub tombstones: usize,
    pub resizes: usize,
}

/// This is an open address hash table keyed by strings.
/// Collisions are resolved with linear probing over a single slot array,
/// deletes leave tombstones behind so later keys in the same probe chain
/// stay reachable, and the table is rebuilt into a larger array before an
/// insert would push `(live + tombstones) / capacity` past the configured
/// maximum load ratio.
pub struct OpenAddressTable<V, H = Djb2> {
    pub(crate) slots: Vec<Slot<V>>,
    pub(crate) live: usize,
    pub(crate) tombstones: usize,
    resizes: usize,
    config: TableConfig,
    hasher: H,
}

fn empty_slots<V>(capacity: usize) -> Vec<Slot<V>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, Slot::default);
    slots
}

impl<V> Default for OpenAddressTable<V, Djb2> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> OpenAddressTable<V, Djb2> {
    /// Creates an empty table with the default config
    pub fn new() -> Self {
        let config = TableConfig::default();
        Self::from_parts(config, Djb2)
    }

    /// Creates an empty table with `capacity` slots and default load policy
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_config(TableConfig::default().with_initial_capacity(capacity))
    }

    pub fn with_config(config: TableConfig) -> Result<Self> {
        Self::with_config_and_hasher(config, Djb2)
    }
}

impl<V, H: StrHasher> OpenAddressTable<V, H> {
    pub fn with_config_and_hasher(config: TableConfig, hasher: H) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, hasher))
    }

    fn from_parts(config: TableConfig, hasher: H) -> Self {
        Self {
            slots: empty_slots(config.initial_capacity),
            live: 0,
            tombstones: 0,
            resizes: 0,
            config,
            hasher,
        }
    }

    /// Returns the number of live entries in the table
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns true if the table holds no live entries
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Returns the number of slots in the table
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of deleted slots not yet purged by a resize
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// Returns `(live + tombstones) / capacity`
    pub fn load_ratio(&self) -> f64 {
        if self.capacity() == 0 {
            return f64::INFINITY;
        }
        (self.live + self.tombstones) as f64 / self.capacity() as f64
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    pub fn stats(&self) -> TableStats {
        TableStats {
            capacity: self.capacity(),
            live: self.live,
            tombstones: self.tombstones,
            resizes: self.resizes,
        }
    }

    pub(crate) fn probe(&self, key: &str) -> ProbeSeq {
        ProbeSeq::new(self.hasher.hash_str(key), self.capacity())
    }

    /// Index of the live slot holding `key`.
    /// Stops at the first empty slot and skips tombstones.
    pub(crate) fn find_slot_for_read(&self, key: &str) -> Option<usize> {
        for idx in self.probe(key) {
            let slot = &self.slots[idx];
            if slot.is_empty() {
                return None;
            }
            if slot.holds(key) {
                return Some(idx);
            }
        }
        // every slot is live or a tombstone and none holds the key
        None
    }

    /// Index of the slot a write of `key` should land in: the slot already
    /// holding `key` if there is one, otherwise the earliest tombstone or
    /// empty slot along the probe sequence.
    pub(crate) fn find_slot_for_write(&self, key: &str) -> Result<usize> {
        let mut reusable = None;
        for idx in self.probe(key) {
            match &self.slots[idx] {
                Slot::Empty => return Ok(reusable.unwrap_or(idx)),
                Slot::Tombstone if reusable.is_none() => reusable = Some(idx),
                Slot::Live(entry) if entry.key == key => return Ok(idx),
                _ => {}
            }
        }
        reusable.ok_or_else(|| TableError::exhausted(self.capacity()))
    }

    /// Grows the table if one more occupied slot would break the load ratio.
    pub(crate) fn reserve_one(&mut self) -> Result<()> {
        let occupied = self.live + self.tombstones + 1;
        if !self.config.exceeds(occupied, self.capacity()) {
            return Ok(());
        }

        // a resize drops the tombstones, so only the live entries count here
        let mut new_capacity = self.capacity();
        loop {
            new_capacity = new_capacity
                .max(1)
                .checked_mul(self.config.growth_factor)
                .ok_or_else(|| TableError::exhausted(self.capacity()))?;
            if !self.config.exceeds(self.live + 1, new_capacity) {
                break;
            }
        }
        self.resize(new_capacity)
    }

    /// Stores a new entry at a vacant slot returned by `find_slot_for_write`.
    pub(crate) fn fill(&mut self, idx: usize, key: String, value: V) {
        let slot = &mut self.slots[idx];
        debug_assert!(!slot.is_live(), "fill called on a live slot");
        if slot.is_tombstone() {
            log::trace!("reclaiming tombstone at slot {idx} for key {key:?}");
            self.tombstones -= 1;
        }
        *slot = Slot::live(key, value);
        self.live += 1;
    }

    /// Tombstones the live slot at `idx`, returning its value.
    pub(crate) fn bury(&mut self, idx: usize) -> Option<V> {
        let entry = self.slots[idx].bury()?;
        self.live -= 1;
        self.tombstones += 1;
        Some(entry.value)
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Result<&V> {
        self.find_slot_for_read(key)
            .and_then(|idx| self.slots[idx].entry())
            .map(|entry| &entry.value)
            .ok_or_else(|| TableError::key_not_found(key))
    }

    /// Get a mutable reference to a value by key
    pub fn get_mut(&mut self, key: &str) -> Result<&mut V> {
        match self.find_slot_for_read(key) {
            Some(idx) => self.slots[idx]
                .entry_mut()
                .map(|entry| &mut entry.value)
                .ok_or_else(|| TableError::key_not_found(key)),
            None => Err(TableError::key_not_found(key)),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find_slot_for_read(key).is_some()
    }

    /// Insert a key-value pair, returning the previous value if the key was live.
    ///
    /// The load check runs before the slot is chosen, so the load ratio
    /// holds again as soon as this returns. Overwriting a live key keeps
    /// `len()` unchanged. A tombstone on the key's probe chain is reused.
    pub fn set(&mut self, key: &str, value: V) -> Result<Option<V>> {
        self.reserve_one()?;

        let idx = self.find_slot_for_write(key)?;
        if let Some(entry) = self.slots[idx].entry_mut() {
            return Ok(Some(std::mem::replace(&mut entry.value, value)));
        }
        self.fill(idx, key.to_owned(), value);
        Ok(None)
    }

    /// Delete a key, returning its value.
    /// The slot becomes a tombstone until the next resize.
    pub fn delete(&mut self, key: &str) -> Result<V> {
        self.find_slot_for_read(key)
            .and_then(|idx| self.bury(idx))
            .ok_or_else(|| TableError::key_not_found(key))
    }

    /// Rebuilds the table into `new_capacity` slots.
    ///
    /// Live entries are re-inserted through the write path against the new
    /// array; tombstones are dropped. Fails when `new_capacity` cannot hold
    /// every live entry plus one free slot for probes to stop at.
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity <= self.live {
            return Err(TableError::exhausted(new_capacity));
        }

        log::debug!(
            "resizing table from {} to {} slots ({} live, {} tombstones dropped)",
            self.capacity(),
            new_capacity,
            self.live,
            self.tombstones
        );

        let old_slots = std::mem::replace(&mut self.slots, empty_slots(new_capacity));
        self.live = 0;
        self.tombstones = 0;
        self.resizes += 1;

        for slot in old_slots {
            if let Slot::Live(entry) = slot {
                let idx = self.find_slot_for_write(&entry.key)?;
                self.fill(idx, entry.key, entry.value);
            }
        }
        Ok(())
    }

    /// Empties every slot, keeping the current capacity
    pub fn clear(&mut self) {
        self.slots.fill_with(Slot::default);
        self.live = 0;
        self.tombstones = 0;
    }

    /// Iterates live entries in slot order
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            slots: self.slots.iter(),
            remaining: self.live,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }
}

/// Iterator over the live entries of an `OpenAddressTable`
pub struct Iter<'a, V> {
    slots: std::slice::Iter<'a, Slot<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Some(entry) = slot.entry() {
                self.remaining -= 1;
                return Some((entry.key.as_str(), &entry.value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V, H: StrHasher> IntoIterator for &'a OpenAddressTable<V, H> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: fmt::Debug, H: StrHasher> fmt::Debug for OpenAddressTable<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
