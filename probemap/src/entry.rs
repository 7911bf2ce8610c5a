use crate::error::Result;
use crate::hash::StrHasher;
use crate::table::OpenAddressTable;

/// Entry API for the OpenAddressTable, similar to std::collections::HashMap
pub enum MapEntry<'a, V, H> {
    Occupied(OccupiedEntry<'a, V, H>),
    Vacant(VacantEntry<'a, V, H>),
}

/// A view into an occupied entry in the table
pub struct OccupiedEntry<'a, V, H> {
    table: &'a mut OpenAddressTable<V, H>,
    slot_idx: usize,
}

/// A view into a vacant entry in the table.
/// `slot_idx` is either empty or a tombstone that the insert reclaims.
pub struct VacantEntry<'a, V, H> {
    table: &'a mut OpenAddressTable<V, H>,
    key: String,
    slot_idx: usize,
}

impl<V, H: StrHasher> OpenAddressTable<V, H> {
    /// Get the entry for `key`.
    ///
    /// Runs the same pre-insert load check as `set`, so inserting through a
    /// vacant entry never breaks the load ratio.
    pub fn entry(&mut self, key: &str) -> Result<MapEntry<'_, V, H>> {
        self.reserve_one()?;

        let slot_idx = self.find_slot_for_write(key)?;
        if self.slots[slot_idx].is_live() {
            Ok(MapEntry::Occupied(OccupiedEntry {
                table: self,
                slot_idx,
            }))
        } else {
            Ok(MapEntry::Vacant(VacantEntry {
                table: self,
                key: key.to_owned(),
                slot_idx,
            }))
        }
    }
}

impl<'a, V, H: StrHasher> MapEntry<'a, V, H> {
    /// Returns true if the entry is occupied
    pub fn is_occupied(&self) -> bool {
        matches!(self, MapEntry::Occupied(_))
    }

    /// Returns true if the entry is vacant
    pub fn is_vacant(&self) -> bool {
        matches!(self, MapEntry::Vacant(_))
    }

    pub fn key(&self) -> &str {
        match self {
            MapEntry::Occupied(entry) => entry.key(),
            MapEntry::Vacant(entry) => entry.key(),
        }
    }

    /// Insert `value` if the entry is vacant, returning a reference to the stored value
    pub fn or_insert(self, value: V) -> &'a mut V {
        match self {
            MapEntry::Occupied(entry) => entry.into_mut(),
            MapEntry::Vacant(entry) => entry.insert(value),
        }
    }

    /// Insert the value returned by the closure if the entry is vacant
    pub fn or_insert_with<F>(self, f: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            MapEntry::Occupied(entry) => entry.into_mut(),
            MapEntry::Vacant(entry) => entry.insert(f()),
        }
    }

    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(V::default)
    }

    /// Run `f` on the value if the entry is occupied
    pub fn and_modify<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        if let MapEntry::Occupied(entry) = &mut self {
            f(entry.get_mut());
        }
        self
    }
}

impl<'a, V, H: StrHasher> OccupiedEntry<'a, V, H> {
    pub fn key(&self) -> &str {
        &self
            .table
            .slots[self.slot_idx]
            .entry()
            .expect("slot must be live for occupied entry")
            .key
    }

    /// Get a reference to the value in the entry
    pub fn get(&self) -> &V {
        &self
            .table
            .slots[self.slot_idx]
            .entry()
            .expect("slot must be live for occupied entry")
            .value
    }

    pub fn get_mut(&mut self) -> &mut V {
        &mut self
            .table
            .slots[self.slot_idx]
            .entry_mut()
            .expect("slot must be live for occupied entry")
            .value
    }

    /// Converts the entry into a mutable reference bound to the table's lifetime
    pub fn into_mut(self) -> &'a mut V {
        let table = self.table;
        &mut table
            .slots[self.slot_idx]
            .entry_mut()
            .expect("slot must be live for occupied entry")
            .value
    }

    /// Replace the value in the entry, returning the old value
    pub fn insert(&mut self, value: V) -> V {
        std::mem::replace(self.get_mut(), value)
    }

    /// Tombstone the entry, returning its value
    pub fn remove(self) -> V {
        self.table
            .bury(self.slot_idx)
            .expect("slot must be live for occupied entry")
    }
}

impl<'a, V, H: StrHasher> VacantEntry<'a, V, H> {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Insert the value into the vacant entry, returning a reference to the inserted value
    pub fn insert(self, value: V) -> &'a mut V {
        let VacantEntry {
            table,
            key,
            slot_idx,
        } = self;
        table.fill(slot_idx, key, value);
        &mut table.slots[slot_idx]
            .entry_mut()
            .expect("value was just inserted")
            .value
    }
}
