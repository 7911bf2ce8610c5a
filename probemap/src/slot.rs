/// A key/value record held by a live slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<V> {
    pub key: String,
    pub value: V,
}

/// One cell of the table.
///
/// `Empty` ends a probe. `Tombstone` keeps the probe chain intact after a
/// delete and can be reused by a later write.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Slot<V> {
    #[default]
    Empty,
    Live(Entry<V>),
    Tombstone,
}

impl<V> Slot<V> {
    pub fn live(key: String, value: V) -> Self {
        Slot::Live(Entry { key, value })
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Slot::Live(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn is_tombstone(&self) -> bool {
        matches!(self, Slot::Tombstone)
    }

    /// True when this slot holds a live entry for `key`
    pub fn holds(&self, key: &str) -> bool {
        match self {
            Slot::Live(entry) => entry.key == key,
            _ => false,
        }
    }

    pub fn entry(&self) -> Option<&Entry<V>> {
        match self {
            Slot::Live(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn entry_mut(&mut self) -> Option<&mut Entry<V>> {
        match self {
            Slot::Live(entry) => Some(entry),
            _ => None,
        }
    }

    /// Replaces a live slot with a tombstone, handing back the entry.
    /// Empty and tombstoned slots are left untouched.
    pub fn bury(&mut self) -> Option<Entry<V>> {
        if !self.is_live() {
            return None;
        }
        match std::mem::replace(self, Slot::Tombstone) {
            Slot::Live(entry) => Some(entry),
            _ => None,
        }
    }
}
