use thiserror::Error;

/// Errors that can occur when working with an `OpenAddressTable`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// Key not found in the table
    #[error("Key not found: {key:?}")]
    KeyNotFound { key: String },

    /// The probe sequence ran through every slot without finding a usable one,
    /// or a requested capacity cannot hold the live entries.
    #[error("Table capacity exhausted (capacity: {capacity})")]
    CapacityExhausted { capacity: usize },

    /// Invalid configuration parameters
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl TableError {
    pub(crate) fn key_not_found(key: &str) -> Self {
        TableError::KeyNotFound {
            key: key.to_owned(),
        }
    }

    pub(crate) fn exhausted(capacity: usize) -> Self {
        log::error!("probe sequence exhausted at capacity {capacity}");
        TableError::CapacityExhausted { capacity }
    }

    /// Returns true for the recoverable missing-key case
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, TableError::KeyNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = TableError::key_not_found("Hobbit");
        assert_eq!(err.to_string(), "Key not found: \"Hobbit\"");
        assert!(err.is_key_not_found());

        let err = TableError::CapacityExhausted { capacity: 8 };
        assert_eq!(err.to_string(), "Table capacity exhausted (capacity: 8)");
        assert!(!err.is_key_not_found());
    }
}
