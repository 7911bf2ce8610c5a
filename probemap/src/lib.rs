pub mod config;
pub mod entry;
pub mod error;
pub mod hash;
mod probe;
mod slot;
pub mod table;
pub use config::TableConfig;
pub use entry::{MapEntry, OccupiedEntry, VacantEntry};
pub use error::{Result, TableError};
pub use hash::{Djb2, StrHasher, djb2};
pub use table::{Iter, OpenAddressTable, TableStats};
