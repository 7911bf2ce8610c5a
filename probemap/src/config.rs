use crate::error::{Result, TableError};

pub const DEFAULT_INITIAL_CAPACITY: usize = 8;
pub const DEFAULT_MAX_LOAD_RATIO: f64 = 0.5;
pub const DEFAULT_GROWTH_FACTOR: usize = 3;

/// Sizing policy of a table.
///
/// A `set` that would push `(live + tombstones + 1) / capacity` above
/// `max_load_ratio` first grows the table to `capacity * growth_factor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    pub initial_capacity: usize,
    pub max_load_ratio: f64,
    pub growth_factor: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_load_ratio: DEFAULT_MAX_LOAD_RATIO,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn with_max_load_ratio(mut self, ratio: f64) -> Self {
        self.max_load_ratio = ratio;
        self
    }

    pub fn with_growth_factor(mut self, factor: usize) -> Self {
        self.growth_factor = factor;
        self
    }

    /// Checks the parameters, returning `InvalidConfig` on the first bad one.
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(TableError::InvalidConfig(
                "initial_capacity must be at least 1".to_string(),
            ));
        }
        // also rejects NaN
        if !(self.max_load_ratio > 0.0 && self.max_load_ratio <= 1.0) {
            return Err(TableError::InvalidConfig(format!(
                "max_load_ratio must be in (0, 1], got {}",
                self.max_load_ratio
            )));
        }
        if self.growth_factor < 2 {
            return Err(TableError::InvalidConfig(format!(
                "growth_factor must be at least 2, got {}",
                self.growth_factor
            )));
        }
        Ok(())
    }

    /// True when holding `occupied` slots out of `capacity` breaks the load ratio.
    pub(crate) fn exceeds(&self, occupied: usize, capacity: usize) -> bool {
        capacity == 0 || occupied as f64 / capacity as f64 > self.max_load_ratio
    }
}
