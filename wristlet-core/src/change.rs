//! Edge-triggered change detection
//!
//! Screens poll their data sources every refresh and must only touch the
//! surface for values that actually moved. A [`ChangeCell`] holds the last
//! polled value and whether the most recent poll changed it.

/// Polled value with a "changed on the last write" flag
///
/// The flag is recomputed on every [`set`](ChangeCell::set), never consumed
/// by reads: it always describes the most recent write relative to the
/// value held immediately before it. Write and read the cell once per
/// refresh cycle; two writes between reads report only the second
/// transition.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChangeCell<T> {
    value: T,
    /// Set once the first write has happened
    primed: bool,
    updated: bool,
}

impl<T: Default> ChangeCell<T> {
    /// Create a cell holding the default value
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: PartialEq> ChangeCell<T> {
    /// Store a freshly polled value
    ///
    /// The first write after construction always counts as an update.
    /// Returns the new update flag.
    pub fn set(&mut self, value: T) -> bool {
        self.updated = !self.primed || self.value != value;
        self.primed = true;
        self.value = value;
        self.updated
    }
}

impl<T> ChangeCell<T> {
    /// Check if the most recent write changed the value
    pub fn is_updated(&self) -> bool {
        self.updated
    }

    /// Borrow the current value
    pub fn get_ref(&self) -> &T {
        &self.value
    }
}

impl<T: Copy> ChangeCell<T> {
    /// Get the current value
    pub fn get(&self) -> T {
        self.value
    }
}
