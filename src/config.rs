use std::num::NonZeroUsize;

/// Capacity of an [`ArrayList`](crate::ArrayList) built with `new()`.
pub const DEFAULT_CAPACITY: usize = 10;

/// Slots added to an [`ArrayList`](crate::ArrayList) each time it runs out of room.
pub const DEFAULT_GROWTH_INCREMENT: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(increment) => increment,
    None => unreachable!(),
};

/// Tuning knobs of an [`ArrayList`](crate::ArrayList).
///
/// # Example
/// ```rust
/// use std::num::NonZeroUsize;
///
/// use byte_lists::{ArrayList, ArrayListConfig};
///
/// let config = ArrayListConfig::default()
///     .with_initial_capacity(2)
///     .with_growth_increment(NonZeroUsize::new(4).unwrap());
///
/// let mut list = ArrayList::with_config(config);
/// list.push_back(b'a');
/// list.push_back(b'b');
/// list.push_back(b'c');
///
/// assert_eq!(list.capacity(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArrayListConfig {
    /// Slots allocated at construction.
    pub initial_capacity: usize,
    /// Additional capacity allocated per reallocation.
    pub growth_increment: NonZeroUsize,
}

impl Default for ArrayListConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            growth_increment: DEFAULT_GROWTH_INCREMENT,
        }
    }
}

impl ArrayListConfig {
    #[must_use]
    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    #[must_use]
    pub const fn with_growth_increment(mut self, growth_increment: NonZeroUsize) -> Self {
        self.growth_increment = growth_increment;
        self
    }
}
