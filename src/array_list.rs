use std::num::NonZeroUsize;

use tracing::{debug, trace};

use crate::List;
use crate::config::ArrayListConfig;
use crate::error::{Result, check_index};

/// A list of bytes stored in one contiguous, growable buffer.
///
/// # Features
/// - **Contiguous Storage**: `O(1)` indexed access, `O(n)` insertion and removal
///   in the middle of the list.
/// - **Linear Growth**: when full, the buffer grows by a fixed increment
///   (10 slots unless configured otherwise). Capacity never shrinks.
///
/// # Example
/// ```rust
/// use byte_lists::ArrayList;
///
/// let mut list = ArrayList::new();
/// list.push_back(b'a');
/// list.push_back(b'b');
/// list.push_back(b'c');
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.get(1), Ok(b'b'));
/// assert_eq!(list.index_of(b'c'), Some(2));
///
/// assert_eq!(list.remove(0), Ok(b'a'));
/// assert_eq!(list.get(0), Ok(b'b'));
/// assert_eq!(list.len(), 2);
/// ```
#[derive(Clone)]
pub struct ArrayList {
    buffer: Box<[u8]>,
    len: usize,
    growth_increment: NonZeroUsize,
}

impl<const M: usize> From<[u8; M]> for ArrayList {
    fn from(values: [u8; M]) -> Self {
        values.into_iter().collect()
    }
}

impl FromIterator<u8> for ArrayList {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl Extend<u8> for ArrayList {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push_back(value));
    }
}

impl<'a> Extend<&'a u8> for ArrayList {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl Default for ArrayList {
    fn default() -> Self {
        Self::new()
    }
}

impl ArrayList {
    /// Creates a new, empty `ArrayList` with the default capacity of 10 slots.
    ///
    /// # Example
    /// ```rust
    /// use byte_lists::ArrayList;
    ///
    /// let list = ArrayList::new();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 10);
    /// ```
    pub fn new() -> Self {
        Self::with_config(ArrayListConfig::default())
    }

    /// Creates a new, empty `ArrayList` with room for `capacity` elements.
    ///
    /// # Example
    /// ```rust
    /// use byte_lists::ArrayList;
    ///
    /// let mut list = ArrayList::with_capacity(2);
    /// list.push_back(1);
    /// list.push_back(2);
    /// list.push_back(3);
    ///
    /// assert_eq!(list.capacity(), 12);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(ArrayListConfig::default().with_initial_capacity(capacity))
    }

    /// Creates a new, empty `ArrayList` sized and tuned by `config`.
    pub fn with_config(config: ArrayListConfig) -> Self {
        Self {
            buffer: vec![0; config.initial_capacity].into_boxed_slice(),
            len: 0,
            growth_increment: config.growth_increment,
        }
    }

    /// Appends an element to the back of the `ArrayList`.
    ///
    /// Runs in amortized `O(1)`; when the buffer is full it is first grown
    /// by the growth increment, which costs `O(n)`.
    ///
    /// # Example
    /// ```rust
    /// use byte_lists::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    /// list.push_back(10);
    /// list.push_back(20);
    ///
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.get(1), Ok(20));
    /// ```
    pub fn push_back(&mut self, value: u8) {
        if self.len == self.capacity() {
            self.grow();
        }

        self.buffer[self.len] = value;
        self.len += 1;
    }

    /// Inserts an element at `index`, shifting all elements after it to the right.
    ///
    /// `index` must address an existing element: inserting at `len()` is
    /// rejected, use [`push_back`](Self::push_back) to append.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if
    /// `index >= len()`; the list is left untouched.
    ///
    /// # Example
    /// ```rust
    /// use byte_lists::ArrayList;
    ///
    /// let mut list = ArrayList::from([10, 30]);
    /// list.insert(1, 20).unwrap();
    ///
    /// assert_eq!(list, [10, 20, 30]);
    /// assert!(list.insert(3, 40).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: u8) -> Result<()> {
        check_index(index, self.len)?;

        if self.len == self.capacity() {
            self.grow();
        }

        self.buffer.copy_within(index..self.len, index + 1);
        self.buffer[index] = value;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting all elements after it to the left.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if
    /// `index >= len()`; the list is left untouched.
    ///
    /// # Example
    /// ```rust
    /// use byte_lists::ArrayList;
    ///
    /// let mut list = ArrayList::from([10, 20, 30, 40]);
    ///
    /// assert_eq!(list.remove(1), Ok(20));
    /// assert_eq!(list.get(1), Ok(30));
    /// assert_eq!(list.len(), 3);
    /// assert!(list.remove(3).is_err());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<u8> {
        check_index(index, self.len)?;

        let value = self.buffer[index];
        // `index + 1..len` stays within the buffer, slot `len` is never read.
        self.buffer.copy_within(index + 1..self.len, index);
        self.len -= 1;
        Ok(value)
    }

    /// Removes all elements. The capacity is left as is.
    ///
    /// # Example
    /// ```rust
    /// use byte_lists::ArrayList;
    ///
    /// let mut list = ArrayList::from([1, 2, 3]);
    /// list.clear();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 10);
    /// ```
    pub fn clear(&mut self) {
        trace!(len = self.len, "clearing array list");
        self.len = 0;
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if
    /// `index >= len()`.
    ///
    /// # Example
    /// ```rust
    /// use byte_lists::{ArrayList, Error};
    ///
    /// let list = ArrayList::from([10, 20]);
    ///
    /// assert_eq!(list.get(0), Ok(10));
    /// assert_eq!(list.get(1), Ok(20));
    /// assert_eq!(list.get(2), Err(Error::IndexOutOfRange { index: 2, size: 2 }));
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<u8> {
        check_index(index, self.len)?;
        Ok(self.buffer[index])
    }

    /// Returns the index of the first element equal to `value`, if any.
    ///
    /// # Example
    /// ```rust
    /// use byte_lists::ArrayList;
    ///
    /// let list = ArrayList::from([7, 8, 7]);
    ///
    /// assert_eq!(list.index_of(7), Some(0));
    /// assert_eq!(list.index_of(8), Some(1));
    /// assert_eq!(list.index_of(9), None);
    /// ```
    pub fn index_of(&self, value: u8) -> Option<usize> {
        self.as_slice().iter().position(|&element| element == value)
    }

    /// Returns `true` if some element is equal to `value`.
    #[inline]
    pub fn contains(&self, value: u8) -> bool {
        self.index_of(value).is_some()
    }

    /// Returns the number of elements currently stored in the `ArrayList`.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if the `ArrayList` is empty.
    ///
    /// # Example
    /// ```rust
    /// use byte_lists::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_back(1);
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots, never less than [`len`](Self::len).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the number of slots added on each reallocation.
    #[inline]
    pub const fn growth_increment(&self) -> NonZeroUsize {
        self.growth_increment
    }

    /// Returns the stored elements as a slice.
    ///
    /// # Example
    /// ```rust
    /// use byte_lists::ArrayList;
    ///
    /// let mut list = ArrayList::with_capacity(4);
    /// list.push_back(b'x');
    /// list.push_back(b'y');
    ///
    /// assert_eq!(list.as_slice(), b"xy");
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer[..self.len]
    }

    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity + self.growth_increment.get();
        debug_assert!(new_capacity > old_capacity);

        let mut buffer = vec![0; new_capacity].into_boxed_slice();
        buffer[..self.len].copy_from_slice(self.as_slice());
        self.buffer = buffer;

        debug!(
            old_capacity,
            new_capacity,
            len = self.len,
            "grew array list"
        );
    }
}

impl List for ArrayList {
    #[inline]
    fn push_back(&mut self, value: u8) {
        ArrayList::push_back(self, value)
    }

    #[inline]
    fn insert(&mut self, index: usize, value: u8) -> Result<()> {
        ArrayList::insert(self, index, value)
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Result<u8> {
        ArrayList::remove(self, index)
    }

    #[inline]
    fn clear(&mut self) {
        ArrayList::clear(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Result<u8> {
        ArrayList::get(self, index)
    }

    #[inline]
    fn index_of(&self, value: u8) -> Option<usize> {
        ArrayList::index_of(self, value)
    }

    #[inline]
    fn len(&self) -> usize {
        ArrayList::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        ArrayList::capacity(self)
    }
}

impl<const M: usize> PartialEq<[u8; M]> for ArrayList {
    fn eq(&self, other: &[u8; M]) -> bool {
        self.as_slice() == other
    }
}

impl PartialEq<&[u8]> for ArrayList {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_slice() == *other
    }
}

impl PartialEq<[u8]> for ArrayList {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_slice() == other
    }
}

impl PartialEq for ArrayList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for ArrayList {}

impl std::fmt::Debug for ArrayList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
