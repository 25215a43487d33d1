//! # byte_lists
//!
//! `byte_lists` implements the same list abstraction twice, over byte elements:
//!
//! - [`ArrayList`]: a **growable array**, one contiguous buffer that grows by a
//!   fixed increment when full.
//! - [`LinkedList`]: a **singly linked list**, one heap node per element, with a
//!   tail handle for constant time appends.
//!
//! Both implement [`List`], so either can be used wherever the abstraction is
//! expected.
//!
//! ## Complexity
//! | Operation              | `ArrayList`      | `LinkedList` |
//! |------------------------|------------------|--------------|
//! | `push_back`            | amortized `O(1)` | `O(1)`       |
//! | `get`                  | `O(1)`           | `O(n)`       |
//! | `insert` / `remove`    | `O(n)`           | `O(n)`       |
//! | `index_of`/`contains`  | `O(n)`           | `O(n)`       |
//! | `clear`                | `O(1)`           | `O(n)`       |
//!
//! ## Errors
//! Index-taking operations ([`List::get`], [`List::insert`], [`List::remove`])
//! accept indices in `[0, len)` only and fail with [`Error::IndexOutOfRange`]
//! otherwise, without touching the list. Every other operation is total.
//!
//! ## Example
//! ```rust
//! use byte_lists::{ArrayList, LinkedList, List};
//!
//! fn fill(list: &mut impl List) {
//!     list.push_back(b'a');
//!     list.push_back(b'c');
//!     list.insert(1, b'b').unwrap();
//! }
//!
//! let mut array = ArrayList::new();
//! let mut linked = LinkedList::new();
//! fill(&mut array);
//! fill(&mut linked);
//!
//! assert_eq!(array.get(1), Ok(b'b'));
//! assert_eq!(linked.get(1), Ok(b'b'));
//! assert_eq!(array.remove(0), linked.remove(0));
//! assert_eq!(array.index_of(b'c'), linked.index_of(b'c'));
//! ```

mod array_list;
mod config;
mod error;
mod linked_list;
mod node;

pub use array_list::ArrayList;
pub use config::{ArrayListConfig, DEFAULT_CAPACITY, DEFAULT_GROWTH_INCREMENT};
pub use error::{Error, Result};
pub use linked_list::LinkedList;

/// Integer sentinel reported by [`List::position`] when a value is absent.
pub const NOT_FOUND: isize = -1;

/// An ordered sequence of bytes with index based access.
pub trait List {
    /// Appends an element to the back of the list.
    fn push_back(&mut self, value: u8);

    /// Inserts an element at `index`, moving the element there and all the
    /// following ones one position towards the back.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index >= len()`.
    fn insert(&mut self, index: usize, value: u8) -> Result<()>;

    /// Removes and returns the element at `index`, moving all the following
    /// elements one position towards the front.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index >= len()`.
    fn remove(&mut self, index: usize) -> Result<u8>;

    /// Removes all elements.
    fn clear(&mut self);

    /// Returns the element at `index`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index >= len()`.
    fn get(&self, index: usize) -> Result<u8>;

    /// Returns the lowest index holding `value`, if any.
    fn index_of(&self, value: u8) -> Option<usize>;

    /// Like [`index_of`](Self::index_of), reporting absence as [`NOT_FOUND`].
    ///
    /// # Example
    /// ```rust
    /// use byte_lists::{ArrayList, List, NOT_FOUND};
    ///
    /// let list = ArrayList::from([1, 2]);
    ///
    /// assert_eq!(list.position(2), 1);
    /// assert_eq!(list.position(3), NOT_FOUND);
    /// ```
    fn position(&self, value: u8) -> isize {
        self.index_of(value)
            .and_then(|index| isize::try_from(index).ok())
            .unwrap_or(NOT_FOUND)
    }

    fn contains(&self, value: u8) -> bool {
        self.index_of(value).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn len(&self) -> usize;

    fn capacity(&self) -> usize;
}
