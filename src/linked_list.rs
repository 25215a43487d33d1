use std::marker::PhantomData;
use std::ptr::NonNull;

use tracing::trace;

use crate::List;
use crate::error::{Result, check_index};
use crate::node::Node;

/// A singly linked list of bytes.
///
/// # Features
/// - **Individual Nodes**: every element lives in its own heap allocation,
///   linked to its successor.
/// - **Tail Handle**: `O(1)` appends, `O(n)` indexed access, insertion and removal.
///
/// The capacity of a `LinkedList` is always equal to its length, as nodes are
/// allocated on demand.
///
/// # Example
/// ```rust
/// use byte_lists::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.push_back(b'a');
/// list.push_back(b'c');
/// list.insert(1, b'b').unwrap();
///
/// assert_eq!(list, *b"abc");
/// assert_eq!(list.remove(0), Ok(b'a'));
/// assert_eq!(list.index_of(b'c'), Some(1));
/// ```
pub struct LinkedList {
    head: Option<NonNull<Node>>,
    tail: Option<NonNull<Node>>,
    len: usize,
    marker: PhantomData<Box<Node>>,
}

impl<const M: usize> From<[u8; M]> for LinkedList {
    fn from(values: [u8; M]) -> Self {
        values.into_iter().collect()
    }
}

impl FromIterator<u8> for LinkedList {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl Extend<u8> for LinkedList {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push_back(value));
    }
}

impl<'a> Extend<&'a u8> for LinkedList {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl Default for LinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkedList {
    /// Creates a new, empty `LinkedList`. No node is allocated.
    ///
    /// # Example
    /// ```rust
    /// use byte_lists::LinkedList;
    ///
    /// let list = LinkedList::new();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 0);
    /// ```
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Appends an element to the back of the `LinkedList` in `O(1)`.
    ///
    /// # Example
    /// ```rust
    /// use byte_lists::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.push_back(10);
    /// list.push_back(20);
    ///
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.get(0), Ok(10));
    /// assert_eq!(list.get(1), Ok(20));
    /// ```
    pub fn push_back(&mut self, value: u8) {
        let node = Node::new(value).into_raw();

        match self.tail {
            // SAFETY: the tail is a live node owned by this list.
            Some(mut tail) => unsafe { tail.as_mut().set_next(Some(node)) },
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.len += 1;
    }

    /// Inserts an element at `index`, before the element currently there.
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
    /// use byte_lists::LinkedList;
    ///
    /// let mut list = LinkedList::from([10, 30]);
    /// list.insert(1, 20).unwrap();
    /// list.insert(0, 0).unwrap();
    ///
    /// assert_eq!(list, [0, 10, 20, 30]);
    /// assert!(list.insert(4, 40).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: u8) -> Result<()> {
        check_index(index, self.len)?;

        match index.checked_sub(1).and_then(|index| self.find_node_by_index(index)) {
            Some(mut prev) => {
                // SAFETY: `prev` is a live node owned by this list.
                let prev = unsafe { prev.as_mut() };
                let node = Node::new_with_next(value, prev.next()).into_raw();
                prev.set_next(Some(node));
            }
            None => {
                let node = Node::new_with_next(value, self.head).into_raw();
                self.head = Some(node);
            }
        }

        // `index < len`, so the new node always has a successor and the tail is unchanged.
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if
    /// `index >= len()`; the list is left untouched.
    ///
    /// # Example
    /// ```rust
    /// use byte_lists::LinkedList;
    ///
    /// let mut list = LinkedList::from([10, 20, 30]);
    ///
    /// assert_eq!(list.remove(2), Ok(30));
    /// assert_eq!(list.remove(0), Ok(10));
    /// assert_eq!(list, [20]);
    /// assert!(list.remove(1).is_err());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<u8> {
        check_index(index, self.len)?;

        let prev = index
            .checked_sub(1)
            .and_then(|index| self.find_node_by_index(index));

        let Some(node) = self.unlink_after(prev) else {
            unreachable!("index {index} is below len {}", self.len);
        };

        Ok(node.value())
    }

    /// Removes all elements, freeing every node.
    ///
    /// # Example
    /// ```rust
    /// use byte_lists::LinkedList;
    ///
    /// let mut list = LinkedList::from([1, 2, 3]);
    /// list.clear();
    ///
    /// assert!(list.is_empty());
    /// assert!(list.get(0).is_err());
    /// ```
    pub fn clear(&mut self) {
        trace!(len = self.len, "clearing linked list");

        for _ in 0..self.len {
            drop(self.unlink_after(None));
        }

        debug_assert!(self.head.is_none() && self.tail.is_none());
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Returns the element at `index`, walking `index` links from the head.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if
    /// `index >= len()`.
    ///
    /// # Example
    /// ```rust
    /// use byte_lists::{Error, LinkedList};
    ///
    /// let list = LinkedList::from([10, 20]);
    ///
    /// assert_eq!(list.get(1), Ok(20));
    /// assert_eq!(list.get(2), Err(Error::IndexOutOfRange { index: 2, size: 2 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<u8> {
        check_index(index, self.len)?;

        let Some(node) = self.find_node_by_index(index) else {
            unreachable!("index {index} is below len {}", self.len);
        };

        // SAFETY: `node` is a live node owned by this list.
        Ok(unsafe { node.as_ref() }.value())
    }

    /// Returns the index of the first element equal to `value`, if any.
    ///
    /// # Example
    /// ```rust
    /// use byte_lists::LinkedList;
    ///
    /// let list = LinkedList::from([7, 8, 7]);
    ///
    /// assert_eq!(list.index_of(7), Some(0));
    /// assert_eq!(list.index_of(8), Some(1));
    /// assert_eq!(list.index_of(9), None);
    /// ```
    pub fn index_of(&self, value: u8) -> Option<usize> {
        self.find_node_by_value(value).map(|(index, _)| index)
    }

    /// Returns `true` if some element is equal to `value`.
    #[inline]
    pub fn contains(&self, value: u8) -> bool {
        self.find_node_by_value(value).is_some()
    }

    /// Returns the number of elements currently stored in the `LinkedList`.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if the `LinkedList` is empty.
    ///
    /// # Example
    /// ```rust
    /// use byte_lists::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_back(1);
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Same as [`len`](Self::len): nodes are never allocated ahead of time.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.len
    }

    /// Walks exactly `len` nodes from the head.
    fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        // SAFETY: every link reachable within `len` steps points to a live node
        // owned by this list, which stays borrowed for the iterator's lifetime.
        std::iter::successors(self.head.map(|node| unsafe { node.as_ref() }), |node| {
            node.next().map(|next| unsafe { next.as_ref() })
        })
        .take(self.len)
    }

    /// Returns the first node holding `value`, along with its index.
    fn find_node_by_value(&self, value: u8) -> Option<(usize, &Node)> {
        self.nodes()
            .enumerate()
            .find(|(_, node)| node.value() == value)
    }

    /// Returns the node at `index`, which must be below `len`.
    fn find_node_by_index(&self, index: usize) -> Option<NonNull<Node>> {
        debug_assert!(index < self.len);

        let mut node = self.head?;
        for _ in 0..index {
            // SAFETY: `node` is a live node owned by this list.
            node = unsafe { node.as_ref() }.next()?;
        }

        Some(node)
    }

    /// Unlinks the successor of `prev`, or the head when `prev` is `None`,
    /// and hands its ownership back.
    fn unlink_after(&mut self, prev: Option<NonNull<Node>>) -> Option<Box<Node>> {
        let node = match prev {
            // SAFETY: `prev` is a live node owned by this list.
            Some(prev) => unsafe { prev.as_ref() }.next()?,
            None => self.head?,
        };

        // SAFETY: `node` is about to be unlinked, nothing else refers to it afterwards.
        let node_ref = unsafe { node.as_ref() };
        match prev {
            // SAFETY: as above, and `prev` is distinct from `node`.
            Some(mut prev) => unsafe { prev.as_mut() }.set_next(node_ref.next()),
            None => self.head = node_ref.next(),
        }

        if self.tail == Some(node) {
            self.tail = prev;
        }

        self.len -= 1;

        // SAFETY: `node` came from `Node::into_raw` and is no longer reachable.
        Some(unsafe { Node::from_raw(node) })
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl List for LinkedList {
    #[inline]
    fn push_back(&mut self, value: u8) {
        LinkedList::push_back(self, value)
    }

    #[inline]
    fn insert(&mut self, index: usize, value: u8) -> Result<()> {
        LinkedList::insert(self, index, value)
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Result<u8> {
        LinkedList::remove(self, index)
    }

    #[inline]
    fn clear(&mut self) {
        LinkedList::clear(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Result<u8> {
        LinkedList::get(self, index)
    }

    #[inline]
    fn index_of(&self, value: u8) -> Option<usize> {
        LinkedList::index_of(self, value)
    }

    #[inline]
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        LinkedList::capacity(self)
    }
}

impl Clone for LinkedList {
    fn clone(&self) -> Self {
        self.nodes().map(Node::value).collect()
    }
}

impl<const M: usize> PartialEq<[u8; M]> for LinkedList {
    fn eq(&self, other: &[u8; M]) -> bool {
        self == other.as_slice()
    }
}

impl PartialEq<&[u8]> for LinkedList {
    fn eq(&self, other: &&[u8]) -> bool {
        self == *other
    }
}

impl PartialEq<[u8]> for LinkedList {
    fn eq(&self, other: &[u8]) -> bool {
        self.len() == other.len() && self.nodes().map(Node::value).eq(other.iter().copied())
    }
}

impl PartialEq for LinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.nodes().map(Node::value).eq(other.nodes().map(Node::value))
    }
}

impl Eq for LinkedList {}

impl std::fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.nodes().map(Node::value)).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use quickcheck_macros::quickcheck;

    use crate::node::Node;
    use crate::{Error, LinkedList};

    /// Follows exactly `len` links and checks they end on the tail.
    fn assert_links(sut: &LinkedList) {
        assert_eq!(sut.head.is_none(), sut.len == 0);
        assert_eq!(sut.tail.is_none(), sut.len == 0);

        let mut last = None;
        let mut node = sut.head;
        for _ in 0..sut.len {
            let current = node.expect("chain is shorter than len");
            last = Some(current);
            node = unsafe { current.as_ref() }.next();
        }

        assert!(node.is_none(), "chain is longer than len");
        assert_eq!(last, sut.tail);
    }

    #[test]
    fn test_new_creates_empty_linked_list() {
        let sut = LinkedList::new();
        assert!(sut.is_empty());
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.capacity(), 0);
        assert_links(&sut);
    }

    #[test]
    fn test_default_creates_empty_linked_list() {
        let sut = LinkedList::default();
        assert!(sut.is_empty());
        assert_eq!(sut.len(), 0);
        assert_links(&sut);
    }

    #[test]
    fn test_push_back_on_empty_list_sets_head_and_tail() {
        let mut sut = LinkedList::new();
        sut.push_back(10);

        assert!(!sut.is_empty());
        assert_eq!(sut.len(), 1);
        assert_eq!(sut.head, sut.tail);
        assert_eq!(sut.get(0), Ok(10));
        assert_links(&sut);
    }

    #[test]
    fn test_push_back_adds_element_to_back() {
        let mut sut = LinkedList::new();
        for value in [10, 20, 30, 40] {
            sut.push_back(value);
            assert_eq!(sut.get(sut.len() - 1), Ok(value));
            assert_eq!(sut.capacity(), sut.len());
            assert_links(&sut);
        }

        assert_eq!(sut, [10, 20, 30, 40]);
    }

    #[test]
    fn test_insert_splices_before_index() {
        let mut sut = LinkedList::from([10, 20, 30]);

        sut.insert(0, 5).unwrap();
        assert_eq!(sut, [5, 10, 20, 30]);
        assert_links(&sut);

        sut.insert(2, 15).unwrap();
        assert_eq!(sut, [5, 10, 15, 20, 30]);
        assert_links(&sut);

        sut.insert(4, 25).unwrap();
        assert_eq!(sut, [5, 10, 15, 20, 25, 30]);
        assert_links(&sut);

        sut.push_back(35);
        assert_eq!(sut, [5, 10, 15, 20, 25, 30, 35]);
        assert_links(&sut);
    }

    #[test]
    fn test_insert_out_of_range_leaves_list_untouched() {
        let mut sut = LinkedList::new();
        assert_eq!(
            sut.insert(0, 1),
            Err(Error::IndexOutOfRange { index: 0, size: 0 })
        );
        assert_links(&sut);

        sut.extend([1, 2]);
        assert_eq!(
            sut.insert(2, 3),
            Err(Error::IndexOutOfRange { index: 2, size: 2 })
        );
        assert_eq!(
            sut.insert(3, 3),
            Err(Error::IndexOutOfRange { index: 3, size: 2 })
        );
        assert_eq!(sut, [1, 2]);
        assert_links(&sut);
    }

    #[test]
    fn test_remove_unlinks_node_at_index() {
        let mut sut = LinkedList::from([10, 20, 30, 40, 50]);

        assert_eq!(sut.remove(1), Ok(20));
        assert_eq!(sut, [10, 30, 40, 50]);
        assert_links(&sut);

        assert_eq!(sut.remove(3), Ok(50));
        assert_eq!(sut, [10, 30, 40]);
        assert_links(&sut);

        assert_eq!(sut.remove(0), Ok(10));
        assert_eq!(sut, [30, 40]);
        assert_links(&sut);

        assert_eq!(sut.remove(1), Ok(40));
        assert_eq!(sut.remove(0), Ok(30));
        assert!(sut.is_empty());
        assert_links(&sut);
    }

    #[test]
    fn test_push_back_after_removing_tail() {
        let mut sut = LinkedList::from([1, 2, 3]);
        assert_eq!(sut.remove(2), Ok(3));
        sut.push_back(4);
        assert_eq!(sut, [1, 2, 4]);
        assert_links(&sut);

        assert_eq!(sut.remove(0), Ok(1));
        assert_eq!(sut.remove(0), Ok(2));
        assert_eq!(sut.remove(0), Ok(4));
        sut.push_back(5);
        assert_eq!(sut, [5]);
        assert_links(&sut);
    }

    #[test]
    fn test_remove_from_list_at_every_index() {
        for index in 0..10 {
            let mut sut: LinkedList = (0..10).collect();

            assert_eq!(sut.remove(index), Ok(index as u8));
            assert_eq!(sut.len(), 9);
            assert_links(&sut);

            let expected: Vec<u8> = (0..10).filter(|&v| v != index as u8).collect();
            assert_eq!(sut, expected.as_slice());
        }
    }

    #[test]
    fn test_remove_out_of_range_leaves_list_untouched() {
        let mut sut = LinkedList::from([1, 2, 3]);
        assert_eq!(
            sut.remove(3),
            Err(Error::IndexOutOfRange { index: 3, size: 3 })
        );
        assert_eq!(sut, [1, 2, 3]);
        assert_links(&sut);
    }

    #[test]
    fn test_clear_frees_every_node() {
        let mut sut = LinkedList::from([1, 2, 3]);

        sut.clear();
        assert_eq!(sut.len(), 0);
        assert!(sut.is_empty());
        assert_eq!(
            sut.get(0),
            Err(Error::IndexOutOfRange { index: 0, size: 0 })
        );
        assert_links(&sut);

        sut.clear();
        assert!(sut.is_empty());

        sut.push_back(4);
        assert_eq!(sut, [4]);
        assert_links(&sut);
    }

    #[test]
    fn test_get_walks_to_index() {
        let sut = LinkedList::from([b'a', b'b', b'c']);
        assert_eq!(sut.get(0), Ok(b'a'));
        assert_eq!(sut.get(1), Ok(b'b'));
        assert_eq!(sut.get(2), Ok(b'c'));
        assert_eq!(
            sut.get(3),
            Err(Error::IndexOutOfRange { index: 3, size: 3 })
        );
    }

    #[test]
    fn test_find_node_helpers() {
        let sut = LinkedList::from([3, 1, 4, 1, 5]);

        let (index, node) = sut.find_node_by_value(1).unwrap();
        assert_eq!(index, 1);
        assert_eq!(node.value(), 1);
        assert!(sut.find_node_by_value(9).is_none());

        let node = sut.find_node_by_index(4).unwrap();
        assert_eq!(Some(node), sut.tail);
        assert_eq!(unsafe { node.as_ref() }.value(), 5);
    }

    #[test]
    fn test_index_of_and_contains_scan_from_front() {
        let mut sut = LinkedList::new();
        assert_eq!(sut.index_of(1), None);
        assert!(!sut.contains(1));

        sut.extend([3, 1, 4, 1, 5]);
        assert_eq!(sut.index_of(1), Some(1));
        assert_eq!(sut.index_of(5), Some(4));
        assert_eq!(sut.index_of(9), None);
        assert!(sut.contains(3));
        assert!(!sut.contains(9));
    }

    #[test]
    fn test_clone_is_independent() {
        let sut = LinkedList::from([1, 2, 3]);
        let mut cloned = sut.clone();
        assert_eq!(sut, cloned);
        assert_links(&cloned);

        cloned.push_back(4);
        assert_eq!(cloned.remove(0), Ok(1));
        assert_ne!(sut, cloned);
        assert_eq!(sut, [1, 2, 3]);
    }

    #[test]
    fn test_debug_works_correctly() {
        let sut = LinkedList::from([1, 2, 3]);
        assert_eq!(format!("{sut:?}"), "[1, 2, 3]");
    }

    #[test]
    fn test_drop_long_list_does_not_overflow_stack() {
        let sut: LinkedList = std::iter::repeat_n(7, 100_000).collect();
        assert_eq!(sut.len(), 100_000);
        drop(sut);
    }

    #[test]
    fn test_node_size() {
        assert_eq!(size_of::<Node>(), size_of::<usize>() * 2);
    }

    #[quickcheck]
    fn test_linked_list_behavioural(seed: Vec<u8>) {
        let mut expected: VecDeque<u8> = seed.iter().copied().collect();
        let mut actual: LinkedList = seed.iter().copied().collect();

        for _ in 0..64 {
            let len = expected.len();

            assert_eq!(expected.is_empty(), actual.is_empty());
            assert_eq!(expected.len(), actual.len());
            assert_eq!(actual.capacity(), actual.len());
            assert_eq!(actual, expected.make_contiguous() as &[_]);
            assert_links(&actual);

            match rand::random_range(0..=5) {
                0 => {
                    let value = rand::random();
                    expected.push_back(value);
                    actual.push_back(value);
                }
                1 => {
                    let index = rand::random_range(0..=len);
                    let value = rand::random();
                    if index < len {
                        expected.insert(index, value);
                        assert_eq!(actual.insert(index, value), Ok(()));
                    } else {
                        assert!(actual.insert(index, value).is_err());
                    }
                }
                2 => {
                    let index = rand::random_range(0..=len);
                    assert_eq!(expected.remove(index), actual.remove(index).ok());
                }
                3 => {
                    let index = rand::random_range(0..=len);
                    assert_eq!(expected.get(index).copied(), actual.get(index).ok());
                }
                4 => {
                    let value = rand::random();
                    let position = expected.iter().position(|&element| element == value);
                    assert_eq!(position, actual.index_of(value));
                    assert_eq!(position.is_some(), actual.contains(value));
                }
                5 => {
                    if rand::random_range(0..8) == 0 {
                        expected.clear();
                        actual.clear();
                    }
                }
                _ => unreachable!(),
            }
        }
    }
}
