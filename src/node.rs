use std::ptr::NonNull;

/// A single heap-allocated link of a [`LinkedList`](crate::LinkedList).
///
/// A node owns its successor: the list frees a node only after unlinking it
/// from its predecessor (or from the head).
pub struct Node {
    value: u8,
    next: Option<NonNull<Node>>,
}

impl Node {
    pub fn new(value: u8) -> Self {
        Self { value, next: None }
    }

    pub fn new_with_next(value: u8, next: Option<NonNull<Node>>) -> Self {
        Self { value, next }
    }

    /// Moves the node to the heap and hands its ownership to the caller.
    pub fn into_raw(self) -> NonNull<Node> {
        NonNull::from(Box::leak(Box::new(self)))
    }

    /// Takes back ownership of a node produced by [`Node::into_raw`].
    ///
    /// # Safety
    /// `node` must come from [`Node::into_raw`], must not be reachable from any
    /// list anymore and must not have been reclaimed already.
    pub unsafe fn from_raw(node: NonNull<Node>) -> Box<Node> {
        unsafe { Box::from_raw(node.as_ptr()) }
    }

    #[inline]
    pub fn value(&self) -> u8 {
        self.value
    }

    #[inline]
    pub fn next(&self) -> Option<NonNull<Node>> {
        self.next
    }

    #[inline]
    pub fn set_next(&mut self, next: Option<NonNull<Node>>) {
        self.next = next;
    }
}
