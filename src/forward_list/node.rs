use core::ptr::NonNull;

use alloc::boxed::Box;

/// A heap node in a forward list.
///
/// The `next` pointer is the single owning reference to the successor; a
/// node is only ever reachable through the head link of the list that
/// allocated it.
pub(super) struct Node<T> {
    pub(super) next: Option<NonNull<Node<T>>>,
    pub(super) value: T,
}

impl<T> Node<T> {
    /// Allocates a node and leaks it to the caller.
    ///
    /// Ownership passes to whichever link ends up holding the returned
    /// pointer; the node must eventually be released with
    /// [`Node::into_value`].
    pub(super) fn alloc(value: T, next: Option<NonNull<Node<T>>>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { next, value })))
    }

    /// Reclaims a node previously returned by [`Node::alloc`] and hands back
    /// its value.
    ///
    /// # Safety
    ///
    /// `node` must have come from [`Node::alloc`], must not have been
    /// reclaimed before, and must no longer be reachable from any list.
    pub(super) unsafe fn into_value(node: NonNull<Node<T>>) -> T {
        unsafe { Box::from_raw(node.as_ptr()) }.value
    }
}
