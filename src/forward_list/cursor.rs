use core::fmt;
use core::ptr::{self, NonNull};

use super::list::ForwardList;
use super::node::Node;

/// Where a cursor currently sits within its list.
///
/// The anchor is a distinct variant rather than a stored dummy node, so a
/// cursor seated there can never be dereferenced.
enum Seat<T> {
    /// Before the first element. Holds no value; only valid as a splice
    /// anchor.
    Anchor,
    /// On a real element.
    Node(NonNull<Node<T>>),
    /// Past the last element.
    End,
}

impl<T> Seat<T> {
    /// The node following this seat, given the owning list's head link.
    ///
    /// # Safety
    ///
    /// A `Node` seat must point into the chain currently owned by the list
    /// `head` belongs to.
    unsafe fn successor(self, head: Option<NonNull<Node<T>>>) -> Option<NonNull<Node<T>>> {
        match self {
            Seat::Anchor => head,
            Seat::Node(node) => unsafe { (*node.as_ptr()).next },
            Seat::End => None,
        }
    }

    /// The seat one step forward. Stepping from the end stays at the end.
    ///
    /// # Safety
    ///
    /// Same requirement as [`Seat::successor`].
    unsafe fn advance(self, head: Option<NonNull<Node<T>>>) -> Seat<T> {
        match self {
            Seat::End => Seat::End,
            seat => unsafe { seat.successor(head) }.map_or(Seat::End, Seat::Node),
        }
    }
}

impl<T> Clone for Seat<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Seat<T> {}

impl<T> PartialEq for Seat<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Seat::Anchor, Seat::Anchor) | (Seat::End, Seat::End) => true,
            (Seat::Node(a), Seat::Node(b)) => a == b,
            _ => false,
        }
    }
}

impl<T> Eq for Seat<T> {}

/// A read-only position within a [`ForwardList`].
///
/// Starts on the before-head anchor and moves forward only. Two cursors
/// compare equal iff they belong to the same list and sit on the identical
/// node (or both sit on the anchor, or both past the end).
pub struct Cursor<'a, T> {
    seat: Seat<T>,
    list: &'a ForwardList<T>,
}

impl<'a, T> Cursor<'a, T> {
    pub(super) fn new(list: &'a ForwardList<T>) -> Self {
        Cursor {
            seat: Seat::Anchor,
            list,
        }
    }

    /// Steps to the next position. Stepping past the end is a no-op.
    pub fn move_next(&mut self) {
        // Node seats always come from this list's live chain, which the
        // shared borrow keeps intact.
        self.seat = unsafe { self.seat.advance(self.list.head) };
    }

    /// Returns the element under the cursor, or `None` on the anchor or
    /// past the end.
    pub fn current(&self) -> Option<&'a T> {
        match self.seat {
            Seat::Node(node) => Some(unsafe { &(*node.as_ptr()).value }),
            _ => None,
        }
    }

    /// Returns the element following the cursor without moving.
    pub fn peek_next(&self) -> Option<&'a T> {
        let next = unsafe { self.seat.successor(self.list.head) };
        next.map(|node| unsafe { &(*node.as_ptr()).value })
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.list, other.list) && self.seat == other.seat
    }
}

impl<T> Eq for Cursor<'_, T> {}

/// A mutating position within a [`ForwardList`].
///
/// Holds the list exclusively, so no other position into the same list can
/// exist while the cursor is alive; splices therefore never race with reads
/// or invalidate foreign positions.
pub struct CursorMut<'a, T> {
    seat: Seat<T>,
    list: &'a mut ForwardList<T>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(super) fn new(list: &'a mut ForwardList<T>) -> Self {
        CursorMut {
            seat: Seat::Anchor,
            list,
        }
    }

    /// Steps to the next position. Stepping past the end is a no-op.
    pub fn move_next(&mut self) {
        self.seat = unsafe { self.seat.advance(self.list.head) };
    }

    /// Returns the element under the cursor, or `None` on the anchor or
    /// past the end.
    pub fn current(&mut self) -> Option<&mut T> {
        match self.seat {
            Seat::Node(node) => Some(unsafe { &mut (*node.as_ptr()).value }),
            _ => None,
        }
    }

    /// Returns the element following the cursor without moving.
    pub fn peek_next(&mut self) -> Option<&mut T> {
        let next = unsafe { self.seat.successor(self.list.head) };
        next.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Splices a new element in right after the cursor. O(1).
    ///
    /// On the anchor this is equivalent to [`ForwardList::push_front`]. The
    /// cursor does not move, so the new element becomes its successor and is
    /// reachable via [`CursorMut::peek_next`] or one `move_next`.
    ///
    /// # Panics
    ///
    /// Panics when the cursor sits past the end of the list.
    pub fn insert_after(&mut self, value: T) {
        match self.seat {
            Seat::Anchor => self.list.push_front(value),
            Seat::Node(node) => unsafe {
                let node = &mut *node.as_ptr();
                node.next = Some(Node::alloc(value, node.next));
                self.list.len += 1;
            },
            Seat::End => panic!("insert after the end of a forward list"),
        }
    }

    /// Unlinks the element right after the cursor and returns it, or `None`
    /// when the cursor has no successor. O(1).
    ///
    /// The cursor does not move; whatever followed the removed element is
    /// its successor afterwards.
    pub fn remove_after(&mut self) -> Option<T> {
        unsafe {
            let doomed = self.seat.successor(self.list.head)?;
            let after = (*doomed.as_ptr()).next;
            match self.seat {
                Seat::Anchor => self.list.head = after,
                Seat::Node(node) => (*node.as_ptr()).next = after,
                Seat::End => unreachable!(),
            }
            self.list.len -= 1;
            Some(Node::into_value(doomed))
        }
    }

    /// A read-only cursor at the same position, usable for comparisons while
    /// the mutable borrow stays alive.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            seat: self.seat,
            list: &*self.list,
        }
    }
}

impl<T> fmt::Debug for Seat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Anchor => f.write_str("Anchor"),
            Seat::Node(node) => f.debug_tuple("Node").field(node).finish(),
            Seat::End => f.write_str("End"),
        }
    }
}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("seat", &self.seat).finish()
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut").field("seat", &self.seat).finish()
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}
unsafe impl<T: Sync> Sync for Cursor<'_, T> {}
unsafe impl<T: Send> Send for CursorMut<'_, T> {}
unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}
