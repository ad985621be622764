#![no_std]

//! Sequence collections built on exclusively owned node chains.
//!
//! The crate currently provides [`forward_list::ForwardList`], a singly
//! linked list with cursor-based splicing.

extern crate alloc;

pub mod forward_list;
