extern crate std;

use std::vec;

use alloc::format;
use alloc::vec::Vec;

use core::hash::BuildHasher;

use hashbrown::DefaultHashBuilder;

use crate::forward_list::ForwardList;

#[test]
fn test_equality_elementwise_in_order() {
    let a = ForwardList::from([1, 2, 3]);
    let b = ForwardList::from([1, 2, 3]);
    assert_eq!(a, b);

    let shorter = ForwardList::from([1, 2]);
    assert_ne!(a, shorter);

    let reordered = ForwardList::from([3, 2, 1]);
    assert_ne!(a, reordered);

    let empty: ForwardList<i32> = ForwardList::new();
    assert_eq!(empty, ForwardList::new());
}

#[test]
fn test_lexicographic_ordering() {
    let abc = ForwardList::from([1, 2, 3]);

    // A strict prefix is less.
    assert!(ForwardList::from([1, 2]) < abc);
    assert!(ForwardList::from([]) < ForwardList::from([1]));

    // The first differing element decides, regardless of length.
    assert!(ForwardList::from([1, 3]) > abc);
    assert!(ForwardList::from([0, 9, 9, 9]) < abc);
}

#[test]
fn test_derived_comparison_operators() {
    let a = ForwardList::from([1, 2]);
    let b = ForwardList::from([1, 2, 3]);

    assert!(a <= b);
    assert!(a <= a.clone());
    assert!(b > a);
    assert!(b >= a);
    assert!(b >= b.clone());
    assert!(!(a > b));
}

#[test]
fn test_ord_sorts_lists() {
    let mut lists = vec![
        ForwardList::from([2]),
        ForwardList::from([1, 2, 3]),
        ForwardList::from([]),
        ForwardList::from([1, 3]),
    ];
    lists.sort();

    let sorted: Vec<Vec<i32>> = lists
        .iter()
        .map(|list| list.iter().copied().collect())
        .collect();
    assert_eq!(
        sorted,
        vec![vec![], vec![1, 2, 3], vec![1, 3], vec![2]]
    );
}

#[test]
fn test_clone_is_deep_and_independent() {
    let original = ForwardList::from([1, 2, 3]);
    let mut copy = original.clone();
    assert_eq!(original, copy);

    copy.push_front(0);
    assert_eq!(original.len(), 3);
    assert_eq!(copy.len(), 4);
    assert_eq!(original.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

    let mut original = original;
    assert_eq!(original.pop_front(), Some(1));
    assert_eq!(copy.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
}

#[test]
fn test_clone_from_replaces_contents() {
    let source = ForwardList::from([7, 8]);
    let mut target = ForwardList::from([1, 2, 3]);

    target.clone_from(&source);
    assert_eq!(target, source);
    assert_eq!(target.len(), 2);
}

#[test]
fn test_from_array_preserves_order() {
    let list = ForwardList::from([1, 2, 3]);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_collect_preserves_order() {
    let list: ForwardList<i32> = (0..5).collect();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    assert_eq!(list.front(), Some(&0));
}

#[test]
fn test_debug_formats_as_sequence() {
    let list = ForwardList::from([1, 2, 3]);
    assert_eq!(format!("{:?}", list), "[1, 2, 3]");

    let empty: ForwardList<i32> = ForwardList::new();
    assert_eq!(format!("{:?}", empty), "[]");
}

#[test]
fn test_hash_agrees_with_equality() {
    let hasher = DefaultHashBuilder::default();

    let a = ForwardList::from([1, 2, 3]);
    let b = ForwardList::from([1, 2, 3]);
    assert_eq!(hasher.hash_one(&a), hasher.hash_one(&b));

    let c = ForwardList::from([1, 2]);
    assert_ne!(hasher.hash_one(&a), hasher.hash_one(&c));
}
