//! Tests for `Every`: construction, search and the non-emptiness guarantees.

use super::common::digits;
use affirm::{every, Every, EveryError};

#[test]
fn test_construction_paths_agree() {
    let from_macro = every![1, 2, 3];
    let from_new = Every::new(1, vec![2, 3]);
    let from_vec = Every::from_vec(vec![1, 2, 3]).unwrap();
    let from_iter = Every::try_from_iter(1..=3).unwrap();
    let from_slice = Every::try_from(&[1, 2, 3][..]).unwrap();

    assert_eq!(from_macro, from_new);
    assert_eq!(from_macro, from_vec);
    assert_eq!(from_macro, from_iter);
    assert_eq!(from_macro, from_slice);
}

#[test]
fn test_empty_sources_are_rejected() {
    assert_eq!(Every::<u8>::from_vec(Vec::new()), Err(EveryError));
    assert_eq!(Every::try_from_iter(std::iter::empty::<u8>()), Err(EveryError));
    assert_eq!(Every::<u8>::try_from(Vec::new()), Err(EveryError));
}

#[test]
fn test_total_accessors() {
    let xs = digits();
    assert_eq!(*xs.head(), 1);
    assert_eq!(*xs.last(), 4);
    assert_eq!(xs.tail(), &[2, 3, 1, 2, 3, 4]);
    assert_eq!(xs.init(), &[1, 2, 3, 1, 2, 3]);
    assert_eq!(*xs.min_element(), 1);
    assert_eq!(*xs.max_element(), 4);
    assert_eq!(xs.clone().reduce(|a, b| a + b), 16);
}

#[test]
fn test_single_element_edges() {
    let one = every!['x'];
    assert!(one.is_single());
    assert_eq!(one.head(), one.last());
    assert!(one.tail().is_empty());
    assert!(one.init().is_empty());
    assert_eq!(one.clone().reduce(|a, _| a), 'x');
    assert_eq!(one.last_index_of_before(&'x', 100), Some(0));
}

#[test]
fn test_element_search_with_bounds() {
    let xs = digits();
    assert_eq!(xs.index_of(&2), Some(1));
    assert_eq!(xs.index_of_from(&2, 2), Some(4));
    assert_eq!(xs.index_of_from(&2, 5), None);
    assert_eq!(xs.index_of_from(&2, 99), None);
    assert_eq!(xs.last_index_of(&1), Some(3));
    assert_eq!(xs.last_index_of_before(&3, 4), Some(2));
    assert_eq!(xs.last_index_of_before(&9, 6), None);
}

#[test]
fn test_slice_search() {
    let xs = digits();
    assert!(xs.contains_slice(&[3, 1]));
    assert!(!xs.contains_slice(&[4, 1]));
    assert_eq!(xs.index_of_slice(&[1, 2, 3]), Some(0));
    assert_eq!(xs.index_of_slice_from(&[1, 2, 3], 1), Some(3));
    assert_eq!(xs.last_index_of_slice(&[1, 2, 3]), Some(3));
    assert_eq!(xs.last_index_of_slice_before(&[1, 2, 3], 2), Some(0));
    assert_eq!(xs.index_of_slice(&[1, 2, 3, 4, 5, 6, 7, 8]), None);
}

#[test]
fn test_empty_needle_slice_matches_at_bounds() {
    let xs = every![1, 2];
    let empty: [i32; 0] = [];
    assert_eq!(xs.index_of_slice(&empty), Some(0));
    assert_eq!(xs.index_of_slice_from(&empty, 2), Some(2));
    assert_eq!(xs.index_of_slice_from(&empty, 3), None);
    assert_eq!(xs.last_index_of_slice(&empty), Some(2));
    assert!(xs.starts_with(&empty));
    assert!(xs.ends_with(&empty));
}

#[test]
fn test_search_across_types() {
    let words = every!["alpha".to_string(), "beta".to_string()];
    assert!(words.contains("beta"));
    assert_eq!(words.index_of("alpha"), Some(0));
    assert!(words.starts_with(&["alpha"]));
    assert!(words.ends_with(&["beta"]));
}

#[test]
fn test_predicate_search() {
    let xs = digits();
    assert_eq!(xs.index_where(|x| *x > 2), Some(2));
    assert_eq!(xs.index_where_from(|x| *x == 1, 1), Some(3));
    assert_eq!(xs.last_index_where(|x| *x < 3), Some(4));
    assert_eq!(xs.last_index_where_before(|x| *x == 3, 4), Some(2));
    assert_eq!(xs.find(|x| x % 2 == 0), Some(&2));
    assert!(xs.exists(|x| *x == 4));
    assert!(xs.forall(|x| *x > 0));
    assert_eq!(xs.count(|x| *x == 2), 2);
}

#[test]
fn test_transforms_stay_non_empty() {
    let xs = every![3, 1, 3, 2];
    assert_eq!(xs.clone().distinct(), every![3, 1, 2]);
    assert_eq!(xs.clone().sorted(), every![1, 2, 3, 3]);
    assert_eq!(xs.clone().reverse(), every![2, 3, 1, 3]);
    assert_eq!(xs.map(|x| x * 10), every![30, 10, 30, 20]);
    assert_eq!(xs.scan_left(0, |acc, x| acc + x), every![0, 3, 4, 7, 9]);
    assert_eq!(
        xs.clone().zip_with_index(),
        every![(3, 0), (1, 1), (3, 2), (2, 3)]
    );
    assert_eq!(xs.clone().append(5).prepend(0).len(), 6);
}

#[test]
fn test_grouped_and_sliding() {
    let xs = every![1, 2, 3, 4, 5];
    assert_eq!(
        xs.grouped(2),
        Some(every![every![1, 2], every![3, 4], every![5]])
    );
    assert_eq!(
        xs.sliding(4),
        Some(every![every![1, 2, 3, 4], every![2, 3, 4, 5]])
    );
    assert_eq!(xs.sliding(9), Some(every![xs.clone()]));
    assert_eq!(xs.grouped(0), None);
}

#[test]
fn test_display_and_debug() {
    let xs = every![1, 2];
    assert_eq!(xs.to_string(), "Every(1, 2)");
    assert_eq!(format!("{:?}", xs), "[1, 2]");
}
