//! Insertion sort, its optimized form, binary insertion sort and sorted
//! insertion.

use crate::trace::{Observer, Silent, Step};
use std::cmp::Ordering;

/// Sorts `v` by growing a sorted prefix one element at a time.
///
/// Runs in linear time on input that is already sorted.
pub fn insertion_sort<T: Ord>(v: &mut [T]) {
    insertion_sort_by(v, T::cmp);
}

/// [`insertion_sort`] with a comparator.
pub fn insertion_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion(v, &mut compare, &mut Silent);
}

/// Insertion sort that leaves in-place elements alone and moves each
/// misplaced one with a single block rotation.
///
/// An element no smaller than its left neighbour costs one comparison.
/// Otherwise the slot is found first and the larger elements shift right
/// together.
pub fn insertion_sort_optimized<T: Ord>(v: &mut [T]) {
    insertion_sort_optimized_by(v, T::cmp);
}

/// [`insertion_sort_optimized`] with a comparator.
pub fn insertion_sort_optimized_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_optimized(v, &mut compare, &mut Silent);
}

/// Insertion sort that finds each slot by binary search.
///
/// Stable: equal elements land after the ones already placed.
pub fn binary_insertion_sort<T: Ord>(v: &mut [T]) {
    binary_insertion_sort_by(v, T::cmp);
}

/// [`binary_insertion_sort`] with a comparator.
pub fn binary_insertion_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    binary_insertion(v, &mut compare, &mut Silent);
}

/// Inserts `item` into the already sorted `v`, keeping it sorted.
///
/// Returns the index the item was placed at (after any equal elements).
pub fn insert_sorted<T: Ord>(v: &mut Vec<T>, item: T) -> usize {
    insert_sorted_by(v, item, T::cmp)
}

/// [`insert_sorted`] with a comparator.
pub fn insert_sorted_by<T, F>(v: &mut Vec<T>, item: T, mut compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let index = v.partition_point(|e| compare(e, &item) != Ordering::Greater);
    v.insert(index, item);
    index
}

pub(crate) fn insertion<T, F, O>(v: &mut [T], compare: &mut F, observer: &mut O)
where
    F: FnMut(&T, &T) -> Ordering,
    O: Observer<T>,
{
    for i in 1..v.len() {
        observer.record(Step::PassStart { pass: i - 1 }, v);
        let mut j = i;
        while j > 0 {
            observer.record(Step::Compare { a: j - 1, b: j }, v);
            if compare(&v[j - 1], &v[j]) != Ordering::Greater {
                break;
            }
            v.swap(j - 1, j);
            observer.record(Step::Shift { from: j - 1, to: j }, v);
            j -= 1;
        }
        observer.record(Step::Insert { from: i, to: j }, v);
    }
}

/// Shift steps are recorded once the block has moved, so their snapshots all
/// show the slice after the insertion.
pub(crate) fn insertion_optimized<T, F, O>(v: &mut [T], compare: &mut F, observer: &mut O)
where
    F: FnMut(&T, &T) -> Ordering,
    O: Observer<T>,
{
    for i in 1..v.len() {
        observer.record(Step::PassStart { pass: i - 1 }, v);
        observer.record(Step::Compare { a: i - 1, b: i }, v);
        if compare(&v[i - 1], &v[i]) != Ordering::Greater {
            continue;
        }

        let mut slot = i - 1;
        while slot > 0 {
            observer.record(Step::Compare { a: slot - 1, b: i }, v);
            if compare(&v[slot - 1], &v[i]) != Ordering::Greater {
                break;
            }
            slot -= 1;
        }

        v[slot..=i].rotate_right(1);
        for k in (slot..i).rev() {
            observer.record(Step::Shift { from: k, to: k + 1 }, v);
        }
        observer.record(Step::Insert { from: i, to: slot }, v);
    }
}

pub(crate) fn binary_insertion<T, F, O>(v: &mut [T], compare: &mut F, observer: &mut O)
where
    F: FnMut(&T, &T) -> Ordering,
    O: Observer<T>,
{
    for i in 1..v.len() {
        observer.record(Step::PassStart { pass: i - 1 }, v);

        // First slot in the sorted prefix holding something greater than v[i].
        let (mut left, mut right) = (0, i);
        while left < right {
            let mid = left + (right - left) / 2;
            observer.record(Step::Compare { a: mid, b: i }, v);
            if compare(&v[mid], &v[i]) == Ordering::Greater {
                right = mid;
            } else {
                left = mid + 1;
            }
        }

        for k in (left + 1..=i).rev() {
            v.swap(k - 1, k);
            observer.record(Step::Shift { from: k - 1, to: k }, v);
        }
        observer.record(Step::Insert { from: i, to: left }, v);
    }
}
