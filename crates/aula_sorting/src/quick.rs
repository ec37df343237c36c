//! Quicksort with Lomuto partitioning.
//!
//! Whatever the pivot strategy, the chosen pivot is first swapped to the end
//! of its range so a single partition routine serves every variant.

use crate::trace::{Observer, Silent, Step};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// How the pivot of each range is chosen.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PivotStrategy {
    /// Last element of the range.
    #[default]
    Last,
    /// First element of the range.
    First,
    /// Element at the midpoint.
    Middle,
    /// Median of first, middle and last.
    MedianOfThree,
}

/// Sorts `v` with recursive quicksort, last element as pivot.
pub fn quick_sort<T: Ord>(v: &mut [T]) {
    quick_sort_by(v, T::cmp);
}

/// [`quick_sort`] with a comparator.
pub fn quick_sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sort_with_pivot_by(v, PivotStrategy::Last, compare);
}

/// Recursive quicksort using `strategy` for every range.
pub fn quick_sort_with_pivot<T: Ord>(v: &mut [T], strategy: PivotStrategy) {
    quick_sort_with_pivot_by(v, strategy, T::cmp);
}

/// [`quick_sort_with_pivot`] with a comparator.
pub fn quick_sort_with_pivot_by<T, F>(v: &mut [T], strategy: PivotStrategy, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    recursive(v, strategy, &mut compare, &mut Silent);
}

/// Quicksort driven by an explicit stack of ranges instead of recursion.
pub fn quick_sort_iterative<T: Ord>(v: &mut [T]) {
    quick_sort_iterative_by(v, T::cmp);
}

/// [`quick_sort_iterative`] with a comparator.
pub fn quick_sort_iterative_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    iterative(v, &mut compare, &mut Silent);
}

pub(crate) fn recursive<T, F, O>(v: &mut [T], strategy: PivotStrategy, compare: &mut F, observer: &mut O)
where
    F: FnMut(&T, &T) -> Ordering,
    O: Observer<T>,
{
    if v.len() > 1 {
        let high = v.len() - 1;
        sort_range(v, 0, high, strategy, compare, observer);
    }
}

fn sort_range<T, F, O>(
    v: &mut [T],
    low: usize,
    high: usize,
    strategy: PivotStrategy,
    compare: &mut F,
    observer: &mut O,
) where
    F: FnMut(&T, &T) -> Ordering,
    O: Observer<T>,
{
    if low >= high {
        return;
    }
    place_pivot(v, low, high, strategy, compare, observer);
    let pivot = partition(v, low, high, compare, observer);
    if pivot > low {
        sort_range(v, low, pivot - 1, strategy, compare, observer);
    }
    sort_range(v, pivot + 1, high, strategy, compare, observer);
}

pub(crate) fn iterative<T, F, O>(v: &mut [T], compare: &mut F, observer: &mut O)
where
    F: FnMut(&T, &T) -> Ordering,
    O: Observer<T>,
{
    if v.len() < 2 {
        return;
    }

    let mut stack = vec![(0, v.len() - 1)];
    while let Some((low, high)) = stack.pop() {
        if low >= high {
            continue;
        }
        let pivot = partition(v, low, high, compare, observer);
        if pivot > low + 1 {
            stack.push((low, pivot - 1));
        }
        if pivot + 1 < high {
            stack.push((pivot + 1, high));
        }
    }
}

fn place_pivot<T, F, O>(
    v: &mut [T],
    low: usize,
    high: usize,
    strategy: PivotStrategy,
    compare: &mut F,
    observer: &mut O,
) where
    F: FnMut(&T, &T) -> Ordering,
    O: Observer<T>,
{
    let mid = low + (high - low) / 2;
    let index = match strategy {
        PivotStrategy::Last => high,
        PivotStrategy::First => low,
        PivotStrategy::Middle => mid,
        PivotStrategy::MedianOfThree => median_of_three(v, low, mid, high, compare, observer),
    };
    observer.record(Step::Pivot { index, low, high }, v);
    if index != high {
        v.swap(index, high);
        observer.record(Step::Swap { a: index, b: high }, v);
    }
}

fn median_of_three<T, F, O>(
    v: &[T],
    a: usize,
    b: usize,
    c: usize,
    compare: &mut F,
    observer: &mut O,
) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
    O: Observer<T>,
{
    let mut greater = |x: usize, y: usize, observer: &mut O| {
        observer.record(Step::Compare { a: x, b: y }, v);
        compare(&v[x], &v[y]) == Ordering::Greater
    };

    if greater(a, b, observer) {
        if greater(b, c, observer) {
            b
        } else if greater(a, c, observer) {
            c
        } else {
            a
        }
    } else if greater(a, c, observer) {
        a
    } else if greater(b, c, observer) {
        c
    } else {
        b
    }
}

/// Lomuto partition of `v[low..=high]` around `v[high]`.
///
/// Returns the pivot's final index. Elements not greater than the pivot end
/// up to its left.
fn partition<T, F, O>(v: &mut [T], low: usize, high: usize, compare: &mut F, observer: &mut O) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
    O: Observer<T>,
{
    let mut store = low;
    for j in low..high {
        observer.record(Step::Compare { a: j, b: high }, v);
        if compare(&v[j], &v[high]) != Ordering::Greater {
            if store != j {
                v.swap(store, j);
                observer.record(Step::Swap { a: store, b: j }, v);
            }
            store += 1;
        }
    }
    if store != high {
        v.swap(store, high);
        observer.record(Step::Swap { a: store, b: high }, v);
    }
    observer.record(
        Step::Partitioned {
            pivot: store,
            low,
            high,
        },
        v,
    );
    store
}
