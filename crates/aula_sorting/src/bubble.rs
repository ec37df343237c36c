//! Bubble sort and its bidirectional cousin.

use crate::trace::{Observer, Silent, Step};
use std::cmp::Ordering;

/// Sorts `v` with plain bubble sort: always `n - 1` passes.
pub fn bubble_sort<T: Ord>(v: &mut [T]) {
    bubble_sort_by(v, T::cmp);
}

/// [`bubble_sort`] with a comparator.
pub fn bubble_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble(v, &mut compare, &mut Silent, false);
}

/// Sorts `v` with bubble sort, stopping after the first pass without swaps.
pub fn bubble_sort_optimized<T: Ord>(v: &mut [T]) {
    bubble_sort_optimized_by(v, T::cmp);
}

/// [`bubble_sort_optimized`] with a comparator.
pub fn bubble_sort_optimized_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble(v, &mut compare, &mut Silent, true);
}

/// Sorts `v` by bubbling alternately right and left.
pub fn cocktail_shaker_sort<T: Ord>(v: &mut [T]) {
    cocktail_shaker_sort_by(v, T::cmp);
}

/// [`cocktail_shaker_sort`] with a comparator.
pub fn cocktail_shaker_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    cocktail(v, &mut compare, &mut Silent);
}

pub(crate) fn bubble<T, F, O>(v: &mut [T], compare: &mut F, observer: &mut O, early_exit: bool)
where
    F: FnMut(&T, &T) -> Ordering,
    O: Observer<T>,
{
    let n = v.len();
    for pass in 0..n.saturating_sub(1) {
        observer.record(Step::PassStart { pass }, v);
        let mut swaps = 0;
        // The last `pass` elements are already in their final place.
        for j in 0..n - 1 - pass {
            observer.record(Step::Compare { a: j, b: j + 1 }, v);
            if compare(&v[j], &v[j + 1]) == Ordering::Greater {
                v.swap(j, j + 1);
                swaps += 1;
                observer.record(Step::Swap { a: j, b: j + 1 }, v);
            }
        }
        observer.record(Step::PassEnd { pass, swaps }, v);
        if early_exit && swaps == 0 {
            observer.record(Step::EarlyExit { pass }, v);
            break;
        }
    }
}

pub(crate) fn cocktail<T, F, O>(v: &mut [T], compare: &mut F, observer: &mut O)
where
    F: FnMut(&T, &T) -> Ordering,
    O: Observer<T>,
{
    if v.len() < 2 {
        return;
    }

    let mut start = 0;
    let mut end = v.len() - 1;
    let mut pass = 0;
    while start < end {
        observer.record(Step::PassStart { pass }, v);
        let mut swaps = 0;
        for i in start..end {
            observer.record(Step::Compare { a: i, b: i + 1 }, v);
            if compare(&v[i], &v[i + 1]) == Ordering::Greater {
                v.swap(i, i + 1);
                swaps += 1;
                observer.record(Step::Swap { a: i, b: i + 1 }, v);
            }
        }
        if swaps == 0 {
            observer.record(Step::PassEnd { pass, swaps }, v);
            observer.record(Step::EarlyExit { pass }, v);
            return;
        }
        end -= 1;

        for i in (start + 1..=end).rev() {
            observer.record(Step::Compare { a: i - 1, b: i }, v);
            if compare(&v[i], &v[i - 1]) == Ordering::Less {
                v.swap(i - 1, i);
                swaps += 1;
                observer.record(Step::Swap { a: i - 1, b: i }, v);
            }
        }
        start += 1;
        observer.record(Step::PassEnd { pass, swaps }, v);
        pass += 1;
    }
}
