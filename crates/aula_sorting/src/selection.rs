//! Selection sort.

use crate::trace::{Observer, Silent, Step};
use std::cmp::Ordering;

/// Sorts `v` by repeatedly moving the smallest remaining element forward.
///
/// Makes at most `n - 1` swaps, skipping the swap when the minimum is
/// already in place.
pub fn selection_sort<T: Ord>(v: &mut [T]) {
    selection_sort_by(v, T::cmp);
}

/// [`selection_sort`] with a comparator.
pub fn selection_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection(v, &mut compare, &mut Silent);
}

pub(crate) fn selection<T, F, O>(v: &mut [T], compare: &mut F, observer: &mut O)
where
    F: FnMut(&T, &T) -> Ordering,
    O: Observer<T>,
{
    let n = v.len();
    for i in 0..n.saturating_sub(1) {
        observer.record(Step::PassStart { pass: i }, v);
        let mut min = i;
        for j in i + 1..n {
            observer.record(Step::Compare { a: min, b: j }, v);
            if compare(&v[j], &v[min]) == Ordering::Less {
                min = j;
            }
        }
        observer.record(Step::Select { index: min }, v);
        if min != i {
            v.swap(i, min);
            observer.record(Step::Swap { a: i, b: min }, v);
        }
    }
}
