//! Named algorithm variants, dispatchable at runtime.

use crate::quick::PivotStrategy;
use crate::trace::{Observer, Silent, Trace, Tracer};
use crate::{bubble, insertion, quick, selection};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::instrument;

/// Every sorting variant the crate provides.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Algorithm {
    /// Bubble sort, every pass.
    Bubble,
    /// Bubble sort with early exit.
    BubbleOptimized,
    /// Bidirectional bubble sort.
    CocktailShaker,
    /// Shifting insertion sort. The inner loop stops at the first
    /// element not greater than the one being placed.
    Insertion,
    /// Insertion sort that skips in-place elements and moves each
    /// misplaced one with a single rotation.
    InsertionOptimized,
    /// Insertion sort with binary search for the slot.
    BinaryInsertion,
    /// Recursive quicksort, last-element pivot.
    Quick,
    /// Quicksort with an explicit range stack.
    QuickIterative,
    /// Recursive quicksort, first-element pivot.
    QuickFirst,
    /// Recursive quicksort, middle-element pivot.
    QuickMiddle,
    /// Recursive quicksort, median-of-three pivot.
    QuickMedian,
    /// Selection sort.
    Selection,
}

impl Algorithm {
    /// Whether the variant does quadratic work on random input.
    pub fn is_quadratic(self) -> bool {
        !matches!(
            self,
            Algorithm::Quick
                | Algorithm::QuickIterative
                | Algorithm::QuickFirst
                | Algorithm::QuickMiddle
                | Algorithm::QuickMedian
        )
    }

    /// Sorts `v` ascending.
    pub fn sort<T: Ord>(self, v: &mut [T]) {
        self.sort_by(v, T::cmp);
    }

    /// Sorts `v` with a comparator.
    pub fn sort_by<T, F>(self, v: &mut [T], mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.run(v, &mut compare, &mut Silent);
    }

    /// Sorts `v` ascending, recording every step.
    pub fn trace<T: Ord + Clone>(self, v: &mut [T]) -> Trace<T> {
        self.trace_by(v, T::cmp)
    }

    /// Sorts `v` with a comparator, recording every step.
    #[instrument(skip(v, compare), fields(len = v.len()))]
    pub fn trace_by<T, F>(self, v: &mut [T], mut compare: F) -> Trace<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut tracer = Tracer::new(v);
        self.run(v, &mut compare, &mut tracer);
        tracer.finish()
    }

    fn run<T, F, O>(self, v: &mut [T], compare: &mut F, observer: &mut O)
    where
        F: FnMut(&T, &T) -> Ordering,
        O: Observer<T>,
    {
        match self {
            Algorithm::Bubble => bubble::bubble(v, compare, observer, false),
            Algorithm::BubbleOptimized => bubble::bubble(v, compare, observer, true),
            Algorithm::CocktailShaker => bubble::cocktail(v, compare, observer),
            Algorithm::Insertion => insertion::insertion(v, compare, observer),
            Algorithm::InsertionOptimized => insertion::insertion_optimized(v, compare, observer),
            Algorithm::BinaryInsertion => insertion::binary_insertion(v, compare, observer),
            Algorithm::Quick => quick::recursive(v, PivotStrategy::Last, compare, observer),
            Algorithm::QuickIterative => quick::iterative(v, compare, observer),
            Algorithm::QuickFirst => quick::recursive(v, PivotStrategy::First, compare, observer),
            Algorithm::QuickMiddle => quick::recursive(v, PivotStrategy::Middle, compare, observer),
            Algorithm::QuickMedian => {
                quick::recursive(v, PivotStrategy::MedianOfThree, compare, observer)
            }
            Algorithm::Selection => selection::selection(v, compare, observer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_names_round_trip_through_strum() {
        assert_eq!(Algorithm::BubbleOptimized.to_string(), "bubble-optimized");
        assert_eq!(Algorithm::from_str("Quick-Median").unwrap(), Algorithm::QuickMedian);
        assert_eq!(
            Algorithm::from_str("insertion-optimized").unwrap(),
            Algorithm::InsertionOptimized
        );
        assert!(Algorithm::from_str("bogo").is_err());
    }

    #[test]
    fn test_trace_ends_sorted() {
        let mut v = vec![5, 2, 8, 1];
        let trace = Algorithm::Insertion.trace(&mut v);
        assert_eq!(trace.initial(), &[5, 2, 8, 1]);
        assert_eq!(trace.final_state(), &[1, 2, 5, 8]);
        assert_eq!(v, [1, 2, 5, 8]);
    }
}
