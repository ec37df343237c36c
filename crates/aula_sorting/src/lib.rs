//! Classic comparison sorts.
//!
//! Every algorithm sorts a mutable slice in place. Each comes as a
//! comparator-taking `*_by` function plus an `Ord` convenience; descending
//! order and sort-by-key are just different comparators.
//!
//! The algorithms are written once against an [`Observer`]. The plain entry
//! points pass [`Silent`]; [`Algorithm::trace_by`] passes a [`Tracer`] that
//! records every comparison, swap and shift together with a snapshot of the
//! slice.
//!
//! ```
//! use aula_sorting::{Algorithm, quick_sort};
//!
//! let mut values = vec![64, 34, 25, 12, 22, 11, 90];
//! quick_sort(&mut values);
//! assert_eq!(values, [11, 12, 22, 25, 34, 64, 90]);
//!
//! let trace = Algorithm::BubbleOptimized.trace(&mut vec![1, 2, 3, 5, 4]);
//! assert_eq!(trace.stats().swaps, 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod algorithm;
pub mod bench;
mod bubble;
mod insertion;
mod quick;
mod selection;
mod trace;

pub use algorithm::Algorithm;
pub use bubble::{
    bubble_sort, bubble_sort_by, bubble_sort_optimized, bubble_sort_optimized_by,
    cocktail_shaker_sort, cocktail_shaker_sort_by,
};
pub use insertion::{
    binary_insertion_sort, binary_insertion_sort_by, insert_sorted, insert_sorted_by,
    insertion_sort, insertion_sort_by, insertion_sort_optimized, insertion_sort_optimized_by,
};
pub use quick::{
    PivotStrategy, quick_sort, quick_sort_by, quick_sort_iterative, quick_sort_iterative_by,
    quick_sort_with_pivot, quick_sort_with_pivot_by,
};
pub use selection::{selection_sort, selection_sort_by};
pub use trace::{Observer, Silent, SortStats, Step, Trace, TraceEvent, Tracer};
