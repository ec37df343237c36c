//! Step recording for the sorting algorithms.

use serde::{Deserialize, Serialize};

/// One observable step of a sort.
///
/// Indices always refer to the whole slice being sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// A pass over the unsorted region begins.
    #[display("pass {} begins", pass + 1)]
    PassStart {
        /// Zero-based pass number.
        pass: usize,
    },
    /// Two elements were compared.
    #[display("compare [{}] and [{}]", a, b)]
    Compare {
        /// First index.
        a: usize,
        /// Second index.
        b: usize,
    },
    /// Two elements were exchanged.
    #[display("swap [{}] and [{}]", a, b)]
    Swap {
        /// First index.
        a: usize,
        /// Second index.
        b: usize,
    },
    /// An element moved one slot to make room for an insertion.
    #[display("shift [{}] -> [{}]", from, to)]
    Shift {
        /// Old index.
        from: usize,
        /// New index.
        to: usize,
    },
    /// The element taken from `from` landed at `to`.
    #[display("insert element from [{}] at [{}]", from, to)]
    Insert {
        /// Index the element was taken from.
        from: usize,
        /// Index it was placed at.
        to: usize,
    },
    /// The smallest remaining element was found.
    #[display("minimum at [{}]", index)]
    Select {
        /// Index of the minimum.
        index: usize,
    },
    /// A pivot was chosen and moved to the end of its range.
    #[display("pivot [{}] for range {}..={}", index, low, high)]
    Pivot {
        /// Index the pivot was chosen from.
        index: usize,
        /// Range start.
        low: usize,
        /// Range end (inclusive).
        high: usize,
    },
    /// A range was partitioned around its pivot.
    #[display("pivot settled at [{}] in {}..={}", pivot, low, high)]
    Partitioned {
        /// Final pivot index.
        pivot: usize,
        /// Range start.
        low: usize,
        /// Range end (inclusive).
        high: usize,
    },
    /// A pass finished.
    #[display("pass {} done with {} swaps", pass + 1, swaps)]
    PassEnd {
        /// Zero-based pass number.
        pass: usize,
        /// Swaps made during the pass.
        swaps: usize,
    },
    /// The sort stopped before running every pass.
    #[display("already sorted after pass {}", pass + 1)]
    EarlyExit {
        /// Zero-based pass number of the last pass run.
        pass: usize,
    },
}

/// Receives every step a sort makes.
pub trait Observer<T> {
    /// Called after `step` has been applied to `slice`.
    fn record(&mut self, step: Step, slice: &[T]);
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl<T> Observer<T> for Silent {
    #[inline(always)]
    fn record(&mut self, _step: Step, _slice: &[T]) {}
}

/// Operation counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStats {
    /// Element comparisons.
    pub comparisons: usize,
    /// Element exchanges.
    pub swaps: usize,
    /// Single-slot moves during insertion.
    pub shifts: usize,
    /// Passes started.
    pub passes: usize,
}

impl SortStats {
    fn count(&mut self, step: &Step) {
        match step {
            Step::Compare { .. } => self.comparisons += 1,
            Step::Swap { .. } => self.swaps += 1,
            Step::Shift { .. } => self.shifts += 1,
            Step::PassStart { .. } => self.passes += 1,
            _ => {}
        }
    }
}

/// A step together with the slice contents right after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEvent<T> {
    /// What happened.
    pub step: Step,
    /// Slice contents after the step.
    pub snapshot: Vec<T>,
}

/// Full record of one traced sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace<T> {
    initial: Vec<T>,
    events: Vec<TraceEvent<T>>,
    stats: SortStats,
}

impl<T: Clone> Trace<T> {
    /// Input before sorting.
    pub fn initial(&self) -> &[T] {
        &self.initial
    }

    /// Steps in the order they happened.
    pub fn events(&self) -> &[TraceEvent<T>] {
        &self.events
    }

    /// Operation counters.
    pub fn stats(&self) -> SortStats {
        self.stats
    }

    /// Slice contents after the last step.
    pub fn final_state(&self) -> &[T] {
        self.events
            .last()
            .map_or(self.initial.as_slice(), |e| e.snapshot.as_slice())
    }

    /// Iterates over the steps alone.
    pub fn steps(&self) -> impl Iterator<Item = Step> + '_ {
        self.events.iter().map(|e| e.step)
    }
}

/// Observer that records snapshots and counts operations.
#[derive(Debug, Clone)]
pub struct Tracer<T> {
    trace: Trace<T>,
}

impl<T: Clone> Tracer<T> {
    /// Starts a trace for `initial`.
    pub fn new(initial: &[T]) -> Self {
        Self {
            trace: Trace {
                initial: initial.to_vec(),
                events: Vec::new(),
                stats: SortStats::default(),
            },
        }
    }

    /// Finishes recording.
    pub fn finish(self) -> Trace<T> {
        self.trace
    }
}

impl<T: Clone> Observer<T> for Tracer<T> {
    fn record(&mut self, step: Step, slice: &[T]) {
        self.trace.stats.count(&step);
        self.trace.events.push(TraceEvent {
            step,
            snapshot: slice.to_vec(),
        });
    }
}
