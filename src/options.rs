/// How the merge picks the smallest live head on each pull.
///
/// Both strategies produce exactly the same output, ties included:
/// equal heads are emitted one per pull, lowest source index first.
///
/// Trade-off: per-pull cost vs bookkeeping.
///   - LinearScan: O(k) compare per pull, zero extra memory. Fastest for
///     a handful of sources.
///   - MinHeap: O(log k) per pull, one heap slot per live source. Wins
///     once k grows past a few dozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionStrategy {
    /// Scan every source in index order, keep the strict minimum.
    #[default]
    LinearScan,
    /// Keep `(head, index)` pairs in a binary min-heap.
    MinHeap,
}

/// Tuning knobs for a `MergedIterator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeOptions {
    /// Head selection algorithm.
    pub strategy: SelectionStrategy,
    /// Check that every source is non-decreasing as it is advanced.
    /// An out-of-order value retires its source and is reported as
    /// `Error::Unsorted` instead of silently producing unsorted output.
    pub verify_order: bool,
}

impl MergeOptions {
    /// Use `strategy` for head selection.
    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Turn per-source order checking on or off.
    pub fn with_verify_order(mut self, verify_order: bool) -> Self {
        self.verify_order = verify_order;
        self
    }
}
