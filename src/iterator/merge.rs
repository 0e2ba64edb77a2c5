use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::iterator::SortedSource;
use crate::options::{MergeOptions, SelectionStrategy};
use crate::source::VecSource;
use crate::types::{SourceIndex, Value};

/// Merges multiple sorted sources into a single ascending stream.
///
/// Every input element comes out exactly once. Equal values from different
/// sources are all kept; on a tie the lowest source index goes first and
/// the others stay pending for the following pulls.
///
/// Each source is read strictly forward with one pending value: a source
/// is only advanced right after its head was selected.
///
/// ```text
/// source 0:  1 2 3 4 5
/// source 1:  (empty)
/// source 2:  0 2 4 6 8
/// source 3:  10 100 1000
/// merged:    0 1 2 2 3 4 4 5 6 8 10 100 1000
///                ^ ^
///                │ └ source 2
///                └ source 0 (lower index wins the tie)
/// ```
pub struct MergedIterator {
    sources: Vec<Box<dyn SortedSource>>,
    /// One flag per source, true once that source has no more values.
    exhausted: Vec<bool>,
    /// `(head, index)` of every live source. Only maintained for
    /// `SelectionStrategy::MinHeap`.
    heap: BinaryHeap<Reverse<(Value, SourceIndex)>>,
    /// Failure from advancing a source whose head was already handed out.
    /// Reported on the following pull.
    pending_err: Option<Error>,
    options: MergeOptions,
}

impl MergedIterator {
    /// Create a merge over `sources` with default options.
    /// Source order defines the tie-break index.
    pub fn new(sources: Vec<Box<dyn SortedSource>>) -> Result<Self> {
        Self::with_options(sources, MergeOptions::default())
    }

    /// Create a merge over `sources`, priming each one to its first element.
    ///
    /// An empty source is fine: it is simply exhausted from the start.
    /// Fails only if a source fails while being primed.
    pub fn with_options(
        sources: Vec<Box<dyn SortedSource>>,
        options: MergeOptions,
    ) -> Result<Self> {
        let mut merged = MergedIterator {
            exhausted: vec![true; sources.len()],
            sources,
            heap: BinaryHeap::new(),
            pending_err: None,
            options,
        };
        merged.prime()?;
        Ok(merged)
    }

    /// Convenience: merge in-memory sorted lists.
    pub fn from_vecs(lists: Vec<Vec<Value>>) -> Result<Self> {
        let sources = lists
            .into_iter()
            .map(|values| Box::new(VecSource::new(values)) as Box<dyn SortedSource>)
            .collect();
        Self::new(sources)
    }

    /// True iff at least one source still has a value to give, or a source
    /// failure is waiting to be reported.
    pub fn has_next(&self) -> bool {
        self.pending_err.is_some() || self.exhausted.iter().any(|done| !done)
    }

    /// Return the smallest pending value and advance the source it came from.
    ///
    /// A selected value is never dropped. If advancing its source fails, the
    /// value is still returned, the source is retired (marked exhausted), and
    /// the failure is returned by the next call instead of a value.
    ///
    /// Returns `Error::Exhausted` when `has_next()` is false.
    pub fn next_value(&mut self) -> Result<Value> {
        if let Some(e) = self.pending_err.take() {
            return Err(e);
        }

        let (idx, value) = self.select().ok_or(Error::Exhausted)?;
        trace!("selected {value} from source {idx}");

        if let Err(e) = self.advance_source(idx, value) {
            self.exhausted[idx] = true;
            warn!("retiring source {idx}: {e}");
            self.pending_err = Some(e);
        }

        Ok(value)
    }

    /// Rewind every source and prime it again.
    ///
    /// All-or-nothing: rewindability is checked for every source before any
    /// is touched, so a forward-only source makes this fail with
    /// `Error::Unsupported` and leaves the merge exactly as it was.
    /// If a source then fails mid-rewind, every source is marked exhausted
    /// before the error is returned.
    pub fn reset(&mut self) -> Result<()> {
        if let Some(idx) = self.sources.iter().position(|s| !s.is_rewindable()) {
            warn!("reset refused: source {idx} is forward-only");
            return Err(Error::Unsupported(format!("source {idx} cannot be rewound")));
        }

        if let Err(e) = self.restart() {
            self.exhausted.fill(true);
            self.heap.clear();
            self.pending_err = None;
            return Err(e);
        }

        debug!("reset {} sources", self.sources.len());
        Ok(())
    }

    /// Whether `reset()` can succeed.
    pub fn is_rewindable(&self) -> bool {
        self.sources.iter().all(|s| s.is_rewindable())
    }

    /// Number of sources, live or not.
    pub fn num_sources(&self) -> usize {
        self.sources.len()
    }

    /// Number of sources that still have a pending value.
    pub fn live_sources(&self) -> usize {
        self.exhausted.iter().filter(|done| !**done).count()
    }

    /// Options this merge was built with.
    pub fn options(&self) -> MergeOptions {
        self.options
    }

    /// Give the sources back, in their original order and current positions.
    pub fn into_sources(self) -> Vec<Box<dyn SortedSource>> {
        self.sources
    }

    fn restart(&mut self) -> Result<()> {
        for source in &mut self.sources {
            source.rewind()?;
        }
        self.prime()
    }

    /// Advance every source to its first element and rebuild the
    /// exhaustion record.
    fn prime(&mut self) -> Result<()> {
        self.heap.clear();
        self.pending_err = None;
        self.exhausted.fill(true);

        for (idx, source) in self.sources.iter_mut().enumerate() {
            let positioned = source.advance()?;
            self.exhausted[idx] = !positioned;
            if positioned && self.options.strategy == SelectionStrategy::MinHeap {
                self.heap.push(Reverse((source.current(), idx)));
            }
        }

        debug!(
            "primed {} sources ({} live, {:?})",
            self.sources.len(),
            self.live_sources(),
            self.options.strategy
        );
        Ok(())
    }

    fn select(&mut self) -> Option<(SourceIndex, Value)> {
        match self.options.strategy {
            SelectionStrategy::LinearScan => self.scan_min(),
            SelectionStrategy::MinHeap => {
                self.heap.pop().map(|Reverse((value, idx))| (idx, value))
            }
        }
    }

    /// Strict `<` while scanning in index order, so the first of several
    /// equal heads wins.
    fn scan_min(&self) -> Option<(SourceIndex, Value)> {
        let mut best: Option<(SourceIndex, Value)> = None;
        for (idx, source) in self.sources.iter().enumerate() {
            if self.exhausted[idx] {
                continue;
            }
            let head = source.current();
            match best {
                Some((_, min)) if head >= min => {}
                _ => best = Some((idx, head)),
            }
        }
        best
    }

    fn advance_source(&mut self, idx: SourceIndex, previous: Value) -> Result<()> {
        let source = &mut self.sources[idx];
        if !source.advance()? {
            self.exhausted[idx] = true;
            trace!("source {idx} exhausted");
            return Ok(());
        }

        let next = source.current();
        if self.options.verify_order && next < previous {
            return Err(Error::Unsorted {
                source: idx,
                previous,
                next,
            });
        }

        if self.options.strategy == SelectionStrategy::MinHeap {
            self.heap.push(Reverse((next, idx)));
        }
        Ok(())
    }
}

/// Yields `Ok(value)` until every source is exhausted, then `None`.
impl Iterator for MergedIterator {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        Some(self.next_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every live source holds at least its pending head.
        let pending = usize::from(self.pending_err.is_some());
        (self.live_sources() + pending, None)
    }
}
