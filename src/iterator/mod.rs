pub mod merge;
pub mod nested;

use crate::error::{Error, Result};
use crate::types::Value;

/// The cursor contract every sorted input implements.
///
/// A source starts *before* its first element. It must be advanced once
/// before `current()` means anything; a never-advanced cursor is not a
/// zero value. After `advance()` returns false the source is exhausted
/// and stays exhausted until rewound.
///
/// Values must come out in non-decreasing order. The merge does not
/// check this unless `MergeOptions::verify_order` is set.
pub trait SortedSource {
    /// Moves to the next element. Returns false once there is none.
    fn advance(&mut self) -> Result<bool>;

    /// Returns the element the cursor is positioned at. Only valid after
    /// an `advance()` that returned true. Reading has no side effects.
    fn current(&self) -> Value;

    /// Returns the cursor to its pre-first-element state.
    ///
    /// Forward-only sources keep the default, which fails with
    /// `Error::Unsupported`.
    fn rewind(&mut self) -> Result<()> {
        Err(Error::Unsupported("source is forward-only".into()))
    }

    /// Whether `rewind()` is expected to succeed. Checked by
    /// `MergedIterator::reset` before any source is touched.
    fn is_rewindable(&self) -> bool {
        false
    }
}
