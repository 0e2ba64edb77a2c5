//! # Sorted Merge
//!
//! A k-way union merge: several independently sorted integer sources in,
//! one ascending stream out.
//!
//! ## Core idea
//! Every source keeps exactly one pending value (its head). Each pull picks
//! the smallest head, hands it out, and advances only the source it came
//! from. Nothing is buffered beyond those heads and nothing is deduplicated.
//!
//! ```
//! use sorted_merge::MergedIterator;
//!
//! let merged = MergedIterator::from_vecs(vec![vec![1, 4], vec![], vec![2, 4]]).unwrap();
//! let out: Vec<i64> = merged.map(|v| v.unwrap()).collect();
//! assert_eq!(out, vec![1, 2, 4, 4]);
//! ```

pub mod error;
pub mod iterator;
pub mod options;
pub mod source;
pub mod types;

// Public re-exports for the top-level API
pub use error::{Error, Result};
pub use iterator::SortedSource;
pub use iterator::merge::MergedIterator;
pub use iterator::nested::MergedSource;
pub use options::{MergeOptions, SelectionStrategy};
pub use source::{IterSource, ReaderSource, VecSource};
pub use types::Value;
