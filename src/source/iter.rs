use std::iter::Fuse;

use crate::error::Result;
use crate::iterator::SortedSource;
use crate::types::Value;

/// Wraps any Rust iterator of values. Forward-only: `rewind()` fails with
/// `Error::Unsupported`, which also makes `MergedIterator::reset` refuse.
pub struct IterSource<I> {
    // Fused: once exhausted, stays exhausted.
    inner: Fuse<I>,
    head: Option<Value>,
}

impl<I: Iterator<Item = Value>> IterSource<I> {
    pub fn new<T: IntoIterator<IntoIter = I>>(values: T) -> Self {
        IterSource {
            inner: values.into_iter().fuse(),
            head: None,
        }
    }
}

impl<I: Iterator<Item = Value>> SortedSource for IterSource<I> {
    fn advance(&mut self) -> Result<bool> {
        self.head = self.inner.next();
        Ok(self.head.is_some())
    }

    fn current(&self) -> Value {
        match self.head {
            Some(value) => value,
            None => panic!("IterSource::current() called while not positioned"),
        }
    }
}
