use crate::error::Result;
use crate::iterator::SortedSource;
use crate::iterator::merge::MergedIterator;
use crate::types::Value;

/// Exposes a `MergedIterator` through the `SortedSource` contract, so a
/// merge can itself be one input of a larger merge.
///
/// The merge's output is already ascending, which is all a source needs.
pub struct MergedSource {
    inner: MergedIterator,
    head: Option<Value>,
}

impl MergedSource {
    pub fn new(inner: MergedIterator) -> Self {
        MergedSource { inner, head: None }
    }

    pub fn into_inner(self) -> MergedIterator {
        self.inner
    }
}

impl SortedSource for MergedSource {
    fn advance(&mut self) -> Result<bool> {
        if !self.inner.has_next() {
            self.head = None;
            return Ok(false);
        }
        match self.inner.next_value() {
            Ok(value) => {
                self.head = Some(value);
                Ok(true)
            }
            Err(e) => {
                self.head = None;
                Err(e)
            }
        }
    }

    fn current(&self) -> Value {
        match self.head {
            Some(value) => value,
            None => panic!("MergedSource::current() called while not positioned"),
        }
    }

    fn rewind(&mut self) -> Result<()> {
        self.inner.reset()?;
        self.head = None;
        Ok(())
    }

    fn is_rewindable(&self) -> bool {
        self.inner.is_rewindable()
    }
}
