use crate::error::Result;
use crate::iterator::SortedSource;
use crate::types::Value;

/// An in-memory sorted list. Rewinding just moves the cursor back.
pub struct VecSource {
    values: Vec<Value>,
    // None = before the first element, Some(len) = exhausted.
    pos: Option<usize>,
}

impl VecSource {
    pub fn new(values: Vec<Value>) -> Self {
        VecSource { values, pos: None }
    }
}

impl From<Vec<Value>> for VecSource {
    fn from(values: Vec<Value>) -> Self {
        VecSource::new(values)
    }
}

impl SortedSource for VecSource {
    fn advance(&mut self) -> Result<bool> {
        let len = self.values.len();
        let next = self.pos.map_or(0, |p| (p + 1).min(len));
        self.pos = Some(next);
        Ok(next < len)
    }

    fn current(&self) -> Value {
        match self.pos {
            Some(p) if p < self.values.len() => self.values[p],
            _ => panic!("VecSource::current() called while not positioned"),
        }
    }

    fn rewind(&mut self) -> Result<()> {
        self.pos = None;
        Ok(())
    }

    fn is_rewindable(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_states() {
        let mut src = VecSource::new(vec![7, 8]);
        assert!(src.advance().unwrap());
        assert_eq!(src.current(), 7);
        assert!(src.advance().unwrap());
        assert_eq!(src.current(), 8);
        assert!(!src.advance().unwrap());
        // stays exhausted
        assert!(!src.advance().unwrap());

        src.rewind().unwrap();
        assert!(src.advance().unwrap());
        assert_eq!(src.current(), 7);
    }

    #[test]
    #[should_panic]
    fn test_current_before_advance_panics() {
        let src = VecSource::new(vec![1]);
        src.current();
    }
}
