use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::iterator::SortedSource;
use crate::types::Value;

/// Reads one integer per line from a seekable reader (usually a file).
///
/// Format:
/// ```text
/// -3
///  7        <- surrounding whitespace is ignored
///           <- blank lines are skipped
/// 42
/// ```
///
/// A line that doesn't parse as an integer is a `Corruption` error carrying
/// its 1-based line number. Rewinding seeks back to where the reader was
/// when the source was created.
pub struct ReaderSource<R> {
    reader: R,
    start: u64,
    line: String,
    line_no: usize,
    head: Option<Value>,
}

impl ReaderSource<BufReader<File>> {
    /// Open a file of newline-separated integers.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        debug!("opened reader source {}", path.display());
        ReaderSource::new(BufReader::new(file))
    }
}

impl<R: BufRead + Seek> ReaderSource<R> {
    /// Wrap `reader`. Its current position is the rewind point.
    pub fn new(mut reader: R) -> Result<Self> {
        let start = reader.stream_position()?;
        Ok(ReaderSource {
            reader,
            start,
            line: String::new(),
            line_no: 0,
            head: None,
        })
    }

    /// 1-based number of the last line read, 0 before the first.
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead + Seek> SortedSource for ReaderSource<R> {
    fn advance(&mut self) -> Result<bool> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                self.head = None;
                return Ok(false);
            }
            self.line_no += 1;

            let text = self.line.trim();
            if text.is_empty() {
                continue;
            }

            let value = text.parse::<Value>().map_err(|e| {
                Error::Corruption(format!("line {}: invalid integer {:?}: {}", self.line_no, text, e))
            })?;
            self.head = Some(value);
            return Ok(true);
        }
    }

    fn current(&self) -> Value {
        match self.head {
            Some(value) => value,
            None => panic!("ReaderSource::current() called while not positioned"),
        }
    }

    fn rewind(&mut self) -> Result<()> {
        self.reader.seek(SeekFrom::Start(self.start))?;
        self.line_no = 0;
        self.head = None;
        Ok(())
    }

    fn is_rewindable(&self) -> bool {
        true
    }
}
