//! Ready-made `SortedSource` implementations.
//!
//! | Source         | Backing                    | Rewindable |
//! |----------------|----------------------------|------------|
//! | `VecSource`    | owned `Vec<Value>`         | yes        |
//! | `IterSource`   | any `Iterator`             | no         |
//! | `ReaderSource` | `BufRead + Seek`, one/line | yes        |

pub mod iter;
pub mod reader;
pub mod vec;

pub use iter::IterSource;
pub use reader::ReaderSource;
pub use vec::VecSource;
