/// The element type carried by every source and by the merged output.
pub type Value = i64;

/// Stable position of a source in the merge, 0..k-1.
///
/// Only used to break ties between equal heads (lowest index wins).
/// It never affects output order otherwise.
pub type SourceIndex = usize;
