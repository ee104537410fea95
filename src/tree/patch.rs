use std::ops::Range;

/// The screen rows affected by a change to the tree.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Rows whose label must be drawn again.
    pub redraw: Range<usize>,
    /// Rows that no longer hold a line.
    pub clear: Range<usize>,
}

impl Patch {
    /// Return a patch that draws every one of `lines` lines and clears the rest of a screen with
    /// `rows` rows.
    pub fn full(lines: usize, rows: usize) -> Self {
        Self {
            redraw: 0..lines,
            clear: lines..rows.max(lines),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.redraw.is_empty() && self.clear.is_empty()
    }
}
