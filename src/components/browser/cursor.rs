use crate::rendering::Size;

use std::cmp;

/// Where the user is pointing on the screen.
///
/// The bounds are the screen size rather than the number of lines drawn, so the cursor can move
/// below the last line even though there is nothing there to select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    top: usize,
    left: usize,
    size: Size,
}

impl Cursor {
    /// Return a cursor in the top left corner of a screen of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            top: 0,
            left: 0,
            size,
        }
    }

    pub fn top(&self) -> usize {
        self.top
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn move_up(&mut self) {
        self.top = self.top.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.top < self.size.rows {
            self.top += 1;
        }
    }

    pub fn move_left(&mut self) {
        self.left = self.left.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.left < self.size.columns {
            self.left += 1;
        }
    }

    /// Change the bounds, pulling the cursor back inside them if needed.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.top = cmp::min(self.top, size.rows);
        self.left = cmp::min(self.left, size.columns);
    }
}
