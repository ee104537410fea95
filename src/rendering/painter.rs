use super::{Screen, Size};
use crate::tree::{Patch, Tree};

use std::io;

use unicode_segmentation::UnicodeSegmentation;

/// Apply a patch to the screen: draw the label of every node on a redrawn row and blank out
/// every cleared row. Rows below the bottom of the screen are skipped.
///
/// Labels are cut at the right edge. The terminal wraps anything longer onto the next row, which
/// would leave the drawn lines out of step with the rows of the tree.
pub fn paint(screen: &mut impl Screen, tree: &Tree, patch: &Patch, size: Size) -> io::Result<()> {
    for row in patch.redraw.clone().take_while(|row| *row < size.rows) {
        screen.clear_line(row)?;
        let node = match tree.line(row) {
            Some(node) => node,
            None => continue,
        };
        let width: usize = size.columns.saturating_sub(node.left());
        if width == 0 {
            continue;
        }
        let label: String = node
            .label(tree.icons())
            .graphemes(true)
            .take(width)
            .collect();
        screen.move_to(row, node.left())?;
        screen.draw(&label)?;
    }
    for row in patch.clear.clone().take_while(|row| *row < size.rows) {
        screen.clear_line(row)?;
    }
    Ok(())
}

/// Put the terminal cursor back where the user left it and flush. This must come last after a
/// change so the cursor ends up on the logical row and column.
pub fn place_cursor(screen: &mut impl Screen, top: usize, left: usize) -> io::Result<()> {
    screen.move_to(top, left)?;
    screen.flush()
}
