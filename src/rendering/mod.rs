/*!
Drawing the tree on a terminal screen.
*/
mod painter;
pub use painter::{paint, place_cursor};

mod screen;
pub use screen::{Screen, TermScreen};

mod size;
pub use size::Size;
