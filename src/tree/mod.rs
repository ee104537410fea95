/*!
The model of the directory tree: which directories are expanded and which lines that puts on the
screen.
*/
mod node;
pub use node::{read_entries, Dir, Entry, Icons, Node, NodeId, NodeKind, INDENT};

mod patch;
pub use patch::Patch;

mod tree;
pub use tree::{Tree, TreeOptions};
