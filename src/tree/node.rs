/*!
A node is one line of the tree: a file or a directory, with the screen position its label is drawn
at.
*/
use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use unicode_segmentation::UnicodeSegmentation;
use walkdir::{DirEntry, WalkDir};

/// Columns a child is indented by relative to its parent directory.
pub const INDENT: usize = 2;

/// Identifies a node in the tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(super) usize);

/// An immediate child of a directory as found on the file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,
    is_dir: bool,
}

impl Entry {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }
}

/// Return the immediate children of `dir` in the order the file system lists them.
///
/// A directory that cannot be read has no children, and entries that cannot be read are skipped.
/// Symbolic links count as directories when they point to one.
pub fn read_entries(dir: &Path, show_hidden: bool) -> Vec<Entry> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| show_hidden || !is_hidden(entry))
        .map(|entry| {
            let is_dir = entry.file_type().is_dir()
                || (entry.path_is_symlink() && entry.path().is_dir());
            Entry {
                path: entry.into_path(),
                is_dir,
            }
        })
        .collect()
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// The glyphs drawn in front of node names.
///
/// Every icon is a single grapheme so that the name always starts [`INDENT`] columns after the
/// node's left edge.
#[derive(Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(default)]
pub struct Icons {
    pub file: String,
    pub closed: String,
    pub empty: String,
    pub open: String,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            file: String::from("X"),
            closed: String::from("+"),
            empty: String::from("-"),
            open: String::from("v"),
        }
    }
}

/// Directory specific state.
#[derive(Debug)]
pub struct Dir {
    show_hidden: bool,
    /// Cached on first read so the order stays stable between toggles.
    subs: OnceCell<Vec<Entry>>,
    /// Nodes for the entries in `subs`, created on the first expand.
    children: Option<Vec<NodeId>>,
    open: bool,
}

impl Dir {
    fn new(show_hidden: bool) -> Self {
        Self {
            show_hidden,
            subs: OnceCell::new(),
            children: None,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub(super) fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub(super) fn children(&self) -> Option<&[NodeId]> {
        self.children.as_deref()
    }

    pub(super) fn set_children(&mut self, children: Vec<NodeId>) {
        self.children = Some(children);
    }
}

#[derive(Debug)]
pub enum NodeKind {
    File,
    Dir(Dir),
}

/// A file or directory drawn on one line of the screen.
#[derive(Debug)]
pub struct Node {
    path: PathBuf,
    name: String,
    top: usize,
    left: usize,
    kind: NodeKind,
}

impl Node {
    pub(super) fn new(entry: &Entry, top: usize, left: usize, show_hidden: bool) -> Self {
        let name: String = entry
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| entry.path.to_string_lossy().into_owned());
        let kind = if entry.is_dir {
            NodeKind::Dir(Dir::new(show_hidden))
        } else {
            NodeKind::File
        };
        Self {
            path: entry.path.clone(),
            name,
            top,
            left,
            kind,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn top(&self) -> usize {
        self.top
    }

    pub(super) fn set_top(&mut self, top: usize) {
        self.top = top;
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub(super) fn dir_mut(&mut self) -> Option<&mut Dir> {
        match &mut self.kind {
            NodeKind::Dir(dir) => Some(dir),
            NodeKind::File => None,
        }
    }

    pub fn dir(&self) -> Option<&Dir> {
        match &self.kind {
            NodeKind::Dir(dir) => Some(dir),
            NodeKind::File => None,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Dir(_))
    }

    pub fn is_open(&self) -> bool {
        self.dir().map(Dir::is_open).unwrap_or(false)
    }

    /// Return the immediate children of a directory, reading them from the file system the first
    /// time. Files have none.
    pub fn subs(&self) -> &[Entry] {
        match &self.kind {
            NodeKind::Dir(dir) => dir
                .subs
                .get_or_init(|| read_entries(&self.path, dir.show_hidden)),
            NodeKind::File => &[],
        }
    }

    pub fn has_subs(&self) -> bool {
        !self.subs().is_empty()
    }

    pub fn icon<'a>(&self, icons: &'a Icons) -> &'a str {
        match &self.kind {
            NodeKind::File => &icons.file,
            NodeKind::Dir(dir) if dir.open => &icons.open,
            NodeKind::Dir(_) if self.has_subs() => &icons.closed,
            NodeKind::Dir(_) => &icons.empty,
        }
    }

    pub fn label(&self, icons: &Icons) -> String {
        format!("{} {}", self.icon(icons), self.name)
    }

    /// The first column of the label.
    pub fn left_min(&self) -> usize {
        self.left
    }

    /// The column just after the label.
    pub fn left_max(&self) -> usize {
        self.left + INDENT + self.name.graphemes(true).count()
    }

    /// Return whether `column` is past the icon, over the name.
    pub fn is_over_text(&self, column: usize) -> bool {
        column >= self.left + INDENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::TempDir;
    use test_case::test_case;

    fn node(path: &str, is_dir: bool, left: usize) -> Node {
        let entry = Entry {
            path: PathBuf::from(path),
            is_dir,
        };
        Node::new(&entry, 0, left, false)
    }

    #[test_case("/tmp/foo", 4, 4, 9; "an ascii name")]
    #[test_case("/tmp/añb", 0, 0, 5; "a name with a multi byte character")]
    #[test_case("/tmp/e\u{301}", 2, 2, 5; "a name with a combining character")]
    fn test_span(path: &str, left: usize, left_min: usize, left_max: usize) {
        let node = node(path, false, left);

        assert_eq!(node.left_min(), left_min);
        assert_eq!(node.left_max(), left_max);
    }

    #[test_case(4, false; "the icon")]
    #[test_case(5, false; "the space after the icon")]
    #[test_case(6, true; "the first character of the name")]
    #[test_case(9, true; "the end of the label")]
    fn test_is_over_text(column: usize, expected: bool) {
        let node = node("/tmp/foo", true, 4);

        assert_eq!(node.is_over_text(column), expected);
    }

    #[test]
    fn test_file_label() {
        let node = node("/tmp/notes.txt", false, 0);

        assert_eq!(node.label(&Icons::default()), "X notes.txt");
        assert!(node.subs().is_empty());
    }

    #[test]
    fn test_dir_icons() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("full")).unwrap();
        fs::write(temp_dir.path().join("full").join("x"), "").unwrap();
        fs::create_dir(temp_dir.path().join("empty")).unwrap();
        let icons = Icons::default();

        let full = Node::new(
            &Entry {
                path: temp_dir.path().join("full"),
                is_dir: true,
            },
            0,
            0,
            false,
        );
        let empty = Node::new(
            &Entry {
                path: temp_dir.path().join("empty"),
                is_dir: true,
            },
            1,
            0,
            false,
        );

        assert_eq!(full.label(&icons), "+ full");
        assert_eq!(empty.label(&icons), "- empty");
    }

    #[test]
    fn test_subs_are_cached() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a"), "").unwrap();
        let dir = Node::new(
            &Entry {
                path: temp_dir.path().to_path_buf(),
                is_dir: true,
            },
            0,
            0,
            false,
        );

        assert_eq!(dir.subs().len(), 1);
        fs::write(temp_dir.path().join("b"), "").unwrap();
        assert_eq!(dir.subs().len(), 1);
    }

    #[test]
    fn test_read_entries() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("dir")).unwrap();
        fs::write(temp_dir.path().join("file"), "").unwrap();
        fs::write(temp_dir.path().join(".hidden"), "").unwrap();

        let mut entries = read_entries(temp_dir.path(), false);
        entries.sort_by(|a, b| a.path().cmp(b.path()));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].path(), temp_dir.path().join("dir"));
        assert!(entries[0].is_dir());
        assert_eq!(entries[1].path(), temp_dir.path().join("file"));
        assert!(!entries[1].is_dir());

        assert_eq!(read_entries(temp_dir.path(), true).len(), 3);
    }

    #[test]
    fn test_read_entries_of_missing_dir() {
        let temp_dir = TempDir::new().unwrap();

        assert!(read_entries(&temp_dir.path().join("missing"), false).is_empty());
    }
}
