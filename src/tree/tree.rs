use super::node::{read_entries, Dir, Entry, Icons, Node, NodeId, INDENT};
use super::patch::Patch;

use std::path::{Path, PathBuf};

use typed_builder::TypedBuilder;

/// Options for building a tree.
#[derive(TypedBuilder, Debug, Clone, Default)]
pub struct TreeOptions {
    /// Icons drawn in front of node names.
    #[builder(default)]
    icons: Icons,
    /// Whether entries whose names start with a dot are listed.
    #[builder(default)]
    show_hidden: bool,
}

/// The lines of a directory tree as drawn on the screen.
///
/// Every node ever created is kept in an arena so that collapsing a directory and expanding it
/// again brings back the same nodes without reading the file system again. The visible lines are
/// a list of ids into that arena, and the `top` of each visible node is its index in that list.
pub struct Tree {
    root: PathBuf,
    options: TreeOptions,
    nodes: Vec<Node>,
    visible: Vec<NodeId>,
}

impl Tree {
    /// Return a tree listing the entries of `root`, none of them expanded.
    pub fn new(root: &Path, options: TreeOptions) -> Self {
        let mut tree = Self {
            root: root.to_path_buf(),
            options,
            nodes: Vec::new(),
            visible: Vec::new(),
        };

        let entries: Vec<Entry> = read_entries(root, tree.options.show_hidden);
        for (top, entry) in entries.iter().enumerate() {
            let id = tree.create(entry, top, 0);
            tree.visible.push(id);
        }

        #[cfg(feature = "logging")]
        log::info!(
            "Listed {} entries of \"{}\".",
            tree.visible.len(),
            tree.root.display()
        );

        tree
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn icons(&self) -> &Icons {
        &self.options.icons
    }

    /// Return the number of visible lines.
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Return the ids of the visible nodes from top to bottom.
    pub fn ids(&self) -> &[NodeId] {
        &self.visible
    }

    /// Return the node drawn on `row`.
    pub fn line(&self, row: usize) -> Option<&Node> {
        self.visible.get(row).map(|id| self.node(*id))
    }

    pub fn lines(&self) -> impl Iterator<Item = &Node> + '_ {
        self.visible.iter().map(|id| self.node(*id))
    }

    /// Return the row of a node if it is visible.
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        let top = self.node(id).top();
        if self.visible.get(top) == Some(&id) {
            Some(top)
        } else {
            None
        }
    }

    /// Return the directory on `row` if `column` is within its label.
    pub fn dir_at(&self, row: usize, column: usize) -> Option<NodeId> {
        let id: NodeId = *self.visible.get(row)?;
        let node = self.node(id);
        if node.is_dir() && node.left_min() <= column && column <= node.left_max() {
            Some(id)
        } else {
            None
        }
    }

    /// Return the file on `row`.
    pub fn file_at(&self, row: usize) -> Option<NodeId> {
        let id: NodeId = *self.visible.get(row)?;
        if self.node(id).is_dir() {
            None
        } else {
            Some(id)
        }
    }

    /// Expand the directory if it is closed, otherwise collapse it.
    pub fn toggle(&mut self, id: NodeId) -> Patch {
        if self.node(id).is_open() {
            self.collapse(id)
        } else {
            self.expand(id)
        }
    }

    /// Insert the children of a closed directory below it.
    ///
    /// Children that are directories left open by an earlier collapse bring their own visible
    /// lines along.
    pub fn expand(&mut self, id: NodeId) -> Patch {
        let index: usize = match self.index_of(id) {
            Some(index) => index,
            None => return Patch::default(),
        };
        let node = self.node(id);
        if !node.is_dir() || node.is_open() || !node.has_subs() {
            return Patch::default();
        }

        self.create_children(id);
        let mut block: Vec<NodeId> = Vec::new();
        self.visible_block(id, &mut block);

        #[cfg(feature = "logging")]
        log::debug!(
            "Expanding \"{}\" inserts {} lines.",
            self.node(id).path().display(),
            block.len()
        );

        self.visible.splice(index + 1..index + 1, block);
        self.set_open(id, true);
        self.renumber(index + 1);

        Patch {
            redraw: index..self.visible.len(),
            ..Default::default()
        }
    }

    /// Remove every visible line below an open directory that belongs to it.
    ///
    /// The removed nodes keep their own state, so directories inside stay open.
    pub fn collapse(&mut self, id: NodeId) -> Patch {
        let index: usize = match self.index_of(id) {
            Some(index) => index,
            None => return Patch::default(),
        };
        if !self.node(id).is_open() {
            return Patch::default();
        }

        let removed: usize = self.visible_descendants(index);
        let lines_before: usize = self.visible.len();

        #[cfg(feature = "logging")]
        log::debug!(
            "Collapsing \"{}\" removes {} lines.",
            self.node(id).path().display(),
            removed
        );

        self.visible.drain(index + 1..index + 1 + removed);
        self.set_open(id, false);
        self.renumber(index + 1);

        Patch {
            redraw: index..self.visible.len(),
            clear: self.visible.len()..lines_before,
        }
    }

    fn create(&mut self, entry: &Entry, top: usize, left: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes
            .push(Node::new(entry, top, left, self.options.show_hidden));
        id
    }

    /// Create nodes for the children of a directory unless that was already done.
    fn create_children(&mut self, id: NodeId) {
        let parent: &Node = self.node(id);
        if parent.dir().and_then(Dir::children).is_some() {
            return;
        }

        let top: usize = parent.top();
        let left: usize = parent.left() + INDENT;
        let entries: Vec<Entry> = parent.subs().to_vec();
        let children: Vec<NodeId> = entries
            .iter()
            .enumerate()
            .map(|(offset, entry)| self.create(entry, top + 1 + offset, left))
            .collect();

        if let Some(dir) = self.nodes[id.0].dir_mut() {
            dir.set_children(children);
        }
    }

    /// Push the lines a directory shows when it is open: each child, followed by the lines of any
    /// child that is open itself.
    fn visible_block(&self, id: NodeId, block: &mut Vec<NodeId>) {
        let children: &[NodeId] = match self.node(id).dir().and_then(Dir::children) {
            Some(children) => children,
            None => return,
        };
        for child in children {
            block.push(*child);
            if self.node(*child).is_open() {
                self.visible_block(*child, block);
            }
        }
    }

    /// Return the number of lines after `index` owned by the directory at `index`.
    fn visible_descendants(&self, index: usize) -> usize {
        let id: NodeId = self.visible[index];
        let children: &[NodeId] = match self.node(id).dir() {
            Some(dir) if dir.is_open() => dir.children().unwrap_or(&[]),
            _ => return 0,
        };

        let mut next: usize = index + 1;
        for child in children {
            debug_assert_eq!(self.visible.get(next), Some(child));
            next += 1 + self.visible_descendants(next);
        }
        next - index - 1
    }

    fn set_open(&mut self, id: NodeId, open: bool) {
        if let Some(dir) = self.nodes[id.0].dir_mut() {
            dir.set_open(open);
        }
    }

    /// Make the `top` of every visible node from `start` onwards match its index.
    fn renumber(&mut self, start: usize) {
        for (top, id) in self.visible.iter().enumerate().skip(start) {
            self.nodes[id.0].set_top(top);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;
    use std::fs;

    use tempfile::TempDir;

    /// Check the invariants that must hold between any two operations.
    fn assert_consistent(tree: &Tree) {
        let mut paths: HashSet<&Path> = HashSet::new();
        for (index, node) in tree.lines().enumerate() {
            assert_eq!(node.top(), index, "{}", node.path().display());
            assert!(paths.insert(node.path()), "{}", node.path().display());
        }

        for (index, id) in tree.ids().iter().enumerate() {
            let node = tree.node(*id);
            let dir = match node.dir() {
                Some(dir) => dir,
                None => continue,
            };
            let owned: Vec<NodeId> = tree.ids()[index + 1..]
                .iter()
                .take_while(|other| tree.node(**other).left() > node.left())
                .copied()
                .collect();
            if dir.is_open() {
                let children: Vec<NodeId> = owned
                    .into_iter()
                    .filter(|other| tree.node(*other).left() == node.left() + INDENT)
                    .collect();
                assert_eq!(Some(children.as_slice()), dir.children());
                assert_eq!(tree.ids().get(index + 1), children.first());
            } else {
                assert!(owned.is_empty(), "{}", node.path().display());
            }
        }
    }

    fn find(tree: &Tree, name: &str) -> NodeId {
        *tree
            .ids()
            .iter()
            .find(|id| tree.node(**id).name() == name)
            .unwrap()
    }

    fn names(tree: &Tree) -> Vec<&str> {
        tree.lines().map(Node::name).collect()
    }

    /// A root with `a/x` and `b`.
    fn small() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("a")).unwrap();
        fs::write(temp_dir.path().join("a").join("x"), "").unwrap();
        fs::write(temp_dir.path().join("b"), "").unwrap();
        temp_dir
    }

    /// A root with `outer/inner/leaf` and nothing else.
    fn nested() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("outer").join("inner")).unwrap();
        fs::write(
            temp_dir.path().join("outer").join("inner").join("leaf"),
            "",
        )
        .unwrap();
        temp_dir
    }

    #[test]
    fn test_new_lists_root_entries() {
        let temp_dir = small();

        let tree = Tree::new(temp_dir.path(), TreeOptions::default());

        assert_eq!(tree.len(), 2);
        let mut sorted = names(&tree);
        sorted.sort_unstable();
        assert_eq!(sorted, vec!["a", "b"]);
        assert!(tree.lines().all(|node| node.left() == 0));
        assert_consistent(&tree);
    }

    #[test]
    fn test_new_with_unreadable_root() {
        let temp_dir = TempDir::new().unwrap();

        let tree = Tree::new(&temp_dir.path().join("missing"), TreeOptions::default());

        assert!(tree.is_empty());
    }

    #[test]
    fn test_expand_then_collapse() {
        let temp_dir = small();
        let mut tree = Tree::new(temp_dir.path(), TreeOptions::default());
        let a = find(&tree, "a");
        let b = find(&tree, "b");
        let a_top = tree.node(a).top();
        let b_top = tree.node(b).top();
        let before: Vec<NodeId> = tree.ids().to_vec();

        let patch = tree.expand(a);

        assert_consistent(&tree);
        assert_eq!(tree.len(), 3);
        assert!(tree.node(a).is_open());
        let x = tree.ids()[a_top + 1];
        assert_eq!(tree.node(x).name(), "x");
        assert_eq!(tree.node(x).left(), INDENT);
        let b_shift = if b_top > a_top { 1 } else { 0 };
        assert_eq!(tree.node(b).top(), b_top + b_shift);
        assert_eq!(patch.redraw, a_top..3);
        assert!(patch.clear.is_empty());

        let patch = tree.collapse(a);

        assert_consistent(&tree);
        assert_eq!(tree.ids(), before.as_slice());
        assert_eq!(tree.node(a).top(), a_top);
        assert_eq!(tree.node(b).top(), b_top);
        assert!(!tree.node(a).is_open());
        assert_eq!(tree.index_of(x), None);
        assert_eq!(patch.redraw, a_top..2);
        assert_eq!(patch.clear, 2..3);

        tree.expand(a);

        assert_eq!(tree.ids()[a_top + 1], x);
    }

    #[test]
    fn test_collapse_closed_dir_is_noop() {
        let temp_dir = small();
        let mut tree = Tree::new(temp_dir.path(), TreeOptions::default());
        let a = find(&tree, "a");
        let before: Vec<NodeId> = tree.ids().to_vec();

        let patch = tree.collapse(a);

        assert!(patch.is_empty());
        assert_eq!(tree.ids(), before.as_slice());
    }

    #[test]
    fn test_expand_open_dir_is_noop() {
        let temp_dir = small();
        let mut tree = Tree::new(temp_dir.path(), TreeOptions::default());
        let a = find(&tree, "a");
        tree.expand(a);
        let before: Vec<NodeId> = tree.ids().to_vec();

        let patch = tree.expand(a);

        assert!(patch.is_empty());
        assert_eq!(tree.ids(), before.as_slice());
    }

    #[test]
    fn test_expand_empty_dir_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("empty")).unwrap();
        let mut tree = Tree::new(temp_dir.path(), TreeOptions::default());
        let empty = find(&tree, "empty");

        let patch = tree.expand(empty);

        assert!(patch.is_empty());
        assert!(!tree.node(empty).is_open());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_expand_file_is_noop() {
        let temp_dir = small();
        let mut tree = Tree::new(temp_dir.path(), TreeOptions::default());
        let b = find(&tree, "b");

        assert!(tree.toggle(b).is_empty());
    }

    #[test]
    fn test_collapse_keeps_nested_dirs_open() {
        let temp_dir = nested();
        let mut tree = Tree::new(temp_dir.path(), TreeOptions::default());
        let outer = find(&tree, "outer");

        tree.toggle(outer);
        let inner = find(&tree, "inner");
        tree.toggle(inner);

        assert_consistent(&tree);
        assert_eq!(names(&tree), vec!["outer", "inner", "leaf"]);
        assert_eq!(
            tree.lines().map(Node::left).collect::<Vec<usize>>(),
            vec![0, 2, 4]
        );

        let patch = tree.toggle(outer);

        assert_consistent(&tree);
        assert_eq!(names(&tree), vec!["outer"]);
        assert!(tree.node(inner).is_open());
        assert_eq!(patch.redraw, 0..1);
        assert_eq!(patch.clear, 1..3);

        let patch = tree.toggle(outer);

        assert_consistent(&tree);
        assert_eq!(names(&tree), vec!["outer", "inner", "leaf"]);
        assert_eq!(patch.redraw, 0..3);
    }

    #[test]
    fn test_collapse_inner_dir() {
        let temp_dir = nested();
        let mut tree = Tree::new(temp_dir.path(), TreeOptions::default());
        let outer = find(&tree, "outer");
        tree.expand(outer);
        let inner = find(&tree, "inner");
        tree.expand(inner);

        let patch = tree.collapse(inner);

        assert_consistent(&tree);
        assert_eq!(names(&tree), vec!["outer", "inner"]);
        assert!(tree.node(outer).is_open());
        assert_eq!(patch.redraw, 1..2);
        assert_eq!(patch.clear, 2..3);
    }

    #[test]
    fn test_round_trips_over_every_dir() {
        let temp_dir = TempDir::new().unwrap();
        for dir in ["one", "two", "three"] {
            fs::create_dir_all(temp_dir.path().join(dir).join("sub")).unwrap();
            fs::write(temp_dir.path().join(dir).join("sub").join("file"), "").unwrap();
            fs::write(temp_dir.path().join(dir).join("file"), "").unwrap();
        }
        fs::write(temp_dir.path().join("file"), "").unwrap();
        let mut tree = Tree::new(temp_dir.path(), TreeOptions::default());

        for name in ["one", "two", "three"] {
            let dir = find(&tree, name);
            tree.expand(dir);
            let sub = *tree
                .ids()
                .iter()
                .find(|id| tree.node(**id).name() == "sub" && !tree.node(**id).is_open())
                .unwrap();
            tree.expand(sub);
            assert_consistent(&tree);
        }
        assert_eq!(tree.len(), 4 + 3 * 3);

        for name in ["two", "one", "three"] {
            let dir = find(&tree, name);
            let before: Vec<NodeId> = tree.ids().to_vec();
            let tops: Vec<usize> = tree.lines().map(Node::top).collect();

            tree.collapse(dir);
            assert_consistent(&tree);
            tree.expand(dir);

            assert_consistent(&tree);
            assert_eq!(tree.ids(), before.as_slice());
            assert_eq!(tree.lines().map(Node::top).collect::<Vec<usize>>(), tops);
        }
    }

    #[test]
    fn test_hit_tests() {
        let temp_dir = nested();
        let mut tree = Tree::new(temp_dir.path(), TreeOptions::default());
        let outer = find(&tree, "outer");
        tree.expand(outer);
        let inner = find(&tree, "inner");
        tree.expand(inner);

        // "v inner" is drawn from column 2 to column 9.
        assert_eq!(tree.dir_at(1, 1), None);
        assert_eq!(tree.dir_at(1, 2), Some(inner));
        assert_eq!(tree.dir_at(1, 9), Some(inner));
        assert_eq!(tree.dir_at(1, 10), None);
        assert_eq!(tree.dir_at(2, 4), None);
        assert_eq!(tree.dir_at(3, 0), None);

        assert_eq!(tree.file_at(1), None);
        assert_eq!(tree.file_at(2), Some(find(&tree, "leaf")));
        assert_eq!(tree.file_at(3), None);
    }

    #[test]
    fn test_hidden_entries() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".hidden"), "").unwrap();

        let hiding = Tree::new(temp_dir.path(), TreeOptions::default());
        let showing = Tree::new(
            temp_dir.path(),
            TreeOptions::builder().show_hidden(true).build(),
        );

        assert!(hiding.is_empty());
        assert_eq!(names(&showing), vec![".hidden"]);
    }
}
