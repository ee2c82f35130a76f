//! A flat, display ordered view of a file tree.

use crate::{entry::FileEntry, node::Node, selection::SelectionState};

/// A node of the tree as a row to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedNode {
    /// 0 for the root, 1 for its children and so on.
    pub depth: usize,
    pub entry: FileEntry,
    pub state: SelectionState,
    /// The file's size, or the sum of the sizes of the files in the folder.
    pub size_bytes: u64,
    /// 1 for a file, the number of files beneath a folder.
    pub file_count: usize,
}

impl ListedNode {
    pub fn is_folder(&self) -> bool {
        self.entry.is_folder()
    }
}

/// Lists every node of the tree, root included, in pre-order.
pub fn list_nodes(root: &Node<FileEntry>) -> Vec<ListedNode> {
    let summaries = root.summaries();
    let mut rows = Vec::with_capacity(summaries.len());
    root.traverse_node_depth_first(|node| {
        let summary = summaries[rows.len()];
        rows.push(ListedNode {
            depth: node.value.depth(),
            entry: node.value.clone(),
            state: summary.state(),
            size_bytes: summary.total_bytes,
            file_count: summary.file_count,
        });
    });
    rows
}
