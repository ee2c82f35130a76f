use std::fmt;

use crate::{node::Node, FileId, FOLDER_ID, PATH_SEPARATOR};

/// The value stored at each node of a torrent's file tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// The service's file id, or [`FOLDER_ID`] for a synthetic folder.
    pub id: FileId,
    /// The last segment of the path.
    pub name: String,
    /// Path from the torrent root, always starting with `/`.
    pub absolute_path: String,
    /// The declared size for files. Always 0 for folders, whose size is
    /// derived from their descendants, see [`Node::summary`].
    pub size_bytes: u64,
    /// For files, whether the file is picked for download. For folders, a
    /// convenience flag meaning "everything beneath was selected", maintained
    /// by reconciliation and folder cascades only.
    pub selected: bool,
}

impl FileEntry {
    pub fn file(
        id: FileId,
        name: impl Into<String>,
        absolute_path: impl Into<String>,
        size_bytes: u64,
        selected: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            absolute_path: absolute_path.into(),
            size_bytes,
            selected,
        }
    }

    pub fn folder(name: impl Into<String>, absolute_path: impl Into<String>) -> Self {
        Self {
            id: FOLDER_ID,
            name: name.into(),
            absolute_path: absolute_path.into(),
            size_bytes: 0,
            selected: false,
        }
    }

    /// The torrent's top-level directory.
    pub fn root() -> Self {
        Self::folder("", PATH_SEPARATOR.to_string())
    }

    pub fn is_folder(&self) -> bool {
        self.id == FOLDER_ID
    }

    /// Returns the absolute path of a child of this entry named `name`.
    pub fn child_path(&self, name: &str) -> String {
        let parent = self.absolute_path.trim_end_matches(PATH_SEPARATOR);
        format!("{parent}{PATH_SEPARATOR}{name}")
    }

    /// Returns the number of folders between the root and this entry, that
    /// is 0 for the root and 1 for its direct children.
    pub fn depth(&self) -> usize {
        self.absolute_path
            .split(PATH_SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .count()
    }
}

impl fmt::Display for FileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_folder() {
            write!(f, "{} (folder)", self.absolute_path)
        } else {
            write!(
                f,
                "{} (id: {} size: {} selected: {})",
                self.absolute_path, self.id, self.size_bytes, self.selected
            )
        }
    }
}

/// The structural identity of a folder.
///
/// Trees are rebuilt whenever fresh torrent info arrives, so a folder the user
/// saw before a rebuild is found again by its path and name rather than by
/// the node it used to live in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FolderKey {
    pub absolute_path: String,
    pub name: String,
}

impl FolderKey {
    pub fn new(absolute_path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            absolute_path: absolute_path.into(),
            name: name.into(),
        }
    }

    /// Returns the key of the entry if it is a folder.
    pub fn of(entry: &FileEntry) -> Option<Self> {
        entry
            .is_folder()
            .then(|| Self::new(entry.absolute_path.clone(), entry.name.clone()))
    }

    pub fn matches(&self, entry: &FileEntry) -> bool {
        entry.is_folder() && entry.absolute_path == self.absolute_path && entry.name == self.name
    }
}

/// Aggregated figures over the files of a subtree.
///
/// Byte totals saturate instead of overflowing, sizes come from the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub file_count: usize,
    pub selected_count: usize,
    pub total_bytes: u64,
    pub selected_bytes: u64,
}

impl Summary {
    /// The figures of a single entry. A folder on its own counts for nothing.
    pub fn of_entry(entry: &FileEntry) -> Self {
        if entry.is_folder() {
            return Self::default();
        }
        Self {
            file_count: 1,
            selected_count: usize::from(entry.selected),
            total_bytes: entry.size_bytes,
            selected_bytes: if entry.selected { entry.size_bytes } else { 0 },
        }
    }

    pub fn add(&mut self, other: &Summary) {
        self.file_count += other.file_count;
        self.selected_count += other.selected_count;
        self.total_bytes = self.total_bytes.saturating_add(other.total_bytes);
        self.selected_bytes = self.selected_bytes.saturating_add(other.selected_bytes);
    }
}

impl Node<FileEntry> {
    pub fn is_folder(&self) -> bool {
        self.value.is_folder()
    }

    /// Sums up the files at or below this node.
    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        self.traverse_depth_first(|entry| summary.add(&Summary::of_entry(entry)));
        summary
    }

    /// Returns the summary of every node of the tree, in pre-order.
    ///
    /// Nodes are numbered in pre-order, so each node's descendants come after
    /// it. Folding the list back to front adds every subtree into its parent
    /// once, in a single pass.
    pub fn summaries(&self) -> Vec<Summary> {
        let mut summaries = Vec::new();
        let mut parents = Vec::new();
        let mut stack = vec![(self, None)];
        while let Some((node, parent)) = stack.pop() {
            let index = summaries.len();
            summaries.push(Summary::of_entry(&node.value));
            parents.push(parent);
            stack.extend(node.children.iter().rev().map(|c| (c, Some(index))));
        }

        for index in (1..summaries.len()).rev() {
            if let Some(parent) = parents[index] {
                let child = summaries[index];
                summaries[parent].add(&child);
            }
        }
        summaries
    }

    /// The size of a file, or the sum of the sizes of all files below a folder.
    pub fn size_bytes(&self) -> u64 {
        if self.is_folder() {
            self.summary().total_bytes
        } else {
            self.value.size_bytes
        }
    }
}
