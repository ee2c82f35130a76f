//! Turns the files picked in a tree into the file selection parameter of the
//! "select files" call: `all`, or a comma separated list of file ids.

use std::{collections::HashSet, fmt};

use crate::{
    entry::FileEntry,
    error::commit::CommitError,
    node::{Node, TraversalOrder},
    FileId, ALL_FILES,
};

/// The files a user picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every file, without looking at the tree.
    All,
    /// The ids of the selected files, in walk order, without duplicates.
    Files(Vec<FileId>),
    /// No file is selected. This must not be sent to the service.
    Nothing,
}

impl Selection {
    /// Collects the selected files of the tree, walking it in `order`.
    pub fn from_tree(root: &Node<FileEntry>, order: TraversalOrder) -> Self {
        let ids = selected_ids(root, order);
        if ids.is_empty() {
            Self::Nothing
        } else {
            Self::Files(ids)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns the parameter to send, or an error if nothing is selected.
    pub fn into_param(self) -> Result<String, CommitError> {
        match self {
            Self::Nothing => Err(CommitError::NothingSelected),
            selection => Ok(selection.to_string()),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_FILES),
            Self::Files(ids) => {
                for (i, id) in ids.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{id}")?;
                }
                Ok(())
            }
            Self::Nothing => Ok(()),
        }
    }
}

/// Returns the ids of the selected files of the tree in walk order.
///
/// Folders never contribute. An id met twice is only kept the first time.
pub fn selected_ids(root: &Node<FileEntry>, order: TraversalOrder) -> Vec<FileId> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    root.traverse(order, |entry| {
        if entry.is_folder() || !entry.selected {
            return;
        }
        if seen.insert(entry.id) {
            ids.push(entry.id);
        } else {
            log::warn!("File id {} is listed more than once", entry.id);
        }
    });
    ids
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        builder::build_file_tree,
        info::InfoFile,
        selection::{set_selected, toggle_file},
    };

    fn tree() -> Node<FileEntry> {
        let files = vec![
            InfoFile::new(1, "/mars/docs/help.txt", 10, true),
            InfoFile::new(2, "/mars/mips.asm", 96, false),
            InfoFile::new(3, "/README.md", 5, true),
            InfoFile::new(4, "/mars/mars.jar", 4000, true),
        ];
        build_file_tree(&files, false)
    }

    #[test]
    fn test_depth_first_ids() {
        let root = tree();
        let selection = Selection::from_tree(&root, TraversalOrder::DepthFirst);
        assert_eq!(selection, Selection::Files(vec![1, 4, 3]));
        assert_eq!(selection.to_string(), "1,4,3");
    }

    #[test]
    fn test_breadth_first_ids() {
        let root = tree();
        let selection = Selection::from_tree(&root, TraversalOrder::BreadthFirst);
        assert_eq!(selection.to_string(), "3,4,1");
    }

    #[test]
    fn test_order_does_not_change_the_set() {
        let root = tree();
        let mut dfs = selected_ids(&root, TraversalOrder::DepthFirst);
        let mut bfs = selected_ids(&root, TraversalOrder::BreadthFirst);
        dfs.sort_unstable();
        bfs.sort_unstable();
        assert_eq!(dfs, bfs);
    }

    #[test]
    fn test_nothing_selected() {
        let mut root = tree();
        set_selected(&mut root, false);

        let selection = Selection::from_tree(&root, TraversalOrder::DepthFirst);
        assert_eq!(selection, Selection::Nothing);
        assert!(selection.is_empty());
        assert_eq!(selection.to_string(), "");
        assert_ne!(selection, Selection::All);
        assert_eq!(selection.into_param(), Err(CommitError::NothingSelected));
    }

    #[test]
    fn test_all() {
        assert_eq!(Selection::All.into_param(), Ok("all".to_string()));
    }

    #[test]
    fn test_deselected_duplicate_id_is_not_committed() {
        let files = vec![
            InfoFile::new(5, "/a.txt", 1, true),
            InfoFile::new(5, "/b/a.txt", 1, true),
            InfoFile::new(6, "/c.txt", 1, true),
        ];
        let mut root = build_file_tree(&files, false);
        assert_eq!(
            Selection::from_tree(&root, TraversalOrder::DepthFirst).to_string(),
            "5,6"
        );

        assert!(toggle_file(&mut root, 5));
        assert_eq!(
            Selection::from_tree(&root, TraversalOrder::DepthFirst).into_param(),
            Ok("6".to_string())
        );
    }

    #[test]
    fn test_hand_built_duplicates_are_listed_once() {
        let mut root = Node::new(FileEntry::root());
        root.add_child(Node::new(FileEntry::file(5, "a.txt", "/a.txt", 1, true)));
        root.add_child(Node::new(FileEntry::file(5, "b.txt", "/b.txt", 1, true)));
        root.add_child(Node::new(FileEntry::file(6, "c.txt", "/c.txt", 1, true)));

        assert_eq!(selected_ids(&root, TraversalOrder::BreadthFirst), vec![5, 6]);
    }
}
