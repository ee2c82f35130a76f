//! Selection changes on a file tree.
//!
//! A file toggle only flips the file. A folder toggle cascades: every node
//! beneath the folder, and the folder itself, is overwritten with the
//! negation of the folder's flag, whatever each of them held before.

use crate::{
    entry::{FileEntry, FolderKey, Summary},
    node::Node,
    FileId,
};

/// Selection state of a node, derived from the files beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Every file is selected.
    Selected,
    /// No file is selected, or there is no file at all.
    Unselected,
    /// Some but not all files are selected.
    Partial,
}

impl Summary {
    /// The selection state of the subtree these figures were taken from.
    pub fn state(&self) -> SelectionState {
        if self.selected_count == 0 {
            SelectionState::Unselected
        } else if self.selected_count == self.file_count {
            SelectionState::Selected
        } else {
            SelectionState::Partial
        }
    }
}

impl Node<FileEntry> {
    pub fn selection_state(&self) -> SelectionState {
        self.summary().state()
    }
}

/// Flips the selection of the first file, in pre-order, with the given id.
///
/// Returns false, leaving the tree untouched, if no file has this id.
pub fn toggle_file(root: &mut Node<FileEntry>, id: FileId) -> bool {
    match root.find_node_mut(|n| !n.is_folder() && n.value.id == id) {
        Some(node) => {
            node.value.selected = !node.value.selected;
            log::debug!("Toggled {}", node.value);
            true
        }
        None => {
            log::trace!("No file with id {} to toggle", id);
            false
        }
    }
}

/// Selects or deselects everything in the first folder matching `key`.
///
/// Returns false, leaving the tree untouched, if no folder matches.
pub fn toggle_folder(root: &mut Node<FileEntry>, key: &FolderKey) -> bool {
    match root.find_node_mut(|n| key.matches(&n.value)) {
        Some(folder) => {
            let selected = !folder.value.selected;
            set_selected(folder, selected);
            log::debug!("Set {} selected: {}", folder.value, selected);
            true
        }
        None => {
            log::trace!("No folder {:?} to toggle", key);
            false
        }
    }
}

/// Overwrites the flag of every node in the subtree, `node` included.
pub fn set_selected(node: &mut Node<FileEntry>, selected: bool) {
    node.traverse_node_depth_first_mut(|n| n.value.selected = selected);
}

/// Sets the flag of every folder to whether all files beneath it are
/// selected. A folder without files ends up deselected.
pub fn reconcile_folders(root: &mut Node<FileEntry>) {
    let summaries = root.summaries();
    let mut index = 0;
    // same pre-order as `summaries`, the structure is not touched
    root.traverse_node_depth_first_mut(|n| {
        if n.is_folder() {
            n.value.selected = summaries[index].state() == SelectionState::Selected;
        }
        index += 1;
    });
}
