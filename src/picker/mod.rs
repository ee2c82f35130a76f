//! The file picking session of one torrent.
//!
//! The picker owns the tree for as long as the user is choosing files. New
//! torrent info replaces the tree wholesale, and committing consumes the
//! picker, so no tree outlives the selection it was built for.

use crate::{
    builder::{build_file_tree, FileNode},
    commit::Selection,
    conf::PickerConf,
    entry::{FolderKey, Summary},
    error::commit::CommitError,
    info::{InfoFile, TorrentInfo},
    listing::{list_nodes, ListedNode},
    selection, FileId,
};


pub struct FilePicker {
    conf: PickerConf,
    root: FileNode,
}

impl FilePicker {
    /// Builds the tree of the given files.
    pub fn new(files: &[InfoFile], conf: PickerConf) -> Self {
        let root = build_file_tree(files, conf.selected_only);
        Self { conf, root }
    }

    pub fn from_info(info: &TorrentInfo, conf: PickerConf) -> Self {
        log::debug!(
            "Picking files of torrent {} ({} files, status {:?})",
            info.id,
            info.files.len(),
            info.status
        );
        Self::new(&info.files, conf)
    }

    /// Discards the current tree and builds a new one from `files`.
    ///
    /// Selection changes made on the old tree are lost, the new file list is
    /// authoritative.
    pub fn rebuild(&mut self, files: &[InfoFile]) {
        log::debug!("Rebuilding file tree from {} files", files.len());
        self.root = build_file_tree(files, self.conf.selected_only);
    }

    pub fn conf(&self) -> &PickerConf {
        &self.conf
    }

    pub fn tree(&self) -> &FileNode {
        &self.root
    }

    /// Flips the selection of a file. Returns false if no file has the id.
    pub fn toggle_file(&mut self, id: FileId) -> bool {
        selection::toggle_file(&mut self.root, id)
    }

    /// Selects or deselects a whole folder. Returns false if no folder matches.
    pub fn toggle_folder(&mut self, key: &FolderKey) -> bool {
        selection::toggle_folder(&mut self.root, key)
    }

    /// Selects or deselects every file.
    pub fn set_all(&mut self, selected: bool) {
        selection::set_selected(&mut self.root, selected);
    }

    /// Returns the rows to render, in display order.
    pub fn listing(&self) -> Vec<ListedNode> {
        list_nodes(&self.root)
    }

    pub fn summary(&self) -> Summary {
        self.root.summary()
    }

    pub fn file_count(&self) -> usize {
        self.summary().file_count
    }

    pub fn selected_count(&self) -> usize {
        self.summary().selected_count
    }

    pub fn selected_bytes(&self) -> u64 {
        self.summary().selected_bytes
    }

    /// Returns the files currently selected in the tree.
    pub fn selection(&self) -> Selection {
        Selection::from_tree(&self.root, self.conf.order)
    }

    /// Ends the session and returns the file selection parameter.
    ///
    /// With `download_all` the tree is not looked at and `all` is returned.
    /// Otherwise an empty selection is reported as an error so that it is
    /// never sent to the service.
    pub fn commit(self, download_all: bool) -> Result<String, CommitError> {
        let selection = if download_all {
            Selection::All
        } else {
            self.selection()
        };
        log::debug!("Committing selection {:?}", selection);
        selection.into_param()
    }
}
