//! Builds the file tree of a torrent from its flat file list.
//!
//! Folders only exist implicitly in torrent info, as path prefixes shared by
//! files, so they are synthesized while walking each file's path.

use std::collections::HashMap;

use crate::{
    entry::FileEntry, info::InfoFile, node::Node, selection::reconcile_folders, FileId,
    PATH_SEPARATOR,
};

pub type FileNode = Node<FileEntry>;

/// Builds a tree whose root is the torrent's top-level directory.
///
/// If `selected_only` is set, files that are not selected are left out.
///
/// Empty path segments (doubled or trailing separators) are collapsed and
/// files whose path has no segment at all are skipped. Conflicts are settled
/// by the later record: a repeated file id keeps only its last record, and a
/// name already taken under a folder, by a file or by a folder, is given to
/// the later record. Folder flags are reconciled once every file is attached.
pub fn build_file_tree<'a>(
    files: impl IntoIterator<Item = &'a InfoFile>,
    selected_only: bool,
) -> FileNode {
    let mut root = Node::new(FileEntry::root());

    for file in latest_records(files) {
        if selected_only && !file.selected {
            continue;
        }

        let segments = path_segments(&file.path);
        let Some((name, dirs)) = segments.split_last() else {
            log::warn!("File {} has no path segment, skipping it", file.id);
            continue;
        };

        let mut parent = &mut root;
        for dir in dirs {
            parent = folder_child(parent, dir);
        }
        attach_file(parent, name, file);
    }

    reconcile_folders(&mut root);

    if log::log_enabled!(log::Level::Debug) {
        let summary = root.summary();
        log::debug!(
            "Built file tree of {} nodes, {} files ({} selected)",
            root.node_count(),
            summary.file_count,
            summary.selected_count
        );
    }

    root
}

/// Drops every record whose id is repeated by a later record.
fn latest_records<'a>(files: impl IntoIterator<Item = &'a InfoFile>) -> Vec<&'a InfoFile> {
    let files: Vec<_> = files.into_iter().collect();

    let mut last_index: HashMap<FileId, usize> = HashMap::with_capacity(files.len());
    for (index, file) in files.iter().enumerate() {
        last_index.insert(file.id, index);
    }
    if last_index.len() == files.len() {
        return files;
    }

    files
        .iter()
        .enumerate()
        .filter(|(index, file)| {
            let latest = last_index.get(&file.id) == Some(index);
            if !latest {
                log::warn!(
                    "File id {} is listed more than once, dropping {:?}",
                    file.id,
                    file.path
                );
            }
            latest
        })
        .map(|(_, file)| *file)
        .collect()
}

/// Splits a path into its non-empty segments.
fn path_segments(path: &str) -> Vec<&str> {
    let mut raw = path.split(PATH_SEPARATOR);
    // a well formed path starts with the separator
    if path.starts_with(PATH_SEPARATOR) {
        raw.next();
    }

    let segments: Vec<_> = raw.clone().filter(|s| !s.is_empty()).collect();
    if !path.starts_with(PATH_SEPARATOR) || segments.len() != raw.count() {
        log::warn!("Path {:?} is not clean, collapsing it", path);
    }
    segments
}

/// Returns the folder named `name` under `parent`, creating it if needed.
///
/// A file already holding the name is replaced by the folder.
fn folder_child<'a>(parent: &'a mut FileNode, name: &str) -> &'a mut FileNode {
    let pos = parent.children.iter().position(|c| c.value.name == name);
    let path = parent.value.child_path(name);

    match pos {
        Some(i) if parent.children[i].is_folder() => &mut parent.children[i],
        Some(i) => {
            log::warn!(
                "File {:?} (id {}) is replaced by a folder of the same name",
                path,
                parent.children[i].value.id
            );
            let child = &mut parent.children[i];
            *child = Node::new(FileEntry::folder(name, path));
            child
        }
        None => {
            log::trace!("Creating folder {:?}", path);
            parent.add_child(Node::new(FileEntry::folder(name, path)))
        }
    }
}

fn attach_file(parent: &mut FileNode, name: &str, file: &InfoFile) {
    let entry = FileEntry::file(
        file.id,
        name,
        parent.value.child_path(name),
        file.bytes,
        file.selected,
    );

    let existing = parent.children.iter_mut().find(|c| c.value.name == name);

    match existing {
        Some(node) if node.is_folder() => {
            log::warn!(
                "Folder {:?} is replaced by file id {} of the same name",
                entry.absolute_path,
                entry.id
            );
            *node = Node::new(entry);
        }
        Some(node) => {
            log::warn!(
                "Duplicate file {:?}, id {} replaces id {}",
                entry.absolute_path,
                entry.id,
                node.value.id
            );
            node.value = entry;
        }
        None => {
            parent.add_child(Node::new(entry));
        }
    }
}
