/// The integer identifier the debrid service gives each file of a torrent.
pub type FileId = i64;

/// The id carried by synthetic folder entries.
///
/// Real file ids handed out by the service start at 1, so any negative value
/// is free to mark "this node is a directory, not a file".
pub const FOLDER_ID: FileId = -1;

/// The file selection parameter meaning "download every file".
pub const ALL_FILES: &str = "all";

/// Separator of the POSIX-style paths in torrent info.
pub const PATH_SEPARATOR: char = '/';
