//! The torrent info the debrid service returns for a torrent.
//!
//! Only the fields the file picker needs are modelled, anything else in the
//! payload is ignored.

use std::{fmt, path::Path};

use serde::de;
use serde_derive::Deserialize;

use crate::error::info::{InfoError, Result};
use crate::FileId;

/// Status of a torrent whose files have not been picked yet.
pub const WAITING_FILES_SELECTION: &str = "waiting_files_selection";

/// One file of a torrent, as listed in torrent info.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InfoFile {
    pub id: FileId,
    /// POSIX-style path from the torrent root, starting with `/`.
    pub path: String,
    /// The file's length.
    pub bytes: u64,
    /// Sent as `0` or `1`.
    #[serde(deserialize_with = "deserialize_flag")]
    pub selected: bool,
}

impl InfoFile {
    pub fn new(id: FileId, path: impl Into<String>, bytes: u64, selected: bool) -> Self {
        Self {
            id,
            path: path.into(),
            bytes,
            selected,
        }
    }

    /// Parses a bare JSON array of files.
    pub fn list_from_slice(bytes: &[u8]) -> Result<Vec<Self>> {
        let files: Vec<Self> = serde_json::from_slice(bytes)?;
        verify_ids(&files)?;
        Ok(files)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TorrentInfo {
    /// The service's torrent id.
    pub id: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub hash: String,
    /// The total size of the selected files.
    #[serde(default)]
    pub bytes: u64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub files: Vec<InfoFile>,
    /// Hoster links, one per selected file once the torrent is downloaded.
    #[serde(default)]
    pub links: Vec<String>,
}

impl TorrentInfo {
    /// Parses torrent info from a JSON buffer, returning an error when the
    /// payload is malformed or a file carries a reserved id.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let info: Self = serde_json::from_slice(bytes)?;
        verify_ids(&info.files)?;
        Ok(info)
    }

    /// Reads and parses torrent info from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            log::warn!("Failed to read torrent info {:?}", path);
            InfoError::Io(e)
        })?;
        Self::from_slice(&bytes)
    }

    /// Returns true while the service waits for the user to pick files.
    pub fn awaits_file_selection(&self) -> bool {
        self.status == WAITING_FILES_SELECTION
    }

    /// Returns the sum of the declared sizes of all files.
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.bytes).sum()
    }
}

fn verify_ids(files: &[InfoFile]) -> Result<()> {
    if let Some(file) = files.iter().find(|f| f.id < 1) {
        log::warn!("File {:?} has reserved id {}", file.path, file.id);
        return Err(InfoError::ReservedFileId(file.id));
    }
    Ok(())
}

/// Deserialize a `0`/`1` flag into `bool`. JSON booleans are accepted too.
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: de::Deserializer<'de>,
{
    struct Visitor;

    impl<'de> de::Visitor<'de> for Visitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("0, 1 or a boolean")
        }

        fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            match v {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(E::invalid_value(de::Unexpected::Unsigned(v), &self)),
            }
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            match v {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(E::invalid_value(de::Unexpected::Signed(v), &self)),
            }
        }
    }

    deserializer.deserialize_any(Visitor)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    const INFO: &str = r#"{
        "id": "NJ6CMYRTQUUNW",
        "filename": "mars",
        "original_filename": "mars",
        "hash": "ab12cd34ef56ab12cd34ef56ab12cd34ef56ab12",
        "bytes": 4096,
        "host": "real-debrid.com",
        "split": 2000,
        "progress": 0,
        "status": "waiting_files_selection",
        "files": [
            {"id": 1, "path": "/mars/mars.jar", "bytes": 4000, "selected": 0},
            {"id": 2, "path": "/mars/mips.asm", "bytes": 96, "selected": 1}
        ],
        "links": []
    }"#;

    #[test]
    fn should_parse_torrent_info() {
        let info = TorrentInfo::from_slice(INFO.as_bytes()).expect("cannot parse torrent info");

        assert_eq!(info.id, "NJ6CMYRTQUUNW");
        assert!(info.awaits_file_selection());
        assert_eq!(info.total_bytes(), 4096);
        assert_eq!(
            info.files,
            vec![
                InfoFile::new(1, "/mars/mars.jar", 4000, false),
                InfoFile::new(2, "/mars/mips.asm", 96, true),
            ]
        );
    }

    #[test]
    fn should_default_missing_fields() {
        let info = TorrentInfo::from_slice(br#"{"id": "X"}"#).unwrap();
        assert!(info.files.is_empty());
        assert!(!info.awaits_file_selection());
    }

    #[test]
    fn should_accept_boolean_flags() {
        let files = InfoFile::list_from_slice(
            br#"[{"id": 7, "path": "/a", "bytes": 1, "selected": true}]"#,
        )
        .unwrap();
        assert!(files[0].selected);
    }

    #[test]
    fn should_reject_out_of_range_flag() {
        let err = InfoFile::list_from_slice(
            br#"[{"id": 7, "path": "/a", "bytes": 1, "selected": 2}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, InfoError::Json(_)));
    }

    #[test]
    fn should_reject_reserved_id() {
        let err = InfoFile::list_from_slice(
            br#"[{"id": -1, "path": "/a", "bytes": 1, "selected": 1}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, InfoError::ReservedFileId(-1)));
    }

    #[test]
    fn should_read_info_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(INFO.as_bytes()).unwrap();

        let info = TorrentInfo::from_path(file.path()).unwrap();
        assert_eq!(info.files.len(), 2);

        let err = TorrentInfo::from_path(file.path().with_extension("missing")).unwrap_err();
        assert!(matches!(err, InfoError::Io(_)));
    }
}
