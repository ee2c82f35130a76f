use crate::FileId;

pub type Result<T, E = InfoError> = std::result::Result<T, E>;

/// Error type returned when torrent info cannot be turned into file records.
#[derive(Debug, thiserror::Error)]
pub enum InfoError {
    #[error("{0}")]
    /// An IO error occurred while reading torrent info from disk.
    Io(std::io::Error),

    #[error("{0}")]
    /// The payload is not valid torrent info JSON.
    Json(serde_json::Error),

    #[error("file id {0} is reserved")]
    /// The service sent an id inside the range reserved for folder entries.
    ReservedFileId(FileId),
}

impl From<std::io::Error> for InfoError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for InfoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
