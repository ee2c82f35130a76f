//! Set of module Error
pub mod commit;
pub mod info;

use self::{commit::CommitError, info::InfoError};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("{0}")]
    Info(#[from] InfoError),
    #[error("{0}")]
    Commit(#[from] CommitError),
}
