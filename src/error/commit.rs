/// Error type returned when a file selection cannot be committed.
///
/// This error is non-fatal: the user is expected to pick at least one file
/// and commit again.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommitError {
    #[error("no file selected")]
    /// Every file in the tree is deselected, so there is nothing to request.
    NothingSelected,
}
