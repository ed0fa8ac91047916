use thiserror::Error;

/// Coarse, user-visible action outcomes. Deliberately carries no status
/// code, cause, or offending id; the transport error is logged where the
/// action ran and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("error retrieving posts")]
    Load,
    #[error("error creating post")]
    Create,
    #[error("error updating post")]
    Update,
    #[error("error deleting post")]
    Delete,
    #[error("invalid input")]
    Invalid,
}
