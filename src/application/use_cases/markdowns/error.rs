use thiserror::Error;

use crate::application::access::AuthRefusal;

#[derive(Debug, Error)]
pub enum MarkdownError {
    #[error("request refused: {0}")]
    Forbidden(#[from] AuthRefusal),
    #[error("markdown not found")]
    NotFound,
    #[error("markdown could not be saved")]
    CreateFailure(#[source] anyhow::Error),
    #[error("markdowns for owner could not be queried")]
    QueryFailure(#[source] anyhow::Error),
    #[error("no owned markdown matched the update")]
    UpdateFailure,
    #[error("no owned markdown matched the delete")]
    DeleteFailure,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
