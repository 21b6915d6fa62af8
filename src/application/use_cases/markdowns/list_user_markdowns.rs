use crate::application::ports::markdown_repository::MarkdownRepository;
use crate::application::use_cases::markdowns::error::MarkdownError;
use crate::domain::markdowns::markdown::Markdown;

pub struct ListUserMarkdowns<'a, R: MarkdownRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: MarkdownRepository + ?Sized> ListUserMarkdowns<'a, R> {
    // An owner with no documents is an empty list, not an error.
    pub async fn execute(&self, owner: &str) -> Result<Vec<Markdown>, MarkdownError> {
        self.repo
            .list_by_owner(owner)
            .await
            .map_err(MarkdownError::QueryFailure)
    }
}
