use crate::application::access::AuthContext;
use crate::application::ports::markdown_repository::MarkdownRepository;
use crate::application::use_cases::markdowns::error::MarkdownError;
use crate::domain::markdowns::markdown::parse_markdown_id;

pub struct DeleteMarkdown<'a, R: MarkdownRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: MarkdownRepository + ?Sized> DeleteMarkdown<'a, R> {
    pub async fn execute(&self, auth: &AuthContext, id: &str) -> Result<(), MarkdownError> {
        let user_id = auth.require_user()?;
        let Some(uuid) = parse_markdown_id(id) else {
            return Err(MarkdownError::DeleteFailure);
        };
        if self.repo.delete_owned(uuid, user_id).await? {
            tracing::debug!(id = %uuid, "markdown_deleted");
            Ok(())
        } else {
            Err(MarkdownError::DeleteFailure)
        }
    }
}
