use crate::application::access::AuthContext;
use crate::application::ports::markdown_repository::MarkdownRepository;
use crate::application::use_cases::markdowns::error::MarkdownError;
use crate::domain::markdowns::markdown::{ContentInput, Markdown, NewMarkdown};

pub struct CreateMarkdown<'a, R: MarkdownRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: MarkdownRepository + ?Sized> CreateMarkdown<'a, R> {
    /// Anonymous callers get an ownerless document instead of a refusal.
    /// Any store rejection, including unusable content, is a create failure.
    pub async fn execute(
        &self,
        auth: &AuthContext,
        content: ContentInput,
    ) -> Result<Markdown, MarkdownError> {
        let draft = NewMarkdown {
            owner: auth.user_id().map(str::to_owned),
            content,
        };
        let md = self
            .repo
            .create(draft)
            .await
            .map_err(MarkdownError::CreateFailure)?;
        tracing::debug!(id = %md.id, owner = ?md.owner, "markdown_created");
        Ok(md)
    }
}
