use crate::application::access::AuthContext;
use crate::application::ports::markdown_repository::MarkdownRepository;
use crate::application::use_cases::markdowns::error::MarkdownError;
use crate::domain::markdowns::markdown::{
    ContentInput, InvalidContent, Markdown, parse_markdown_id,
};

pub struct UpdateMarkdown<'a, R: MarkdownRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: MarkdownRepository + ?Sized> UpdateMarkdown<'a, R> {
    pub async fn execute(
        &self,
        auth: &AuthContext,
        id: &str,
        content: ContentInput,
    ) -> Result<Markdown, MarkdownError> {
        let user_id = auth.require_user()?;
        let Some(id) = parse_markdown_id(id) else {
            return Err(MarkdownError::UpdateFailure);
        };
        let md = self
            .repo
            .update_content_owned(id, user_id, &content)
            .await
            .map_err(|e| {
                if e.is::<InvalidContent>() {
                    MarkdownError::UpdateFailure
                } else {
                    MarkdownError::Storage(e)
                }
            })?
            .ok_or(MarkdownError::UpdateFailure)?;
        tracing::debug!(id = %md.id, "markdown_updated");
        Ok(md)
    }
}
