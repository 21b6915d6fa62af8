use crate::application::ports::markdown_repository::MarkdownRepository;
use crate::application::use_cases::markdowns::error::MarkdownError;
use crate::domain::markdowns::markdown::{Markdown, parse_markdown_id};

pub struct GetMarkdown<'a, R: MarkdownRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: MarkdownRepository + ?Sized> GetMarkdown<'a, R> {
    pub async fn execute(&self, id: &str) -> Result<Markdown, MarkdownError> {
        let Some(id) = parse_markdown_id(id) else {
            return Err(MarkdownError::NotFound);
        };
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(MarkdownError::NotFound)
    }
}
