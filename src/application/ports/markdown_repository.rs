use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::markdowns::markdown::{ContentInput, Markdown, NewMarkdown};

// Stores validate content themselves and fail with `InvalidContent` when it is unusable.
#[async_trait]
pub trait MarkdownRepository: Send + Sync {
    async fn create(&self, draft: NewMarkdown) -> anyhow::Result<Markdown>;

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Markdown>>;

    async fn list_by_owner(&self, owner: &str) -> anyhow::Result<Vec<Markdown>>;

    // Matches on id AND owner. ContentInput::Absent => keep current content, still touch updated_at.
    // Returns the post-update record, None when nothing matched.
    async fn update_content_owned(
        &self,
        id: Uuid,
        owner: &str,
        content: &ContentInput,
    ) -> anyhow::Result<Option<Markdown>>;

    // true if a row owned by `owner` was removed
    async fn delete_owned(&self, id: Uuid, owner: &str) -> anyhow::Result<bool>;

    async fn ping(&self) -> anyhow::Result<()>;
}
