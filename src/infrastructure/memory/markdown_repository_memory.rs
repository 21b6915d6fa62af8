use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::ports::markdown_repository::MarkdownRepository;
use crate::domain::markdowns::markdown::{ContentInput, Markdown, NewMarkdown, next_updated_at};

/// Process-local store. Nothing survives a restart.
#[derive(Default)]
pub struct InMemoryMarkdownRepository {
    rows: RwLock<HashMap<Uuid, Markdown>>,
}

impl InMemoryMarkdownRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MarkdownRepository for InMemoryMarkdownRepository {
    async fn create(&self, draft: NewMarkdown) -> anyhow::Result<Markdown> {
        let content = draft.content.required()?.to_string();
        let now = chrono::Utc::now();
        let md = Markdown {
            id: Uuid::new_v4(),
            owner: draft.owner,
            content,
            created_at: now,
            updated_at: now,
        };
        self.rows.write().await.insert(md.id, md.clone());
        Ok(md)
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Markdown>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn list_by_owner(&self, owner: &str) -> anyhow::Result<Vec<Markdown>> {
        let rows = self.rows.read().await;
        let mut items: Vec<Markdown> = rows
            .values()
            .filter(|md| md.owner.as_deref() == Some(owner))
            .cloned()
            .collect();
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(items)
    }

    async fn update_content_owned(
        &self,
        id: Uuid,
        owner: &str,
        content: &ContentInput,
    ) -> anyhow::Result<Option<Markdown>> {
        let content = content.optional()?;
        let mut rows = self.rows.write().await;
        let Some(md) = rows
            .get_mut(&id)
            .filter(|md| md.owner.as_deref() == Some(owner))
        else {
            return Ok(None);
        };
        if let Some(content) = content {
            md.content = content.to_string();
        }
        md.updated_at = next_updated_at(md.updated_at, chrono::Utc::now());
        Ok(Some(md.clone()))
    }

    async fn delete_owned(&self, id: Uuid, owner: &str) -> anyhow::Result<bool> {
        let mut rows = self.rows.write().await;
        let owned = rows
            .get(&id)
            .is_some_and(|md| md.owner.as_deref() == Some(owner));
        if owned {
            rows.remove(&id);
        }
        Ok(owned)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
