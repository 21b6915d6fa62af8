use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::markdown_repository::MarkdownRepository;
use crate::domain::markdowns::markdown::{ContentInput, Markdown, NewMarkdown};
use crate::infrastructure::db::PgPool;

pub struct SqlxMarkdownRepository {
    pub pool: PgPool,
}

impl SqlxMarkdownRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_markdown(r: PgRow) -> Markdown {
    Markdown {
        id: r.get("id"),
        owner: r.get("owner"),
        content: r.get("content"),
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
    }
}

#[async_trait]
impl MarkdownRepository for SqlxMarkdownRepository {
    async fn create(&self, draft: NewMarkdown) -> anyhow::Result<Markdown> {
        let content = draft.content.required()?;
        let row = sqlx::query(
            r#"INSERT INTO markdowns (owner, content)
               VALUES ($1, $2)
               RETURNING id, owner, content, created_at, updated_at"#,
        )
        .bind(draft.owner)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;
        Ok(row_to_markdown(row))
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Markdown>> {
        let row = sqlx::query(
            r#"SELECT id, owner, content, created_at, updated_at
               FROM markdowns WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(row_to_markdown))
    }

    async fn list_by_owner(&self, owner: &str) -> anyhow::Result<Vec<Markdown>> {
        let rows = sqlx::query(
            r#"SELECT id, owner, content, created_at, updated_at
               FROM markdowns WHERE owner = $1
               ORDER BY created_at ASC, id ASC"#,
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(row_to_markdown).collect())
    }

    async fn update_content_owned(
        &self,
        id: Uuid,
        owner: &str,
        content: &ContentInput,
    ) -> anyhow::Result<Option<Markdown>> {
        let content = content.optional()?;
        let row = sqlx::query(
            r#"UPDATE markdowns SET
                    content = COALESCE($1, content),
                    updated_at = GREATEST(now(), updated_at + interval '1 microsecond')
                WHERE id = $2 AND owner = $3
                RETURNING id, owner, content, created_at, updated_at"#,
        )
        .bind(content)
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(row_to_markdown))
    }

    async fn delete_owned(&self, id: Uuid, owner: &str) -> anyhow::Result<bool> {
        let res = sqlx::query(r#"DELETE FROM markdowns WHERE id = $1 AND owner = $2"#)
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}
