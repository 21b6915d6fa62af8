use axum::{
    Router,
    body::Bytes,
    extract::{Path, State, rejection::BytesRejection},
    routing::{get, post},
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::access::AuthContext;
use crate::application::use_cases::markdowns::create_markdown::CreateMarkdown;
use crate::application::use_cases::markdowns::delete_markdown::DeleteMarkdown;
use crate::application::use_cases::markdowns::get_markdown::GetMarkdown;
use crate::application::use_cases::markdowns::list_user_markdowns::ListUserMarkdowns;
use crate::application::use_cases::markdowns::update_markdown::UpdateMarkdown;
use crate::bootstrap::app_context::AppContext;
use crate::domain::markdowns::markdown as domain;
use crate::presentation::http::envelope::{ApiError, Envelope};

/// Public projection of a markdown. Field order is part of the wire contract.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Markdown {
    pub id: Uuid,
    pub owner: Option<String>,
    pub content: String,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<domain::Markdown> for Markdown {
    fn from(md: domain::Markdown) -> Self {
        Self {
            id: md.id,
            owner: md.owner,
            content: md.content,
            updated_at: md.updated_at,
            created_at: md.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MarkdownPayload {
    pub markdown: Markdown,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MarkdownListPayload {
    pub markdowns: Vec<Markdown>,
}

/// Write body. `content` is kept as raw JSON so a value of the wrong type reaches the
/// store's validation instead of failing deserialization.
#[derive(Debug, Deserialize, ToSchema)]
pub struct MarkdownBody {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub content: Option<Value>,
}

// An explicit `null` counts as supplied, not absent.
fn present<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(d).map(Some)
}

impl MarkdownBody {
    fn into_content(self) -> domain::ContentInput {
        match self.content {
            None => domain::ContentInput::Absent,
            Some(Value::String(s)) => domain::ContentInput::Text(s),
            Some(_) => domain::ContentInput::NotText,
        }
    }
}

/// An empty body reads as `{}`. Only unreadable or unparseable bodies are refused.
fn read_body(body: Result<Bytes, BytesRejection>) -> Result<MarkdownBody, ApiError> {
    let body = body.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "markdown_body_rejected");
        ApiError::invalid_body()
    })?;
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(MarkdownBody { content: None });
    }
    serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "markdown_body_rejected");
        ApiError::invalid_body()
    })
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/markdowns", post(create_markdown))
        .route(
            "/markdowns/:id",
            get(get_markdown)
                .put(update_markdown)
                .patch(update_markdown)
                .delete(delete_markdown),
        )
        .route("/users/:uid/markdowns", get(list_user_markdowns))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/markdowns", tag = "Markdowns", request_body = MarkdownBody,
    responses(
        (status = 200, description = "CREATE_MARKDOWN_SUCCESS", body = MarkdownPayload),
        (status = 404, description = "CREATE_MARKDOWN_FAILURE")
    ))]
pub async fn create_markdown(
    State(ctx): State<AppContext>,
    auth: AuthContext,
    body: Result<Bytes, BytesRejection>,
) -> Result<Envelope<MarkdownPayload>, ApiError> {
    let body = read_body(body)?;
    let repo = ctx.markdown_repo();
    let uc = CreateMarkdown {
        repo: repo.as_ref(),
    };
    let md = uc.execute(&auth, body.into_content()).await?;
    Ok(Envelope::success(
        "CREATE_MARKDOWN_SUCCESS",
        MarkdownPayload { markdown: md.into() },
    ))
}

#[utoipa::path(get, path = "/api/markdowns/{id}", tag = "Markdowns",
    params(("id" = String, Path, description = "Markdown ID")),
    responses(
        (status = 200, description = "FIND_MARKDOWN_SUCCESS", body = MarkdownPayload),
        (status = 404, description = "FIND_MARKDOWN_FAILURE")
    ))]
pub async fn get_markdown(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Envelope<MarkdownPayload>, ApiError> {
    let repo = ctx.markdown_repo();
    let uc = GetMarkdown {
        repo: repo.as_ref(),
    };
    let md = uc.execute(&id).await?;
    Ok(Envelope::success(
        "FIND_MARKDOWN_SUCCESS",
        MarkdownPayload { markdown: md.into() },
    ))
}

#[utoipa::path(get, path = "/api/users/{uid}/markdowns", tag = "Markdowns",
    params(("uid" = String, Path, description = "Owner user ID")),
    responses(
        (status = 200, description = "FIND_USER_MARKDOWN_SUCCESS", body = MarkdownListPayload),
        (status = 404, description = "FIND_USER_MARKDOWN_FAILURE")
    ))]
pub async fn list_user_markdowns(
    State(ctx): State<AppContext>,
    Path(uid): Path<String>,
) -> Result<Envelope<MarkdownListPayload>, ApiError> {
    let repo = ctx.markdown_repo();
    let uc = ListUserMarkdowns {
        repo: repo.as_ref(),
    };
    let markdowns = uc
        .execute(&uid)
        .await?
        .into_iter()
        .map(Markdown::from)
        .collect();
    Ok(Envelope::success(
        "FIND_USER_MARKDOWN_SUCCESS",
        MarkdownListPayload { markdowns },
    ))
}

#[utoipa::path(put, path = "/api/markdowns/{id}", tag = "Markdowns", request_body = MarkdownBody,
    params(("id" = String, Path, description = "Markdown ID")),
    responses(
        (status = 200, description = "UPDATE_MARKDOWN_SUCCESS", body = MarkdownPayload),
        (status = 400, description = "UPDATE_MARKDOWN_FAILURE"),
        (status = 403, description = "Caller is not authenticated")
    ))]
pub async fn update_markdown(
    State(ctx): State<AppContext>,
    auth: AuthContext,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Envelope<MarkdownPayload>, ApiError> {
    // an unauthenticated caller gets 403 even when the body is malformed
    auth.require_user()?;
    let body = read_body(body)?;
    let repo = ctx.markdown_repo();
    let uc = UpdateMarkdown {
        repo: repo.as_ref(),
    };
    let md = uc.execute(&auth, &id, body.into_content()).await?;
    Ok(Envelope::success(
        "UPDATE_MARKDOWN_SUCCESS",
        MarkdownPayload { markdown: md.into() },
    ))
}

#[utoipa::path(delete, path = "/api/markdowns/{id}", tag = "Markdowns",
    params(("id" = String, Path, description = "Markdown ID")),
    responses(
        (status = 200, description = "DELETE_MARKDOWN_SUCCESS"),
        (status = 400, description = "DELETE_MARKDOWN_FAILURE"),
        (status = 403, description = "Caller is not authenticated")
    ))]
pub async fn delete_markdown(
    State(ctx): State<AppContext>,
    auth: AuthContext,
    Path(id): Path<String>,
) -> Result<Envelope<()>, ApiError> {
    let repo = ctx.markdown_repo();
    let uc = DeleteMarkdown {
        repo: repo.as_ref(),
    };
    uc.execute(&auth, &id).await?;
    Ok(Envelope::ok("DELETE_MARKDOWN_SUCCESS"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::markdowns::markdown::ContentInput;

    fn content_of(raw: &str) -> ContentInput {
        read_body(Ok(Bytes::from(raw.to_owned()))).unwrap().into_content()
    }

    #[test]
    fn body_content_keeps_its_json_shape() {
        assert!(matches!(
            content_of(r##"{"content":"# hi"}"##),
            ContentInput::Text(s) if s == "# hi"
        ));
        assert!(matches!(content_of("{}"), ContentInput::Absent));
        assert!(matches!(content_of(" \n"), ContentInput::Absent));
        assert!(matches!(content_of(""), ContentInput::Absent));
        assert!(matches!(content_of(r#"{"content":123}"#), ContentInput::NotText));
        assert!(matches!(content_of(r#"{"content":null}"#), ContentInput::NotText));
        assert!(matches!(
            content_of(r#"{"content":{"a":1}}"#),
            ContentInput::NotText
        ));
    }

    #[test]
    fn unparseable_body_is_refused() {
        for raw in ["{not json", "\"just a string\"", "42"] {
            let err = read_body(Ok(Bytes::from(raw))).unwrap_err();
            assert_eq!(err.code, "INVALID_REQUEST_BODY");
        }
    }
}
