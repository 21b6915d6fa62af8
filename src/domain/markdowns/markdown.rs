use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Markdown {
    pub id: Uuid,
    /// Identifier of the authenticated user that created the document, if any.
    pub owner: Option<String>,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// `content` exactly as the caller sent it. Handlers never validate it; stores do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentInput {
    Absent,
    Text(String),
    /// Present but not a string (number, object, null, ...).
    NotText,
}

#[derive(Debug, thiserror::Error)]
#[error("markdown content must be a string")]
pub struct InvalidContent;

impl ContentInput {
    /// Inserts need text.
    pub fn required(&self) -> Result<&str, InvalidContent> {
        match self {
            ContentInput::Text(s) => Ok(s.as_str()),
            ContentInput::Absent | ContentInput::NotText => Err(InvalidContent),
        }
    }

    /// Updates keep the stored text when nothing was sent.
    pub fn optional(&self) -> Result<Option<&str>, InvalidContent> {
        match self {
            ContentInput::Absent => Ok(None),
            ContentInput::Text(s) => Ok(Some(s.as_str())),
            ContentInput::NotText => Err(InvalidContent),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewMarkdown {
    pub owner: Option<String>,
    pub content: ContentInput,
}

/// Identifiers are opaque to callers. Anything that is not a storage id matches nothing.
pub fn parse_markdown_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

/// Next `updated_at` for a document last touched at `previous`; never moves backwards.
pub fn next_updated_at(
    previous: chrono::DateTime<chrono::Utc>,
    now: chrono::DateTime<chrono::Utc>,
) -> chrono::DateTime<chrono::Utc> {
    let floor = previous + chrono::Duration::microseconds(1);
    if now > floor { now } else { floor }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn rejects_non_uuid_ids() {
        assert!(parse_markdown_id("5c1f0a2e9d3b4a0017a1b2c3").is_none());
        assert!(parse_markdown_id("").is_none());
        let id = Uuid::new_v4();
        assert_eq!(parse_markdown_id(&id.to_string()), Some(id));
    }

    #[test]
    fn content_validation_depends_on_the_write() {
        let text = ContentInput::Text("# t".into());
        assert_eq!(text.required().unwrap(), "# t");
        assert_eq!(text.optional().unwrap(), Some("# t"));

        assert!(ContentInput::Absent.required().is_err());
        assert_eq!(ContentInput::Absent.optional().unwrap(), None);

        assert!(ContentInput::NotText.required().is_err());
        assert!(ContentInput::NotText.optional().is_err());
    }

    #[test]
    fn updated_at_strictly_advances_when_clock_lags() {
        let previous = Utc::now();
        let stale = previous - Duration::seconds(5);
        let next = next_updated_at(previous, stale);
        assert!(next > previous);
    }

    #[test]
    fn updated_at_follows_clock_when_ahead() {
        let previous = Utc::now() - Duration::seconds(5);
        let now = Utc::now();
        assert_eq!(next_updated_at(previous, now), now);
    }
}
