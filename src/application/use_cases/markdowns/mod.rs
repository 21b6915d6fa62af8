pub mod create_markdown;
pub mod delete_markdown;
pub mod error;
pub mod get_markdown;
pub mod list_user_markdowns;
pub mod update_markdown;

pub use error::MarkdownError;
