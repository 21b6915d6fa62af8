pub mod markdown_repository_sqlx;
