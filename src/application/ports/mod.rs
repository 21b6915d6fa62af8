pub mod markdown_repository;
