pub mod markdown_repository_memory;
