use std::sync::Arc;

use crate::application::ports::markdown_repository::MarkdownRepository;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    markdown_repo: Arc<dyn MarkdownRepository>,
}

impl AppServices {
    pub fn new(markdown_repo: Arc<dyn MarkdownRepository>) -> Self {
        Self { markdown_repo }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn markdown_repo(&self) -> Arc<dyn MarkdownRepository> {
        self.services.markdown_repo.clone()
    }
}
