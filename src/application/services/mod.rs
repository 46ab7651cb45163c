// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, tuskers::TuskerCommandService,
            users::UserCommandService,
        },
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        queries::{
            articles::ArticleQueryService, sitemap::SitemapService, tuskers::TuskerQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        tusker::{TuskerReadRepository, TuskerWriteRepository},
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub tusker_commands: Arc<TuskerCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub tusker_queries: Arc<TuskerQueryService>,
    pub sitemap: Arc<SitemapService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        tusker_write_repo: Arc<dyn TuskerWriteRepository>,
        tusker_read_repo: Arc<dyn TuskerReadRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        public_base_url: &str,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&clock),
        ));

        let tusker_commands = Arc::new(TuskerCommandService::new(
            Arc::clone(&tusker_write_repo),
            Arc::clone(&tusker_read_repo),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));
        let tusker_queries = Arc::new(TuskerQueryService::new(Arc::clone(&tusker_read_repo)));

        let sitemap = Arc::new(SitemapService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&tusker_read_repo),
            public_base_url,
        ));

        Self {
            user_commands,
            article_commands,
            tusker_commands,
            article_queries,
            tusker_queries,
            sitemap,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
