use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

const DEFAULT_RECENT_LIMIT: u32 = 5;
const MAX_RECENT_LIMIT: u32 = 50;

pub struct RecentArticlesQuery {
    pub limit: Option<u32>,
}

impl ArticleQueryService {
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list().await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }

    pub async fn recent_articles(
        &self,
        query: RecentArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let limit = query
            .limit
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_RECENT_LIMIT)
            .min(MAX_RECENT_LIMIT);
        let articles = self.read_repo.list_recent(limit).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
