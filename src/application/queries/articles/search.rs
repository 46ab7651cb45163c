use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

pub struct SearchArticlesQuery {
    pub query: String,
}

pub struct ArticlesByCategoryQuery {
    pub category: String,
}

pub struct ArticlesByTagQuery {
    pub tag: String,
}

impl ArticleQueryService {
    /// Case-insensitive substring match over title, content and excerpt.
    pub async fn search_articles(
        &self,
        query: SearchArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.search(&query.query).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }

    pub async fn articles_by_category(
        &self,
        query: ArticlesByCategoryQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list_by_category(&query.category).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }

    pub async fn articles_by_tag(
        &self,
        query: ArticlesByTagQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list_by_tag(&query.tag).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
