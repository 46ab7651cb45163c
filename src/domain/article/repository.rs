use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use async_trait::async_trait;
use std::collections::HashSet;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Article>>;
    async fn list(&self) -> DomainResult<Vec<Article>>;
    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<Article>>;
    async fn list_by_category(&self, category: &str) -> DomainResult<Vec<Article>>;
    async fn list_by_tag(&self, tag: &str) -> DomainResult<Vec<Article>>;
    async fn search(&self, query: &str) -> DomainResult<Vec<Article>>;
    async fn list_tags(&self) -> DomainResult<Vec<String>>;
    /// All slugs currently taken in the article domain, optionally excluding
    /// one article's own slug (used during rename so an article cannot
    /// collide with itself).
    async fn list_slugs(&self, exclude: Option<ArticleId>) -> DomainResult<HashSet<String>>;
}
