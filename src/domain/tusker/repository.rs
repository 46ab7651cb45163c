use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use crate::domain::tusker::entity::{NewTusker, Tusker, TuskerUpdate};
use crate::domain::tusker::value_objects::TuskerId;
use async_trait::async_trait;
use std::collections::HashSet;

#[async_trait]
pub trait TuskerWriteRepository: Send + Sync {
    async fn insert(&self, tusker: NewTusker) -> DomainResult<Tusker>;
    async fn update(&self, update: TuskerUpdate) -> DomainResult<Tusker>;
    async fn delete(&self, id: TuskerId) -> DomainResult<()>;
}

#[async_trait]
pub trait TuskerReadRepository: Send + Sync {
    async fn find_by_id(&self, id: TuskerId) -> DomainResult<Option<Tusker>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tusker>>;
    async fn list(&self) -> DomainResult<Vec<Tusker>>;
    async fn list_random(&self, limit: u32) -> DomainResult<Vec<Tusker>>;
    async fn search_by_name(&self, name: &str) -> DomainResult<Vec<Tusker>>;
    async fn search_by_category(&self, category: &str) -> DomainResult<Vec<Tusker>>;
    async fn list_tags(&self) -> DomainResult<Vec<String>>;
    /// Slugs taken in the tusker domain. Independent of the article domain;
    /// the same slug may exist once in each.
    async fn list_slugs(&self, exclude: Option<TuskerId>) -> DomainResult<HashSet<String>>;
}
