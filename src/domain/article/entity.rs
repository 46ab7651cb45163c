// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

/// An article as loaded from storage. `slug` is `None` for legacy rows the
/// backfill job has not reached yet; such rows stay invisible to slug-keyed
/// lookups and to the sitemap.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: Option<Slug>,
    pub excerpt: String,
    pub content: String,
    pub images: Vec<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    pub publish_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: Slug,
    pub excerpt: String,
    pub content: String,
    pub images: Vec<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    pub publish_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update applied by the write repository. Only `Some` fields are
/// touched; `updated_at` is always written.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub slug: Option<Slug>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub images: Option<Vec<String>>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,
    pub publish_date: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            excerpt: None,
            content: None,
            images: None,
            category: None,
            tags: None,
            author: None,
            publish_date: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }
}
