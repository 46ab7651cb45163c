// src/domain/tusker/entity.rs
use crate::domain::slug::Slug;
use crate::domain::tusker::value_objects::{TuskerId, TuskerName};
use chrono::{DateTime, Utc};

/// Profile of a single tusker. Every descriptive field besides the name is
/// free-form text curated by editors; `slug` is `None` only for legacy rows
/// awaiting backfill.
#[derive(Debug, Clone)]
pub struct Tusker {
    pub id: TuskerId,
    pub name: TuskerName,
    pub slug: Option<Slug>,
    pub age: String,
    pub location: String,
    pub status: String,
    pub category: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTusker {
    pub name: TuskerName,
    pub slug: Slug,
    pub age: String,
    pub location: String,
    pub status: String,
    pub category: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TuskerUpdate {
    pub id: TuskerId,
    pub name: Option<TuskerName>,
    pub slug: Option<Slug>,
    pub age: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image_urls: Option<Vec<String>>,
    pub updated_at: DateTime<Utc>,
}

impl TuskerUpdate {
    pub fn new(id: TuskerId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            slug: None,
            age: None,
            location: None,
            status: None,
            category: None,
            description: None,
            tags: None,
            image_urls: None,
            updated_at,
        }
    }

    pub fn with_name(mut self, name: TuskerName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }
}
