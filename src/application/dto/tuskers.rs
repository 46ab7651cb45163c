use crate::domain::tusker::Tusker;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TuskerDto {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
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

impl From<Tusker> for TuskerDto {
    fn from(tusker: Tusker) -> Self {
        Self {
            id: tusker.id.into(),
            name: tusker.name.into_inner(),
            slug: tusker.slug.map(crate::domain::slug::Slug::into_inner),
            age: tusker.age,
            location: tusker.location,
            status: tusker.status,
            category: tusker.category,
            description: tusker.description,
            tags: tusker.tags,
            image_urls: tusker.image_urls,
            created_at: tusker.created_at,
            updated_at: tusker.updated_at,
        }
    }
}
