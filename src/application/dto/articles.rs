use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    /// Absent for legacy records that have not been backfilled yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
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

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.map(crate::domain::slug::Slug::into_inner),
            excerpt: article.excerpt,
            content: article.content,
            images: article.images,
            category: article.category,
            tags: article.tags,
            author: article.author,
            publish_date: article.publish_date,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
