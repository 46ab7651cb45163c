// src/infrastructure/repositories/postgres_tusker.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use crate::domain::tusker::{
    NewTusker, Tusker, TuskerId, TuskerName, TuskerReadRepository, TuskerUpdate,
    TuskerWriteRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::collections::HashSet;

const TUSKER_COLUMNS: &str = "id, name, slug, age, location, status, category, description, tags, image_urls, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresTuskerWriteRepository {
    pool: PgPool,
}

impl PostgresTuskerWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresTuskerReadRepository {
    pool: PgPool,
}

impl PostgresTuskerReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TuskerRow {
    id: i64,
    name: String,
    slug: String,
    age: String,
    location: String,
    status: String,
    category: String,
    description: String,
    tags: Vec<String>,
    image_urls: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TuskerRow> for Tusker {
    type Error = DomainError;

    fn try_from(row: TuskerRow) -> Result<Self, Self::Error> {
        let slug = if row.slug.is_empty() {
            None
        } else {
            Some(Slug::new(row.slug)?)
        };
        Ok(Tusker {
            id: TuskerId::new(row.id)?,
            name: TuskerName::new(row.name)?,
            slug,
            age: row.age,
            location: row.location,
            status: row.status,
            category: row.category,
            description: row.description,
            tags: row.tags,
            image_urls: row.image_urls,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl TuskerWriteRepository for PostgresTuskerWriteRepository {
    async fn insert(&self, tusker: NewTusker) -> DomainResult<Tusker> {
        let NewTusker {
            name,
            slug,
            age,
            location,
            status,
            category,
            description,
            tags,
            image_urls,
            created_at,
            updated_at,
        } = tusker;

        let row = sqlx::query_as::<_, TuskerRow>(
            "INSERT INTO tuskers (name, slug, age, location, status, category, description, tags, image_urls, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING id, name, slug, age, location, status, category, description, tags, image_urls, created_at, updated_at",
        )
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(&age)
        .bind(&location)
        .bind(&status)
        .bind(&category)
        .bind(&description)
        .bind(&tags)
        .bind(&image_urls)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Tusker::try_from(row)
    }

    async fn update(&self, update: TuskerUpdate) -> DomainResult<Tusker> {
        let TuskerUpdate {
            id,
            name,
            slug,
            age,
            location,
            status,
            category,
            description,
            tags,
            image_urls,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE tuskers SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(name) = name {
            builder.push(", name = ");
            builder.push_bind(String::from(name));
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(String::from(slug));
        }
        if let Some(age) = age {
            builder.push(", age = ");
            builder.push_bind(age);
        }
        if let Some(location) = location {
            builder.push(", location = ");
            builder.push_bind(location);
        }
        if let Some(status) = status {
            builder.push(", status = ");
            builder.push_bind(status);
        }
        if let Some(category) = category {
            builder.push(", category = ");
            builder.push_bind(category);
        }
        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description);
        }
        if let Some(tags) = tags {
            builder.push(", tags = ");
            builder.push_bind(tags);
        }
        if let Some(image_urls) = image_urls {
            builder.push(", image_urls = ");
            builder.push_bind(image_urls);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(TUSKER_COLUMNS);

        let maybe_row = builder
            .build_query_as::<TuskerRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("tusker not found".into()))?;
        Tusker::try_from(row)
    }

    async fn delete(&self, id: TuskerId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM tuskers WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("tusker not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl TuskerReadRepository for PostgresTuskerReadRepository {
    async fn find_by_id(&self, id: TuskerId) -> DomainResult<Option<Tusker>> {
        let row = sqlx::query_as::<_, TuskerRow>(&format!(
            "SELECT {TUSKER_COLUMNS} FROM tuskers WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Tusker::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tusker>> {
        let row = sqlx::query_as::<_, TuskerRow>(&format!(
            "SELECT {TUSKER_COLUMNS} FROM tuskers WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Tusker::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Tusker>> {
        let rows = sqlx::query_as::<_, TuskerRow>(&format!(
            "SELECT {TUSKER_COLUMNS} FROM tuskers ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tusker::try_from).collect()
    }

    async fn list_random(&self, limit: u32) -> DomainResult<Vec<Tusker>> {
        let rows = sqlx::query_as::<_, TuskerRow>(&format!(
            "SELECT {TUSKER_COLUMNS} FROM tuskers ORDER BY random() LIMIT $1"
        ))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tusker::try_from).collect()
    }

    async fn search_by_name(&self, name: &str) -> DomainResult<Vec<Tusker>> {
        let rows = sqlx::query_as::<_, TuskerRow>(&format!(
            "SELECT {TUSKER_COLUMNS} FROM tuskers WHERE name ILIKE $1 ORDER BY name"
        ))
        .bind(format!("%{name}%"))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tusker::try_from).collect()
    }

    async fn search_by_category(&self, category: &str) -> DomainResult<Vec<Tusker>> {
        let rows = sqlx::query_as::<_, TuskerRow>(&format!(
            "SELECT {TUSKER_COLUMNS} FROM tuskers WHERE category ILIKE $1 ORDER BY name"
        ))
        .bind(format!("%{category}%"))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tusker::try_from).collect()
    }

    async fn list_tags(&self) -> DomainResult<Vec<String>> {
        let tags: Vec<(String,)> =
            sqlx::query_as("SELECT DISTINCT unnest(tags) FROM tuskers ORDER BY 1")
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx)?;

        Ok(tags.into_iter().map(|(tag,)| tag).collect())
    }

    async fn list_slugs(&self, exclude: Option<TuskerId>) -> DomainResult<HashSet<String>> {
        let slugs: Vec<(String,)> = match exclude {
            Some(id) => {
                sqlx::query_as("SELECT slug FROM tuskers WHERE slug <> '' AND id <> $1")
                    .bind(i64::from(id))
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                sqlx::query_as("SELECT slug FROM tuskers WHERE slug <> ''")
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(map_sqlx)?;

        Ok(slugs.into_iter().map(|(slug,)| slug).collect())
    }
}
