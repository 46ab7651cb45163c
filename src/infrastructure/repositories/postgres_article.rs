// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleTitle, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::collections::HashSet;

const ARTICLE_COLUMNS: &str = "id, title, slug, excerpt, content, images, category, tags, author, publish_date, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    excerpt: String,
    content: String,
    images: Vec<String>,
    category: String,
    tags: Vec<String>,
    author: String,
    publish_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        // '' marks a legacy row that predates slug assignment.
        let slug = if row.slug.is_empty() {
            None
        } else {
            Some(Slug::new(row.slug)?)
        };
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug,
            excerpt: row.excerpt,
            content: row.content,
            images: row.images,
            category: row.category,
            tags: row.tags,
            author: row.author,
            publish_date: row.publish_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            excerpt,
            content,
            images,
            category,
            tags,
            author,
            publish_date,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, slug, excerpt, content, images, category, tags, author, publish_date, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING id, title, slug, excerpt, content, images, category, tags, author, publish_date, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(&excerpt)
        .bind(&content)
        .bind(&images)
        .bind(&category)
        .bind(&tags)
        .bind(&author)
        .bind(publish_date)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            slug,
            excerpt,
            content,
            images,
            category,
            tags,
            author,
            publish_date,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(String::from(slug));
        }
        if let Some(excerpt) = excerpt {
            builder.push(", excerpt = ");
            builder.push_bind(excerpt);
        }
        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content);
        }
        if let Some(images) = images {
            builder.push(", images = ");
            builder.push_bind(images);
        }
        if let Some(category) = category {
            builder.push(", category = ");
            builder.push_bind(category);
        }
        if let Some(tags) = tags {
            builder.push(", tags = ");
            builder.push_bind(tags);
        }
        if let Some(author) = author {
            builder.push(", author = ");
            builder.push_bind(author);
        }
        if let Some(publish_date) = publish_date {
            builder.push(", publish_date = ");
            builder.push_bind(publish_date);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let maybe_row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY publish_date DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY publish_date DESC LIMIT $1"
        ))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn list_by_category(&self, category: &str) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE category ILIKE $1 ORDER BY publish_date DESC"
        ))
        .bind(format!("%{category}%"))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn list_by_tag(&self, tag: &str) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles
             WHERE EXISTS (SELECT 1 FROM unnest(tags) AS t WHERE t ILIKE $1)
             ORDER BY publish_date DESC"
        ))
        .bind(format!("%{tag}%"))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn search(&self, query: &str) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles
             WHERE title ILIKE $1 OR content ILIKE $1 OR excerpt ILIKE $1
             ORDER BY publish_date DESC"
        ))
        .bind(format!("%{query}%"))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn list_tags(&self) -> DomainResult<Vec<String>> {
        let tags: Vec<(String,)> =
            sqlx::query_as("SELECT DISTINCT unnest(tags) FROM articles ORDER BY 1")
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx)?;

        Ok(tags.into_iter().map(|(tag,)| tag).collect())
    }

    async fn list_slugs(&self, exclude: Option<ArticleId>) -> DomainResult<HashSet<String>> {
        let slugs: Vec<(String,)> = match exclude {
            Some(id) => {
                sqlx::query_as("SELECT slug FROM articles WHERE slug <> '' AND id <> $1")
                    .bind(i64::from(id))
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                sqlx::query_as("SELECT slug FROM articles WHERE slug <> ''")
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(map_sqlx)?;

        Ok(slugs.into_iter().map(|(slug,)| slug).collect())
    }
}
