// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        commands::{MAX_COMMIT_ATTEMPTS, require_field},
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleTitle, NewArticle},
        errors::DomainError,
        slug,
    },
};
use chrono::{DateTime, Utc};

pub struct CreateArticleCommand {
    pub title: String,
    /// Editor-chosen slug. Validated strictly and never auto-suffixed; an
    /// exact duplicate is a conflict. When absent the slug is derived from
    /// the title.
    pub slug: Option<String>,
    pub excerpt: String,
    pub content: String,
    pub images: Vec<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    pub publish_date: DateTime<Utc>,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let excerpt = require_field(command.excerpt, "excerpt")?;
        let content = require_field(command.content, "content")?;
        let category = require_field(command.category, "category")?;
        let author = require_field(command.author, "author")?;
        let explicit = command.slug;

        let now = self.clock.now();
        let mut attempt = 0;

        loop {
            attempt += 1;
            let existing = self.read_repo.list_slugs(None).await?;
            let resolved = match explicit.as_deref() {
                Some(raw) => slug::claim_explicit(raw, &existing)?,
                None => slug::derive_unique(title.as_str(), &existing)?,
            };

            let candidate = NewArticle {
                title: title.clone(),
                slug: resolved,
                excerpt: excerpt.clone(),
                content: content.clone(),
                images: command.images.clone(),
                category: category.clone(),
                tags: command.tags.clone(),
                author: author.clone(),
                publish_date: command.publish_date,
                created_at: now,
                updated_at: now,
            };

            match self.write_repo.insert(candidate).await {
                Ok(created) => {
                    tracing::info!(
                        article_id = i64::from(created.id),
                        actor = %actor.username,
                        "article created"
                    );
                    return Ok(created.into());
                }
                Err(DomainError::Conflict(msg))
                    if explicit.is_none() && attempt < MAX_COMMIT_ATTEMPTS =>
                {
                    tracing::warn!(attempt, %msg, "slug taken between read and commit, re-resolving");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
