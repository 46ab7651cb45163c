// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        commands::{MAX_COMMIT_ATTEMPTS, require_field},
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, ArticleTitle, ArticleUpdate},
        errors::DomainError,
        slug,
    },
};
use chrono::{DateTime, Utc};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub images: Option<Vec<String>>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,
    pub publish_date: Option<DateTime<Utc>>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let now = self.clock.now();
        let mut update = ArticleUpdate::new(id, now);

        let title_opt = command.title.map(ArticleTitle::new).transpose()?;
        // The slug is only recomputed when the title actually changes;
        // resubmitting the same title must leave the slug untouched.
        let renamed_title = title_opt
            .clone()
            .filter(|new_title| new_title.as_str() != article.title.as_str());
        if let Some(title) = title_opt {
            update = update.with_title(title);
        }

        if let Some(excerpt) = command.excerpt {
            update.excerpt = Some(require_field(excerpt, "excerpt")?);
        }
        if let Some(content) = command.content {
            update.content = Some(require_field(content, "content")?);
        }
        if let Some(category) = command.category {
            update.category = Some(require_field(category, "category")?);
        }
        if let Some(author) = command.author {
            update.author = Some(require_field(author, "author")?);
        }
        update.images = command.images;
        update.tags = command.tags;
        update.publish_date = command.publish_date;

        let explicit = command.slug;
        let mut attempt = 0;

        loop {
            attempt += 1;
            let mut candidate = update.clone();

            if let Some(raw) = explicit.as_deref() {
                // Own slug is excluded from the comparison set so re-submitting
                // the current slug does not read as a collision.
                let existing = self.read_repo.list_slugs(Some(id)).await?;
                candidate = candidate.with_slug(slug::claim_explicit(raw, &existing)?);
            } else if let Some(new_title) = renamed_title.as_ref() {
                let existing = self.read_repo.list_slugs(Some(id)).await?;
                candidate = candidate.with_slug(slug::derive_unique(new_title.as_str(), &existing)?);
            }

            match self.write_repo.update(candidate).await {
                Ok(updated) => {
                    tracing::info!(
                        article_id = i64::from(updated.id),
                        actor = %actor.username,
                        "article updated"
                    );
                    return Ok(updated.into());
                }
                Err(DomainError::Conflict(msg))
                    if explicit.is_none()
                        && renamed_title.is_some()
                        && attempt < MAX_COMMIT_ATTEMPTS =>
                {
                    tracing::warn!(attempt, %msg, "slug taken between read and commit, re-resolving");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
