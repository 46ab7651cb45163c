// src/application/commands/tuskers/create.rs
use super::TuskerCommandService;
use crate::{
    application::{
        commands::MAX_COMMIT_ATTEMPTS,
        dto::{AuthenticatedUser, TuskerDto},
        error::ApplicationResult,
    },
    domain::{
        errors::DomainError,
        slug,
        tusker::{NewTusker, TuskerName},
    },
};

pub struct CreateTuskerCommand {
    pub name: String,
    /// Same policy as articles: explicit slugs are validated and hard-fail on
    /// duplicates, derived slugs get numeric suffixes.
    pub slug: Option<String>,
    pub age: String,
    pub location: String,
    pub status: String,
    pub category: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image_urls: Vec<String>,
}

impl TuskerCommandService {
    pub async fn create_tusker(
        &self,
        actor: &AuthenticatedUser,
        command: CreateTuskerCommand,
    ) -> ApplicationResult<TuskerDto> {
        let name = TuskerName::new(command.name)?;
        let explicit = command.slug;

        let now = self.clock.now();
        let mut attempt = 0;

        loop {
            attempt += 1;
            let existing = self.read_repo.list_slugs(None).await?;
            let resolved = match explicit.as_deref() {
                Some(raw) => slug::claim_explicit(raw, &existing)?,
                None => slug::derive_unique(name.as_str(), &existing)?,
            };

            let candidate = NewTusker {
                name: name.clone(),
                slug: resolved,
                age: command.age.clone(),
                location: command.location.clone(),
                status: command.status.clone(),
                category: command.category.clone(),
                description: command.description.clone(),
                tags: command.tags.clone(),
                image_urls: command.image_urls.clone(),
                created_at: now,
                updated_at: now,
            };

            match self.write_repo.insert(candidate).await {
                Ok(created) => {
                    tracing::info!(
                        tusker_id = i64::from(created.id),
                        actor = %actor.username,
                        "tusker created"
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
