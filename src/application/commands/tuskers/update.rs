// src/application/commands/tuskers/update.rs
use super::TuskerCommandService;
use crate::{
    application::{
        commands::MAX_COMMIT_ATTEMPTS,
        dto::{AuthenticatedUser, TuskerDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        slug,
        tusker::{TuskerId, TuskerName, TuskerUpdate},
    },
};

pub struct UpdateTuskerCommand {
    pub id: i64,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub age: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image_urls: Option<Vec<String>>,
}

impl TuskerCommandService {
    pub async fn update_tusker(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateTuskerCommand,
    ) -> ApplicationResult<TuskerDto> {
        let id = TuskerId::new(command.id)?;
        let tusker = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tusker not found"))?;

        let now = self.clock.now();
        let mut update = TuskerUpdate::new(id, now);

        let name_opt = command.name.map(TuskerName::new).transpose()?;
        let renamed = name_opt
            .clone()
            .filter(|new_name| new_name.as_str() != tusker.name.as_str());
        if let Some(name) = name_opt {
            update = update.with_name(name);
        }

        update.age = command.age;
        update.location = command.location;
        update.status = command.status;
        update.category = command.category;
        update.description = command.description;
        update.tags = command.tags;
        update.image_urls = command.image_urls;

        let explicit = command.slug;
        let mut attempt = 0;

        loop {
            attempt += 1;
            let mut candidate = update.clone();

            if let Some(raw) = explicit.as_deref() {
                let existing = self.read_repo.list_slugs(Some(id)).await?;
                candidate = candidate.with_slug(slug::claim_explicit(raw, &existing)?);
            } else if let Some(new_name) = renamed.as_ref() {
                let existing = self.read_repo.list_slugs(Some(id)).await?;
                candidate = candidate.with_slug(slug::derive_unique(new_name.as_str(), &existing)?);
            }

            match self.write_repo.update(candidate).await {
                Ok(updated) => {
                    tracing::info!(
                        tusker_id = i64::from(updated.id),
                        actor = %actor.username,
                        "tusker updated"
                    );
                    return Ok(updated.into());
                }
                Err(DomainError::Conflict(msg))
                    if explicit.is_none() && renamed.is_some() && attempt < MAX_COMMIT_ATTEMPTS =>
                {
                    tracing::warn!(attempt, %msg, "slug taken between read and commit, re-resolving");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
