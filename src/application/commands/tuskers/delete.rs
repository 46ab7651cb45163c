// src/application/commands/tuskers/delete.rs
use super::TuskerCommandService;
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationResult},
    domain::tusker::TuskerId,
};

pub struct DeleteTuskerCommand {
    pub id: i64,
}

impl TuskerCommandService {
    pub async fn delete_tusker(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteTuskerCommand,
    ) -> ApplicationResult<()> {
        let id = TuskerId::new(command.id)?;
        self.write_repo.delete(id).await?;
        tracing::info!(tusker_id = i64::from(id), actor = %actor.username, "tusker deleted");
        Ok(())
    }
}
