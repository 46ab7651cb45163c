// src/application/commands/users/register.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{NewUser, PasswordHash, Username},
};

const MIN_PASSWORD_LEN: usize = 8;

pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        if command.password.len() < MIN_PASSWORD_LEN {
            return Err(ApplicationError::validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let hash = self.password_hasher.hash(&command.password).await?;
        let new_user = NewUser {
            username,
            password_hash: PasswordHash::new(hash)?,
            created_at: self.clock.now(),
        };

        let created = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = i64::from(created.id), "admin account registered");
        Ok(created.into())
    }
}
