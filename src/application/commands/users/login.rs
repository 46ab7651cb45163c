// src/application/commands/users/login.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Username,
};

pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<AuthTokenDto> {
        let username = Username::new(command.username)?;
        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await
            .map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;

        self.token_manager
            .issue(TokenSubject {
                user_id: user.id,
                username: user.username.as_str().to_string(),
            })
            .await
    }
}
