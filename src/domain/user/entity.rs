use crate::domain::user::value_objects::{PasswordHash, UserId, Username};
use chrono::{DateTime, Utc};

/// Admin account. Any authenticated account may mutate content; there is no
/// role hierarchy.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}
