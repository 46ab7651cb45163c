pub mod articles;
pub mod auth;
pub mod tuskers;

pub use articles::ArticleDto;
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject, UserDto};
pub use tuskers::TuskerDto;
