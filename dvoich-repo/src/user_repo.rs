use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[async_trait]
pub trait UserRepo: Sync + Send {
    async fn create_user(
        &self,
        login: &str,
        password_hash: &str,
    ) -> Result<RegisteredUser, UserRepoError>;
    async fn find_by_login(&self, login: &str) -> Result<Option<User>, UserRepoError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub login: String,
    pub password_hash: String,
}

/// The columns `INSERT … RETURNING` hands back. The hash never leaves the store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RegisteredUser {
    pub id: i32,
    pub login: String,
}

#[derive(Error, Debug)]
pub enum UserRepoError {
    #[error("Login {0} already taken")]
    LoginTaken(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
