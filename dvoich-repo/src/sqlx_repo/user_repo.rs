use crate::sqlx_repo::SQLxRepo;
use crate::user_repo::{RegisteredUser, User, UserRepo, UserRepoError};
use anyhow::Context;
use async_trait::async_trait;
use sqlx::query_as;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    login: String,
    password: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            login: row.login,
            password_hash: row.password,
        }
    }
}

#[async_trait]
impl UserRepo for SQLxRepo {
    async fn create_user(
        &self,
        login: &str,
        password_hash: &str,
    ) -> Result<RegisteredUser, UserRepoError> {
        let result = query_as::<_, (i32, String)>(
            "INSERT INTO users (login, password) VALUES ($1, $2) RETURNING id, login",
        )
        .bind(login)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok((id, login)) => Ok(RegisteredUser { id, login }),
            Err(e) if is_unique_violation(&e) => Err(UserRepoError::LoginTaken(login.to_owned())),
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("Unable to create user {}", login))
                .into()),
        }
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, UserRepoError> {
        let user: Option<UserRow> =
            query_as("SELECT id, login, password FROM users WHERE login = $1")
                .bind(login)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Unable to look up user {}", login))?;
        Ok(user.map(User::from))
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db_error) => db_error.is_unique_violation(),
        _ => false,
    }
}
