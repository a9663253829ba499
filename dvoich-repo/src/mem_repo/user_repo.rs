use crate::user_repo::UserRepoError::LoginTaken;
use crate::user_repo::{RegisteredUser, User, UserRepo, UserRepoError};
use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

struct State {
    users: HashMap<String, User>,
    next_id: i32,
}

pub struct MemUserRepo {
    state: RwLock<State>,
}

impl MemUserRepo {
    pub fn new() -> MemUserRepo {
        let state = State {
            users: HashMap::new(),
            next_id: 1,
        };
        MemUserRepo {
            state: RwLock::new(state),
        }
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<State>, anyhow::Error> {
        self.state.read().map_err(|_| anyhow!("Unable to acquire lock"))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<State>, anyhow::Error> {
        self.state
            .write()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }
}

#[async_trait]
impl UserRepo for MemUserRepo {
    async fn create_user(
        &self,
        login: &str,
        password_hash: &str,
    ) -> Result<RegisteredUser, UserRepoError> {
        let mut write_guard = self.write_lock()?;

        if write_guard.users.contains_key(login) {
            return Err(LoginTaken(login.to_owned()));
        }

        let id = write_guard.next_id;
        write_guard.next_id += 1;
        write_guard.users.insert(
            login.to_owned(),
            User {
                id,
                login: login.to_owned(),
                password_hash: password_hash.to_owned(),
            },
        );
        Ok(RegisteredUser {
            id,
            login: login.to_owned(),
        })
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, UserRepoError> {
        let read_guard = self.read_lock()?;
        Ok(read_guard.users.get(login).cloned())
    }
}
