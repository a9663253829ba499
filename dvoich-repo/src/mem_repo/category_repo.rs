use crate::category_repo::{Category, CategoryRepo, CategoryRepoError};
use anyhow::anyhow;
use async_trait::async_trait;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

struct StoredCategory {
    id: i32,
    user_id: i32,
    name: String,
}

struct State {
    categories: Vec<StoredCategory>,
    next_id: i32,
}

pub struct MemCategoryRepo {
    state: RwLock<State>,
}

impl MemCategoryRepo {
    pub fn new() -> MemCategoryRepo {
        let state = State {
            categories: Vec::new(),
            next_id: 1,
        };
        MemCategoryRepo {
            state: RwLock::new(state),
        }
    }

    /// Seeds a category. Category writes have no endpoint in this API, so
    /// tests insert their fixtures here.
    pub fn add_category(&self, user_id: i32, name: &str) -> Result<i32, anyhow::Error> {
        let mut write_guard = self.write_lock()?;
        let id = write_guard.next_id;
        write_guard.next_id += 1;
        write_guard.categories.push(StoredCategory {
            id,
            user_id,
            name: name.to_owned(),
        });
        Ok(id)
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
impl CategoryRepo for MemCategoryRepo {
    async fn get_categories(&self, user_id: i32) -> Result<Vec<Category>, CategoryRepoError> {
        let read_guard = self.read_lock()?;
        let categories = read_guard
            .categories
            .iter()
            .filter(|c| c.user_id == user_id)
            .map(|c| Category {
                id: c.id,
                name: c.name.clone(),
            })
            .collect();
        Ok(categories)
    }

    async fn get_category_name(
        &self,
        category_id: i32,
        user_id: i32,
    ) -> Result<Option<String>, CategoryRepoError> {
        let read_guard = self.read_lock()?;
        let name = read_guard
            .categories
            .iter()
            .find(|c| c.id == category_id && c.user_id == user_id)
            .map(|c| c.name.clone());
        Ok(name)
    }
}
