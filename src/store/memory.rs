use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoreError, UserStore};
use crate::models::user::{NewUser, User};

#[derive(Debug)]
struct UserTable {
    rows: Vec<User>,
    next_id: i32,
}

/// In-process [`UserStore`] with `SERIAL`-style ids starting at 1.
#[derive(Debug)]
pub struct MemoryUserStore {
    table: RwLock<UserTable>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(UserTable {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Start from existing rows, which may hold NULL columns; new ids continue after the largest.
    pub fn with_rows(mut rows: Vec<User>) -> Self {
        rows.sort_by_key(|user| user.id);
        let next_id = rows.last().map(|user| user.id.saturating_add(1)).unwrap_or(1);
        Self {
            table: RwLock::new(UserTable { rows, next_id }),
        }
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn create_user(&self, new_user: &NewUser) -> Result<User, StoreError> {
        let mut table = self.table.write().await;
        let user = User {
            id: table.next_id,
            username: Some(new_user.username.clone()),
            bio: Some(new_user.bio.clone()),
        };
        table.next_id = table
            .next_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Query("users id sequence exhausted".to_string()))?;
        table.rows.push(user.clone());
        Ok(user)
    }

    async fn find_user(&self, id: i32) -> Result<Option<User>, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|user| user.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str, bio: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            bio: bio.to_string(),
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_sequentially() {
        let store = MemoryUserStore::new();
        let alice = store.create_user(&new_user("alice", "hello")).await.unwrap();
        let bob = store.create_user(&new_user("bob", "hi")).await.unwrap();
        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn duplicate_usernames_are_allowed() {
        let store = MemoryUserStore::new();
        store.create_user(&new_user("alice", "one")).await.unwrap();
        store.create_user(&new_user("alice", "two")).await.unwrap();
        let users = store.list_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_ne!(users[0].id, users[1].id);
    }

    #[tokio::test]
    async fn seeded_rows_keep_nulls_and_ids_continue() {
        let store = MemoryUserStore::with_rows(vec![
            User { id: 7, username: Some("bob".into()), bio: None },
            User { id: 3, username: None, bio: Some("anon".into()) },
        ]);
        let users = store.list_users().await.unwrap();
        assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![3, 7]);

        let carol = store.create_user(&new_user("carol", "hey")).await.unwrap();
        assert_eq!(carol.id, 8);
        assert_eq!(store.find_user(7).await.unwrap().unwrap().bio, None);
    }

    #[tokio::test]
    async fn find_missing_id_is_none() {
        let store = MemoryUserStore::new();
        assert!(store.is_empty().await);
        assert_eq!(store.find_user(42).await.unwrap(), None);
    }
}
