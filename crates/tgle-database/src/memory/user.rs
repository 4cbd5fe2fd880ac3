//! In-memory user repository.

use async_trait::async_trait;
use chrono::Utc;

use tgle_core::AppError;
use tgle_core::result::AppResult;
use tgle_core::types::UserId;
use tgle_entity::user::{AuthProvider, CreateUser, User};

use super::{MemoryStore, Tables};
use crate::repositories::UserRepository;

/// [`UserRepository`] backed by a [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct MemoryUserRepository {
    store: MemoryStore,
}

impl MemoryUserRepository {
    /// Create a repository over the given store.
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

fn nickname_taken(tables: &Tables, nickname: &str, except: Option<UserId>) -> bool {
    tables
        .users
        .values()
        .any(|u| u.nickname == nickname && Some(u.user_id) != except)
}

fn update<F>(tables: &mut Tables, id: UserId, f: F) -> AppResult<User>
where
    F: FnOnce(&mut User),
{
    let user = tables
        .users
        .get_mut(&id)
        .ok_or_else(|| AppError::not_found("User not found"))?;
    f(user);
    user.updated_at = Utc::now();
    Ok(user.clone())
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let tables = self.store.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_nickname(&self, nickname: &str) -> AppResult<Option<User>> {
        let tables = self.store.read().await;
        Ok(tables.users.values().find(|u| u.nickname == nickname).cloned())
    }

    async fn find_by_sns(&self, provider: AuthProvider, sns_id: &str) -> AppResult<Option<User>> {
        let tables = self.store.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.provider == provider && u.sns_id.as_deref() == Some(sns_id))
            .cloned())
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut tables = self.store.write().await;

        if tables.users.values().any(|u| u.email == data.email) {
            return Err(AppError::conflict(format!(
                "Email '{}' is already registered",
                data.email
            )));
        }
        if nickname_taken(&tables, &data.nickname, None) {
            return Err(AppError::conflict(format!(
                "Nickname '{}' is already taken",
                data.nickname
            )));
        }
        if let Some(sns_id) = &data.sns_id {
            if tables
                .users
                .values()
                .any(|u| u.provider == data.provider && u.sns_id.as_ref() == Some(sns_id))
            {
                return Err(AppError::conflict("This social account is already linked"));
            }
        }

        let now = Utc::now();
        let user = User {
            user_id: UserId(tables.next_id()),
            email: data.email.clone(),
            nickname: data.nickname.clone(),
            password_hash: data.password_hash.clone(),
            profile_img: data.profile_img.clone(),
            provider: data.provider,
            sns_id: data.sns_id.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.user_id, user.clone());
        Ok(user)
    }

    async fn update_nickname(&self, id: UserId, nickname: &str) -> AppResult<User> {
        let mut tables = self.store.write().await;
        if nickname_taken(&tables, nickname, Some(id)) {
            return Err(AppError::conflict(format!(
                "Nickname '{nickname}' is already taken"
            )));
        }
        update(&mut tables, id, |u| u.nickname = nickname.to_string())
    }

    async fn update_password(&self, id: UserId, password_hash: &str) -> AppResult<User> {
        let mut tables = self.store.write().await;
        update(&mut tables, id, |u| {
            u.password_hash = Some(password_hash.to_string())
        })
    }

    async fn update_profile_img(&self, id: UserId, profile_img: Option<&str>) -> AppResult<User> {
        let mut tables = self.store.write().await;
        update(&mut tables, id, |u| {
            u.profile_img = profile_img.map(str::to_string)
        })
    }
}

#[cfg(test)]
mod tests {
    use tgle_core::error::ErrorKind;

    use super::*;
    use crate::memory::new_store;

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MemoryUserRepository::new(new_store());
        let user = repo
            .create(&CreateUser::local("a@tgle.ml", "alpha", "hash".into()))
            .await
            .unwrap();

        let by_email = repo.find_by_email("a@tgle.ml").await.unwrap().unwrap();
        assert_eq!(by_email.user_id, user.user_id);
        assert!(repo.find_by_nickname("alpha").await.unwrap().is_some());
        assert!(repo.find_by_nickname("beta").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unique_email_and_nickname() {
        let repo = MemoryUserRepository::new(new_store());
        repo.create(&CreateUser::local("a@tgle.ml", "alpha", "h".into()))
            .await
            .unwrap();

        let err = repo
            .create(&CreateUser::local("a@tgle.ml", "other", "h".into()))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        let err = repo
            .create(&CreateUser::local("b@tgle.ml", "alpha", "h".into()))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_update_nickname_allows_own_name() {
        let repo = MemoryUserRepository::new(new_store());
        let a = repo
            .create(&CreateUser::local("a@tgle.ml", "alpha", "h".into()))
            .await
            .unwrap();
        repo.create(&CreateUser::local("b@tgle.ml", "beta", "h".into()))
            .await
            .unwrap();

        assert!(repo.update_nickname(a.user_id, "alpha").await.is_ok());
        let err = repo.update_nickname(a.user_id, "beta").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        let updated = repo.update_nickname(a.user_id, "gamma").await.unwrap();
        assert_eq!(updated.nickname, "gamma");
    }

    #[tokio::test]
    async fn test_find_by_sns() {
        let repo = MemoryUserRepository::new(new_store());
        repo.create(&CreateUser {
            email: "k@kakao".into(),
            nickname: "kakao-fan".into(),
            password_hash: None,
            profile_img: None,
            provider: AuthProvider::Kakao,
            sns_id: Some("12345".into()),
        })
        .await
        .unwrap();

        assert!(
            repo.find_by_sns(AuthProvider::Kakao, "12345")
                .await
                .unwrap()
                .is_some()
        );
        assert!(
            repo.find_by_sns(AuthProvider::Local, "12345")
                .await
                .unwrap()
                .is_none()
        );
    }
}
