//! User self-service operations.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};

use tgle_auth::password::{PasswordHasher, PasswordValidator};
use tgle_core::error::AppError;
use tgle_database::repositories::UserRepository;
use tgle_entity::user::{CreateUser, User};
use tgle_storage::StorageManager;

use crate::context::RequestContext;

/// Folder under which profile images are stored.
const PROFILE_IMAGE_FOLDER: &str = "users";

/// Input for a local sign-up.
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub email: String,
    pub nickname: String,
    pub password: String,
    pub confirm_password: String,
}

/// Partial update of the current user's account.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserInfo {
    pub nickname: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl UpdateUserInfo {
    fn is_empty(&self) -> bool {
        self.nickname.is_none() && self.password.is_none() && self.confirm_password.is_none()
    }
}

/// Handles registration and user self-service operations.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    storage: Arc<StorageManager>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        storage: Arc<StorageManager>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
            storage,
        }
    }

    /// Registers a local account.
    pub async fn register(&self, req: RegisterUser) -> Result<User, AppError> {
        self.validator
            .validate_confirmation(&req.password, &req.confirm_password)?;
        self.validator
            .validate(&req.password, &[req.email.as_str(), req.nickname.as_str()])?;

        if self.users.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Email '{}' is already registered",
                req.email
            )));
        }
        self.check_nickname(&req.nickname).await?;

        let password_hash = self.hasher.hash_password(&req.password)?;
        let user = self
            .users
            .create(&CreateUser::local(req.email, req.nickname, password_hash))
            .await?;

        info!(user_id = %user.user_id, nickname = %user.nickname, "User registered");
        Ok(user)
    }

    /// Fails with a validation error for a blank nickname and a conflict if
    /// the nickname is taken.
    pub async fn check_nickname(&self, nickname: &str) -> Result<(), AppError> {
        if nickname.trim().is_empty() {
            return Err(AppError::validation("Nickname is required"));
        }
        if self.users.find_by_nickname(nickname).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Nickname '{nickname}' is already taken"
            )));
        }
        Ok(())
    }

    /// Looks up a user by email.
    pub async fn find_by_email(&self, email: &str) -> Result<User, AppError> {
        self.users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// The current user, resolved by the email in the token.
    pub async fn current_user(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.find_by_email(&ctx.email).await
    }

    /// Updates nickname and/or password.
    ///
    /// An update with no fields at all is rejected as unauthorized. A password
    /// change needs both `password` and `confirm_password`.
    pub async fn update_info(
        &self,
        ctx: &RequestContext,
        req: UpdateUserInfo,
    ) -> Result<User, AppError> {
        if req.is_empty() {
            return Err(AppError::unauthorized("No values were provided"));
        }

        let password = match (&req.password, &req.confirm_password) {
            (Some(password), Some(confirm)) => {
                self.validator.validate_confirmation(password, confirm)?;
                self.validator.validate(password, &[ctx.email.as_str()])?;
                Some(password)
            }
            (None, None) => None,
            _ => {
                return Err(AppError::validation(
                    "Both password and confirmPassword are required to change the password",
                ));
            }
        };

        let mut user = self.current_user(ctx).await?;

        if let Some(nickname) = &req.nickname {
            if nickname.trim().is_empty() {
                return Err(AppError::validation("Nickname cannot be empty"));
            }
            if *nickname != user.nickname {
                user = self.users.update_nickname(user.user_id, nickname).await?;
                info!(user_id = %user.user_id, nickname = %nickname, "Nickname changed");
            }
        }

        if let Some(password) = password {
            let hash = self.hasher.hash_password(password)?;
            user = self.users.update_password(user.user_id, &hash).await?;
            info!(user_id = %user.user_id, "Password changed");
        }

        Ok(user)
    }

    /// Replaces the current user's profile image.
    ///
    /// The previous image is deleted after the new one is stored; a failed
    /// delete is logged and otherwise ignored. If the user row cannot be
    /// updated, the freshly stored image is removed again.
    pub async fn update_profile_img(
        &self,
        ctx: &RequestContext,
        data: Bytes,
        content_type: Option<&str>,
    ) -> Result<User, AppError> {
        let user = self.current_user(ctx).await?;

        let stored = self
            .storage
            .upload_image(PROFILE_IMAGE_FOLDER, data, content_type)
            .await?;
        let updated = match self
            .users
            .update_profile_img(user.user_id, Some(&stored.url))
            .await
        {
            Ok(updated) => updated,
            Err(e) => {
                if let Err(cleanup) = self.storage.delete_by_url(&stored.url).await {
                    warn!(key = %stored.key, error = %cleanup, "Failed to remove orphaned profile image");
                }
                return Err(e);
            }
        };

        if let Some(old) = user.profile_img.as_deref() {
            if let Err(e) = self.storage.delete_by_url(old).await {
                warn!(user_id = %user.user_id, error = %e, "Failed to delete previous profile image");
            }
        }

        info!(user_id = %user.user_id, key = %stored.key, "Profile image updated");
        Ok(updated)
    }
}
