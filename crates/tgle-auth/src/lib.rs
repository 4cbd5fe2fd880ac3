//! # tgle-auth
//!
//! Authentication building blocks for TGLE.
//!
//! ## Modules
//!
//! - `jwt`: token creation, validation, and revocation
//! - `password`: Argon2id hashing and password policy
//! - `oauth`: social login providers (Kakao)

pub mod jwt;
pub mod oauth;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use oauth::{KakaoOAuthClient, OAuthProfile, OAuthProvider};
pub use password::{PasswordHasher, PasswordValidator};
