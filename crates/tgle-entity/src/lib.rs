//! # tgle-entity
//!
//! Domain entity models for TGLE. Every struct in this crate represents a
//! database table row or the input needed to create one. Row structs derive
//! `sqlx::FromRow` and serialize with camelCase field names.

pub mod artist;
pub mod artist_like;
pub mod concert;
pub mod user;
