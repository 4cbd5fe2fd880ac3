//! Concert listings.

pub mod service;

pub use service::ConcertService;
