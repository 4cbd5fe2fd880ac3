//! In-process API tests over in-memory repositories, the memory cache, and
//! local storage in a temporary directory.

mod helpers;

mod artists;
mod concerts;
mod health;
mod users;
