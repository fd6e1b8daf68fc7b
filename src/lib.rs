//! Server-side form actions for the Wildhaven guest area: profile updates,
//! reservation create/update/delete, and sign-in/sign-out delegation to the
//! hosted identity provider.

pub mod actions;
pub mod auth;
pub mod cache;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod store;
pub mod validate;
