pub mod admin;
pub mod auth;
pub mod export;
pub mod portal;
pub mod registration;
pub mod setup;
