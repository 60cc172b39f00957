//! The HTTP adapter: a typed, authenticated JSON client with a global
//! 401 recovery policy.

mod auth;
mod client;
mod error;
mod public;
mod restaurants;
mod upload;

pub use auth::AuthResponse;
pub use client::ApiClient;
pub use error::ApiError;
