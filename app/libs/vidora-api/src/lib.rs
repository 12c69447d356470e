//! Shared wire models and HTTP client for the Vidora platform API
//!
//! The `PlatformApi` trait is the seam the client core talks through;
//! `PlatformClient` is the reqwest-backed implementation used against a
//! real backend.

pub mod auth;
pub mod client;
pub mod error;
pub mod models;

pub use auth::AuthToken;
pub use client::{PlatformApi, PlatformClient};
pub use error::{ApiError, Result};
