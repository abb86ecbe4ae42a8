//! Shared types for the mesa management backend
//!
//! Common types used across crates: the unified error system, the API
//! response envelope, and the mesa resource models.

pub mod error;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
