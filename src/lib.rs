// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod recommend;
pub mod redactor;
pub mod rules;
pub mod scoring;
pub mod selector;
pub mod theme;

// ---- Re-exports for stable public API ----
pub use crate::api::{create_router, AppState};
pub use crate::catalog::{Catalog, SongDocument};
pub use crate::recommend::recommend;
pub use crate::theme::{Theme, UserPreferences};
