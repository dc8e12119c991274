//! strategy-coach: rule-based coaching backend for a strategy-cascade
//! wizard. The core takes one answer set, analyzes the step under
//! review with lexical heuristics, and returns composed feedback,
//! probing questions, and suggestions. An axum HTTP layer exposes the
//! engine alongside cascade-record storage and plain-text export.

pub mod cascade;
pub mod coach;
pub mod config;
pub mod error;
pub mod export;
pub mod http;
pub mod store;
pub mod validate;

/// Load environment variables from .env if present.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}
