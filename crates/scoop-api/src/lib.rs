//! HTTP command dispatcher for the clip backend.
//!
//! This crate provides:
//! - Fire-and-forget command submission (download, clip, transcribe,
//!   clip-template), each correlated with a backend job id
//! - Read fetches for clips, templates and fonts
//! - Media URL construction for served files

pub mod client;
pub mod config;
pub mod error;
pub mod requests;

pub use client::{final_segment, parse_seconds, ApiClient};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
