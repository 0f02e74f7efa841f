//! Font reference list entries.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A font available to the backend renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Font {
    /// Font name (filename without extension)
    pub name: String,

    /// Absolute path on the backend host
    pub path: String,
}
