//! Directory Data Types
//!
//! Defines the person record and the Data Transfer Objects (DTOs) used by
//! the mutation endpoints.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single directory entry.
///
/// Loaded once at process start from the in-code seed and never mutated
/// afterwards. `name` is unique within the directory and doubles as the
/// display and tie-break key in search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub genres: Vec<String>,
    pub movies: Vec<String>,
    pub location: String,
}

/// Request body for appending an artist to a genre.
///
/// Both fields are optional at the deserialization layer so the handler can
/// report every missing/empty field in one response instead of failing on
/// the first absent key.
#[derive(Debug, Deserialize)]
pub struct AddArtistRequest {
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
}

/// Client-error response for rejected request bodies.
///
/// `details` maps each offending field to its validation messages.
#[derive(Debug, Serialize)]
pub struct ValidationError {
    pub error: String,
    pub details: HashMap<String, Vec<String>>,
}
