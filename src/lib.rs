//! People Directory Search Service Library
//!
//! This library crate defines the core modules of the directory search
//! service. It serves as the foundation for the binary executable
//! (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of two loosely coupled subsystems:
//!
//! - **`directory`**: The data layer. Holds the fixed person records and the
//!   mutable genre→artist table, and exposes the mutation endpoints
//!   (add artist, reset) that change future search results.
//! - **`search`**: The core information retrieval logic. Contains the
//!   case-insensitive matcher, the weighted category scoring algorithm, and
//!   the search HTTP endpoint.

pub mod directory;
pub mod search;
