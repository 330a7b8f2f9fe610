//! Directory Module
//!
//! The data layer of the service: the fixed list of person records and the
//! mutable mapping from music genre to artist names.
//!
//! ## Core Concepts
//! - **Persons**: Loaded once at startup from the in-code seed; never
//!   mutated afterwards. Seed order is the iteration order the ranking
//!   engine consumes.
//! - **Genre-Artist Table**: Keyed case-insensitively while preserving the
//!   casing a genre was first introduced with. Mutated only by the add-artist
//!   operation; restorable to the seeded baseline via reset.
//! - **Access**: `DirectoryStore` owns both datasets and guards the table
//!   with a single read-write lock so mutations never interleave with a
//!   search's reads.
//!
//! ## Submodules
//! - **`store`**: `DirectoryStore` and `GenreTable`.
//! - **`seed`**: The seed dataset.
//! - **`handlers`**: HTTP request handlers for the mutation endpoints.
//! - **`types`**: Person record and Data Transfer Objects (DTOs).

pub mod handlers;
pub mod seed;
pub mod store;
pub mod types;
