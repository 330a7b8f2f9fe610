use super::seed;
use super::types::Person;
use parking_lot::{RwLock, RwLockReadGuard};
use std::collections::HashMap;

/// The mutable genre→artists side table.
///
/// Keys are compared case-insensitively everywhere they are looked up, but
/// keep the casing they were first introduced with. Internally entries are
/// keyed by the lowercased genre name, with the original casing stored
/// alongside the artist list.
#[derive(Debug, Clone, Default)]
pub struct GenreTable {
    entries: HashMap<String, GenreEntry>,
}

#[derive(Debug, Clone)]
struct GenreEntry {
    /// Casing the genre was first introduced with.
    genre: String,
    artists: Vec<String>,
}

impl GenreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive lookup; empty slice for unknown genres.
    pub fn artists_for(&self, genre: &str) -> &[String] {
        self.entries
            .get(&genre.to_lowercase())
            .map(|entry| entry.artists.as_slice())
            .unwrap_or(&[])
    }

    /// Appends `artist` to `genre`, resolving the genre case-insensitively
    /// against existing keys and creating a new key with the supplied casing
    /// when none matches. A no-op if the genre already lists an artist with
    /// the same name ignoring case. Existing artists are never reordered or
    /// removed.
    pub fn add_artist(&mut self, genre: &str, artist: &str) {
        let entry = self
            .entries
            .entry(genre.to_lowercase())
            .or_insert_with(|| GenreEntry {
                genre: genre.to_string(),
                artists: Vec::new(),
            });

        let duplicate = entry
            .artists
            .iter()
            .any(|existing| existing.to_lowercase() == artist.to_lowercase());

        if !duplicate {
            entry.artists.push(artist.to_string());
        }
    }

    /// Genre names in their stored (first-introduced) casing.
    pub fn genre_names(&self) -> Vec<String> {
        self.entries
            .values()
            .map(|entry| entry.genre.clone())
            .collect()
    }

    pub fn genre_count(&self) -> usize {
        self.entries.len()
    }
}

/// Shared in-memory state of the service.
///
/// Persons are fixed after construction. The genre table is the only
/// mutable resource; every operation on it is a short critical section under
/// one read-write lock, so `add_artist`/`reset` never interleave with each
/// other or with a search's reads. `reset` restores the table wholesale from
/// the baseline snapshot taken at construction.
pub struct DirectoryStore {
    persons: Vec<Person>,
    baseline: GenreTable,
    table: RwLock<GenreTable>,
}

impl DirectoryStore {
    pub fn new(persons: Vec<Person>, table: GenreTable) -> Self {
        Self {
            persons,
            baseline: table.clone(),
            table: RwLock::new(table),
        }
    }

    /// Store initialized with the seed dataset.
    pub fn seeded() -> Self {
        Self::new(seed::persons(), seed::genre_table())
    }

    /// All persons in seed order.
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// Read access to the genre table for the duration of one search call.
    pub fn genre_table(&self) -> RwLockReadGuard<'_, GenreTable> {
        self.table.read()
    }

    pub fn artists_for_genre(&self, genre: &str) -> Vec<String> {
        self.table.read().artists_for(genre).to_vec()
    }

    pub fn add_artist(&self, genre: &str, artist: &str) {
        self.table.write().add_artist(genre, artist);
    }

    /// Discards all add-artist effects, restoring the seeded contents.
    pub fn reset(&self) {
        *self.table.write() = self.baseline.clone();
    }

    pub fn genre_count(&self) -> usize {
        self.table.read().genre_count()
    }
}
