use super::matcher::{any_contains_ci, contains_ci};
use super::types::{Category, SearchHit};
use crate::directory::store::DirectoryStore;

const WEIGHT_NAME: u32 = 4;
const WEIGHT_GENRES: u32 = 1;
const WEIGHT_MOVIES: u32 = 1;
const WEIGHT_LOCATION: u32 = 1;
const WEIGHT_ARTISTS: u32 = 2;

pub fn search(store: &DirectoryStore, query: &str) -> Vec<SearchHit> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    // One read-lock acquisition for the whole call; mutations cannot
    // interleave with the per-person genre lookups below.
    let table = store.genre_table();

    let mut hits: Vec<SearchHit> = Vec::new();

    for person in store.persons() {
        let mut score = 0;
        let mut matches: Vec<Category> = Vec::new();

        if contains_ci(&person.name, query) {
            score += WEIGHT_NAME;
            matches.push(Category::Name);
        }

        // Counts once even if multiple genres match.
        if any_contains_ci(&person.genres, query) {
            score += WEIGHT_GENRES;
            matches.push(Category::Genres);
        }

        // Counts once even if several movies match.
        if any_contains_ci(&person.movies, query) {
            score += WEIGHT_MOVIES;
            matches.push(Category::Movies);
        }

        if contains_ci(&person.location, query) {
            score += WEIGHT_LOCATION;
            matches.push(Category::Location);
        }

        // Union of artists across the person's genres, counted once.
        let artists: Vec<&str> = person
            .genres
            .iter()
            .flat_map(|genre| table.artists_for(genre))
            .map(String::as_str)
            .collect();

        if !artists.is_empty() && any_contains_ci(&artists, query) {
            score += WEIGHT_ARTISTS;
            matches.push(Category::Artists);
        }

        if score > 0 {
            hits.push(SearchHit {
                name: person.name.clone(),
                score,
                matches,
            });
        }
    }

    // Score descending, then name ascending ignoring case. The sort is
    // stable, so names equal after folding keep their seed order.
    hits.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });

    hits
}
