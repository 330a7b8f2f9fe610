use serde::{Deserialize, Serialize};

/// One of the five scoring dimensions a query can match.
///
/// Serialized as the lowercase tag names the API has always used, so the
/// `matches` array stays compatible with existing clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Name,
    Genres,
    Movies,
    Location,
    Artists,
}

/// A person whose score is greater than zero for a given query.
///
/// `matches` lists the categories that contributed to the score in
/// evaluation order (name, genres, movies, location, artists) — each
/// category at most once regardless of how many fields within it matched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub name: String,
    pub score: u32,
    pub matches: Vec<Category>,
}

/// Query string parameters for the search endpoint.
///
/// A missing `query` parameter defaults to the empty string, which the
/// engine treats as "matches nothing".
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}
