//! Seed Dataset
//!
//! The fixed directory contents the process starts with. Persons are
//! immutable for the lifetime of the process; the genre-artist table is the
//! baseline that `reset` restores after add-artist mutations.

use super::store::GenreTable;
use super::types::Person;

fn person(name: &str, genres: &[&str], movies: &[&str], location: &str) -> Person {
    Person {
        name: name.to_string(),
        genres: genres.iter().map(|s| s.to_string()).collect(),
        movies: movies.iter().map(|s| s.to_string()).collect(),
        location: location.to_string(),
    }
}

pub fn persons() -> Vec<Person> {
    vec![
        person(
            "Eddy Verde",
            &["Rock", "Country"],
            &["Avatar", "The Good, the Bad and the Ugly"],
            "Florida",
        ),
        person(
            "Bonnie Wang",
            &["Classical"],
            &["Lilo & Stitch", "Die Hard"],
            "Maryland",
        ),
        person(
            "Greta Heissenberger",
            &["Jazz", "Rock"],
            &["The Departed", "M*A*S*H", "The Godfather"],
            "Massachusetts",
        ),
        person(
            "Justin Coker",
            &["Country"],
            &["Raiders of the Lost Ark", "Apollo 13"],
            "South Carolina",
        ),
        person(
            "Jason Leo",
            &["Rock", "Ska"],
            &["The Dark Knight", "Top Gun"],
            "Maine",
        ),
        person(
            "Doug Akridge",
            &["Rock", "Blues"],
            &["Jurassic Park", "Cast Away", "Romeo + Juliet"],
            "Washington, D.C.",
        ),
    ]
}

pub fn genre_table() -> GenreTable {
    let mut table = GenreTable::new();

    for (genre, artists) in [
        ("Rock", &["Led Zeppelin", "AC/DC", "Rolling Stones"][..]),
        ("Country", &["Alabama", "Rascal Flatts"][..]),
        ("Classical", &["Mozart", "Bach", "Chopin"][..]),
        (
            "Jazz",
            &["Miles Davis Quintet", "Duke Ellington", "Louis Armstrong"][..],
        ),
        (
            "Ska",
            &["Sublime", "Reel Big Fish", "The Mighty Mighty Bosstones"][..],
        ),
        (
            "Blues",
            &["John Mayer Trio", "B.B. King", "Eric Clapton"][..],
        ),
    ] {
        for artist in artists {
            table.add_artist(genre, artist);
        }
    }

    table
}
