//! Fixed seed data loaded into every fresh store.

use crate::record::{CharacterRecord, RecordId};

/// Number of records in the seed set.
pub const SEED_RECORD_COUNT: usize = 8;

fn record(
    id: RecordId,
    name: &str,
    height: i64,
    mass: i64,
    hair_color: &str,
    skin_color: &str,
    eye_color: &str,
) -> CharacterRecord {
    CharacterRecord {
        id,
        name: name.to_string(),
        height,
        mass,
        hair_color: hair_color.to_string(),
        skin_color: skin_color.to_string(),
        eye_color: eye_color.to_string(),
        birth_year: None,
    }
}

/// Build the seed records in their canonical order (ids 1 through 8).
pub fn seed_records() -> Vec<CharacterRecord> {
    vec![
        record(1, "Luke Skywalker", 172, 77, "blond", "fair", "blue"),
        record(2, "R2-D2", 96, 32, "n/a", "blue", "red"),
        record(3, "C-3PO", 167, 75, "n/a", "gold", "yellow"),
        record(4, "Darth Vader", 202, 136, "none", "white", "yellow"),
        record(5, "Leia Organa", 150, 49, "brown", "light", "brown"),
        record(6, "Owen Lars", 178, 120, "grey", "light", "blue"),
        record(7, "Beru Whitesun lars", 165, 75, "brown", "light", "blue"),
        record(8, "R5-D4", 97, 32, "n/a", "white", "red"),
    ]
}
