//! Shared fixtures

use quarry::{DocumentStatus, SearchEngine};

/// Stop words used by the pet corpus
pub const PET_STOP_WORDS: &str = "and with";

/// (id, text, status, ratings)
pub const PET_CORPUS: &[(i32, &str, DocumentStatus, &[i32])] = &[
    (1, "funny pet and nasty rat", DocumentStatus::Actual, &[7, 2, 7]),
    (2, "funny pet with curly hair", DocumentStatus::Actual, &[1, 2]),
    (3, "funny pet with curly hair", DocumentStatus::Actual, &[1, 2]),
    (4, "funny pet and curly hair", DocumentStatus::Actual, &[1, 2]),
    (5, "funny funny pet and nasty nasty rat", DocumentStatus::Actual, &[1, 2]),
    (6, "funny pet and not very nasty rat", DocumentStatus::Actual, &[1, 2]),
    (7, "very nasty rat and not very funny pet", DocumentStatus::Actual, &[1, 2]),
    (8, "pet with rat and rat and rat", DocumentStatus::Actual, &[1, 2]),
    (9, "nasty rat with curly hair", DocumentStatus::Actual, &[1, 2]),
];

/// Engine loaded with [`PET_CORPUS`]
pub fn pet_engine() -> SearchEngine {
    let mut engine = SearchEngine::new(PET_STOP_WORDS).unwrap();
    for &(id, text, status, ratings) in PET_CORPUS {
        engine.add_document(id, text, status, ratings).unwrap();
    }
    engine
}
