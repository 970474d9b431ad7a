//! Test utilities for microservice handler testing.
//!
//! Unlike a shared fixture, every call to [`test_state`] builds a new seeded
//! store, since handlers mutate it.

use serde_json::{json, Value};

use crate::state::AppState;

/// Build a fresh, seeded AppState.
pub fn test_state() -> AppState {
    AppState::seeded()
}

/// Known seed records for use in tests.
pub mod fixture_items {
    /// Id 1, blond, no birth year.
    pub const LUKE: &str = "Luke Skywalker";
    pub const LUKE_ID: i64 = 1;

    pub const R2_D2: &str = "R2-D2";

    pub const DARTH_VADER: &str = "Darth Vader";

    /// Lowercase "lars" in the surname.
    pub const BERU: &str = "Beru Whitesun lars";

    /// Last seed record, id 8.
    pub const R5_D4: &str = "R5-D4";
    pub const R5_D4_ID: i64 = 8;

    /// Smallest id not used by the seed set.
    pub const FIRST_FREE_ID: i64 = 9;
}

/// A valid creation payload for Yoda (id 9, null birth year).
pub fn yoda_payload() -> Value {
    json!({
        "id": fixture_items::FIRST_FREE_ID,
        "name": "Yoda",
        "height": 66,
        "mass": 17,
        "hair_color": "white",
        "skin_color": "green",
        "eye_color": "brown",
        "birth_year": null
    })
}

/// Generate a unique request ID for testing.
pub fn test_request_id() -> String {
    format!("test-{}", uuid::Uuid::now_v7())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{CreateItemRequest, Validate};

    #[test]
    fn test_state_is_fresh_each_call() {
        let first = test_state();
        first.items().delete_by_id(fixture_items::LUKE_ID).unwrap();

        let second = test_state();
        assert_eq!(second.items().len(), 8);
    }

    #[test]
    fn test_fixture_names_exist() {
        let state = test_state();
        for name in [
            fixture_items::LUKE,
            fixture_items::R2_D2,
            fixture_items::DARTH_VADER,
            fixture_items::BERU,
            fixture_items::R5_D4,
        ] {
            assert_eq!(state.items().get_by_name(name).len(), 1, "{name} in seed");
        }
        assert!(state.items().get_by_id(fixture_items::FIRST_FREE_ID).is_none());
    }

    #[test]
    fn test_yoda_payload_is_valid() {
        let request = CreateItemRequest::new(yoda_payload());
        assert!(request.validate(&test_request_id()).is_ok());
    }

    #[test]
    fn test_request_id_unique() {
        assert_ne!(test_request_id(), test_request_id());
    }
}
