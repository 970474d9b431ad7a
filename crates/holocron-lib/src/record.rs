//! Character record types.
//!
//! [`CharacterRecord`] is the only entity in the store. [`ItemSummary`] is the
//! reduced projection returned by list-all queries.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Client-assigned record identifier.
pub type RecordId = i64;

/// A single character record.
///
/// Serialized with snake_case field names. The camelCase spellings of the
/// colour and birth year fields are accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CharacterRecord {
    /// Unique identifier, supplied by the client on creation.
    #[schema(value_type = i64, example = 9)]
    pub id: RecordId,
    /// Character name.
    #[schema(example = "Yoda")]
    pub name: String,
    /// Height in centimeters.
    #[schema(example = 66)]
    pub height: i64,
    /// Mass in kilograms.
    #[schema(example = 17)]
    pub mass: i64,
    #[serde(alias = "hairColor")]
    #[schema(example = "white")]
    pub hair_color: String,
    #[serde(alias = "skinColor")]
    #[schema(example = "green")]
    pub skin_color: String,
    #[serde(alias = "eyeColor")]
    #[schema(example = "brown")]
    pub eye_color: String,
    /// Birth year, e.g. "19BBY". Always serialized, as `null` when unknown.
    #[serde(default, alias = "birthYear")]
    pub birth_year: Option<String>,
}

impl CharacterRecord {
    /// Case-insensitive comparison of the record name against `name`.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Project this record down to its list-view fields.
    pub fn summary(&self) -> ItemSummary {
        ItemSummary::from(self)
    }
}

/// List-view projection of a [`CharacterRecord`].
///
/// Carries no hair, skin or eye colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemSummary {
    #[schema(value_type = i64)]
    pub id: RecordId,
    pub name: String,
    pub height: i64,
    pub mass: i64,
    pub birth_year: Option<String>,
}

impl From<&CharacterRecord> for ItemSummary {
    fn from(record: &CharacterRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            height: record.height,
            mass: record.mass,
            birth_year: record.birth_year.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yoda() -> CharacterRecord {
        CharacterRecord {
            id: 9,
            name: "Yoda".to_string(),
            height: 66,
            mass: 17,
            hair_color: "white".to_string(),
            skin_color: "green".to_string(),
            eye_color: "brown".to_string(),
            birth_year: Some("896BBY".to_string()),
        }
    }

    #[test]
    fn test_name_matches_ignores_case() {
        let record = yoda();
        assert!(record.name_matches("yoda"));
        assert!(record.name_matches("YODA"));
        assert!(record.name_matches("yOdA"));
        assert!(!record.name_matches("Yod"));
        assert!(!record.name_matches("Yoda "));
    }

    #[test]
    fn test_summary_keeps_projected_fields() {
        let summary = yoda().summary();
        assert_eq!(summary.id, 9);
        assert_eq!(summary.name, "Yoda");
        assert_eq!(summary.height, 66);
        assert_eq!(summary.mass, 17);
        assert_eq!(summary.birth_year.as_deref(), Some("896BBY"));
    }

    #[test]
    fn test_summary_serializes_exactly_five_fields() {
        let json = serde_json::to_value(yoda().summary()).unwrap();
        let object = json.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["birth_year", "height", "id", "mass", "name"]);
    }

    #[test]
    fn test_record_serializes_null_birth_year() {
        let mut record = yoda();
        record.birth_year = None;
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"birth_year\":null"));
        assert!(json.contains("\"hair_color\":\"white\""));
    }

    #[test]
    fn test_record_accepts_camel_case_aliases() {
        let json = r#"{
            "id": 9, "name": "Yoda", "height": 66, "mass": 17,
            "hairColor": "white", "skinColor": "green", "eyeColor": "brown",
            "birthYear": "896BBY"
        }"#;
        let record: CharacterRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, yoda());
    }

    #[test]
    fn test_record_birth_year_defaults_to_none() {
        let json = r#"{
            "id": 9, "name": "Yoda", "height": 66, "mass": 17,
            "hair_color": "white", "skin_color": "green", "eye_color": "brown"
        }"#;
        let record: CharacterRecord = serde_json::from_str(json).unwrap();
        assert!(record.birth_year.is_none());
    }
}
