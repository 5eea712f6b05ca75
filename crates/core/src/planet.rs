//! The planet record and its create payload.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::DbId;

/// PostgreSQL text columns cannot hold U+0000.
pub fn is_storable_text(value: &str) -> bool {
    !value.contains('\0')
}

/// A persisted planet.
///
/// Equality is structural over all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    pub id: DbId,
    pub name: String,
    pub climate: String,
    pub terrain: String,
}

/// Request payload for creating a planet. Carries no id; storage assigns it.
///
/// Missing fields deserialize to empty strings so they are reported through
/// the same validation path as explicitly empty ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct CreatePlanet {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub climate: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub terrain: String,
}

impl CreatePlanet {
    pub fn new(
        name: impl Into<String>,
        climate: impl Into<String>,
        terrain: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            climate: climate.into(),
            terrain: terrain.into(),
        }
    }

    /// Attach a storage-assigned id, producing the persisted record.
    pub fn into_planet(self, id: DbId) -> Planet {
        Planet {
            id,
            name: self.name,
            climate: self.climate,
            terrain: self.terrain,
        }
    }

    /// Name of the first required field that is empty, in declaration order.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("climate", &self.climate),
            ("terrain", &self.terrain),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
    }

    /// Name of the first field holding a NUL character, in declaration order.
    pub fn first_unstorable_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("climate", &self.climate),
            ("terrain", &self.terrain),
        ]
        .into_iter()
        .find(|(_, value)| !is_storable_text(value))
        .map(|(field, _)| field)
    }
}

/// Validate a create payload before it reaches storage.
///
/// Every required field must be non-empty (the message lists the offending
/// fields alphabetically) and free of NUL characters.
pub fn validate_create_planet(input: &CreatePlanet) -> Result<(), CoreError> {
    input.validate().map_err(|errors| {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        CoreError::Validation(format!("Required fields must not be empty: {}", fields.join(", ")))
    })?;

    if let Some(field) = input.first_unstorable_field() {
        return Err(CoreError::Validation(format!(
            "{field} must not contain NUL characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn complete_payload_is_valid() {
        let input = CreatePlanet::new("Tatooine", "arid", "desert");
        assert!(validate_create_planet(&input).is_ok());
    }

    #[test]
    fn empty_payload_lists_every_field() {
        let err = validate_create_planet(&CreatePlanet::default()).unwrap_err();
        assert_matches!(
            err,
            CoreError::Validation(msg)
                if msg == "Required fields must not be empty: climate, name, terrain"
        );
    }

    #[test]
    fn single_empty_field_rejected() {
        let input = CreatePlanet::new("Tatooine", "", "desert");
        let err = validate_create_planet(&input).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.ends_with("climate"));
    }

    #[test]
    fn whitespace_counts_as_present() {
        let input = CreatePlanet::new(" ", "arid", "desert");
        assert!(validate_create_planet(&input).is_ok());
    }

    #[test]
    fn missing_json_fields_become_empty() {
        let input: CreatePlanet = serde_json::from_str(r#"{"name":"Hoth"}"#).unwrap();
        assert_eq!(input.first_missing_field(), Some("climate"));
    }

    #[test]
    fn first_missing_field_none_when_complete() {
        let input = CreatePlanet::new("Hoth", "frozen", "tundra");
        assert_eq!(input.first_missing_field(), None);
    }

    #[test]
    fn nul_character_rejected() {
        let input = CreatePlanet::new("Ta\u{0}too", "arid", "desert");
        let err = validate_create_planet(&input).unwrap_err();
        assert_matches!(
            err,
            CoreError::Validation(msg) if msg == "name must not contain NUL characters"
        );
    }

    #[test]
    fn first_unstorable_field_in_declaration_order() {
        let input = CreatePlanet::new("Hoth", "fro\u{0}zen", "tun\u{0}dra");
        assert_eq!(input.first_unstorable_field(), Some("climate"));
        assert_eq!(
            CreatePlanet::new("Hoth", "frozen", "tundra").first_unstorable_field(),
            None
        );
    }

    #[test]
    fn into_planet_keeps_fields() {
        let planet = CreatePlanet::new("Hoth", "frozen", "tundra").into_planet(3);
        assert_eq!(
            planet,
            Planet {
                id: 3,
                name: "Hoth".into(),
                climate: "frozen".into(),
                terrain: "tundra".into(),
            }
        );
    }
}
