//! Network identifier validation.

use std::fmt;

use uuid::Uuid;

use crate::error::ValidationError;

/// Length of the canonical hyphenated UUID text.
const HYPHENATED_LEN: usize = 36;

/// A network identifier in canonical 8-4-4-4-12 hex form.
///
/// The trimmed input is kept as entered, so upper and lower case spellings of
/// the same UUID stay distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkId(String);

impl NetworkId {
    /// Validate user input as a network identifier.
    ///
    /// Surrounding whitespace is ignored. Braced, URN and 32-digit forms are
    /// rejected even though they name a valid UUID.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingNetworkId);
        }

        // The hyphenated form is the only 36 character spelling `uuid` accepts
        if trimmed.len() != HYPHENATED_LEN || Uuid::parse_str(trimmed).is_err() {
            return Err(ValidationError::MalformedNetworkId(trimmed.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_network_id() {
        let id = NetworkId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(id.as_str(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn test_network_id_is_trimmed() {
        let id = NetworkId::parse("  550e8400-e29b-41d4-a716-446655440000\n").unwrap();
        assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn test_uppercase_accepted_as_entered() {
        let id = NetworkId::parse("550E8400-E29B-41D4-A716-446655440000").unwrap();
        assert_eq!(id.into_string(), "550E8400-E29B-41D4-A716-446655440000");
    }

    #[test]
    fn test_missing_network_id() {
        assert_eq!(NetworkId::parse(""), Err(ValidationError::MissingNetworkId));
        assert_eq!(
            NetworkId::parse("   \t"),
            Err(ValidationError::MissingNetworkId)
        );
    }

    #[test]
    fn test_malformed_network_id() {
        for input in [
            "not-a-uuid",
            "550e8400e29b41d4a716446655440000",
            "{550e8400-e29b-41d4-a716-446655440000}",
            "urn:uuid:550e8400-e29b-41d4-a716-446655440000",
            "550e8400-e29b-41d4-a716-44665544000g",
            "550e8400-e29b-41d4a-716-446655440000",
        ] {
            assert!(
                matches!(
                    NetworkId::parse(input),
                    Err(ValidationError::MalformedNetworkId(_))
                ),
                "accepted {input}"
            );
        }
    }
}
