//! Key value parsing.

use crate::config::KeyFormat;
use crate::error::{ApiKeyError, Result};

/// Components of a well-formed key value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    random: String,
}

impl ParsedKey {
    /// The lowercase hex part after the prefix.
    pub fn random(&self) -> &str {
        &self.random
    }
}

/// Parse a key value, checking it against the expected format.
///
/// # Arguments
/// * `key` - The full key value (e.g., "LP-0123456789ab")
/// * `format` - The format the key is expected to follow
///
/// # Returns
/// * `ParsedKey` holding the random part
/// * Error if the prefix or the random part doesn't match
pub fn parse(key: &str, format: &KeyFormat) -> Result<ParsedKey> {
    let Some(random) = key.strip_prefix(format.prefix.as_str()) else {
        let got: String = key.chars().take(format.prefix.chars().count()).collect();
        return Err(ApiKeyError::InvalidPrefix {
            expected: format.prefix.clone(),
            got,
        });
    };

    if random.len() != format.hex_len {
        return Err(ApiKeyError::InvalidFormat);
    }

    // Generated keys are always lowercase
    if !random
        .bytes()
        .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    {
        return Err(ApiKeyError::InvalidFormat);
    }

    Ok(ParsedKey {
        random: random.to_string(),
    })
}
