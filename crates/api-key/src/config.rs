//! Format of generated API key values.

/// Prefix used by the key manager for every key value.
pub const DEFAULT_PREFIX: &str = "LP-";

/// Number of random hex characters after the prefix.
pub const DEFAULT_HEX_LEN: usize = 12;

/// Shape of a key value: a fixed prefix followed by lowercase hex digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFormat {
    /// Literal tag in front of the random part (e.g., "LP-" produces "LP-0a1b...").
    pub prefix: String,
    /// Length of the random lowercase hex part.
    pub hex_len: usize,
}

impl Default for KeyFormat {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            hex_len: DEFAULT_HEX_LEN,
        }
    }
}

impl KeyFormat {
    /// Create a new format with the given prefix and the default length.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            hex_len: DEFAULT_HEX_LEN,
        }
    }

    /// Set the length of the random hex part.
    pub fn with_hex_len(mut self, hex_len: usize) -> Self {
        self.hex_len = hex_len;
        self
    }

    /// Total length of a key value in this format.
    pub fn key_len(&self) -> usize {
        self.prefix.len() + self.hex_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format() {
        let format = KeyFormat::default();
        assert_eq!(format.prefix, "LP-");
        assert_eq!(format.hex_len, 12);
        assert_eq!(format.key_len(), 15);
    }

    #[test]
    fn test_builder_pattern() {
        let format = KeyFormat::new("demo_").with_hex_len(20);
        assert_eq!(format.prefix, "demo_");
        assert_eq!(format.hex_len, 20);
        assert_eq!(format.key_len(), 25);
    }
}
