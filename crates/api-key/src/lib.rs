//! Demo API key generation and validation.
//!
//! This crate provides functionality for:
//! - Generating display-only API key values from a non-cryptographic RNG
//! - Parsing key values to check they follow the expected format
//! - Validating the network identifier a key is issued for
//!
//! # Key Format
//!
//! Keys follow the format: `{prefix}{lowercase hex}`
//!
//! Example: `LP-3fa94c0e7b21`
//!
//! The keys carry no secret and are never verified against a server.
//!
//! # Example
//!
//! ```rust
//! use api_key::{KeyFormat, NetworkId, generate, parse};
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let network = NetworkId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
//! assert_eq!(network.as_str(), "550e8400-e29b-41d4-a716-446655440000");
//!
//! let format = KeyFormat::default();
//! let key = generate(&format, &mut SmallRng::seed_from_u64(7));
//! assert!(key.starts_with("LP-"));
//! assert!(parse(&key, &format).is_ok());
//! ```

mod config;
mod error;
mod network;
mod parse;
mod token;

// Public re-exports
pub use config::{DEFAULT_HEX_LEN, DEFAULT_PREFIX, KeyFormat};
pub use error::{ApiKeyError, Result, ValidationError};
pub use network::NetworkId;
pub use parse::{ParsedKey, parse};
pub use token::generate;
