//! Key value generation.

use rand::RngCore;

use crate::config::KeyFormat;

/// Generate a new key value in the given format.
///
/// The random part is drawn from `rng` and hex-encoded in lowercase. The
/// generator makes no uniqueness guarantee; callers holding a collection of
/// keys must check for collisions themselves.
pub fn generate<R: RngCore + ?Sized>(format: &KeyFormat, rng: &mut R) -> String {
    // Two hex characters per byte, trimmed back for odd lengths
    let mut bytes = vec![0u8; format.hex_len.div_ceil(2)];
    rng.fill_bytes(&mut bytes);

    let mut random = hex::encode(&bytes);
    random.truncate(format.hex_len);

    format!("{}{}", format.prefix, random)
}
