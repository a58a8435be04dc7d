//! Random base64 payload generator.

use crate::error::GeneratorError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use consul_data_core::RandomB64;
use rand::Rng;

/// Generate `size` random bytes, `size` drawn from `[min_size, max_size)`, and
/// base64-encode them.
pub fn generate_random_b64<R: Rng>(
    config: &RandomB64,
    rng: &mut R,
) -> Result<String, GeneratorError> {
    let RandomB64 { min_size, max_size } = *config;
    if min_size < 1 || max_size < min_size {
        return Err(GeneratorError::InvalidPayloadSize {
            min: min_size,
            max: max_size,
        });
    }

    let size = if min_size < max_size {
        rng.random_range(min_size..max_size)
    } else {
        min_size
    };

    let mut raw = vec![0u8; size];
    rng.fill(raw.as_mut_slice());

    Ok(STANDARD.encode(&raw))
}
