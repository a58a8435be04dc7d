//! UUID generator for node IDs.

use super::ValueGenerator;
use crate::error::GeneratorError;
use rand::Rng;
use uuid::Uuid;

/// Random UUID v4 drawn from the run's RNG, rendered lowercase and hyphenated.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4;

impl ValueGenerator for UuidV4 {
    type Output = String;

    fn generate<R: Rng>(&self, rng: &mut R) -> Result<String, GeneratorError> {
        Ok(generate_uuid_v4(rng).hyphenated().to_string())
    }
}

/// Generate a random UUID v4 using the provided RNG.
pub fn generate_uuid_v4<R: Rng>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes)
}
