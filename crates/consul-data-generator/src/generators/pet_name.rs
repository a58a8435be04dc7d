//! Pet name generator.
//!
//! Names are built from the word lists in [`super::words`]:
//!
//! - 1 word: `name`
//! - 2 words: `adjective-name`
//! - N words: `(N - 2) adverbs`, then `adjective-name`

use super::words::{ADJECTIVES, ADVERBS, NAMES};
use crate::error::GeneratorError;
use consul_data_core::PetName;
use rand::Rng;

/// Generate a pet name.
pub fn generate_pet_name<R: Rng>(config: &PetName, rng: &mut R) -> Result<String, GeneratorError> {
    if config.segments == 0 {
        return Err(GeneratorError::NoSegments);
    }

    let mut words = Vec::with_capacity(config.segments);
    for _ in 2..config.segments {
        words.push(pick(ADVERBS, rng));
    }
    if config.segments > 1 {
        words.push(pick(ADJECTIVES, rng));
    }
    words.push(pick(NAMES, rng));

    Ok(format!("{}{}", config.prefix, words.join(&config.separator)))
}

fn pick<R: Rng>(words: &[&'static str], rng: &mut R) -> &'static str {
    words[rng.random_range(0..words.len())]
}
