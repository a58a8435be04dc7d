//! Individual value generators.
//!
//! Each resolved generator from `consul_data_core` implements
//! [`ValueGenerator`]; the enums dispatch to the per-kind modules.

pub mod address;
pub mod pet_name;
pub mod random_b64;
pub mod uuid;
pub mod words;

use crate::error::GeneratorError;
use consul_data_core::{AddressGenerator, CountRange, StringGenerator};
use rand::Rng;
use std::net::Ipv4Addr;
use tracing::warn;

/// Number of rejected draws after which a uniqueness loop logs a warning.
pub const STALL_WARNING_ATTEMPTS: u64 = 10_000;

/// Trait for generating values.
pub trait ValueGenerator {
    type Output;

    /// Generate a value using the given RNG.
    fn generate<R: Rng>(&self, rng: &mut R) -> Result<Self::Output, GeneratorError>;
}

impl ValueGenerator for StringGenerator {
    type Output = String;

    fn generate<R: Rng>(&self, rng: &mut R) -> Result<String, GeneratorError> {
        match self {
            StringGenerator::PetName(config) => pet_name::generate_pet_name(config, rng),
            StringGenerator::RandomB64(config) => random_b64::generate_random_b64(config, rng),
        }
    }
}

impl ValueGenerator for AddressGenerator {
    type Output = Ipv4Addr;

    fn generate<R: Rng>(&self, rng: &mut R) -> Result<Ipv4Addr, GeneratorError> {
        match self {
            AddressGenerator::RandomTesting => Ok(address::generate_testing_ip(rng)),
        }
    }
}

/// Draw from `generator` until `is_taken` rejects nothing.
///
/// There is no attempt cap: a generator with fewer distinct outputs than the
/// caller needs will spin forever. A warning is logged once the loop passes
/// [`STALL_WARNING_ATTEMPTS`] so such a run can be diagnosed.
pub fn generate_unique<G, R, F>(
    generator: &G,
    rng: &mut R,
    mut is_taken: F,
) -> Result<G::Output, GeneratorError>
where
    G: ValueGenerator,
    R: Rng,
    F: FnMut(&G::Output) -> bool,
{
    let mut attempts: u64 = 0;
    loop {
        let value = generator.generate(rng)?;
        if !is_taken(&value) {
            return Ok(value);
        }

        attempts += 1;
        if attempts == STALL_WARNING_ATTEMPTS {
            warn!(
                attempts,
                "Still searching for an unused value; the generator may have fewer distinct outputs than requested"
            );
        }
    }
}

/// Sample a count from `[min, max)`, or exactly `min` when `min >= max`.
pub fn sample_count<R: Rng>(range: &CountRange, rng: &mut R) -> usize {
    if range.min < range.max {
        rng.random_range(range.min..range.max)
    } else {
        range.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use consul_data_core::{PetName, RandomB64};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_sample_count_half_open() {
        let mut rng = StdRng::seed_from_u64(42);
        let range = CountRange::new(2, 5);

        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let count = sample_count(&range, &mut rng);
            assert!((2..5).contains(&count));
            seen.insert(count);
        }
        assert_eq!(seen, HashSet::from([2, 3, 4]));
    }

    #[test]
    fn test_sample_count_degenerate() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(sample_count(&CountRange::exactly(3), &mut rng), 3);
        assert_eq!(sample_count(&CountRange { min: 7, max: 2 }, &mut rng), 7);
        assert_eq!(sample_count(&CountRange::exactly(0), &mut rng), 0);
    }

    #[test]
    fn test_generate_unique_skips_taken_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let generator = StringGenerator::PetName(PetName {
            prefix: String::new(),
            segments: 1,
            separator: "-".to_string(),
        });

        let mut taken = HashSet::new();
        for _ in 0..20 {
            let name = generate_unique(&generator, &mut rng, |v| taken.contains(v)).unwrap();
            assert!(taken.insert(name));
        }
    }

    #[test]
    fn test_generate_unique_propagates_errors() {
        let mut rng = StdRng::seed_from_u64(42);
        let generator = StringGenerator::RandomB64(RandomB64 {
            min_size: 0,
            max_size: 0,
        });

        let result = generate_unique(&generator, &mut rng, |_| false);
        assert!(matches!(
            result,
            Err(GeneratorError::InvalidPayloadSize { min: 0, max: 0 })
        ));
    }

    #[test]
    fn test_dispatch_is_deterministic() {
        let generator = StringGenerator::PetName(PetName {
            prefix: "n-".to_string(),
            segments: 3,
            separator: ".".to_string(),
        });

        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(
                generator.generate(&mut rng1).unwrap(),
                generator.generate(&mut rng2).unwrap()
            );
        }
    }
}
