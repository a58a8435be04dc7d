//! KV data generation.

use crate::error::{GeneratorError, Stage, StageExt};
use crate::generators::{generate_unique, ValueGenerator};
use consul_data_core::{Kv, KvGeneratorConfig, KvValue};
use rand::Rng;
use tracing::{debug, info};

/// Generate `config.num_entries` KV entries with unique keys.
///
/// Keys are drawn until an unused one comes up; the value generator runs once
/// per accepted key.
pub fn generate<R: Rng>(config: &KvGeneratorConfig, rng: &mut R) -> Result<Kv, GeneratorError> {
    let mut data = Kv::new();

    for i in 0..config.num_entries {
        let key = generate_unique(&config.key, rng, |key| data.contains_key(key))
            .stage(Stage::KvKey)?;
        let value = config.value.generate(rng).stage(Stage::KvValue)?;

        data.insert(key, KvValue::new(value));

        if (i + 1) % 10_000 == 0 {
            debug!("Generated {} KV entries", i + 1);
        }
    }

    info!("Generated {} KV entries", data.len());
    Ok(data)
}
