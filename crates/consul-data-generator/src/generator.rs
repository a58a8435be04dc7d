//! Aggregate data generator.

use crate::error::{GeneratorError, Stage, StageExt};
use crate::{catalog, kv};
use consul_data_core::{
    Catalog, CatalogGeneratorConfig, Config, Data, Kv, KvGeneratorConfig, ResolvedConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Data generator that produces deterministic KV and catalog data.
///
/// All generation draws from one seeded RNG in a fixed order, so the same
/// seed and configuration always produce the same artifact.
pub struct DataGenerator {
    /// Seed the RNG was created from
    seed: u64,
    /// Seeded random number generator for reproducibility
    rng: StdRng,
}

impl DataGenerator {
    /// Create a new data generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate KV entries, advancing the RNG.
    pub fn generate_kv(&mut self, config: &KvGeneratorConfig) -> Result<Kv, GeneratorError> {
        kv::generate(config, &mut self.rng)
    }

    /// Generate catalog nodes, advancing the RNG.
    pub fn generate_catalog(
        &mut self,
        config: &CatalogGeneratorConfig,
    ) -> Result<Catalog, GeneratorError> {
        catalog::generate(config, &mut self.rng)
    }

    /// Validate `config`, then generate KV data followed by catalog data.
    ///
    /// Nothing is returned unless both sections succeed.
    pub fn generate_all(&mut self, config: &ResolvedConfig) -> Result<Data, GeneratorError> {
        config.validate()?;

        info!(seed = self.seed, "Generating data");
        let kv = self.generate_kv(&config.kv).stage(Stage::Kv)?;
        let catalog = self.generate_catalog(&config.catalog).stage(Stage::Catalog)?;

        Ok(Data { kv, catalog })
    }
}

/// Resolve `config` and generate a full artifact from `seed`.
///
/// Both sections are resolved before anything is generated, so a bad catalog
/// setting fails the call without wasting a KV run.
pub fn generate_all(config: &Config, seed: u64) -> Result<Data, GeneratorError> {
    let resolved = config.resolve()?;
    DataGenerator::new(seed).generate_all(&resolved)
}
