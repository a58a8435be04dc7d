//! Generation errors.
//!
//! Primitive failures are wrapped in one `Stage` layer per level of the
//! generation tree, so the rendered chain reads like
//! `failed to generate catalog: failed to generate node: failed to generate node meta: ...`.

use consul_data_core::ConfigError;
use std::fmt;

/// A step of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Kv,
    KvKey,
    KvValue,
    Catalog,
    Node,
    NodeName,
    NodeId,
    NodeAddress,
    NodeMeta,
    Service,
    ServiceName,
    Instance,
    InstanceAddress,
    InstanceMeta,
    MetaKey,
    MetaValue,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Kv => "KV data",
            Self::KvKey => "KV key",
            Self::KvValue => "KV value",
            Self::Catalog => "catalog data",
            Self::Node => "node",
            Self::NodeName => "node name",
            Self::NodeId => "node ID",
            Self::NodeAddress => "node address",
            Self::NodeMeta => "node meta",
            Self::Service => "service",
            Self::ServiceName => "service name",
            Self::Instance => "service instance",
            Self::InstanceAddress => "service instance address",
            Self::InstanceMeta => "service instance meta",
            Self::MetaKey => "meta key",
            Self::MetaValue => "meta value",
        };
        f.write_str(name)
    }
}

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Resolved configuration failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Pet name generator asked for zero words
    #[error("pet names need at least one segment")]
    NoSegments,

    /// Random payload generator with an empty or inverted size range
    #[error("invalid random payload size range: min {min}, max {max}")]
    InvalidPayloadSize { min: usize, max: usize },

    /// A nested generation step failed
    #[error("failed to generate {stage}")]
    Stage {
        stage: Stage,
        #[source]
        source: Box<GeneratorError>,
    },
}

impl GeneratorError {
    /// Wrap this error with the stage it occurred in.
    pub fn in_stage(self, stage: Stage) -> Self {
        Self::Stage {
            stage,
            source: Box::new(self),
        }
    }

    /// Stages from outermost to innermost.
    pub fn stages(&self) -> Vec<Stage> {
        let mut stages = Vec::new();
        let mut current = self;
        while let Self::Stage { stage, source } = current {
            stages.push(*stage);
            current = source;
        }
        stages
    }

    /// The primitive failure underneath all stage layers.
    pub fn root_cause(&self) -> &GeneratorError {
        match self {
            Self::Stage { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Attach a [`Stage`] to the error of a generation result.
pub trait StageExt<T> {
    fn stage(self, stage: Stage) -> Result<T, GeneratorError>;
}

impl<T> StageExt<T> for Result<T, GeneratorError> {
    fn stage(self, stage: Stage) -> Result<T, GeneratorError> {
        self.map_err(|e| e.in_stage(stage))
    }
}
