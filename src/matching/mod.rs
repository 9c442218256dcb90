pub mod batch;
pub mod domain;
pub mod experience;
pub mod growth;
pub mod pipeline;
pub mod preferences;
pub mod scoring;
pub mod skills;
pub mod weights;

pub use batch::BatchOptions;
pub use experience::ExperienceConfig;
pub use growth::{AdjacencyPolicy, SkillFamilyPolicy};
pub use pipeline::{MatchConfig, MatchEngine, MatchOutcome, PostingFailure};
pub use scoring::{Dimension, DimensionScore, MatchResult};
pub use weights::{Weights, DEFAULT_WEIGHTS};
