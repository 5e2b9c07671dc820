pub mod config;
pub mod error;
pub mod ids;
pub mod labels;
pub mod trust;
pub mod types;

pub use config::{Config, ConfigPaths, EnrichmentMode};
pub use error::TaimeterError;
pub use ids::{IdSource, IndicatorId, RandomIds, SequentialIds};
pub use labels::{Category, DataType, Granularity, SourceType, NO_COMPANY};
pub use trust::{SourceConfidence, TaiLevel};
pub use types::{IndicatorInput, Metadata, SemanticFields};
