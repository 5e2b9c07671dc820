//! Deterministic rule engine: text-heuristic classifiers, metadata
//! assembly, and the TAI scoring engine.
//!
//! Everything here is pure and synchronous. The classifiers are ordered
//! rule tables with mandatory terminal defaults; ties between overlapping
//! keyword sets are resolved solely by table order. The scoring engine is
//! total over structurally valid records and keeps no state between
//! calls, so each invocation on an edited snapshot is independent.

mod assemble;
pub mod keywords;
pub mod rules;
mod score;

pub use assemble::Assembler;
pub use rules::category::classify_categories;
pub use rules::confidence::classify_confidence;
pub use rules::granularity::classify_granularity;
pub use rules::source_type::classify_source_type;
pub use score::{score, Dimensions, TaiScore};
