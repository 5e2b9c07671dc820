pub mod category;
pub mod confidence;
pub mod granularity;
pub mod source_type;
