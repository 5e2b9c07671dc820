use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaimeterError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("enrichment failed: {0}")]
    Enrichment(String),
}
