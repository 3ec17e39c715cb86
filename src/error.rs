use thiserror::Error;

/// Failure to interpret a symbolic configuration name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown animation preset: {0:?}")]
    UnknownPreset(String),
    #[error("Unknown timing curve: {0:?}")]
    UnknownCurve(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;
