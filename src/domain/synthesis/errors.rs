//! Synthesis Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SynthesisError {
    #[error("text must be between 1 and 5000 characters, got {0}")]
    InvalidTextLength(usize),

    #[error("speed must be between 0.5 and 2.0, got {0}")]
    SpeedOutOfRange(f64),

    #[error("pitch must be between 0.5 and 2.0, got {0}")]
    PitchOutOfRange(f64),
}
