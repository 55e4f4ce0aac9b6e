//! Voice Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum VoiceError {
    #[error("Invalid audio file. Supported formats: WAV, MP3, OGG, FLAC")]
    UnsupportedContentType(Option<String>),

    #[error("Invalid voice name: {0}")]
    InvalidName(&'static str),

    #[error("Invalid voice description: {0}")]
    InvalidDescription(&'static str),

    #[error("Invalid language code: {0}")]
    InvalidLanguage(&'static str),
}
