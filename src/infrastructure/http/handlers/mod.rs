//! HTTP Handlers

mod audio;
mod service;
mod synthesis;
mod voice;

pub use audio::*;
pub use service::*;
pub use synthesis::*;
pub use voice::*;
