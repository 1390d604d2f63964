//! Inspector error types.

use crate::undo::CommandError;

/// Errors raised by explicit inspector operations.
///
/// The per-frame refresh and event paths never return these; stale or missing
/// properties there are silent no-ops.
#[derive(Debug, thiserror::Error)]
pub enum InspectorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("No configuration directory available")]
    NoConfigDir,

    #[error(transparent)]
    Core(#[from] void_core::Error),

    #[error(transparent)]
    Command(#[from] CommandError),
}

pub type Result<T> = std::result::Result<T, InspectorError>;
