use bevy::input::keyboard::KeyCode;
use thiserror::Error;

/// Errors surfaced by the editor
#[derive(Debug, Error, PartialEq)]
pub enum EditorError {
    /// A tile image failed to load; fatal to startup
    #[error("could not load image '{key}' from {path}: {reason}")]
    AssetLoad {
        key: &'static str,
        path: &'static str,
        reason: String,
    },

    /// A key outside the watched set was queried
    #[error("key {0:?} is not being listened to")]
    UnwatchedKey(KeyCode),
}
