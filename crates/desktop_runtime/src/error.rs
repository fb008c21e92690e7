//! Error types surfaced by the window manager.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors returned to launchers and hosts.
///
/// Operations that target a window id never fail: a stale id is ignored.
pub enum DesktopError {
    /// `open` was given an identifier that is not in the app catalog.
    #[error("unknown app type `{0}`")]
    UnknownAppType(String),
    /// Every window id has been issued once; ids are never reused.
    #[error("window ids exhausted")]
    WindowIdsExhausted,
    /// A shell configuration document failed validation.
    #[error("invalid shell config: {0}")]
    InvalidConfig(String),
}
