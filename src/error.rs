//! Crate-level error type.

use std::io;

use thiserror::Error;

use crate::animation::AnimationKind;
use crate::sink::SinkError;

/// Fatal errors surfaced by the animation core.
///
/// Configuration problems are caught before any hardware I/O begins;
/// the remaining variants terminate the show, since there is no retry
/// or backoff anywhere in the core.
#[derive(Debug, Error)]
pub enum ShowError {
    #[error("unknown playlist `{0}`")]
    UnknownPlaylist(String),

    #[error("playlist `{0}` has no entries")]
    EmptyPlaylist(String),

    #[error("{kind} frame rate must be positive")]
    InvalidFrameRate { kind: AnimationKind },

    #[error("{kind} needs at least one color")]
    EmptyPalette { kind: AnimationKind },

    #[error("{kind} takes exactly two colors, got {got}")]
    PaletteSize { kind: AnimationKind, got: usize },

    #[error("{kind} requires an accelerometer, but none was provided")]
    MissingSensor { kind: AnimationKind },

    #[error("could not spawn the frame timeline")]
    SchedulerUnavailable(#[source] io::Error),

    #[error("frame timeline panicked")]
    TimelinePanicked,

    #[error(transparent)]
    Sink(#[from] SinkError),
}
