//! Button-cycled LED strip animation engine.
//!
//! Drives an addressable LED strip through a playlist of animations:
//! each animation steps at a fixed rate on its own background timeline
//! while the sequencer blocks on a button; a rising edge stops the
//! running timeline and starts the next playlist entry, wrapping around
//! forever. Hardware stays behind three small traits ([`PixelSink`],
//! [`ButtonSource`], [`SensorSource`]), so the core is testable without
//! a strip attached.

pub mod animation;
pub mod color;
pub mod config;
pub mod error;
pub mod input;
pub mod scheduler;
pub mod sequencer;
pub mod sink;

pub use animation::{Animation, AnimationKind, AnimationSlot};
pub use config::{AnimationConfig, Playlist};
pub use error::ShowError;
pub use input::{Axis, ButtonSource, SensorSource};
pub use scheduler::{FrameScheduler, ScheduleHandle};
pub use sequencer::Sequencer;
pub use sink::{BufferSink, PixelSink, SinkError};

pub use color::Rgb;
