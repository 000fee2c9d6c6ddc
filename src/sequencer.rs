//! Playlist sequencing
//!
//! The sequencer owns the authoritative cycle of animation configs. It
//! starts one animation on a background timeline, blocks on the button
//! for a rising edge, stops the timeline, debounces and starts the next
//! config, wrapping around forever.

use std::convert::Infallible;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::{debug, info};

use crate::config::Playlist;
use crate::error::ShowError;
use crate::input::{ButtonSource, SensorSource};
use crate::scheduler::FrameScheduler;
use crate::sink::PixelSink;

/// Pause after stopping an animation before polling the button again,
/// so electrical bounce from the press that triggered the switch does
/// not re-trigger it.
const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

pub struct Sequencer<B: ButtonSource> {
    playlist: Playlist,
    button: B,
    sensor: Option<Arc<dyn SensorSource>>,
    index: usize,
    debounce: Duration,
}

impl<B: ButtonSource> Sequencer<B> {
    /// Create a sequencer, validating the playlist against the available
    /// inputs before any hardware I/O begins.
    pub fn new(
        playlist: Playlist,
        button: B,
        sensor: Option<Arc<dyn SensorSource>>,
    ) -> Result<Self, ShowError> {
        for entry in playlist.entries() {
            // Building a throwaway slot runs every kind-specific check,
            // including sensor availability.
            entry.kind.to_slot(&entry.colors, sensor.as_ref())?;
            if entry.fps == 0 {
                return Err(ShowError::InvalidFrameRate { kind: entry.kind });
            }
        }
        Ok(Self {
            playlist,
            button,
            sensor,
            index: 0,
            debounce: DEFAULT_DEBOUNCE,
        })
    }

    /// Override the post-switch debounce interval.
    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Index of the config that the next cycle will run.
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Cycle animations for the process lifetime.
    ///
    /// Never returns under normal operation; the error is fatal.
    pub fn run_forever<S>(mut self, mut sink: S) -> Result<Infallible, ShowError>
    where
        S: PixelSink + Send + 'static,
    {
        info!(
            "running playlist `{}` ({} animations)",
            self.playlist.name(),
            self.playlist.entries().len()
        );
        loop {
            sink = self.run_cycle(sink)?;
        }
    }

    /// Run the current animation until the next button edge, then advance.
    ///
    /// Exposed separately so the switch protocol is testable; the sink is
    /// only handed back after the stopped timeline has fully exited.
    pub fn run_cycle<S>(&mut self, sink: S) -> Result<S, ShowError>
    where
        S: PixelSink + Send + 'static,
    {
        let entry = &self.playlist.entries()[self.index];
        info!("animation {}: {} at {} fps", self.index, entry.kind, entry.fps);

        let animation = entry.kind.to_slot(&entry.colors, self.sensor.as_ref())?;
        let handle = FrameScheduler::start(animation, sink, entry.fps)?;

        self.wait_for_edge();
        let sink = handle.stop()?;
        thread::sleep(self.debounce);

        self.index = (self.index + 1) % self.playlist.entries().len();
        Ok(sink)
    }

    /// Block until the button level transitions from low to high across
    /// consecutive polls.
    fn wait_for_edge(&mut self) {
        let mut previous = false;
        loop {
            // A failed GPIO read degrades to a momentary low level.
            let level = self.button.read().unwrap_or_else(|| {
                debug!("button read failed, substituting low");
                false
            });
            if level && !previous {
                return;
            }
            previous = level;
            // Busy poll, but give other timelines a chance to run.
            thread::yield_now();
        }
    }
}
