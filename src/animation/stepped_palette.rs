//! Stepped palette fill
//!
//! Fills the whole strip with one palette color per step, cycling
//! through the palette in order.

use super::Animation;
use crate::color::Rgb;
use crate::sink::{PixelSink, SinkError};

pub struct SteppedPaletteAnimation {
    palette: Vec<Rgb>,
    step: usize,
}

impl SteppedPaletteAnimation {
    /// Create a new stepped palette animation. `palette` must be non-empty.
    pub fn new(palette: Vec<Rgb>) -> Self {
        debug_assert!(!palette.is_empty());
        Self { palette, step: 0 }
    }
}

impl Animation for SteppedPaletteAnimation {
    fn step(&mut self, strip: &mut dyn PixelSink) -> Result<(), SinkError> {
        strip.fill(self.palette[self.step % self.palette.len()])?;
        self.step += 1;
        Ok(())
    }
}
