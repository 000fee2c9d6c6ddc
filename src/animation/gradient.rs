//! Gradient interpolation
//!
//! Fills the whole strip with one color that ramps between consecutive
//! palette entries. Every step moves each channel by exactly one unit
//! toward the target, so a transition takes `max(|dr|, |dg|, |db|)`
//! steps and larger channel deltas take proportionally longer.

use super::Animation;
use crate::color::{Rgb, approach};
use crate::sink::{PixelSink, SinkError};

pub struct GradientAnimation {
    colors: Vec<Rgb>,
    /// Index of the palette entry the current ramp started from.
    position: usize,
    current: Rgb,
}

impl GradientAnimation {
    /// Create a new gradient animation. `colors` must be non-empty.
    pub fn new(colors: Vec<Rgb>) -> Self {
        debug_assert!(!colors.is_empty());
        let current = colors[0];
        Self {
            colors,
            position: 0,
            current,
        }
    }
}

impl Animation for GradientAnimation {
    fn step(&mut self, strip: &mut dyn PixelSink) -> Result<(), SinkError> {
        let target = self.colors[(self.position + 1) % self.colors.len()];

        self.current = Rgb::new(
            approach(self.current.r, target.r),
            approach(self.current.g, target.g),
            approach(self.current.b, target.b),
        );
        if self.current == target {
            self.position = (self.position + 1) % self.colors.len();
        }

        strip.fill(self.current)
    }
}
