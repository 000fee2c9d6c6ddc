//! Rotating color runs
//!
//! Each input color is expanded to a run of three repeated entries; the
//! expanded sequence marches one position along the strip per step.

use super::Animation;
use crate::color::Rgb;
use crate::sink::{PixelSink, SinkError};

const RUN_LENGTH: usize = 3;

pub struct RotationAnimation {
    expanded: Vec<Rgb>,
    step: usize,
}

impl RotationAnimation {
    /// Create a new rotation animation. `colors` must be non-empty.
    pub fn new(colors: &[Rgb]) -> Self {
        debug_assert!(!colors.is_empty());
        let expanded = colors
            .iter()
            .flat_map(|&color| [color; RUN_LENGTH])
            .collect();
        Self { expanded, step: 0 }
    }
}

impl Animation for RotationAnimation {
    fn step(&mut self, strip: &mut dyn PixelSink) -> Result<(), SinkError> {
        for index in 0..strip.len() {
            strip.set(index, self.expanded[(self.step + index) % self.expanded.len()])?;
        }
        self.step += 1;
        Ok(())
    }
}
