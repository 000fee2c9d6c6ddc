//! Segment striping
//!
//! Partitions the strip into one contiguous equal segment per color.
//! When the strip length is not divisible by the color count, the
//! remainder pixels extend the last segment so every pixel is painted
//! on every frame.

use super::Animation;
use crate::color::Rgb;
use crate::sink::{PixelSink, SinkError};

pub struct SegmentStripeAnimation {
    colors: Vec<Rgb>,
}

impl SegmentStripeAnimation {
    /// Create a new segment stripe animation. `colors` must be non-empty.
    pub fn new(colors: Vec<Rgb>) -> Self {
        debug_assert!(!colors.is_empty());
        Self { colors }
    }
}

impl Animation for SegmentStripeAnimation {
    fn step(&mut self, strip: &mut dyn PixelSink) -> Result<(), SinkError> {
        let len = strip.len();
        let per_segment = len / self.colors.len();

        for (segment, &color) in self.colors.iter().enumerate() {
            let start = segment * per_segment;
            let end = if segment == self.colors.len() - 1 {
                len
            } else {
                start + per_segment
            };
            for index in start..end {
                strip.set(index, color)?;
            }
        }

        Ok(())
    }
}
