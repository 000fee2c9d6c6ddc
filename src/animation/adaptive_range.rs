//! Adaptive-range sensor mapping
//!
//! Blends between a low and a high color based on one accelerometer
//! axis. The observed minimum and maximum readings widen over time, so
//! the visual mapping self-calibrates to the actual motion range
//! instead of a fixed constant.

use std::sync::Arc;

use log::debug;

use super::Animation;
use crate::color::{Rgb, scale_between};
use crate::input::{Axis, SensorSource};
use crate::sink::{PixelSink, SinkError};

pub struct AdaptiveRangeAnimation {
    low: Rgb,
    high: Rgb,
    axis: Axis,
    sensor: Arc<dyn SensorSource>,
    min: i32,
    max: i32,
}

impl AdaptiveRangeAnimation {
    pub fn new(low: Rgb, high: Rgb, axis: Axis, sensor: Arc<dyn SensorSource>) -> Self {
        Self {
            low,
            high,
            axis,
            sensor,
            min: 0,
            max: 0,
        }
    }
}

impl Animation for AdaptiveRangeAnimation {
    #[allow(clippy::cast_precision_loss)]
    fn step(&mut self, strip: &mut dyn PixelSink) -> Result<(), SinkError> {
        // A failed read degrades to a momentary zero instead of killing
        // the frame loop.
        let reading = self.sensor.read_axis(self.axis).unwrap_or_else(|| {
            debug!("sensor read failed, substituting 0");
            0
        });

        self.min = self.min.min(reading);
        self.max = self.max.max(reading);

        // First reading sees the trivial [0, 0] range; force the
        // denominator to 1 rather than divide by zero.
        let range = match self.max - self.min {
            0 => 1,
            span => span,
        };
        let ratio = reading as f32 / range as f32;

        strip.fill(Rgb::new(
            scale_between(self.low.r, self.high.r, ratio),
            scale_between(self.low.g, self.high.g, ratio),
            scale_between(self.low.b, self.high.b, ratio),
        ))
    }
}
