//! External input abstractions: the advance button and the accelerometer.
//!
//! Both reads are non-blocking, side-effect-free queries. A failed read
//! surfaces as `None` and is consumed by the core as a momentary
//! `false`/`0` reading rather than propagated: one stalled frame is
//! preferable to a crashed show.

/// Accelerometer axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Edge-triggered boolean input, typically a GPIO pin with a push button.
pub trait ButtonSource {
    /// Current pin level, `None` when the read failed.
    fn read(&mut self) -> Option<bool>;
}

/// 3-axis accelerometer reading.
pub trait SensorSource: Send + Sync {
    /// Latest reading for one axis, `None` when the read failed.
    fn read_axis(&self, axis: Axis) -> Option<i32>;
}
