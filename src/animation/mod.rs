//! Animation system with compile-time known variants
//!
//! All animations are stored in an enum, so the scheduler and sequencer
//! hold an opaque slot and never branch on variant identity. Each
//! animation implements the [`Animation`] trait and owns its progress
//! state; the state is discarded on every switch.

mod adaptive_range;
mod gradient;
mod rotation;
mod segment_stripe;
mod stepped_palette;

use std::fmt;
use std::sync::Arc;

pub use adaptive_range::AdaptiveRangeAnimation;
pub use gradient::GradientAnimation;
pub use rotation::RotationAnimation;
pub use segment_stripe::SegmentStripeAnimation;
pub use stepped_palette::SteppedPaletteAnimation;

use crate::color::Rgb;
use crate::error::ShowError;
use crate::input::{Axis, SensorSource};
use crate::sink::{PixelSink, SinkError};

const KIND_NAME_STEPPED_PALETTE: &str = "stepped_palette";
const KIND_NAME_SEGMENT_STRIPE: &str = "segment_stripe";
const KIND_NAME_ROTATION: &str = "rotation";
const KIND_NAME_GRADIENT: &str = "gradient";
const KIND_NAME_ADAPTIVE_RANGE: &str = "adaptive_range";

pub trait Animation {
    /// Advance by one step, writing the next frame into `strip`.
    ///
    /// Must complete in bounded, small time: it runs on a fixed-rate
    /// timeline and may perform at most one non-blocking sensor read.
    fn step(&mut self, strip: &mut dyn PixelSink) -> Result<(), SinkError>;
}

/// Known animation kinds that a playlist entry can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    SteppedPalette,
    SegmentStripe,
    Rotation,
    Gradient,
    AdaptiveRange,
}

/// Animation slot - enum containing all possible animations
pub enum AnimationSlot {
    /// Whole-strip fill cycling through a palette
    SteppedPalette(SteppedPaletteAnimation),
    /// Contiguous equal segments, one per color
    SegmentStripe(SegmentStripeAnimation),
    /// Tripled color runs marching along the strip
    Rotation(RotationAnimation),
    /// Per-channel linear ramp between consecutive palette colors
    Gradient(GradientAnimation),
    /// Accelerometer-driven blend between a low and a high color
    AdaptiveRange(AdaptiveRangeAnimation),
}

impl AnimationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SteppedPalette => KIND_NAME_STEPPED_PALETTE,
            Self::SegmentStripe => KIND_NAME_SEGMENT_STRIPE,
            Self::Rotation => KIND_NAME_ROTATION,
            Self::Gradient => KIND_NAME_GRADIENT,
            Self::AdaptiveRange => KIND_NAME_ADAPTIVE_RANGE,
        }
    }

    /// Check that a color list is acceptable for this kind.
    pub fn check_colors(self, got: usize) -> Result<(), ShowError> {
        match self {
            Self::AdaptiveRange => {
                if got != 2 {
                    return Err(ShowError::PaletteSize { kind: self, got });
                }
            }
            _ => {
                if got == 0 {
                    return Err(ShowError::EmptyPalette { kind: self });
                }
            }
        }
        Ok(())
    }

    /// Build a fresh animation instance for this kind.
    ///
    /// Every activation starts from scratch: no counter, interpolation
    /// progress or observed sensor range survives a switch.
    pub fn to_slot(
        self,
        colors: &[Rgb],
        sensor: Option<&Arc<dyn SensorSource>>,
    ) -> Result<AnimationSlot, ShowError> {
        self.check_colors(colors.len())?;
        Ok(match self {
            Self::SteppedPalette => {
                AnimationSlot::SteppedPalette(SteppedPaletteAnimation::new(colors.to_vec()))
            }
            Self::SegmentStripe => {
                AnimationSlot::SegmentStripe(SegmentStripeAnimation::new(colors.to_vec()))
            }
            Self::Rotation => AnimationSlot::Rotation(RotationAnimation::new(colors)),
            Self::Gradient => AnimationSlot::Gradient(GradientAnimation::new(colors.to_vec())),
            Self::AdaptiveRange => {
                let sensor = sensor.ok_or(ShowError::MissingSensor { kind: self })?;
                AnimationSlot::AdaptiveRange(AdaptiveRangeAnimation::new(
                    colors[0],
                    colors[1],
                    Axis::Y,
                    Arc::clone(sensor),
                ))
            }
        })
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AnimationSlot {
    /// Advance the current animation by one step
    pub fn step(&mut self, strip: &mut dyn PixelSink) -> Result<(), SinkError> {
        match self {
            Self::SteppedPalette(animation) => animation.step(strip),
            Self::SegmentStripe(animation) => animation.step(strip),
            Self::Rotation(animation) => animation.step(strip),
            Self::Gradient(animation) => animation.step(strip),
            Self::AdaptiveRange(animation) => animation.step(strip),
        }
    }

    /// Get the animation kind for external observation
    pub fn kind(&self) -> AnimationKind {
        match self {
            Self::SteppedPalette(_) => AnimationKind::SteppedPalette,
            Self::SegmentStripe(_) => AnimationKind::SegmentStripe,
            Self::Rotation(_) => AnimationKind::Rotation,
            Self::Gradient(_) => AnimationKind::Gradient,
            Self::AdaptiveRange(_) => AnimationKind::AdaptiveRange,
        }
    }
}
