//! Color type, named palettes and small channel helpers.

use smart_leds::RGB8;

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const ORANGE: Rgb = Rgb::new(255, 165, 0);
pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);
pub const INDIGO: Rgb = Rgb::new(75, 0, 130);

/// Six-step rainbow palette.
pub const RAINBOW: [Rgb; 6] = [RED, ORANGE, YELLOW, GREEN, BLUE, INDIGO];

/// Warm six-color sunset palette.
pub const SUNSET: [Rgb; 6] = [
    Rgb::new(209, 54, 68),
    Rgb::new(239, 180, 110),
    Rgb::new(254, 255, 238),
    Rgb::new(73, 178, 161),
    Rgb::new(53, 85, 108),
    Rgb::new(93, 81, 215),
];

/// Blue-white-red flag palette.
pub const TRICOLOR: [Rgb; 3] = [
    Rgb::new(239, 65, 53),
    Rgb::new(255, 255, 255),
    Rgb::new(0, 85, 164),
];

/// Move `current` one unit toward `target`, saturating at equality.
///
/// This is the gradient ramp primitive: repeated application reaches
/// `target` in exactly `|current - target|` calls and never overshoots.
pub const fn approach(current: u8, target: u8) -> u8 {
    if current < target {
        current + 1
    } else if current > target {
        current - 1
    } else {
        current
    }
}

/// Map `ratio` into the span between two channel values.
///
/// The result is `min(low, high) + |low - high| * ratio`, truncated and
/// clamped to the channel range. `ratio` may fall outside `0.0..=1.0`
/// (the adaptive-range animation produces such ratios while its observed
/// range is still settling).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale_between(low: u8, high: u8, ratio: f32) -> u8 {
    let base = f32::from(low.min(high));
    let span = f32::from(low.abs_diff(high));
    (base + span * ratio).clamp(0.0, 255.0) as u8
}
