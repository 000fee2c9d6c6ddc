//! Playlist configuration
//!
//! A playlist is an ordered list of animation configs cycled by the
//! sequencer. Configs are created at startup, validated once and never
//! mutated afterwards.

use crate::animation::AnimationKind;
use crate::color::{self, Rgb};
use crate::error::ShowError;

/// One playlist entry: which animation to run, at what rate, with which
/// colors.
#[derive(Debug, Clone)]
pub struct AnimationConfig {
    pub kind: AnimationKind,
    /// Frames per second, must be positive.
    pub fps: u32,
    pub colors: Vec<Rgb>,
}

impl AnimationConfig {
    pub fn new(kind: AnimationKind, fps: u32, colors: impl Into<Vec<Rgb>>) -> Self {
        Self {
            kind,
            fps,
            colors: colors.into(),
        }
    }

    fn validate(&self) -> Result<(), ShowError> {
        if self.fps == 0 {
            return Err(ShowError::InvalidFrameRate { kind: self.kind });
        }
        self.kind.check_colors(self.colors.len())
    }
}

/// Named, ordered sequence of animation configs.
#[derive(Debug, Clone)]
pub struct Playlist {
    name: String,
    entries: Vec<AnimationConfig>,
}

impl Playlist {
    /// Create a playlist, rejecting empty or invalid entries up front.
    pub fn new(
        name: impl Into<String>,
        entries: Vec<AnimationConfig>,
    ) -> Result<Self, ShowError> {
        let name = name.into();
        if entries.is_empty() {
            return Err(ShowError::EmptyPlaylist(name));
        }
        for entry in &entries {
            entry.validate()?;
        }
        Ok(Self { name, entries })
    }

    /// Look up one of the built-in playlists by name.
    pub fn builtin(name: &str) -> Result<Self, ShowError> {
        let entries = match name {
            "room" => room_entries(),
            "skate" => skate_entries(),
            _ => return Err(ShowError::UnknownPlaylist(name.to_owned())),
        };
        Self::new(name, entries)
    }

    /// Names accepted by [`Playlist::builtin`].
    pub const fn builtin_names() -> [&'static str; 2] {
        ["room", "skate"]
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[AnimationConfig] {
        &self.entries
    }
}

/// Calm playlist for a room strip: off, slow sunset gradient, plain white.
fn room_entries() -> Vec<AnimationConfig> {
    vec![
        AnimationConfig::new(AnimationKind::SegmentStripe, 1, [color::BLACK]),
        AnimationConfig::new(AnimationKind::Gradient, 12, color::SUNSET),
        AnimationConfig::new(AnimationKind::SegmentStripe, 1, [color::WHITE]),
    ]
}

/// Full playlist for a skateboard strip, ending in the motion-reactive
/// animation.
fn skate_entries() -> Vec<AnimationConfig> {
    vec![
        AnimationConfig::new(AnimationKind::SegmentStripe, 1, [color::BLACK]),
        AnimationConfig::new(AnimationKind::Gradient, 200, color::SUNSET),
        AnimationConfig::new(AnimationKind::SegmentStripe, 1, [color::WHITE]),
        AnimationConfig::new(AnimationKind::SteppedPalette, 4, color::SUNSET),
        AnimationConfig::new(AnimationKind::SteppedPalette, 3, color::TRICOLOR),
        AnimationConfig::new(
            AnimationKind::SegmentStripe,
            1,
            [color::RED, color::GREEN, color::GREEN, color::RED],
        ),
        AnimationConfig::new(AnimationKind::Rotation, 24, color::RAINBOW),
        AnimationConfig::new(AnimationKind::AdaptiveRange, 200, [color::RED, color::GREEN]),
    ]
}
