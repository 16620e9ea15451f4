//! Core data model shared by the player components.

use crate::colors;
use palette::Srgb;

/// A selectable sound effect: the label shown on screen and the asset it plays.
///
/// Entries are created once from a static catalog and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TrackEntry {
    /// Text drawn in the track's label.
    pub display_name: &'static str,

    /// Identifier handed to the audio engine, e.g. a file name on the storage volume.
    pub asset_id: &'static str,
}

impl TrackEntry {
    /// Creates a new track entry.
    #[inline]
    pub const fn new(display_name: &'static str, asset_id: &'static str) -> Self {
        Self {
            display_name,
            asset_id,
        }
    }
}

/// Playback state of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlaybackState {
    /// Constructed but not yet forced into silence. Left on the first stop.
    Init,

    /// Nothing playing. The stick moves the selection.
    Stopped,

    /// The selected track is playing and the chase animation runs.
    Playing,

    /// Reserved. No transition enters this state.
    Paused,
}

impl PlaybackState {
    /// Short status text for the display.
    pub const fn label(self) -> &'static str {
        match self {
            PlaybackState::Init => "INIT",
            PlaybackState::Stopped => "STOP",
            PlaybackState::Playing => "PLAY",
            PlaybackState::Paused => "PAUSE",
        }
    }
}

impl core::fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Discrete direction read from the selection axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Stick pushed toward the top of the list.
    Up,

    /// Stick pushed toward the bottom of the list.
    Down,

    /// Stick inside the dead zone.
    Neutral,
}

impl Direction {
    /// Signed value of the direction: `Up = +1`, `Down = -1`, `Neutral = 0`.
    #[inline]
    pub const fn delta(self) -> i8 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
            Direction::Neutral => 0,
        }
    }

    /// Returns true for `Up` and `Down`.
    #[inline]
    pub const fn is_deflected(self) -> bool {
        !matches!(self, Direction::Neutral)
    }
}

/// How a track label is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Highlight {
    /// Plain label, no background.
    None,

    /// Selected and ready to play.
    Ready,

    /// Selected and currently playing.
    Active,
}

impl Highlight {
    /// Foreground color of the label text.
    pub const fn foreground(self) -> Srgb {
        match self {
            Highlight::None => colors::LABEL_IDLE,
            Highlight::Ready | Highlight::Active => colors::LABEL_HIGHLIGHTED,
        }
    }

    /// Background color of the label, `None` when no background is drawn.
    pub const fn background(self) -> Option<Srgb> {
        match self {
            Highlight::None => None,
            Highlight::Ready => Some(colors::READY_BACKGROUND),
            Highlight::Active => Some(colors::ACTIVE_BACKGROUND),
        }
    }
}

/// A press or release edge reported by the button scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyEvent {
    /// The key with this number went down.
    Pressed(u8),

    /// The key with this number went up.
    Released(u8),
}

impl KeyEvent {
    /// Number of the key that produced the edge.
    #[inline]
    pub const fn key(self) -> u8 {
        match self {
            KeyEvent::Pressed(key) | KeyEvent::Released(key) => key,
        }
    }

    /// Returns true for press edges.
    #[inline]
    pub const fn is_press(self) -> bool {
        matches!(self, KeyEvent::Pressed(_))
    }
}
