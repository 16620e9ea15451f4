//! Traits for the hardware the player drives.
//!
//! Implement these for your board's audio mixer, LED strip, display and ADC.
//! The player never blocks on any of them.

use crate::types::{Highlight, TrackEntry};
use palette::Srgb;

/// Mixer level used while a track plays.
pub const LEVEL_FULL: f32 = 1.0;

/// Mixer level used while stopped.
pub const LEVEL_SILENT: f32 = 0.0;

/// Trait for abstracting the audio output pipeline.
///
/// Playback runs on the engine's own execution context (DMA, interrupt or
/// another task). The player only starts, stops and polls it.
pub trait AudioEngine {
    /// Starts playing the track's asset and returns immediately.
    fn play(&mut self, track: &TrackEntry);

    /// Stops playback. Must be safe to call when nothing is playing.
    fn stop(&mut self);

    /// Returns true while the last started asset is still producing output.
    fn is_playing(&self) -> bool;

    /// Sets the output level, 0.0-1.0.
    fn set_level(&mut self, level: f32);
}

/// Trait for abstracting an addressable strip of indicator lights.
pub trait IndicatorLights {
    /// Number of lights in the strip.
    fn len(&self) -> usize;

    /// Sets one light. Out-of-range indices should be ignored.
    ///
    /// Color components are in the range 0.0-1.0. Convert them to the strip's
    /// native format (e.g. with [`to_rgb24`](crate::colors::to_rgb24)) and
    /// handle driver errors internally.
    fn set_color(&mut self, index: usize, color: Srgb);

    /// Sets every light to the same color.
    fn fill(&mut self, color: Srgb) {
        for index in 0..self.len() {
            self.set_color(index, color);
        }
    }

    /// Returns true for a strip without lights.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Trait for abstracting the screen showing track labels and status.
pub trait TrackDisplay {
    /// Redraws the label of the track at `index` with the given highlight.
    fn set_highlight(&mut self, index: usize, highlight: Highlight);

    /// Shows the status text, e.g. the current state label.
    fn set_status(&mut self, text: &str);

    /// Selects the battery icon for `level`.
    fn set_battery_level(&mut self, level: u8);
}

/// Trait for abstracting a single analog input channel.
pub trait AnalogInput {
    /// Reads one raw sample.
    fn read(&mut self) -> u16;
}
