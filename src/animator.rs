//! Chase animation across the indicator lights during playback.
//!
//! Provides [`ChaseAnimator`], which sweeps a two-phase flash along a fixed
//! ring of lights one step per frame. The animator remembers each light's
//! phase itself instead of reading colors back from the driver.

use crate::colors;
use crate::hardware::IndicatorLights;

/// Flash phase of a single light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashPhase {
    /// Showing [`colors::CHASE_BRIGHT`].
    Bright,
    /// Showing [`colors::CHASE_DIM`].
    Dim,
}

impl FlashPhase {
    /// The other phase.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            FlashPhase::Bright => FlashPhase::Dim,
            FlashPhase::Dim => FlashPhase::Bright,
        }
    }
}

/// Sweeps a bright/dim flash around a ring of `LIGHTS` indicator lights.
///
/// # Type Parameters
/// * `LIGHTS` - Number of lights in the ring
#[derive(Debug, Clone)]
pub struct ChaseAnimator<const LIGHTS: usize> {
    phases: [FlashPhase; LIGHTS],
    cursor: usize,
}

impl<const LIGHTS: usize> ChaseAnimator<LIGHTS> {
    /// Creates an animator with the cursor at the first light.
    pub fn new() -> Self {
        Self {
            phases: [FlashPhase::Bright; LIGHTS],
            cursor: 0,
        }
    }

    /// Lights the whole ring in the bright chase color and rewinds the cursor.
    ///
    /// Call on every transition into playback.
    pub fn begin<L: IndicatorLights>(&mut self, lights: &mut L) {
        self.phases = [FlashPhase::Bright; LIGHTS];
        self.cursor = 0;
        lights.fill(colors::CHASE_BRIGHT);
    }

    /// Flips the light under the cursor to its other phase and advances the
    /// cursor, wrapping after the last light.
    pub fn step<L: IndicatorLights>(&mut self, lights: &mut L) {
        if LIGHTS == 0 {
            return;
        }

        let phase = self.phases[self.cursor].toggled();
        self.phases[self.cursor] = phase;

        let color = match phase {
            FlashPhase::Bright => colors::CHASE_BRIGHT,
            FlashPhase::Dim => colors::CHASE_DIM,
        };
        lights.set_color(self.cursor, color);

        self.cursor += 1;
        if self.cursor == LIGHTS {
            self.cursor = 0;
        }
    }

    /// Turns all lights off.
    pub fn reset<L: IndicatorLights>(&mut self, lights: &mut L) {
        lights.fill(colors::OFF);
    }

    /// Index of the light the next step flips.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current phase of the light at `index`.
    pub fn phase(&self, index: usize) -> Option<FlashPhase> {
        self.phases.get(index).copied()
    }
}

impl<const LIGHTS: usize> Default for ChaseAnimator<LIGHTS> {
    fn default() -> Self {
        Self::new()
    }
}
