//! Input adaptation: stick classification, hold latching and button edges.

use crate::config::AxisThresholds;
use crate::types::{Direction, KeyEvent};

impl AxisThresholds {
    /// Classifies a raw stick sample.
    ///
    /// Values below `up_below` are `Up`, values above `down_above` are `Down`,
    /// anything in between is the dead zone.
    #[inline]
    pub fn classify(&self, raw: u16) -> Direction {
        if raw < self.up_below {
            Direction::Up
        } else if raw > self.down_above {
            Direction::Down
        } else {
            Direction::Neutral
        }
    }
}

/// Suppresses auto-repeat on a held stick.
///
/// A deflection is reported once; further deflected samples are swallowed
/// until the stick returns to neutral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoldLatch {
    held: bool,
}

impl HoldLatch {
    /// Creates a released latch.
    pub const fn new() -> Self {
        Self { held: false }
    }

    /// Feeds one classified sample.
    ///
    /// Returns the direction if it is a fresh deflection, `None` while held or
    /// neutral.
    pub fn consume(&mut self, direction: Direction) -> Option<Direction> {
        if !direction.is_deflected() {
            self.held = false;
            return None;
        }

        if self.held {
            return None;
        }

        self.held = true;
        Some(direction)
    }

    /// Returns true while a deflection has been consumed and not yet released.
    pub fn is_held(&self) -> bool {
        self.held
    }
}

/// Filters key events down to press edges of one logical button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartStopButton {
    key: u8,
}

impl StartStopButton {
    /// Creates a filter for the given key number.
    pub const fn new(key: u8) -> Self {
        Self { key }
    }

    /// Returns true if the event is a press of this button.
    #[inline]
    pub fn pressed(&self, event: Option<KeyEvent>) -> bool {
        matches!(event, Some(KeyEvent::Pressed(key)) if key == self.key)
    }

    /// Key number this filter listens to.
    pub fn key(&self) -> u8 {
        self.key
    }
}

/// Turns a raw button level into debounced press and release edges.
///
/// Useful where no scanning keypad driver provides events. The first press is
/// always accepted; later ones only if at least `debounce_ms` passed since the
/// previous accepted press.
pub struct PressEdgeDetector {
    key: u8,
    pressed: bool,
    last_press_ms: Option<u32>,
    debounce_ms: u32,
}

impl PressEdgeDetector {
    /// Creates a detector reporting edges for `key`.
    ///
    /// # Arguments
    /// * `key` - Key number placed in the produced events
    /// * `debounce_ms` - Minimum time between accepted presses in milliseconds
    pub fn new(key: u8, debounce_ms: u32) -> Self {
        Self {
            key,
            pressed: false,
            last_press_ms: None,
            debounce_ms,
        }
    }

    /// Samples the button.
    ///
    /// # Arguments
    /// * `level_pressed` - Current level of the button (true if pressed)
    /// * `now_ms` - Current time in milliseconds, may wrap
    pub fn update(&mut self, level_pressed: bool, now_ms: u32) -> Option<KeyEvent> {
        if level_pressed && !self.pressed {
            let settled = match self.last_press_ms {
                Some(last) => now_ms.wrapping_sub(last) >= self.debounce_ms,
                None => true,
            };
            if settled {
                self.pressed = true;
                self.last_press_ms = Some(now_ms);
                return Some(KeyEvent::Pressed(self.key));
            }
        } else if !level_pressed && self.pressed {
            self.pressed = false;
            return Some(KeyEvent::Released(self.key));
        }
        None
    }
}
