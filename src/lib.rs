#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`CuePlayer`**: The playback state machine; call `tick()` once per control loop iteration
//! - **`TrackCatalog`**: Fixed, ordered list of `TrackEntry` (label + asset id)
//! - **`PlaybackState`**: `Init`, `Stopped` or `Playing` (`Paused` is reserved)
//! - **`SelectionNavigator`**: Moves the selection from stick input, one step per deflection
//! - **`ChaseAnimator`**: Bright/dim sweep across the indicator lights while playing
//! - **`TelemetrySampler`**: Battery gauge sampled on a fixed cadence
//! - **`AudioEngine`**, **`IndicatorLights`**, **`TrackDisplay`**, **`AnalogInput`**: Traits to implement for your hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Colors are `Srgb<f32>` (0.0-1.0 range). When implementing `IndicatorLights`
//! or `TrackDisplay`, convert them to your device's native format, e.g. with
//! [`colors::to_rgb24`].

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

#[macro_use]
mod fmt;

pub mod animator;
pub mod catalog;
pub mod colors;
pub mod config;
pub mod hardware;
pub mod input;
pub mod navigator;
pub mod player;
pub mod telemetry;
pub mod time;
pub mod types;

pub use animator::{ChaseAnimator, FlashPhase};
pub use catalog::{CatalogBuilder, CatalogError, TrackCatalog};
pub use config::{AxisThresholds, BatteryGauge, ConfigError, PlayerConfig};
pub use hardware::{AnalogInput, AudioEngine, IndicatorLights, TrackDisplay};
pub use input::{HoldLatch, PressEdgeDetector, StartStopButton};
pub use navigator::{SelectionMove, SelectionNavigator};
pub use player::{
    CuePlayer, FrameInput, FrameTiming, Peripherals, PlayerError, StopCause, TickReport,
    Transition,
};
pub use telemetry::TelemetrySampler;
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{Direction, Highlight, KeyEvent, PlaybackState, TrackEntry};
