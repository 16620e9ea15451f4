//! Playback state machine tying inputs, audio engine and feedback together.
//!
//! Provides [`CuePlayer`], which owns the playback state, the selected track
//! and the animation/telemetry helpers. Call [`CuePlayer::tick`] once per
//! control loop iteration with the freshly polled inputs; it advances the state
//! machine in constant time, drives the display and lights, and tells the
//! caller how long to wait before the next frame.

use crate::animator::ChaseAnimator;
use crate::catalog::TrackCatalog;
use crate::colors;
use crate::config::{AXIS_CENTER, ConfigError, PlayerConfig};
use crate::hardware::{
    AnalogInput, AudioEngine, IndicatorLights, LEVEL_FULL, LEVEL_SILENT, TrackDisplay,
};
use crate::input::StartStopButton;
use crate::navigator::{SelectionMove, SelectionNavigator};
use crate::telemetry::TelemetrySampler;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{Highlight, KeyEvent, PlaybackState, TrackEntry};

/// Inputs polled at the start of one control loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInput {
    /// Next event from the button scanner, if any.
    pub key: Option<KeyEvent>,

    /// Raw sample of the selection stick axis.
    pub axis: u16,
}

impl FrameInput {
    /// Creates a frame input.
    pub const fn new(key: Option<KeyEvent>, axis: u16) -> Self {
        Self { key, axis }
    }

    /// No key event and the stick centered.
    pub const fn neutral() -> Self {
        Self::new(None, AXIS_CENTER)
    }

    /// A press of `key` with the stick centered.
    pub const fn press(key: u8) -> Self {
        Self::new(Some(KeyEvent::Pressed(key)), AXIS_CENTER)
    }

    /// No key event and the given stick sample.
    pub const fn axis(axis: u16) -> Self {
        Self::new(None, axis)
    }
}

/// Why playback stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopCause {
    /// The start/stop button was pressed.
    Requested,
    /// The audio engine finished the track on its own.
    Finished,
}

/// A change of playback state during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Playback of the track at `index` started.
    Started {
        /// Catalog index of the started track.
        index: usize,
    },
    /// Playback of the track at `index` stopped.
    Stopped {
        /// Catalog index of the stopped track.
        index: usize,
        /// What ended playback.
        cause: StopCause,
    },
}

/// When the next frame should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameTiming<D> {
    /// Poll again right away.
    Continuous,

    /// An animation step was drawn. Wait this long before the next tick to
    /// pace the chase.
    Delay(D),
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport<D> {
    /// State change, if any.
    pub transition: Option<Transition>,

    /// Selection change, if any.
    pub selection: Option<SelectionMove>,

    /// New battery level if a sample was taken.
    pub battery_level: Option<u8>,

    /// Pacing for the next tick.
    pub timing: FrameTiming<D>,
}

impl<D> TickReport<D> {
    fn idle() -> Self {
        Self {
            transition: None,
            selection: None,
            battery_level: None,
            timing: FrameTiming::Continuous,
        }
    }
}

/// Errors that can occur during player operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlayerError {
    /// Operation called from an invalid state.
    InvalidState {
        /// Human-readable description of expected state(s)
        expected: &'static str,
        /// The actual current state
        actual: PlaybackState,
    },
}

impl core::fmt::Display for PlayerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlayerError::InvalidState { expected, actual } => {
                write!(
                    f,
                    "invalid state: expected {}, but player is in {:?}",
                    expected, actual
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlayerError {}

/// The hardware a player drives.
pub struct Peripherals<E, L, D, B> {
    /// Audio output.
    pub engine: E,
    /// Indicator light strip.
    pub lights: L,
    /// Track list and status screen.
    pub display: D,
    /// Battery voltage input.
    pub battery: B,
}

/// Controls sound-effect playback from a button and a stick.
///
/// The player is single-threaded and owns all of its state. Playback itself
/// runs on the audio engine's own context; the player only polls
/// [`AudioEngine::is_playing`] and never waits for completion.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `E` - Audio engine implementation type
/// * `L` - Indicator lights implementation type
/// * `D` - Display implementation type
/// * `B` - Battery input implementation type
/// * `N` - Maximum number of tracks in the catalog
/// * `LIGHTS` - Number of lights in the chase ring
pub struct CuePlayer<'t, I, T, E, L, D, B, const N: usize, const LIGHTS: usize>
where
    I: TimeInstant,
    T: TimeSource<I>,
    E: AudioEngine,
    L: IndicatorLights,
    D: TrackDisplay,
    B: AnalogInput,
{
    catalog: TrackCatalog<N>,
    peripherals: Peripherals<E, L, D, B>,
    time_source: &'t T,
    config: PlayerConfig,
    state: PlaybackState,
    button: StartStopButton,
    navigator: SelectionNavigator,
    animator: ChaseAnimator<LIGHTS>,
    telemetry: TelemetrySampler<I>,
}

impl<'t, I, T, E, L, D, B, const N: usize, const LIGHTS: usize>
    CuePlayer<'t, I, T, E, L, D, B, N, LIGHTS>
where
    I: TimeInstant,
    T: TimeSource<I>,
    E: AudioEngine,
    L: IndicatorLights,
    D: TrackDisplay,
    B: AnalogInput,
{
    /// Creates a player in the `Init` state.
    ///
    /// Draws every label unhighlighted, shows the `INIT` status and puts the
    /// lights in their power-on color. Nothing is silenced yet; call
    /// [`start`](Self::start) before the first [`tick`](Self::tick).
    ///
    /// # Errors
    /// Returns the first inconsistency found in `config`, or
    /// `LightCountMismatch` if the strip does not have exactly `LIGHTS` lights.
    pub fn new(
        catalog: TrackCatalog<N>,
        mut peripherals: Peripherals<E, L, D, B>,
        time_source: &'t T,
        config: PlayerConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if peripherals.lights.len() != LIGHTS {
            return Err(ConfigError::LightCountMismatch {
                expected: LIGHTS,
                actual: peripherals.lights.len(),
            });
        }

        for index in 0..catalog.len() {
            peripherals.display.set_highlight(index, Highlight::None);
        }
        peripherals.display.set_status(PlaybackState::Init.label());
        peripherals.lights.fill(colors::POWER_ON);
        info!("STATE: {}", PlaybackState::Init);

        let interval = I::Duration::from_millis(config.telemetry_interval_ms);

        Ok(Self {
            navigator: SelectionNavigator::new(catalog.len()),
            catalog,
            peripherals,
            time_source,
            button: StartStopButton::new(config.start_stop_key),
            telemetry: TelemetrySampler::new(config.gauge, interval),
            config,
            state: PlaybackState::Init,
            animator: ChaseAnimator::new(),
        })
    }

    /// Forces the clean stopped baseline and takes the first battery sample.
    ///
    /// Must be called from `Init` state.
    pub fn start(&mut self) -> Result<(), PlayerError> {
        if self.state != PlaybackState::Init {
            return Err(PlayerError::InvalidState {
                expected: "Init",
                actual: self.state,
            });
        }

        self.stop();

        let now = self.time_source.now();
        let level = self
            .telemetry
            .sample(now, &mut self.peripherals.battery);
        self.peripherals.display.set_battery_level(level);
        Ok(())
    }

    /// Runs one control loop iteration.
    ///
    /// While stopped, the stick moves the selection and a start/stop press
    /// starts the selected track. While playing, a press stops playback, the
    /// engine finishing stops it as well, and otherwise the chase advances one
    /// step. A press is checked before completion, so an explicit stop wins a
    /// race with the track ending in the same frame. At most one state change
    /// happens per tick.
    ///
    /// Must be called from `Stopped` or `Playing` state.
    pub fn tick(
        &mut self,
        input: FrameInput,
    ) -> Result<TickReport<I::Duration>, PlayerError> {
        if !matches!(self.state, PlaybackState::Stopped | PlaybackState::Playing) {
            return Err(PlayerError::InvalidState {
                expected: "Stopped or Playing",
                actual: self.state,
            });
        }

        let mut report = TickReport::idle();

        let now = self.time_source.now();
        if let Some(level) = self.telemetry.poll(now, &mut self.peripherals.battery) {
            debug!("battery level {}", level);
            self.peripherals.display.set_battery_level(level);
            report.battery_level = Some(level);
        }

        if self.state == PlaybackState::Stopped {
            self.tick_stopped(input, &mut report);
        } else {
            self.tick_playing(input, &mut report);
        }

        Ok(report)
    }

    fn tick_stopped(&mut self, input: FrameInput, report: &mut TickReport<I::Duration>) {
        let direction = self.config.axis.classify(input.axis);
        if let Some(moved) = self.navigator.navigate(direction) {
            self.peripherals
                .display
                .set_highlight(moved.from, Highlight::None);
            debug!("selected track {}", moved.to);
            report.selection = Some(moved);
        }

        // Redrawn every frame; idempotent.
        self.peripherals
            .display
            .set_highlight(self.navigator.selected(), Highlight::Ready);

        if self.button.pressed(input.key) {
            report.transition = self.play().map(|index| Transition::Started { index });
        }
    }

    fn tick_playing(&mut self, input: FrameInput, report: &mut TickReport<I::Duration>) {
        let index = self.navigator.selected();

        if self.button.pressed(input.key) {
            self.stop();
            report.transition = Some(Transition::Stopped {
                index,
                cause: StopCause::Requested,
            });
            return;
        }

        if !self.peripherals.engine.is_playing() {
            self.stop();
            report.transition = Some(Transition::Stopped {
                index,
                cause: StopCause::Finished,
            });
            return;
        }

        self.animator.step(&mut self.peripherals.lights);
        report.timing =
            FrameTiming::Delay(I::Duration::from_millis(self.config.frame_pacing_ms));
    }

    /// Starts the selected track. Returns its index.
    fn play(&mut self) -> Option<usize> {
        let index = self.navigator.selected();
        let track = *self.catalog.get(index)?;

        self.state = PlaybackState::Playing;
        self.peripherals.engine.set_level(LEVEL_FULL);
        self.peripherals.engine.play(&track);
        self.peripherals
            .display
            .set_highlight(index, Highlight::Active);
        self.animator.begin(&mut self.peripherals.lights);
        self.peripherals.display.set_status(self.state.label());
        info!("STATE: {} ({=str})", self.state, track.display_name);

        Some(index)
    }

    /// Stops playback and returns to the stopped baseline.
    ///
    /// Silences the engine, marks the selected label ready, turns the lights
    /// off and shows the `STOP` status. Safe to call from any state and any
    /// number of times; repeated calls leave the same visible state.
    pub fn stop(&mut self) {
        self.peripherals.engine.stop();
        self.peripherals.engine.set_level(LEVEL_SILENT);

        self.state = PlaybackState::Stopped;
        self.peripherals
            .display
            .set_highlight(self.navigator.selected(), Highlight::Ready);
        self.animator.reset(&mut self.peripherals.lights);
        self.peripherals.display.set_status(self.state.label());
        info!("STATE: {}", self.state);
    }

    /// Returns the current playback state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Returns the index of the selected track.
    pub fn selected(&self) -> usize {
        self.navigator.selected()
    }

    /// Returns the selected track.
    pub fn selected_track(&self) -> Option<&TrackEntry> {
        self.catalog.get(self.navigator.selected())
    }

    /// Returns true if a track is playing.
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Returns the track catalog.
    pub fn catalog(&self) -> &TrackCatalog<N> {
        &self.catalog
    }

    /// Returns the configuration the player was built with.
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Returns the chase animator.
    pub fn animator(&self) -> &ChaseAnimator<LIGHTS> {
        &self.animator
    }

    /// Level from the most recent battery sample.
    pub fn battery_level(&self) -> Option<u8> {
        self.telemetry.level()
    }

    /// Rounded voltage from the most recent battery sample.
    pub fn battery_volts(&self) -> Option<f32> {
        self.telemetry.volts()
    }

    /// Returns the driven hardware.
    pub fn peripherals(&self) -> &Peripherals<E, L, D, B> {
        &self.peripherals
    }

    /// Returns the driven hardware mutably.
    pub fn peripherals_mut(&mut self) -> &mut Peripherals<E, L, D, B> {
        &mut self.peripherals
    }

    /// Consumes the player and hands the hardware back.
    pub fn into_peripherals(self) -> Peripherals<E, L, D, B> {
        self.peripherals
    }
}
