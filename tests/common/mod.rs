//! Shared test infrastructure for cue-player integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use cue_player::{
    AnalogInput, AudioEngine, CuePlayer, Highlight, IndicatorLights, Peripherals, PlayerConfig,
    TimeDuration, TimeInstant, TimeSource, TrackCatalog, TrackDisplay, TrackEntry,
};
use palette::Srgb;

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Audio Engine
// ============================================================================

/// Mock engine that records calls and can be scripted to finish a track
pub struct MockEngine {
    played: heapless::Vec<&'static str, 16>,
    stop_calls: u32,
    level: f32,
    playing: Cell<bool>,
    polls_until_finished: Cell<Option<u32>>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self {
            played: heapless::Vec::new(),
            stop_calls: 0,
            // Arbitrary power-on level so the first stop is observable
            level: 0.5,
            playing: Cell::new(false),
            polls_until_finished: Cell::new(None),
        }
    }

    /// Asset ids passed to `play`, in call order
    pub fn played(&self) -> &[&'static str] {
        &self.played
    }

    pub fn stop_calls(&self) -> u32 {
        self.stop_calls
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn playing(&self) -> bool {
        self.playing.get()
    }

    /// Report completion on the `polls`-th `is_playing` call from now
    pub fn finish_after_polls(&self, polls: u32) {
        self.polls_until_finished.set(Some(polls));
    }

    /// Report completion on the next `is_playing` call
    pub fn finish(&self) {
        self.playing.set(false);
        self.polls_until_finished.set(None);
    }
}

impl AudioEngine for MockEngine {
    fn play(&mut self, track: &TrackEntry) {
        let _ = self.played.push(track.asset_id);
        self.playing.set(true);
    }

    fn stop(&mut self) {
        self.stop_calls += 1;
        self.playing.set(false);
        self.polls_until_finished.set(None);
    }

    fn is_playing(&self) -> bool {
        if let Some(remaining) = self.polls_until_finished.get() {
            if remaining <= 1 {
                self.playing.set(false);
                self.polls_until_finished.set(None);
            } else {
                self.polls_until_finished.set(Some(remaining - 1));
            }
        }
        self.playing.get()
    }

    fn set_level(&mut self, level: f32) {
        self.level = level;
    }
}

// ============================================================================
// Mock Lights
// ============================================================================

pub const LIGHT_COUNT: usize = 5;

/// Storage for strips built with [`MockLights::with_len`]
pub const MAX_LIGHTS: usize = 8;

/// Mock light strip that keeps the last color of every light
#[derive(Debug, Clone, PartialEq)]
pub struct MockLights {
    colors: [Srgb; MAX_LIGHTS],
    len: usize,
}

impl MockLights {
    pub fn new() -> Self {
        Self::with_len(LIGHT_COUNT)
    }

    /// Strip reporting `len` lights (at most `MAX_LIGHTS`)
    pub fn with_len(len: usize) -> Self {
        Self {
            colors: [Srgb::new(0.0, 0.0, 0.0); MAX_LIGHTS],
            len: len.min(MAX_LIGHTS),
        }
    }

    pub fn colors(&self) -> &[Srgb] {
        &self.colors[..self.len]
    }

    pub fn color(&self, index: usize) -> Srgb {
        self.colors()[index]
    }

    pub fn all(&self, color: Srgb) -> bool {
        self.colors().iter().all(|c| colors_equal(*c, color))
    }
}

impl IndicatorLights for MockLights {
    fn len(&self) -> usize {
        self.len
    }

    fn set_color(&mut self, index: usize, color: Srgb) {
        if let Some(slot) = self.colors[..self.len].get_mut(index) {
            *slot = color;
        }
    }
}

// ============================================================================
// Mock Display
// ============================================================================

pub const MAX_LABELS: usize = 8;

/// Mock display that keeps the last highlight of every label
#[derive(Debug, Clone, PartialEq)]
pub struct MockDisplay {
    highlights: [Option<Highlight>; MAX_LABELS],
    status: heapless::String<8>,
    battery_level: Option<u8>,
    battery_updates: u32,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            highlights: [None; MAX_LABELS],
            status: heapless::String::new(),
            battery_level: None,
            battery_updates: 0,
        }
    }

    /// Last highlight drawn for a label, `None` if never drawn
    pub fn highlight(&self, index: usize) -> Option<Highlight> {
        self.highlights[index]
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn battery_level(&self) -> Option<u8> {
        self.battery_level
    }

    pub fn battery_updates(&self) -> u32 {
        self.battery_updates
    }
}

impl TrackDisplay for MockDisplay {
    fn set_highlight(&mut self, index: usize, highlight: Highlight) {
        self.highlights[index] = Some(highlight);
    }

    fn set_status(&mut self, text: &str) {
        self.status.clear();
        let _ = self.status.push_str(text);
    }

    fn set_battery_level(&mut self, level: u8) {
        self.battery_level = Some(level);
        self.battery_updates += 1;
    }
}

// ============================================================================
// Mock Battery
// ============================================================================

/// Raw sample reading as 3.6 V with the default gauge
pub const RAW_FULL_BATTERY: u16 = 35_738;

/// Raw sample reading as 3.3 V with the default gauge
pub const RAW_HALF_BATTERY: u16 = 33_256;

/// Mock battery input returning a settable raw value
pub struct MockBattery {
    pub raw: u16,
    reads: u32,
}

impl MockBattery {
    pub fn new(raw: u16) -> Self {
        Self { raw, reads: 0 }
    }

    pub fn reads(&self) -> u32 {
        self.reads
    }
}

impl AnalogInput for MockBattery {
    fn read(&mut self) -> u16 {
        self.reads += 1;
        self.raw
    }
}

// ============================================================================
// Player Fixtures
// ============================================================================

pub type TestPlayer<'t> = CuePlayer<
    't,
    TestInstant,
    MockTimeSource,
    MockEngine,
    MockLights,
    MockDisplay,
    MockBattery,
    4,
    LIGHT_COUNT,
>;

/// Stick samples
pub const STICK_UP: u16 = 0;
pub const STICK_DOWN: u16 = u16::MAX;

/// Catalog `[A, B, C, D]`
pub fn abcd_catalog() -> TrackCatalog<4> {
    TrackCatalog::builder()
        .track("A", "a.wav")
        .unwrap()
        .track("B", "b.wav")
        .unwrap()
        .track("C", "c.wav")
        .unwrap()
        .track("D", "d.wav")
        .unwrap()
        .build()
        .unwrap()
}

pub fn mock_peripherals() -> Peripherals<MockEngine, MockLights, MockDisplay, MockBattery> {
    Peripherals {
        engine: MockEngine::new(),
        lights: MockLights::new(),
        display: MockDisplay::new(),
        battery: MockBattery::new(RAW_FULL_BATTERY),
    }
}

/// Player over `[A, B, C, D]` with default config, still in `Init`
pub fn new_player(timer: &MockTimeSource) -> TestPlayer<'_> {
    CuePlayer::new(abcd_catalog(), mock_peripherals(), timer, PlayerConfig::default()).unwrap()
}

/// Player over `[A, B, C, D]` with default config, started
pub fn started_player(timer: &MockTimeSource) -> TestPlayer<'_> {
    let mut player = new_player(timer);
    player.start().unwrap();
    player
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}
