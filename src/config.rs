//! Compile-time defaults and the runtime player configuration.
//!
//! The defaults describe a handheld with a 16-bit analog stick, a four-key
//! shift-register button panel and a battery sensed through a 1:2 divider.

// Button panel

/// Key number of the B button.
pub const KEY_B: u8 = 0;

/// Key number of the A button. Starts and stops playback by default.
pub const KEY_A: u8 = 1;

/// Key number of the START button.
pub const KEY_START: u8 = 2;

/// Key number of the SELECT button.
pub const KEY_SELECT: u8 = 3;

// Selection stick (raw 16-bit samples)

/// Samples below this read as "up".
pub const AXIS_UP_BELOW: u16 = 20_000;

/// Samples above this read as "down".
pub const AXIS_DOWN_ABOVE: u16 = 44_000;

/// Resting position of the stick.
pub const AXIS_CENTER: u16 = 32_768;

// Timing

/// Pause between two chase animation steps (ms).
pub const FRAME_PACING_MS: u64 = 50;

/// Interval between battery samples (ms).
pub const TELEMETRY_INTERVAL_MS: u64 = 10_000;

// Battery gauge

/// Raw ADC value corresponding to the full-scale voltage.
pub const BATTERY_RAW_FULL_SCALE: u16 = 0xFFF0;

/// Battery voltage at the raw full-scale value (3.3 V reference behind a 1:2 divider).
pub const BATTERY_VOLTS_FULL_SCALE: f32 = 6.6;

/// Voltage reported as an empty battery.
pub const BATTERY_EMPTY_VOLTS: f32 = 3.1;

/// Voltage reported as a full battery.
pub const BATTERY_FULL_VOLTS: f32 = 3.6;

/// Highest gauge level (number of battery icon segments).
pub const BATTERY_MAX_LEVEL: u8 = 5;

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The "up" threshold is not below the "down" threshold.
    InvertedAxisThresholds,

    /// The battery window is empty or inverted.
    InvalidBatteryRange,

    /// Raw full scale is zero.
    ZeroFullScale,

    /// Telemetry interval is zero.
    ZeroTelemetryInterval,

    /// The light strip does not have the number of lights the player animates.
    LightCountMismatch {
        /// Lights the player was built for
        expected: usize,
        /// Lights the strip reports
        actual: usize,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvertedAxisThresholds => {
                write!(f, "axis up threshold must be below the down threshold")
            }
            ConfigError::InvalidBatteryRange => {
                write!(f, "battery empty voltage must be below the full voltage")
            }
            ConfigError::ZeroFullScale => {
                write!(f, "battery raw full scale must be non-zero")
            }
            ConfigError::ZeroTelemetryInterval => {
                write!(f, "telemetry interval must be non-zero")
            }
            ConfigError::LightCountMismatch { expected, actual } => {
                write!(f, "expected {} indicator lights, strip has {}", expected, actual)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Thresholds splitting the raw stick range into up, dead zone and down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisThresholds {
    /// Samples strictly below this are `Up`.
    pub up_below: u16,

    /// Samples strictly above this are `Down`.
    pub down_above: u16,
}

impl Default for AxisThresholds {
    fn default() -> Self {
        Self {
            up_below: AXIS_UP_BELOW,
            down_above: AXIS_DOWN_ABOVE,
        }
    }
}

/// Linear conversion from a raw battery sample to a gauge level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryGauge {
    /// Raw value that corresponds to `volts_full_scale`.
    pub raw_full_scale: u16,

    /// Voltage at `raw_full_scale`.
    pub volts_full_scale: f32,

    /// Voltage mapped to level 0.
    pub empty_volts: f32,

    /// Voltage mapped to `max_level`.
    pub full_volts: f32,

    /// Highest level.
    pub max_level: u8,
}

impl Default for BatteryGauge {
    fn default() -> Self {
        Self {
            raw_full_scale: BATTERY_RAW_FULL_SCALE,
            volts_full_scale: BATTERY_VOLTS_FULL_SCALE,
            empty_volts: BATTERY_EMPTY_VOLTS,
            full_volts: BATTERY_FULL_VOLTS,
            max_level: BATTERY_MAX_LEVEL,
        }
    }
}

/// Runtime configuration of a [`CuePlayer`](crate::CuePlayer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerConfig {
    /// Key that starts and stops playback.
    pub start_stop_key: u8,

    /// Stick classification thresholds.
    pub axis: AxisThresholds,

    /// Battery conversion.
    pub gauge: BatteryGauge,

    /// Pause after each chase step (ms).
    pub frame_pacing_ms: u64,

    /// Interval between battery samples (ms).
    pub telemetry_interval_ms: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start_stop_key: KEY_A,
            axis: AxisThresholds::default(),
            gauge: BatteryGauge::default(),
            frame_pacing_ms: FRAME_PACING_MS,
            telemetry_interval_ms: TELEMETRY_INTERVAL_MS,
        }
    }
}

impl PlayerConfig {
    /// Sets the start/stop key.
    pub fn with_start_stop_key(mut self, key: u8) -> Self {
        self.start_stop_key = key;
        self
    }

    /// Sets the stick thresholds.
    pub fn with_axis(mut self, axis: AxisThresholds) -> Self {
        self.axis = axis;
        self
    }

    /// Sets the battery gauge.
    pub fn with_gauge(mut self, gauge: BatteryGauge) -> Self {
        self.gauge = gauge;
        self
    }

    /// Sets the chase step pacing.
    pub fn with_frame_pacing_ms(mut self, millis: u64) -> Self {
        self.frame_pacing_ms = millis;
        self
    }

    /// Sets the battery sampling interval.
    pub fn with_telemetry_interval_ms(mut self, millis: u64) -> Self {
        self.telemetry_interval_ms = millis;
        self
    }

    /// Checks the configuration for inconsistent values.
    ///
    /// # Errors
    /// * `InvertedAxisThresholds` - `up_below` is not below `down_above`
    /// * `InvalidBatteryRange` - `empty_volts` is not below `full_volts`
    /// * `ZeroFullScale` - the gauge's raw full scale is zero
    /// * `ZeroTelemetryInterval` - the sampling interval is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.axis.up_below >= self.axis.down_above {
            return Err(ConfigError::InvertedAxisThresholds);
        }

        // Written so that NaN bounds are rejected as well.
        if !(self.gauge.empty_volts < self.gauge.full_volts) {
            return Err(ConfigError::InvalidBatteryRange);
        }

        if self.gauge.raw_full_scale == 0 {
            return Err(ConfigError::ZeroFullScale);
        }

        if self.telemetry_interval_ms == 0 {
            return Err(ConfigError::ZeroTelemetryInterval);
        }

        Ok(())
    }
}
