//! Periodic battery sampling for the on-screen gauge.

use crate::config::BatteryGauge;
use crate::hardware::AnalogInput;
use crate::time::{TimeDuration, TimeInstant};

impl BatteryGauge {
    /// Converts a raw sample to volts, rounded to one decimal place.
    pub fn volts(&self, raw: u16) -> f32 {
        let volts = raw as f32 * self.volts_full_scale / self.raw_full_scale as f32;
        libm::roundf(volts * 10.0) / 10.0
    }

    /// Maps a voltage onto `0..=max_level`.
    ///
    /// The window `[empty_volts, full_volts]` is mapped linearly and the result
    /// truncated toward zero, so a level is only reached once the voltage
    /// fully covers it. Voltages outside the window clamp to the ends.
    ///
    /// Tenth-volt readings land exactly on step boundaries, so the result
    /// depends on float rounding. In `f32` the default window gives 3.2, 3.3,
    /// 3.4 and 3.5 V levels 1, 2, 3 and 4. The same map evaluated in `f64`
    /// falls just short of the boundary for 3.3, 3.4 and 3.5 V and truncates
    /// to 1, 2 and 3 instead. The window ends and 3.35 V agree in both.
    pub fn level_for_volts(&self, volts: f32) -> u8 {
        if !(volts > self.empty_volts) {
            return 0;
        }
        if volts >= self.full_volts {
            return self.max_level;
        }

        let span = self.full_volts - self.empty_volts;
        let scaled = (volts - self.empty_volts) * self.max_level as f32 / span;
        (scaled as u8).min(self.max_level)
    }

    /// Converts a raw sample straight to a gauge level.
    pub fn level(&self, raw: u16) -> u8 {
        self.level_for_volts(self.volts(raw))
    }
}

/// Samples the battery on a fixed cadence and keeps the last reading.
///
/// The cadence is measured from the previous sample, so a late poll delays the
/// following samples instead of firing twice.
///
/// # Type Parameters
/// * `I` - Time instant type
#[derive(Debug, Clone)]
pub struct TelemetrySampler<I: TimeInstant> {
    gauge: BatteryGauge,
    interval: I::Duration,
    last_sample: Option<I>,
    level: Option<u8>,
    volts: Option<f32>,
}

impl<I: TimeInstant> TelemetrySampler<I> {
    /// Creates a sampler that has not taken a sample yet.
    pub fn new(gauge: BatteryGauge, interval: I::Duration) -> Self {
        Self {
            gauge,
            interval,
            last_sample: None,
            level: None,
            volts: None,
        }
    }

    /// Returns true if no sample was taken yet or the interval has elapsed.
    pub fn is_due(&self, now: I) -> bool {
        match self.last_sample {
            None => true,
            Some(last) => now.duration_since(last).as_millis() >= self.interval.as_millis(),
        }
    }

    /// Samples the sensor if a sample is due.
    ///
    /// # Returns
    /// * `Some(level)` - A new sample was taken
    /// * `None` - Not due yet; the previous level stands
    pub fn poll<S: AnalogInput>(&mut self, now: I, sensor: &mut S) -> Option<u8> {
        if !self.is_due(now) {
            return None;
        }
        Some(self.sample(now, sensor))
    }

    /// Samples the sensor unconditionally and restarts the interval.
    pub fn sample<S: AnalogInput>(&mut self, now: I, sensor: &mut S) -> u8 {
        let volts = self.gauge.volts(sensor.read());
        let level = self.gauge.level_for_volts(volts);

        self.last_sample = Some(now);
        self.volts = Some(volts);
        self.level = Some(level);
        level
    }

    /// Level from the most recent sample.
    pub fn level(&self) -> Option<u8> {
        self.level
    }

    /// Rounded voltage from the most recent sample.
    pub fn volts(&self) -> Option<f32> {
        self.volts
    }

    /// The gauge used for conversion.
    pub fn gauge(&self) -> &BatteryGauge {
        &self.gauge
    }
}
