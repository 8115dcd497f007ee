use core::fmt::Write;

use heapless::String;

use crate::config::MAX_RAW;

/// Direction of an axis relative to its neutral region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Deflection {
    /// Below `center - dead_zone`
    Negative,
    /// Inside the dead zone, bounds included
    Neutral,
    /// Above `center + dead_zone`
    Positive,
}

/// Neutral region of a joystick axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisCalibration {
    center: u16,
    dead_zone: u16,
}

impl AxisCalibration {
    pub const DEFAULT: Self = Self::new(2048, 200);

    /// Create a calibration.
    ///
    /// Panics unless `dead_zone < center < MAX_RAW - dead_zone`. Used in a
    /// `const` item the check fails the build instead.
    pub const fn new(center: u16, dead_zone: u16) -> Self {
        assert!(dead_zone < center, "dead zone must be smaller than center");
        assert!(
            dead_zone < MAX_RAW && center < MAX_RAW - dead_zone,
            "dead zone must fit above center"
        );
        Self { center, dead_zone }
    }

    pub const fn center(&self) -> u16 {
        self.center
    }

    pub const fn dead_zone(&self) -> u16 {
        self.dead_zone
    }

    /// Distance of a reading from center
    pub const fn offset(&self, reading: u16) -> u16 {
        reading.abs_diff(self.center)
    }

    /// Check whether a reading lies in `[center - dead_zone, center + dead_zone]`
    pub const fn in_dead_zone(&self, reading: u16) -> bool {
        self.offset(reading) <= self.dead_zone
    }

    /// Classify a reading against the neutral region
    pub const fn deflection(&self, reading: u16) -> Deflection {
        if self.in_dead_zone(reading) {
            Deflection::Neutral
        } else if reading < self.center {
            Deflection::Negative
        } else {
            Deflection::Positive
        }
    }
}

impl Default for AxisCalibration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Raw readings of both joystick axes taken in one sample cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisReading {
    pub x: u16,
    pub y: u16,
}

impl AxisReading {
    /// Create a reading, clamping both values to the converter range
    pub const fn new(x: u16, y: u16) -> Self {
        Self {
            x: clamp_raw(x),
            y: clamp_raw(y),
        }
    }

    /// Human readable diagnostic line, e.g. `X: 2048, Y: 1900`
    pub fn diagnostic_line(&self) -> String<32> {
        let mut line = String::new();
        // 32 bytes fit two 5-digit values with their labels
        let _ = write!(line, "X: {}, Y: {}", self.x, self.y);
        line
    }
}

const fn clamp_raw(value: u16) -> u16 {
    if value > MAX_RAW { MAX_RAW } else { value }
}
