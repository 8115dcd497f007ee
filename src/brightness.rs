//! Joystick to LED intensity curve
//!
//! Flat zero inside the dead zone, then a linear ramp with a fixed
//! multiplier that saturates at `2 * (center - dead_zone)`.

use crate::axis::{AxisCalibration, AxisReading};

/// Slope of the ramp outside the dead zone
pub const BRIGHTNESS_MULTIPLIER: u16 = 2;

/// Map a raw axis reading to a PWM level.
///
/// Dead zone bounds are inclusive: `center ± dead_zone` still yields 0.
pub const fn map_brightness(reading: u16, calibration: &AxisCalibration) -> u16 {
    let offset = calibration.offset(reading);
    if offset <= calibration.dead_zone() {
        return 0;
    }

    let limit = calibration.center() - calibration.dead_zone();
    let mut diff = offset - calibration.dead_zone();
    if diff > limit {
        diff = limit;
    }
    diff * BRIGHTNESS_MULTIPLIER
}

/// Highest level [`map_brightness`] can return for a calibration
pub const fn max_brightness(calibration: &AxisCalibration) -> u16 {
    (calibration.center() - calibration.dead_zone()) * BRIGHTNESS_MULTIPLIER
}

/// Intensities of the two PWM driven LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BrightnessPair {
    /// Follows the X axis
    pub red: u16,
    /// Follows the Y axis
    pub blue: u16,
}

impl BrightnessPair {
    /// Both outputs dark
    pub const OFF: Self = Self { red: 0, blue: 0 };

    pub const fn from_reading(reading: &AxisReading, calibration: &AxisCalibration) -> Self {
        Self {
            red: map_brightness(reading.x, calibration),
            blue: map_brightness(reading.y, calibration),
        }
    }
}
