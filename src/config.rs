//! Compile-time parameters of the panel.
//!
//! Nothing here is read at runtime from storage; the firmware and the preview
//! both start from [`PanelConfig::DEFAULT`].

use embassy_time::Duration;

use crate::axis::AxisCalibration;

/// Largest raw value produced by the 12-bit converter
pub const MAX_RAW: u16 = 4095;

/// PWM slice timing, fixed at initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmTiming {
    /// Counter wrap value (period in ticks)
    pub period: u16,
    /// Integer clock divider applied to the system clock
    pub divider: u8,
}

impl PwmTiming {
    pub const DEFAULT: Self = Self {
        period: 4096,
        divider: 16,
    };
}

/// Geometry of the cursor square on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CursorConfig {
    /// Distance moved per loop iteration on a deflected axis
    pub step: i16,
    /// Side of the square in pixels
    pub square_size: i16,
    /// Display width in pixels
    pub width: i16,
    /// Display height in pixels
    pub height: i16,
}

impl CursorConfig {
    pub const DEFAULT: Self = Self {
        step: 8,
        square_size: 8,
        width: crate::framebuffer::WIDTH as i16,
        height: crate::framebuffer::HEIGHT as i16,
    };

    /// Smallest coordinate the square may take on either axis
    pub const fn min_coordinate(&self) -> i16 {
        1
    }

    /// Largest x coordinate that keeps the square off the right edge
    pub const fn max_x(&self) -> i16 {
        self.width - self.square_size - 1
    }

    /// Largest y coordinate that keeps the square off the bottom edge
    pub const fn max_y(&self) -> i16 {
        self.height - self.square_size - 1
    }
}

/// Two-wire bus parameters of the display controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayBus {
    pub frequency_hz: u32,
    /// 7-bit device address
    pub address: u8,
}

impl DisplayBus {
    pub const DEFAULT: Self = Self {
        frequency_hz: 400_000,
        address: 0x3C,
    };
}

/// Configuration for the whole panel
#[derive(Debug, Clone, Copy)]
pub struct PanelConfig {
    pub calibration: AxisCalibration,
    pub cursor: CursorConfig,
    pub pwm: PwmTiming,
    pub display: DisplayBus,
    /// Minimum spacing between two honored presses of the same button
    pub debounce: Duration,
    /// Sleep between superloop iterations
    pub loop_interval: Duration,
    /// Settle time after switching the converter to another channel
    pub settle_delay_us: u32,
}

impl PanelConfig {
    pub const DEFAULT: Self = Self {
        calibration: AxisCalibration::DEFAULT,
        cursor: CursorConfig::DEFAULT,
        pwm: PwmTiming::DEFAULT,
        display: DisplayBus::DEFAULT,
        debounce: Duration::from_millis(200),
        loop_interval: Duration::from_millis(100),
        settle_delay_us: 2,
    };
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
