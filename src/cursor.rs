use embedded_graphics::prelude::Point;

use crate::axis::{AxisCalibration, AxisReading, Deflection};
use crate::config::CursorConfig;

/// Top-left corner of the square on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CursorPosition {
    pub x: i16,
    pub y: i16,
}

impl CursorPosition {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Position that centers the square on the display
    pub const fn centered(config: &CursorConfig) -> Self {
        Self {
            x: (config.width - config.square_size) / 2,
            y: (config.height - config.square_size) / 2,
        }
    }

    /// Clamp so the square never touches the display edge
    pub fn clamped(self, config: &CursorConfig) -> Self {
        let min = config.min_coordinate();
        Self {
            x: self.x.clamp(min, config.max_x()),
            y: self.y.clamp(min, config.max_y()),
        }
    }

    pub fn to_point(self) -> Point {
        Point::new(i32::from(self.x), i32::from(self.y))
    }
}

/// Move the cursor one step per deflected axis.
///
/// X moves right when the reading is above center. Y is inverted: a reading
/// above center moves the square up, towards smaller row numbers.
pub fn move_cursor(
    pos: CursorPosition,
    reading: &AxisReading,
    calibration: &AxisCalibration,
    config: &CursorConfig,
) -> CursorPosition {
    let dx = match calibration.deflection(reading.x) {
        Deflection::Negative => -config.step,
        Deflection::Neutral => 0,
        Deflection::Positive => config.step,
    };
    let dy = match calibration.deflection(reading.y) {
        Deflection::Negative => config.step,
        Deflection::Neutral => 0,
        Deflection::Positive => -config.step,
    };

    CursorPosition {
        x: pos.x.saturating_add(dx),
        y: pos.y.saturating_add(dy),
    }
    .clamped(config)
}

/// Accumulated cursor state across loop iterations
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    position: CursorPosition,
    calibration: AxisCalibration,
    config: CursorConfig,
}

impl Cursor {
    /// Create a cursor in the middle of the display
    pub fn new(calibration: AxisCalibration, config: CursorConfig) -> Self {
        Self::with_position(CursorPosition::centered(&config), calibration, config)
    }

    pub fn with_position(
        position: CursorPosition,
        calibration: AxisCalibration,
        config: CursorConfig,
    ) -> Self {
        Self {
            position: position.clamped(&config),
            calibration,
            config,
        }
    }

    pub const fn position(&self) -> CursorPosition {
        self.position
    }

    pub const fn config(&self) -> &CursorConfig {
        &self.config
    }

    /// Apply one reading and return the new position
    pub fn update(&mut self, reading: &AxisReading) -> CursorPosition {
        self.position = move_cursor(self.position, reading, &self.calibration, &self.config);
        self.position
    }
}
