#![no_std]

pub mod axis;
pub mod brightness;
pub mod config;
pub mod control;
pub mod cursor;
pub mod error;
pub mod flags;
pub mod framebuffer;
pub mod input;
pub mod output;
pub mod sampler;
pub mod scene;
pub mod toggle;

pub use axis::{AxisCalibration, AxisReading, Deflection};
pub use brightness::{BrightnessPair, map_brightness};
pub use config::{CursorConfig, DisplayBus, MAX_RAW, PanelConfig, PwmTiming};
pub use control::{ControlLoop, CycleReport, PanelParts};
pub use cursor::{Cursor, CursorPosition, move_cursor};
pub use error::Error;
pub use flags::{ModeFlags, ModeSnapshot};
pub use framebuffer::FrameBuffer;
pub use input::{Button, EdgeRouter, ToggleController, ToggleEffect};
pub use output::LedOutputs;
pub use sampler::{AnalogInput, JoystickSampler};
pub use scene::{BorderStyle, SceneRenderer};
pub use toggle::DebouncedToggle;

pub use embassy_time::{Duration, Instant};

/// One PWM driven output
///
/// Implement this trait to support different hardware platforms.
/// Period and clock divider are fixed when the implementation is built.
pub trait PwmChannel {
    /// Set the compare level, `0..=MAX_RAW`
    fn set_level(&mut self, level: u16);

    /// Start or stop the slice counter
    fn set_enabled(&mut self, enabled: bool);
}

/// Monochrome display that shows whole frames
///
/// Implement this trait to support different hardware platforms.
pub trait DisplaySink {
    /// Send the complete frame to the panel
    fn flush(&mut self, frame: &FrameBuffer) -> Result<(), Error>;
}
