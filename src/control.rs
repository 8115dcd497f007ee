//! Superloop step.
//!
//! Portable, without async or platform timers: the caller sleeps for
//! [`CycleReport::sleep_duration`] between ticks.
//!
//! # Usage
//!
//! ```ignore
//! let mut panel = ControlLoop::new(parts, &flags, &PanelConfig::DEFAULT);
//!
//! loop {
//!     let report = panel.tick()?;
//!     log_line(report.reading.diagnostic_line());
//!     sleep(report.sleep_duration);
//! }
//! ```

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

#[cfg(feature = "defmt")]
use defmt::trace;

use crate::axis::{AxisCalibration, AxisReading};
use crate::brightness::BrightnessPair;
use crate::config::PanelConfig;
use crate::cursor::{Cursor, CursorPosition};
use crate::error::Error;
use crate::flags::ModeFlags;
use crate::framebuffer::FrameBuffer;
use crate::output::LedOutputs;
use crate::sampler::{AnalogInput, JoystickSampler};
use crate::scene::{BorderStyle, SceneRenderer};
use crate::{DisplaySink, PwmChannel};

/// Hardware the control loop drives
pub struct PanelParts<A, D, R, B, S> {
    pub adc: A,
    pub delay: D,
    pub red: R,
    pub blue: B,
    pub display: S,
}

/// Result of one superloop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    pub reading: AxisReading,
    /// Levels written to the PWM outputs
    pub levels: BrightnessPair,
    pub outputs_enabled: bool,
    pub cursor: CursorPosition,
    pub border: BorderStyle,
    /// How long to wait before the next tick
    pub sleep_duration: Duration,
}

pub struct ControlLoop<'a, A, D, R, B, S> {
    // External dependencies and configuration
    sampler: JoystickSampler<A, D>,
    outputs: LedOutputs<R, B>,
    display: S,
    flags: &'a ModeFlags,
    calibration: AxisCalibration,
    interval: Duration,

    // Internal state
    cursor: Cursor,
    scene: SceneRenderer,
    frame: FrameBuffer,
}

impl<'a, A, D, R, B, S> ControlLoop<'a, A, D, R, B, S>
where
    A: AnalogInput,
    D: DelayNs,
    R: PwmChannel,
    B: PwmChannel,
    S: DisplaySink,
{
    pub fn new(parts: PanelParts<A, D, R, B, S>, flags: &'a ModeFlags, config: &PanelConfig) -> Self {
        Self {
            sampler: JoystickSampler::new(parts.adc, parts.delay, config.settle_delay_us),
            outputs: LedOutputs::new(parts.red, parts.blue),
            display: parts.display,
            flags,
            calibration: config.calibration,
            interval: config.loop_interval,
            cursor: Cursor::new(config.calibration, config.cursor),
            scene: SceneRenderer::new(&config.cursor),
            frame: FrameBuffer::new(),
        }
    }

    /// Run one iteration.
    ///
    /// 1. Samples both axes
    /// 2. Maps them to LED levels, honoring the outputs flag
    /// 3. Moves the cursor and redraws the whole scene
    /// 4. Flushes the frame to the display
    pub fn tick(&mut self) -> Result<CycleReport, Error> {
        let reading = self.sampler.sample();
        let modes = self.flags.snapshot();

        let levels = BrightnessPair::from_reading(&reading, &self.calibration);
        let levels = self.outputs.apply(levels, modes.outputs_enabled);

        let cursor = self.cursor.update(&reading);
        let border = BorderStyle::from_doubled(modes.border_doubled);
        let Ok(()) = self.scene.draw(&mut self.frame, cursor, border);
        self.display.flush(&self.frame)?;

        #[cfg(feature = "defmt")]
        trace!("[ControlLoop] {:?} -> {:?}", reading, levels);

        Ok(CycleReport {
            reading,
            levels,
            outputs_enabled: modes.outputs_enabled,
            cursor,
            border,
            sleep_duration: self.interval,
        })
    }

    /// The frame flushed by the last tick
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn cursor(&self) -> CursorPosition {
        self.cursor.position()
    }

    pub fn outputs(&self) -> &LedOutputs<R, B> {
        &self.outputs
    }

    pub fn display(&self) -> &S {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut S {
        &mut self.display
    }
}
