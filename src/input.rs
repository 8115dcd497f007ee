//! Button handling
//!
//! Turns raw falling edges into mode changes. This is the only code that
//! writes [`ModeFlags`]; it is meant to run in interrupt context (or in the
//! task that awaits the edges), never blocking.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::{OutputPin, PinState};

#[cfg(feature = "defmt")]
use defmt::debug;

use crate::flags::ModeFlags;
use crate::toggle::DebouncedToggle;

/// Physical buttons of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Suspends and resumes the PWM outputs
    Primary,
    /// Switches the border style; honored only while outputs are suspended
    Secondary,
}

/// Side effect of an honored press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToggleEffect {
    /// PWM outputs were enabled or disabled
    Outputs { enabled: bool },
    /// Border style changed, indicator now shows `doubled`
    Border { doubled: bool },
}

/// Routes interrupt lines (GPIO numbers) to buttons
///
/// Platforms that bind a single callback to every edge interrupt use this to
/// find out which button fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRouter {
    pub primary_line: u8,
    pub secondary_line: u8,
}

impl EdgeRouter {
    pub const fn new(primary_line: u8, secondary_line: u8) -> Self {
        Self {
            primary_line,
            secondary_line,
        }
    }

    /// Button wired to `line`, if any
    pub const fn route(&self, line: u8) -> Option<Button> {
        if line == self.primary_line {
            Some(Button::Primary)
        } else if line == self.secondary_line {
            Some(Button::Secondary)
        } else {
            None
        }
    }
}

/// Debounced state machine for both buttons
pub struct ToggleController<'a, P> {
    flags: &'a ModeFlags,
    outputs: DebouncedToggle,
    border: DebouncedToggle,
    indicator: P,
}

impl<'a, P: OutputPin> ToggleController<'a, P> {
    /// Create a controller starting from the current state of `flags`.
    ///
    /// The indicator pin is driven to match the border flag.
    pub fn new(flags: &'a ModeFlags, mut indicator: P, debounce: Duration) -> Self {
        let border_doubled = flags.border_doubled();
        let _ = indicator.set_state(PinState::from(border_doubled));
        Self {
            flags,
            outputs: DebouncedToggle::new(flags.outputs_enabled(), debounce),
            border: DebouncedToggle::new(border_doubled, debounce),
            indicator,
        }
    }

    /// Handle a falling edge of `button` seen at `now`.
    ///
    /// Returns `None` when the edge was bounced away or blocked by the
    /// interlock. A blocked edge leaves the debounce timestamp untouched.
    pub fn on_falling_edge(&mut self, button: Button, now: Instant) -> Option<ToggleEffect> {
        let effect = match button {
            Button::Primary => {
                let enabled = self.outputs.on_falling_edge(now)?;
                self.flags.set_outputs_enabled(enabled);
                ToggleEffect::Outputs { enabled }
            }
            Button::Secondary => {
                if self.outputs.is_enabled() {
                    return None;
                }
                let doubled = self.border.on_falling_edge(now)?;
                self.flags.set_border_doubled(doubled);
                let _ = self.indicator.set_state(PinState::from(doubled));
                ToggleEffect::Border { doubled }
            }
        };

        #[cfg(feature = "defmt")]
        debug!("[ToggleController] {:?} -> {:?}", button, effect);

        Some(effect)
    }

    /// Handle a falling edge reported by interrupt line number
    pub fn on_line_edge(
        &mut self,
        router: &EdgeRouter,
        line: u8,
        now: Instant,
    ) -> Option<ToggleEffect> {
        let button = router.route(line)?;
        self.on_falling_edge(button, now)
    }

    pub fn flags(&self) -> &'a ModeFlags {
        self.flags
    }

    pub fn indicator(&self) -> &P {
        &self.indicator
    }
}
