//! Mode flags shared between the button handler and the superloop.
//!
//! Each flag has exactly one writer, the [`ToggleController`], and any number
//! of readers. Plain load/store atomics are enough for that, so this also
//! works on cores without compare-and-swap.
//!
//! [`ToggleController`]: crate::input::ToggleController

use core::sync::atomic::{AtomicBool, Ordering};

/// Snapshot of both flags, taken at the start of a loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeSnapshot {
    pub outputs_enabled: bool,
    pub border_doubled: bool,
}

#[derive(Debug)]
pub struct ModeFlags {
    outputs_enabled: AtomicBool,
    border_doubled: AtomicBool,
}

impl ModeFlags {
    /// Outputs on, single border
    pub const fn new() -> Self {
        Self {
            outputs_enabled: AtomicBool::new(true),
            border_doubled: AtomicBool::new(false),
        }
    }

    /// Whether the PWM outputs follow the joystick
    pub fn outputs_enabled(&self) -> bool {
        self.outputs_enabled.load(Ordering::Acquire)
    }

    /// Whether the display border is drawn twice
    pub fn border_doubled(&self) -> bool {
        self.border_doubled.load(Ordering::Acquire)
    }

    pub fn snapshot(&self) -> ModeSnapshot {
        ModeSnapshot {
            outputs_enabled: self.outputs_enabled(),
            border_doubled: self.border_doubled(),
        }
    }

    pub(crate) fn set_outputs_enabled(&self, enabled: bool) {
        self.outputs_enabled.store(enabled, Ordering::Release);
    }

    pub(crate) fn set_border_doubled(&self, doubled: bool) {
        self.border_doubled.store(doubled, Ordering::Release);
    }
}

impl Default for ModeFlags {
    fn default() -> Self {
        Self::new()
    }
}
