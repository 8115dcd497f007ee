use embassy_time::{Duration, Instant};

/// A boolean flipped by button presses, with time based debounce
///
/// Edges closer than `window` to the last honored edge are dropped, not
/// queued.
#[derive(Debug, Clone, Copy)]
pub struct DebouncedToggle {
    enabled: bool,
    last_toggle: Option<Instant>,
    window: Duration,
}

impl DebouncedToggle {
    pub const fn new(enabled: bool, window: Duration) -> Self {
        Self {
            enabled,
            last_toggle: None,
            window,
        }
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub const fn last_toggle(&self) -> Option<Instant> {
        self.last_toggle
    }

    /// Check whether an edge at `now` falls outside the debounce window
    pub fn accepts(&self, now: Instant) -> bool {
        match self.last_toggle {
            Some(last) => now.saturating_duration_since(last) >= self.window,
            None => true,
        }
    }

    /// Handle a falling edge.
    ///
    /// Returns the new state if the edge was honored.
    pub fn on_falling_edge(&mut self, now: Instant) -> Option<bool> {
        if !self.accepts(now) {
            return None;
        }
        self.enabled = !self.enabled;
        self.last_toggle = Some(now);
        Some(self.enabled)
    }
}
