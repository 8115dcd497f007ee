use crate::PwmChannel;
use crate::brightness::BrightnessPair;

#[cfg(feature = "defmt")]
use defmt::debug;

/// Drives the two PWM LEDs
///
/// While outputs are suspended both duties are forced to 0 and both slices are
/// disabled. The enable bit is only written when the state changes.
pub struct LedOutputs<R, B> {
    red: R,
    blue: B,
    enabled: Option<bool>,
}

impl<R: PwmChannel, B: PwmChannel> LedOutputs<R, B> {
    pub const fn new(red: R, blue: B) -> Self {
        Self {
            red,
            blue,
            enabled: None,
        }
    }

    /// Apply levels for this iteration and return what was written
    pub fn apply(&mut self, levels: BrightnessPair, enabled: bool) -> BrightnessPair {
        let applied = if enabled { levels } else { BrightnessPair::OFF };

        self.red.set_level(applied.red);
        self.blue.set_level(applied.blue);

        if self.enabled != Some(enabled) {
            #[cfg(feature = "defmt")]
            debug!("[LedOutputs] outputs enabled: {}", enabled);
            self.red.set_enabled(enabled);
            self.blue.set_enabled(enabled);
            self.enabled = Some(enabled);
        }

        applied
    }

    pub fn red(&self) -> &R {
        &self.red
    }

    pub fn blue(&self) -> &B {
        &self.blue
    }
}
