use embedded_hal::delay::DelayNs;

use crate::axis::AxisReading;

/// Converter input wired to the X axis
pub const X_CHANNEL: u8 = 1;
/// Converter input wired to the Y axis
pub const Y_CHANNEL: u8 = 0;

/// A single analog converter multiplexed across several inputs
///
/// Implement this trait to support different hardware platforms.
pub trait AnalogInput {
    /// Route the converter to `channel`
    fn select(&mut self, channel: u8);

    /// Convert the currently selected channel
    fn read(&mut self) -> u16;
}

/// Reads both joystick axes through one shared converter
pub struct JoystickSampler<A, D> {
    adc: A,
    delay: D,
    settle_us: u32,
}

impl<A: AnalogInput, D: DelayNs> JoystickSampler<A, D> {
    pub const fn new(adc: A, delay: D, settle_us: u32) -> Self {
        Self {
            adc,
            delay,
            settle_us,
        }
    }

    /// Take one reading of both axes.
    ///
    /// Each channel switch is followed by the settle delay before converting.
    pub fn sample(&mut self) -> AxisReading {
        let x = self.read_channel(X_CHANNEL);
        let y = self.read_channel(Y_CHANNEL);
        AxisReading::new(x, y)
    }

    fn read_channel(&mut self, channel: u8) -> u16 {
        self.adc.select(channel);
        self.delay.delay_us(self.settle_us);
        self.adc.read()
    }

    /// Release the converter and delay provider
    pub fn release(self) -> (A, D) {
        (self.adc, self.delay)
    }
}
