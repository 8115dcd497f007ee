//! # Board adapters
//!
//! Binds the `joystick-panel` hardware traits to RP2040 peripherals.
//!
//! ## Wiring
//!
//! ```text
//! Signal            | GPIO | Peripheral
//! ------------------|------|---------------------
//! Joystick Y        | 26   | ADC0
//! Joystick X        | 27   | ADC1
//! Joystick switch   | 22   | input, pull-up
//! Button A          | 5    | input, pull-up
//! Green LED         | 11   | output (indicator)
//! Blue LED          | 12   | PWM slice 6, channel A
//! Red LED           | 13   | PWM slice 6, channel B
//! OLED SDA          | 14   | I2C1
//! OLED SCL          | 15   | I2C1
//! ```

use core::cell::RefCell;

use embassy_rp::adc::{Adc, Blocking as AdcBlocking, Channel};
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use joystick_panel::framebuffer::{HEIGHT, WIDTH};
use joystick_panel::{AnalogInput, DisplaySink, Error, FrameBuffer, PwmChannel, PwmTiming};
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

/// GPIO numbers used by the button interrupt routing
pub mod pins {
    pub const BUTTON_A: u8 = 5;
    pub const JOYSTICK_SWITCH: u8 = 22;
}

/// Converter with the joystick channels, indexed by channel number
pub struct JoystickAdc {
    adc: Adc<'static, AdcBlocking>,
    channels: [Channel<'static>; 2],
    selected: usize,
}

impl JoystickAdc {
    /// `channels[0]` must be ADC0 (GPIO26), `channels[1]` ADC1 (GPIO27)
    pub fn new(adc: Adc<'static, AdcBlocking>, channels: [Channel<'static>; 2]) -> Self {
        Self {
            adc,
            channels,
            selected: 0,
        }
    }
}

impl AnalogInput for JoystickAdc {
    fn select(&mut self, channel: u8) {
        self.selected = usize::from(channel).min(self.channels.len() - 1);
    }

    fn read(&mut self) -> u16 {
        self.adc
            .blocking_read(&mut self.channels[self.selected])
            .unwrap_or(0)
    }
}

/// PWM slice shared by both LEDs
pub struct LedSlice {
    pwm: Pwm<'static>,
    config: PwmConfig,
}

impl LedSlice {
    /// Build the slice config with fixed period and divider, counter running
    pub fn config(timing: &PwmTiming) -> PwmConfig {
        let mut config = PwmConfig::default();
        config.divider = timing.divider.into();
        config.top = timing.period;
        config.compare_a = 0;
        config.compare_b = 0;
        config.enable = true;
        config
    }

    pub fn new(pwm: Pwm<'static>, config: PwmConfig) -> Self {
        Self { pwm, config }
    }

    fn update(&mut self, change: impl FnOnce(&mut PwmConfig)) {
        change(&mut self.config);
        self.pwm.set_config(&self.config);
    }
}

/// Output side of a [`LedSlice`]
#[derive(Clone, Copy)]
pub enum Side {
    A,
    B,
}

/// One LED on a shared slice
pub struct LedChannel {
    slice: &'static RefCell<LedSlice>,
    side: Side,
}

impl LedChannel {
    pub fn new(slice: &'static RefCell<LedSlice>, side: Side) -> Self {
        Self { slice, side }
    }
}

impl PwmChannel for LedChannel {
    fn set_level(&mut self, level: u16) {
        let side = self.side;
        self.slice.borrow_mut().update(|config| match side {
            Side::A => config.compare_a = level,
            Side::B => config.compare_b = level,
        });
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.slice.borrow_mut().update(|config| config.enable = enabled);
    }
}

type OledInterface = I2CInterface<I2c<'static, I2C1, Blocking>>;

/// SSD1306 fed with whole frames
pub struct Oled {
    display: Ssd1306<OledInterface, DisplaySize128x64, BasicMode>,
}

impl Oled {
    /// Initialize the controller at `address`
    pub fn new(i2c: I2c<'static, I2C1, Blocking>, address: u8) -> Result<Self, Error> {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0);
        display
            .init()
            .map_err(|_| Error::DisplayInit)?;
        Ok(Self { display })
    }
}

impl DisplaySink for Oled {
    fn flush(&mut self, frame: &FrameBuffer) -> Result<(), Error> {
        #[allow(clippy::cast_possible_truncation)]
        let end = (WIDTH as u8, HEIGHT as u8);
        self.display
            .set_draw_area((0, 0), end)
            .map_err(|_| Error::Display)?;
        self.display
            .draw(frame.as_bytes())
            .map_err(|_| Error::Display)
    }
}
