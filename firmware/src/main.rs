#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_rp::adc::{Adc, Channel as AdcChannel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::pwm::Pwm;
use embassy_time::{Delay, Instant, Timer};
use joystick_panel::{
    ControlLoop, EdgeRouter, ModeFlags, PanelConfig, PanelParts, ToggleController,
};
use static_cell::StaticCell;

use {defmt_rtt as _, panic_probe as _};

mod board;

use board::{JoystickAdc, LedChannel, LedSlice, Oled, Side, pins};

const CONFIG: PanelConfig = PanelConfig::DEFAULT;

const ROUTER: EdgeRouter = EdgeRouter::new(pins::BUTTON_A, pins::JOYSTICK_SWITCH);

static FLAGS: StaticCell<ModeFlags> = StaticCell::new();
static LED_SLICE: StaticCell<RefCell<LedSlice>> = StaticCell::new();

/// Edge handler for both buttons
///
/// The only writer of the mode flags; never blocks between edges.
#[embassy_executor::task]
async fn button_task(
    mut button_a: Input<'static>,
    mut joystick_switch: Input<'static>,
    mut controller: ToggleController<'static, Output<'static>>,
) -> ! {
    loop {
        let line = match select(
            button_a.wait_for_falling_edge(),
            joystick_switch.wait_for_falling_edge(),
        )
        .await
        {
            Either::First(()) => pins::BUTTON_A,
            Either::Second(()) => pins::JOYSTICK_SWITCH,
        };

        match controller.on_line_edge(&ROUTER, line, Instant::now()) {
            Some(effect) => info!("GPIO {}: {}", line, effect),
            None => debug!("GPIO {}: edge ignored", line),
        }
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Joystick panel starting");

    let flags: &'static ModeFlags = FLAGS.init(ModeFlags::new());

    // Buttons are active low
    let button_a = Input::new(p.PIN_5, Pull::Up);
    let joystick_switch = Input::new(p.PIN_22, Pull::Up);
    let indicator = Output::new(p.PIN_11, Level::Low);
    let controller = ToggleController::new(flags, indicator, CONFIG.debounce);
    spawner.spawn(unwrap!(button_task(button_a, joystick_switch, controller)));

    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let channels = [
        AdcChannel::new_pin(p.PIN_26, Pull::None),
        AdcChannel::new_pin(p.PIN_27, Pull::None),
    ];

    // Blue sits on channel A (GPIO12), red on channel B (GPIO13)
    let pwm_config = LedSlice::config(&CONFIG.pwm);
    let pwm = Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, pwm_config.clone());
    let slice: &'static RefCell<LedSlice> =
        LED_SLICE.init(RefCell::new(LedSlice::new(pwm, pwm_config)));

    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = CONFIG.display.frequency_hz;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let oled = unwrap!(Oled::new(i2c, CONFIG.display.address));
    info!("Display ready at {=u8:#x}", CONFIG.display.address);

    let parts = PanelParts {
        adc: JoystickAdc::new(adc, channels),
        delay: Delay,
        red: LedChannel::new(slice, Side::B),
        blue: LedChannel::new(slice, Side::A),
        display: oled,
    };
    let mut panel = ControlLoop::new(parts, flags, &CONFIG);

    loop {
        match panel.tick() {
            Ok(report) => {
                info!("{=str}", report.reading.diagnostic_line().as_str());
                Timer::after(report.sleep_duration).await;
            }
            Err(err) => {
                warn!("Cycle failed: {}", err);
                Timer::after(CONFIG.loop_interval).await;
            }
        }
    }
}
