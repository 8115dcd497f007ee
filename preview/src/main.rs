//! Desktop preview app for joystick-panel
//!
//! Simulates the board in a window: a draggable joystick, the two buttons,
//! both PWM LEDs, the indicator LED and the 128x64 display. All state changes
//! go through the same `ControlLoop` and `ToggleController` the firmware uses.

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;
use std::time::Instant as StdInstant;

use eframe::egui::{self};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use joystick_panel::framebuffer::{HEIGHT, WIDTH};
use joystick_panel::{
    AnalogInput, Button, ControlLoop, CycleReport, DisplaySink, Error, FrameBuffer, Instant,
    MAX_RAW, ModeFlags, PanelConfig, PanelParts, PwmChannel, ToggleController, ToggleEffect,
};

/// Size of one display pixel in the window
const PIXEL_SIZE: f32 = 4.0;

/// Side of the joystick pad in the window
const PAD_SIZE: f32 = 180.0;

/// Radius of the simulated LEDs
const LED_RADIUS: f32 = 18.0;

/// Spacing of simulated contact bounces, in milliseconds
const BOUNCE_OFFSETS_MS: [u64; 3] = [0, 4, 11];

/// Mode flags shared by the simulated button handler and the control loop
static FLAGS: ModeFlags = ModeFlags::new();

type Panel = ControlLoop<'static, SimStick, SimDelay, SimLed, SimLed, SimDisplay>;

/// Joystick position written by the UI, read by the control loop
#[derive(Clone, Default)]
struct SimStick {
    axes: Rc<Cell<[u16; 2]>>,
    selected: u8,
}

impl AnalogInput for SimStick {
    fn select(&mut self, channel: u8) {
        self.selected = channel;
    }

    fn read(&mut self) -> u16 {
        // Channel 0 carries Y, channel 1 carries X
        let [x, y] = self.axes.get();
        if self.selected == 0 { y } else { x }
    }
}

/// The settle delay only matters on real silicon
struct SimDelay;

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

#[derive(Default)]
struct SimLed {
    level: u16,
    enabled: bool,
}

impl PwmChannel for SimLed {
    fn set_level(&mut self, level: u16) {
        self.level = level;
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl SimLed {
    /// Perceived intensity, 0-255
    fn intensity(&self) -> u8 {
        if !self.enabled {
            return 0;
        }
        let scaled = u32::from(self.level.min(MAX_RAW)) * 255 / u32::from(MAX_RAW);
        u8::try_from(scaled).unwrap_or(u8::MAX)
    }
}

#[derive(Default)]
struct SimDisplay {
    flushes: u64,
}

impl DisplaySink for SimDisplay {
    fn flush(&mut self, _frame: &FrameBuffer) -> Result<(), Error> {
        self.flushes += 1;
        Ok(())
    }
}

#[derive(Default)]
struct SimPin {
    high: bool,
}

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 520.0])
            .with_title("Joystick Panel Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "joystick-panel-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// The control loop instance
    panel: Panel,
    /// Button handler, stands in for the edge interrupts
    buttons: ToggleController<'static, SimPin>,
    /// Joystick axes shared with the simulated converter
    axes: Rc<Cell<[u16; 2]>>,

    /// Wall-clock reference for the simulated monotonic clock
    started: StdInstant,
    /// Simulated time of the next loop iteration
    next_tick_ms: u64,
    /// Report of the last loop iteration
    last_report: Option<CycleReport>,
    /// Last honored button effect
    last_effect: Option<ToggleEffect>,
    /// Presses dropped by debounce or interlock
    dropped_edges: u32,
    /// Send a short burst of edges per click, like a real contact
    simulate_bounce: bool,
    /// Whether the stick springs back to center on release
    spring_back: bool,
    /// Raw X value (0-4095)
    x: u16,
    /// Raw Y value (0-4095)
    y: u16,
}

impl PreviewApp {
    fn new() -> Self {
        let config = PanelConfig::DEFAULT;
        let center = config.calibration.center();
        let axes = Rc::new(Cell::new([center, center]));

        let parts = PanelParts {
            adc: SimStick {
                axes: Rc::clone(&axes),
                selected: 0,
            },
            delay: SimDelay,
            red: SimLed::default(),
            blue: SimLed::default(),
            display: SimDisplay::default(),
        };

        Self {
            panel: ControlLoop::new(parts, &FLAGS, &config),
            buttons: ToggleController::new(&FLAGS, SimPin::default(), config.debounce),
            axes,
            started: StdInstant::now(),
            next_tick_ms: 0,
            last_report: None,
            last_effect: None,
            dropped_edges: 0,
            simulate_bounce: true,
            spring_back: true,
            x: center,
            y: center,
        }
    }

    /// Simulated monotonic time in milliseconds
    fn now_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Feed a press of `button` to the handler, with optional contact bounce
    fn press(&mut self, button: Button) {
        let now = self.now_ms();
        let offsets: &[u64] = if self.simulate_bounce {
            &BOUNCE_OFFSETS_MS
        } else {
            &BOUNCE_OFFSETS_MS[..1]
        };
        for offset in offsets {
            match self
                .buttons
                .on_falling_edge(button, Instant::from_millis(now + offset))
            {
                Some(effect) => self.last_effect = Some(effect),
                None => self.dropped_edges += 1,
            }
        }
    }

    /// Run the control loop when its sleep interval has elapsed
    fn run_loop(&mut self) {
        let now = self.now_ms();
        if now < self.next_tick_ms {
            return;
        }

        self.axes.set([self.x, self.y]);
        match self.panel.tick() {
            Ok(report) => {
                self.next_tick_ms = now + report.sleep_duration.as_millis();
                self.last_report = Some(report);
            }
            Err(_) => self.next_tick_ms = now + 100,
        }
    }

    fn draw_joystick(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(
            egui::vec2(PAD_SIZE, PAD_SIZE),
            egui::Sense::click_and_drag(),
        );
        let rect = response.rect;

        if let Some(pos) = response.interact_pointer_pos() {
            let fx = ((pos.x - rect.min.x) / rect.width()).clamp(0.0, 1.0);
            // Screen y grows downwards, the stick's Y grows upwards
            let fy = 1.0 - ((pos.y - rect.min.y) / rect.height()).clamp(0.0, 1.0);
            self.x = to_raw(fx);
            self.y = to_raw(fy);
        } else if self.spring_back {
            let center = PanelConfig::DEFAULT.calibration.center();
            self.x = center;
            self.y = center;
        }

        painter.rect_filled(rect, 8.0, egui::Color32::from_gray(40));

        let dead_zone = PanelConfig::DEFAULT.calibration.dead_zone();
        let dz = f32::from(dead_zone) / f32::from(MAX_RAW) * rect.width();
        painter.rect_filled(
            egui::Rect::from_center_size(rect.center(), egui::vec2(dz * 2.0, dz * 2.0)),
            2.0,
            egui::Color32::from_gray(60),
        );

        let knob = egui::pos2(
            rect.min.x + f32::from(self.x) / f32::from(MAX_RAW) * rect.width(),
            rect.max.y - f32::from(self.y) / f32::from(MAX_RAW) * rect.height(),
        );
        painter.circle_filled(knob, 12.0, egui::Color32::from_gray(200));
    }

    fn draw_display(ui: &mut egui::Ui, frame: &FrameBuffer) {
        #[allow(clippy::cast_precision_loss)]
        let size = egui::vec2(WIDTH as f32 * PIXEL_SIZE, HEIGHT as f32 * PIXEL_SIZE);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, egui::Color32::BLACK);

        #[allow(clippy::cast_precision_loss)]
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                if !frame.pixel(x, y) {
                    continue;
                }
                let rect = egui::Rect::from_min_size(
                    egui::pos2(
                        origin.x + x as f32 * PIXEL_SIZE,
                        origin.y + y as f32 * PIXEL_SIZE,
                    ),
                    egui::vec2(PIXEL_SIZE, PIXEL_SIZE),
                );
                painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(120, 200, 255));
            }
        }
    }

    fn draw_led(ui: &mut egui::Ui, label: &str, color: egui::Color32) {
        ui.vertical(|ui| {
            let (response, painter) = ui.allocate_painter(
                egui::vec2(LED_RADIUS * 2.0, LED_RADIUS * 2.0),
                egui::Sense::hover(),
            );
            let center = response.rect.center();
            painter.circle_filled(center, LED_RADIUS, color);
            painter.circle_stroke(
                center,
                LED_RADIUS,
                egui::Stroke::new(1.0, egui::Color32::from_gray(90)),
            );
            ui.label(label);
        });
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_loop();

        // Request continuous repaint for the superloop
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <Joystick>
                ui.vertical(|ui| {
                    self.draw_joystick(ui);

                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        if ui.button("Button A").clicked() {
                            self.press(Button::Primary);
                        }
                        if ui.button("Joystick button").clicked() {
                            self.press(Button::Secondary);
                        }
                    });

                    ui.add_space(4.0);

                    ui.checkbox(&mut self.simulate_bounce, "Contact bounce");
                    ui.checkbox(&mut self.spring_back, "Spring back");
                });
                // </Joystick>
                ui.add_space(16.0);
                // <Board>
                ui.vertical(|ui| {
                    Self::draw_display(ui, self.panel.frame());

                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        let red = self.panel.outputs().red().intensity();
                        let blue = self.panel.outputs().blue().intensity();
                        let green = if self.buttons.indicator().high { 255 } else { 0 };

                        Self::draw_led(ui, "Red (X)", egui::Color32::from_rgb(red, 0, 0));
                        ui.add_space(12.0);
                        Self::draw_led(ui, "Blue (Y)", egui::Color32::from_rgb(0, 0, blue));
                        ui.add_space(12.0);
                        Self::draw_led(ui, "Green", egui::Color32::from_rgb(0, green, 0));
                    });
                });
                // </Board>
            });

            ui.add_space(12.0);

            // <Diagnostics>
            if let Some(report) = self.last_report {
                ui.monospace(report.reading.diagnostic_line().as_str());
                ui.monospace(format!(
                    "levels: red {} blue {} | outputs {} | border {:?} | cursor ({}, {})",
                    report.levels.red,
                    report.levels.blue,
                    if report.outputs_enabled { "on" } else { "off" },
                    report.border,
                    report.cursor.x,
                    report.cursor.y,
                ));
            }
            ui.monospace(format!(
                "last effect: {:?} | dropped edges: {} | frames: {}",
                self.last_effect,
                self.dropped_edges,
                self.panel.display().flushes,
            ));
            // </Diagnostics>
        });
    }
}

/// Convert a 0.0-1.0 pad coordinate to a raw converter value
fn to_raw(fraction: f32) -> u16 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let raw = (fraction.clamp(0.0, 1.0) * f32::from(MAX_RAW)).round() as u16;
    raw.min(MAX_RAW)
}
