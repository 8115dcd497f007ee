mod tests {
    use core::convert::Infallible;

    use embassy_time::{Duration, Instant};
    use embedded_hal::delay::DelayNs;
    use embedded_hal::digital::{ErrorType, OutputPin};
    use joystick_panel::{
        AnalogInput, BorderStyle, BrightnessPair, Button, ControlLoop, CursorPosition,
        DisplaySink, Error, FrameBuffer, JoystickSampler, ModeFlags, PanelConfig, PanelParts,
        PwmChannel, ToggleController,
    };

    /// Converter that returns the value stored for the selected channel
    #[derive(Default)]
    struct MockAdc {
        values: [u16; 2],
        selected: u8,
        selections: Vec<u8>,
    }

    impl AnalogInput for MockAdc {
        fn select(&mut self, channel: u8) {
            self.selected = channel;
            self.selections.push(channel);
        }

        fn read(&mut self) -> u16 {
            self.values[usize::from(self.selected)]
        }
    }

    #[derive(Default)]
    struct MockDelay {
        total_ns: u64,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += u64::from(ns);
        }
    }

    #[derive(Default)]
    struct MockPwm {
        level: u16,
        enabled: bool,
        enable_writes: usize,
    }

    impl PwmChannel for MockPwm {
        fn set_level(&mut self, level: u16) {
            self.level = level;
        }

        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
            self.enable_writes += 1;
        }
    }

    #[derive(Default)]
    struct MockDisplay {
        flushes: usize,
        last: Option<FrameBuffer>,
        fail: bool,
    }

    impl DisplaySink for MockDisplay {
        fn flush(&mut self, frame: &FrameBuffer) -> Result<(), Error> {
            if self.fail {
                return Err(Error::Display);
            }
            self.flushes += 1;
            self.last = Some(frame.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockPin {
        high: bool,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    type Panel<'a> = ControlLoop<'a, MockAdc, MockDelay, MockPwm, MockPwm, MockDisplay>;

    fn panel(flags: &ModeFlags, x: u16, y: u16) -> Panel<'_> {
        let parts = PanelParts {
            // Y sits on channel 0, X on channel 1
            adc: MockAdc {
                values: [y, x],
                ..Default::default()
            },
            delay: MockDelay::default(),
            red: MockPwm::default(),
            blue: MockPwm::default(),
            display: MockDisplay::default(),
        };
        ControlLoop::new(parts, flags, &PanelConfig::DEFAULT)
    }

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_sampler_reads_x_then_y_with_settle_delay() {
        let adc = MockAdc {
            values: [100, 3000],
            ..Default::default()
        };
        let mut sampler = JoystickSampler::new(adc, MockDelay::default(), 2);
        let reading = sampler.sample();
        assert_eq!((reading.x, reading.y), (3000, 100));

        let (adc, delay) = sampler.release();
        assert_eq!(adc.selections, vec![1, 0]);
        assert_eq!(delay.total_ns, 4_000);
    }

    #[test]
    fn test_tick_drives_outputs_from_joystick() {
        let flags = ModeFlags::new();
        let mut panel = panel(&flags, 4095, 0);

        let report = panel.tick().unwrap();
        assert_eq!(report.levels, BrightnessPair { red: 3694, blue: 3696 });
        assert!(report.outputs_enabled);
        assert_eq!(report.sleep_duration, Duration::from_millis(100));
        assert_eq!(report.reading.diagnostic_line().as_str(), "X: 4095, Y: 0");

        let outputs = panel.outputs();
        assert_eq!(outputs.red().level, 3694);
        assert_eq!(outputs.blue().level, 3696);
        assert!(outputs.red().enabled);
        assert!(outputs.blue().enabled);
    }

    #[test]
    fn test_tick_moves_cursor_and_flushes_scene() {
        let flags = ModeFlags::new();
        let mut panel = panel(&flags, 4095, 0);

        let report = panel.tick().unwrap();
        assert_eq!(report.cursor, CursorPosition::new(68, 36));
        assert_eq!(report.border, BorderStyle::Single);

        let display = panel.display();
        assert_eq!(display.flushes, 1);
        let frame = display.last.as_ref().unwrap();
        assert!(frame.pixel(68, 36));
        assert!(frame.pixel(0, 0));
        assert!(!frame.pixel(60, 28));

        panel.tick().unwrap();
        assert_eq!(panel.cursor(), CursorPosition::new(76, 44));
        assert_eq!(panel.display().flushes, 2);
    }

    #[test]
    fn test_primary_press_forces_outputs_off() {
        let flags = ModeFlags::new();
        let mut panel = panel(&flags, 4095, 4095);
        let mut buttons = ToggleController::new(&flags, MockPin::default(), Duration::from_millis(200));

        panel.tick().unwrap();
        assert_eq!(panel.outputs().red().level, 3694);

        buttons.on_falling_edge(Button::Primary, at(1_000));
        let report = panel.tick().unwrap();
        assert_eq!(report.levels, BrightnessPair::OFF);
        assert!(!report.outputs_enabled);
        assert_eq!(panel.outputs().red().level, 0);
        assert_eq!(panel.outputs().blue().level, 0);
        assert!(!panel.outputs().red().enabled);
        assert!(!panel.outputs().blue().enabled);

        // Bounce inside the window is ignored
        buttons.on_falling_edge(Button::Primary, at(1_050));
        assert!(!panel.tick().unwrap().outputs_enabled);

        buttons.on_falling_edge(Button::Primary, at(1_300));
        let report = panel.tick().unwrap();
        assert_eq!(report.levels, BrightnessPair { red: 3694, blue: 3694 });
        assert!(panel.outputs().red().enabled);
    }

    #[test]
    fn test_enable_bit_written_only_on_change() {
        let flags = ModeFlags::new();
        let mut panel = panel(&flags, 2048, 2048);
        for _ in 0..5 {
            panel.tick().unwrap();
        }
        assert_eq!(panel.outputs().red().enable_writes, 1);
        assert_eq!(panel.outputs().blue().enable_writes, 1);
    }

    #[test]
    fn test_border_follows_secondary_button() {
        let flags = ModeFlags::new();
        let mut panel = panel(&flags, 2048, 2048);
        let mut buttons = ToggleController::new(&flags, MockPin::default(), Duration::from_millis(200));

        buttons.on_falling_edge(Button::Secondary, at(0));
        assert_eq!(panel.tick().unwrap().border, BorderStyle::Single);

        buttons.on_falling_edge(Button::Primary, at(10));
        buttons.on_falling_edge(Button::Secondary, at(20));
        let report = panel.tick().unwrap();
        assert_eq!(report.border, BorderStyle::Double);
        assert!(panel.frame().pixel(2, 2));
        assert!(buttons.indicator().high);
    }

    #[test]
    fn test_flush_failure_is_reported() {
        let flags = ModeFlags::new();
        let mut panel = panel(&flags, 2048, 2048);
        panel.display_mut().fail = true;
        assert_eq!(panel.tick(), Err(Error::Display));
        assert_eq!(Error::Display.to_string(), "display flush failed");
    }
}
