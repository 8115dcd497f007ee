mod tests {
    use joystick_panel::{AxisCalibration, AxisReading, Deflection};

    #[test]
    fn test_reading_is_clamped() {
        let reading = AxisReading::new(5000, u16::MAX);
        assert_eq!(reading, AxisReading { x: 4095, y: 4095 });
    }

    #[test]
    fn test_deflection() {
        let cal = AxisCalibration::DEFAULT;
        assert_eq!(cal.deflection(0), Deflection::Negative);
        assert_eq!(cal.deflection(1847), Deflection::Negative);
        assert_eq!(cal.deflection(1848), Deflection::Neutral);
        assert_eq!(cal.deflection(2248), Deflection::Neutral);
        assert_eq!(cal.deflection(2249), Deflection::Positive);
    }

    #[test]
    fn test_diagnostic_line() {
        let reading = AxisReading::new(4095, 17);
        assert_eq!(reading.diagnostic_line().as_str(), "X: 4095, Y: 17");
    }

    #[test]
    #[should_panic(expected = "dead zone must be smaller than center")]
    fn test_calibration_rejects_wide_dead_zone() {
        let _ = AxisCalibration::new(100, 200);
    }

    #[test]
    #[should_panic(expected = "dead zone must fit above center")]
    fn test_calibration_rejects_high_center() {
        let _ = AxisCalibration::new(4000, 200);
    }
}
