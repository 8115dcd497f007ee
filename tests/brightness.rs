mod tests {
    use joystick_panel::brightness::{BrightnessPair, map_brightness, max_brightness};
    use joystick_panel::{AxisCalibration, AxisReading, MAX_RAW};

    const CAL: AxisCalibration = AxisCalibration::DEFAULT;

    #[test]
    fn test_map_brightness_reference_points() {
        assert_eq!(map_brightness(2048, &CAL), 0);
        assert_eq!(map_brightness(2248, &CAL), 0);
        assert_eq!(map_brightness(1848, &CAL), 0);
        assert_eq!(map_brightness(2249, &CAL), 2);
        assert_eq!(map_brightness(1847, &CAL), 2);
        assert_eq!(map_brightness(0, &CAL), 3696);
        assert_eq!(map_brightness(4095, &CAL), 3694);
    }

    #[test]
    fn test_map_brightness_dead_zone_is_dark() {
        for reading in 1848..=2248 {
            assert_eq!(map_brightness(reading, &CAL), 0, "reading {reading}");
        }
    }

    #[test]
    fn test_map_brightness_symmetric_around_center() {
        for reading in 1..=MAX_RAW {
            let mirrored = 2 * 2048 - reading;
            if mirrored > MAX_RAW {
                continue;
            }
            assert_eq!(
                map_brightness(reading, &CAL),
                map_brightness(mirrored, &CAL),
                "reading {reading}"
            );
        }
    }

    #[test]
    fn test_map_brightness_monotonic_away_from_center() {
        let mut previous = 0;
        for reading in 2048..=MAX_RAW {
            let level = map_brightness(reading, &CAL);
            assert!(level >= previous, "reading {reading}");
            previous = level;
        }

        let mut previous = 0;
        for reading in (0..=2048).rev() {
            let level = map_brightness(reading, &CAL);
            assert!(level >= previous, "reading {reading}");
            previous = level;
        }
    }

    #[test]
    fn test_map_brightness_saturates() {
        let cal = AxisCalibration::new(1000, 100);
        assert_eq!(max_brightness(&cal), 1800);
        assert_eq!(map_brightness(0, &cal), 1800);
        assert_eq!(map_brightness(2000, &cal), 1800);
        assert_eq!(map_brightness(MAX_RAW, &cal), 1800);
        assert_eq!(max_brightness(&CAL), 3696);
    }

    #[test]
    fn test_brightness_pair_follows_axes() {
        let reading = AxisReading::new(4095, 2048);
        let pair = BrightnessPair::from_reading(&reading, &CAL);
        assert_eq!(pair, BrightnessPair { red: 3694, blue: 0 });

        let reading = AxisReading::new(2000, 0);
        let pair = BrightnessPair::from_reading(&reading, &CAL);
        assert_eq!(pair, BrightnessPair { red: 0, blue: 3696 });
    }
}
