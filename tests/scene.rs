mod tests {
    use joystick_panel::framebuffer::{BUFFER_SIZE, HEIGHT, WIDTH};
    use joystick_panel::{BorderStyle, CursorConfig, CursorPosition, FrameBuffer, SceneRenderer};

    fn render(cursor: CursorPosition, border: BorderStyle) -> FrameBuffer {
        let mut frame = FrameBuffer::new();
        let scene = SceneRenderer::new(&CursorConfig::DEFAULT);
        let Ok(()) = scene.draw(&mut frame, cursor, border);
        frame
    }

    #[test]
    fn test_framebuffer_page_layout() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(3, 0, true);
        frame.set_pixel(3, 9, true);
        frame.set_pixel(127, 63, true);
        let bytes = frame.as_bytes();
        assert_eq!(bytes.len(), BUFFER_SIZE);
        assert_eq!(bytes[3], 0b0000_0001);
        assert_eq!(bytes[WIDTH + 3], 0b0000_0010);
        assert_eq!(bytes[BUFFER_SIZE - 1], 0b1000_0000);
        assert_eq!(frame.lit_count(), 3);
    }

    #[test]
    fn test_framebuffer_ignores_out_of_range() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(WIDTH, 0, true);
        frame.set_pixel(0, HEIGHT, true);
        assert_eq!(frame.lit_count(), 0);
        assert!(!frame.pixel(500, 500));
    }

    #[test]
    fn test_single_border_and_square() {
        let frame = render(CursorPosition::new(60, 28), BorderStyle::Single);

        assert!(frame.pixel(0, 0));
        assert!(frame.pixel(127, 0));
        assert!(frame.pixel(0, 63));
        assert!(frame.pixel(127, 63));
        assert!(!frame.pixel(2, 2));

        assert!(frame.pixel(60, 28));
        assert!(frame.pixel(67, 35));
        assert!(!frame.pixel(68, 28));
        assert!(!frame.pixel(60, 36));

        let border = 2 * WIDTH + 2 * HEIGHT - 4;
        assert_eq!(frame.lit_count() as usize, border + 64);
    }

    #[test]
    fn test_double_border_adds_inner_rectangle() {
        let single = render(CursorPosition::new(60, 28), BorderStyle::Single);
        let double = render(CursorPosition::new(60, 28), BorderStyle::Double);

        assert!(double.pixel(2, 2));
        assert!(double.pixel(125, 61));
        assert!(!double.pixel(1, 1));
        assert!(!double.pixel(3, 3));

        let inner = 2 * (WIDTH - 4) + 2 * (HEIGHT - 4) - 4;
        assert_eq!(double.lit_count() - single.lit_count(), inner as u32);
    }

    #[test]
    fn test_redraw_clears_previous_square() {
        let mut frame = FrameBuffer::new();
        let scene = SceneRenderer::new(&CursorConfig::DEFAULT);
        let Ok(()) = scene.draw(&mut frame, CursorPosition::new(10, 10), BorderStyle::Double);
        let Ok(()) = scene.draw(&mut frame, CursorPosition::new(100, 40), BorderStyle::Single);

        assert!(!frame.pixel(10, 10));
        assert!(!frame.pixel(2, 2));
        assert!(frame.pixel(100, 40));
        assert_eq!(frame, render(CursorPosition::new(100, 40), BorderStyle::Single));
    }
}
