mod tests {
    use myrtio_sprite_animator::color::Grb;
    use myrtio_sprite_animator::compositor::{DrawMode, FrameBuffer, Point};
    use myrtio_sprite_animator::pattern::{PATTERN_PIXELS, Pattern};

    const RED: Grb = Grb::new(200, 0, 0);
    const BLUE: Grb = Grb::new(0, 0, 200);
    const REPLACE: Grb = Grb(0x07_00_00);

    /// Lit pixel at (0, 0), black at (1, 0)
    fn two_pixel_pattern() -> Pattern {
        let mut pixels = [Grb::BLACK; PATTERN_PIXELS];
        pixels[0] = RED;
        Pattern::from_pixels(pixels)
    }

    fn drawn(mode: DrawMode) -> FrameBuffer<16, 16> {
        let mut frame = FrameBuffer::new();
        frame.clear(BLUE);
        frame.draw_pattern(&two_pixel_pattern(), Point::ORIGIN, mode);
        frame
    }

    #[test]
    fn test_opaque_copies_and_clears() {
        let frame = drawn(DrawMode::OPAQUE);
        assert_eq!(frame.pixel(0, 0), Some(RED));
        assert_eq!(frame.pixel(1, 0), Some(Grb::BLACK));
    }

    #[test]
    fn test_overlay_keeps_destination_under_black() {
        let frame = drawn(DrawMode::OVERLAY);
        assert_eq!(frame.pixel(0, 0), Some(RED));
        assert_eq!(frame.pixel(1, 0), Some(BLUE));
    }

    #[test]
    fn test_replace_without_overlay() {
        let frame = drawn(DrawMode::OPAQUE.with_replace(REPLACE));
        assert_eq!(frame.pixel(0, 0), Some(REPLACE));
        assert_eq!(frame.pixel(1, 0), Some(Grb::BLACK));
    }

    #[test]
    fn test_replace_with_overlay() {
        let frame = drawn(DrawMode::OVERLAY.with_replace(REPLACE));
        assert_eq!(frame.pixel(0, 0), Some(REPLACE));
        assert_eq!(frame.pixel(1, 0), Some(BLUE));
    }

    #[test]
    fn test_scaled_replace_color() {
        let frame = drawn(DrawMode::OVERLAY.with_replace(REPLACE).with_scale(109));
        assert_eq!(frame.pixel(0, 0), Some(Grb(0x03_00_00)));
    }

    #[test]
    fn test_draw_clips_at_grid_edge() {
        let mut frame: FrameBuffer<16, 16> = FrameBuffer::new();
        let pattern = Pattern::filled(RED);
        frame.draw_pattern(&pattern, Point::new(15, 15), DrawMode::OPAQUE);

        assert_eq!(frame.pixel(15, 15), Some(RED));
        assert_eq!(frame.pixel(14, 15), Some(Grb::BLACK));
        assert_eq!(frame.pixel(15, 14), Some(Grb::BLACK));
        assert_eq!(frame.pixel(16, 15), None);
    }

    #[test]
    fn test_draw_outside_grid_is_ignored() {
        let mut frame: FrameBuffer<16, 16> = FrameBuffer::new();
        frame.draw_pattern(&Pattern::filled(RED), Point::new(16, 0), DrawMode::OPAQUE);
        frame.draw_pattern(&Pattern::filled(RED), Point::new(usize::MAX, 0), DrawMode::OPAQUE);
        assert_eq!(frame, FrameBuffer::new());
    }

    #[test]
    fn test_set_pixel_bounds() {
        let mut frame: FrameBuffer<4, 2> = FrameBuffer::new();
        frame.set_pixel(3, 1, RED);
        frame.set_pixel(4, 1, RED);
        frame.set_pixel(0, 2, RED);

        assert_eq!(frame.pixel(3, 1), Some(RED));
        assert_eq!(frame.row(1), Some(&[Grb::BLACK, Grb::BLACK, Grb::BLACK, RED]));
        assert_eq!(frame.row(2), None);
    }

    #[test]
    fn test_draw_buffer_wider_grid() {
        let mut frame: FrameBuffer<32, 16> = FrameBuffer::new();
        let pixels = [RED, BLUE, Grb::BLACK, RED];
        frame.draw_buffer(&pixels, 2, Point::new(20, 3), DrawMode::OVERLAY);

        assert_eq!(frame.pixel(20, 3), Some(RED));
        assert_eq!(frame.pixel(21, 3), Some(BLUE));
        assert_eq!(frame.pixel(20, 4), Some(Grb::BLACK));
        assert_eq!(frame.pixel(21, 4), Some(RED));
    }
}
