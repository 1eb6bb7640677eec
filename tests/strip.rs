mod tests {
    use myrtio_sprite_animator::color::{Grb, Rgb};
    use myrtio_sprite_animator::strip::{
        BIT_PERIOD_NS, LayoutError, PanelLayout, PixelCode, PulseCode, ScanOrder, StripDriver,
        StripTimings,
    };
    use myrtio_sprite_animator::{LedWire, QueueFull};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum WireOp {
        Delay(u32),
        Low(u32),
        Idle,
        Pixel(PixelCode),
    }

    /// Records everything sent to the line, rejecting the first `busy` pushes
    #[derive(Debug, Default)]
    struct RecordingWire {
        ops: Vec<WireOp>,
        busy: usize,
        rejected: usize,
    }

    impl RecordingWire {
        fn busy(busy: usize) -> Self {
            Self {
                busy,
                ..Self::default()
            }
        }

        fn pixels(&self) -> Vec<Grb> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    WireOp::Pixel(code) => Some(Grb(code.bits())),
                    _ => None,
                })
                .collect()
        }
    }

    impl LedWire for RecordingWire {
        fn hold_low(&mut self, micros: u32) {
            self.ops.push(WireOp::Low(micros));
        }

        fn hold_idle(&mut self) {
            self.ops.push(WireOp::Idle);
        }

        fn delay_us(&mut self, micros: u32) {
            self.ops.push(WireOp::Delay(micros));
        }

        fn try_push(&mut self, pixel: PixelCode) -> Result<(), QueueFull> {
            if self.busy > 0 {
                self.busy -= 1;
                self.rejected += 1;
                return Err(QueueFull);
            }
            self.ops.push(WireOp::Pixel(pixel));
            Ok(())
        }
    }

    /// Unique color per coordinate
    fn marker(x: usize, y: usize) -> Grb {
        Grb::new(0, 0, (y * 16 + x + 1) as u8)
    }

    fn filled_driver<const W: usize, const H: usize>(
        wire: RecordingWire,
        layout: PanelLayout,
    ) -> StripDriver<RecordingWire, W, H> {
        let Ok(mut driver) = StripDriver::new(wire, layout, StripTimings::DEFAULT) else {
            panic!("layout rejected");
        };
        for y in 0..H {
            for x in 0..W {
                driver.frame_mut().set_pixel(x, y, marker(x, y));
            }
        }
        driver
    }

    fn decode(code: PixelCode) -> u32 {
        code.pulses()
            .fold(0, |bits, pulse| (bits << 1) | u32::from(pulse.bit()))
    }

    #[test]
    fn test_pulse_timing() {
        assert_eq!(BIT_PERIOD_NS, 1250);
        assert_eq!(PulseCode::ZERO.high_ns, 375);
        assert_eq!(PulseCode::ZERO.low_ns, 875);
        assert_eq!(PulseCode::ONE.high_ns, 875);
        assert_eq!(PulseCode::ONE.low_ns, 375);
    }

    #[test]
    fn test_pulses_are_grb_msb_first() {
        let code = PixelCode::new(Grb::new(0x0F, 0x80, 0x01));
        let pulses: Vec<PulseCode> = code.pulses().collect();
        assert_eq!(pulses.len(), 24);
        // Green MSB goes out first
        assert_eq!(pulses[0], PulseCode::ONE);
        assert_eq!(pulses[1], PulseCode::ZERO);
        // Blue LSB goes out last
        assert_eq!(pulses[23], PulseCode::ONE);
        assert_eq!(decode(code), 0x0080_0F01);
    }

    #[test]
    fn test_left_aligned_bits() {
        let code = PixelCode::from(Grb(0xFF12_3456));
        assert_eq!(code.bits(), 0x0012_3456);
        assert_eq!(code.left_aligned(), 0x1234_5600);
    }

    #[test]
    fn test_spi_bytes() {
        let bytes = PixelCode::new(Grb::new(0, 0xFF, 0)).spi_bytes();
        assert_eq!(&bytes[..4], &[0b1110_1110; 4]);
        assert_eq!(&bytes[4..], &[0b1000_1000; 8]);

        let bytes = PixelCode::new(Grb::new(0, 0, 0b0110_0000)).spi_bytes();
        assert_eq!(bytes[8], 0b1000_1110);
        assert_eq!(bytes[9], 0b1110_1000);
    }

    #[test]
    fn test_progressive_scan() {
        let mut driver = filled_driver::<4, 2>(RecordingWire::default(), PanelLayout::new(4, 2));
        driver.scan_buffer(ScanOrder::PROGRESSIVE);

        let expected: Vec<Grb> = (0..2)
            .flat_map(|y| (0..4).map(move |x| marker(x, y)))
            .collect();
        assert_eq!(driver.wire().pixels(), expected);
    }

    #[test]
    fn test_serpentine_scan_starting_right() {
        let mut driver = filled_driver::<4, 2>(RecordingWire::default(), PanelLayout::new(4, 2));
        driver.scan_buffer(ScanOrder::new(true, false));

        let expected = vec![
            marker(3, 0),
            marker(2, 0),
            marker(1, 0),
            marker(0, 0),
            marker(0, 1),
            marker(1, 1),
            marker(2, 1),
            marker(3, 1),
        ];
        assert_eq!(driver.wire().pixels(), expected);
    }

    #[test]
    fn test_panels_in_cascade_order() {
        let mut driver = filled_driver::<4, 4>(RecordingWire::default(), PanelLayout::new(2, 2));
        assert_eq!(driver.panels_x(), 2);
        assert_eq!(driver.panels_y(), 2);
        driver.scan_buffer(ScanOrder::PROGRESSIVE);

        let expected = vec![
            // top-left
            marker(0, 0),
            marker(1, 0),
            marker(0, 1),
            marker(1, 1),
            // top-right
            marker(2, 0),
            marker(3, 0),
            marker(2, 1),
            marker(3, 1),
            // bottom-left
            marker(0, 2),
            marker(1, 2),
            marker(0, 3),
            marker(1, 3),
            // bottom-right
            marker(2, 2),
            marker(3, 2),
            marker(2, 3),
            marker(3, 3),
        ];
        assert_eq!(driver.wire().pixels(), expected);
    }

    #[test]
    fn test_full_queue_blocks_without_dropping() {
        let mut driver = filled_driver::<4, 2>(RecordingWire::busy(5), PanelLayout::new(4, 2));
        driver.scan_buffer(ScanOrder::PROGRESSIVE);

        assert_eq!(driver.wire().rejected, 5);
        assert_eq!(driver.wire().pixels().len(), 8);
        assert_eq!(driver.wire().pixels()[0], marker(0, 0));
    }

    #[test]
    fn test_show_latches_before_scanning() {
        let mut driver = filled_driver::<4, 2>(RecordingWire::default(), PanelLayout::new(4, 2));
        driver.show(ScanOrder::PROGRESSIVE);

        let ops = &driver.wire().ops;
        assert_eq!(ops[0], WireOp::Delay(500));
        assert_eq!(ops[1], WireOp::Low(80));
        assert_eq!(ops[2], WireOp::Delay(100));
        assert_eq!(ops.len(), 3 + 8);
    }

    #[test]
    fn test_short_reset_is_extended() {
        let timings = StripTimings {
            reset_low_us: 10,
            ..StripTimings::DEFAULT
        };
        let Ok(mut driver) = StripDriver::<_, 16, 16>::new(
            RecordingWire::default(),
            PanelLayout::new(16, 16),
            timings,
        ) else {
            panic!("layout rejected");
        };
        driver.reset();
        assert_eq!(driver.wire().ops, vec![WireOp::Delay(500), WireOp::Low(50)]);
    }

    #[test]
    fn test_layout_errors() {
        let zero = StripDriver::<_, 16, 16>::new(
            RecordingWire::default(),
            PanelLayout::new(0, 16),
            StripTimings::DEFAULT,
        );
        assert!(matches!(zero, Err(LayoutError::PanelSizeZero)));

        let uneven = StripDriver::<_, 16, 16>::new(
            RecordingWire::default(),
            PanelLayout::new(5, 16),
            StripTimings::DEFAULT,
        );
        assert!(matches!(uneven, Err(LayoutError::PanelMismatch)));
    }

    #[test]
    fn test_scan_panel_out_of_range() {
        let mut driver = filled_driver::<4, 2>(RecordingWire::default(), PanelLayout::new(4, 2));
        driver.scan_panel(1, 0, ScanOrder::PROGRESSIVE);
        driver.scan_panel(0, 1, ScanOrder::PROGRESSIVE);
        assert!(driver.wire().ops.is_empty());
    }

    #[test]
    fn test_direct_pixels_bypass_frame() {
        let mut driver = filled_driver::<4, 2>(RecordingWire::default(), PanelLayout::new(4, 2));
        driver.send_direct(Grb(0x07_00_00));
        driver.send_direct_rgb(Rgb::new(1, 2, 3));
        driver.hold_idle();

        assert_eq!(
            driver.wire().ops,
            vec![
                WireOp::Pixel(PixelCode::new(Grb(0x07_00_00))),
                WireOp::Pixel(PixelCode::new(Grb::new(1, 2, 3))),
                WireOp::Idle,
            ]
        );
        assert_eq!(driver.frame().pixel(0, 0), Some(marker(0, 0)));
    }

    #[test]
    fn test_panel_border() {
        let Ok(mut driver) = StripDriver::<_, 8, 4>::new(
            RecordingWire::default(),
            PanelLayout::new(4, 4),
            StripTimings::DEFAULT,
        ) else {
            panic!("layout rejected");
        };
        let color = Grb::new(9, 9, 9);
        driver.draw_panel_border(1, 0, color);

        let frame = driver.frame();
        assert_eq!(frame.pixel(4, 0), Some(color));
        assert_eq!(frame.pixel(7, 3), Some(color));
        assert_eq!(frame.pixel(5, 1), Some(Grb::BLACK));
        assert_eq!(frame.pixel(3, 0), Some(Grb::BLACK));
    }
}
