mod tests {
    use myrtio_sprite_animator::color::{Grb, Rgb};
    use myrtio_sprite_animator::correction::identity_lut;

    #[test]
    fn test_grb_layout() {
        let color = Grb::new(0x12, 0x34, 0x56);
        assert_eq!(color.0, 0x0034_1256);
        assert_eq!(color.green(), 0x34);
        assert_eq!(color.red(), 0x12);
        assert_eq!(color.blue(), 0x56);
    }

    #[test]
    fn test_grb_black_ignores_high_byte() {
        assert!(Grb::BLACK.is_black());
        assert!(Grb(0xFF00_0000).is_black());
        assert!(!Grb(0x0000_0001).is_black());
        assert_eq!(Grb(0xFF12_3456).bits(), 0x0012_3456);
    }

    #[test]
    fn test_rgb_conversion() {
        let rgb = Rgb::new(10, 20, 30);
        let color = Grb::from(rgb);
        assert_eq!(color, Grb::new(10, 20, 30));
        assert_eq!(Rgb::from(color), rgb);
    }

    #[test]
    fn test_map_uses_table_per_channel() {
        let identity = identity_lut();
        let mut zero_green = identity_lut();
        zero_green[0x34] = 0;

        let color = Grb::new(0x34, 0x34, 0x34);
        assert_eq!(
            color.map(&zero_green, &identity, &identity),
            Grb::new(0x34, 0, 0x34)
        );
        assert_eq!(color.map(&identity, &identity, &identity), color);
    }
}
