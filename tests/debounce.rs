mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_sprite_animator::input::{
        ButtonEdges, Buttons, DebounceConfig, Debouncer, RawButtons,
    };

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_press_reported_after_stable_window() {
        let mut debouncer = Debouncer::new(&DebounceConfig::DEFAULT);
        assert!(!debouncer.update(true, at(0)));
        assert!(!debouncer.update(true, at(29)));
        assert!(debouncer.update(true, at(30)));
        assert!(debouncer.is_pressed());
        // Held: no repeats
        assert!(!debouncer.update(true, at(100)));
        assert!(!debouncer.update(true, at(5000)));
    }

    #[test]
    fn test_bounce_restarts_window() {
        let mut debouncer = Debouncer::new(&DebounceConfig::DEFAULT);
        assert!(!debouncer.update(true, at(0)));
        assert!(!debouncer.update(false, at(10)));
        assert!(!debouncer.update(true, at(20)));
        assert!(!debouncer.update(true, at(49)));
        assert!(debouncer.update(true, at(50)));
    }

    #[test]
    fn test_release_rearms() {
        let mut debouncer = Debouncer::new(&DebounceConfig::DEFAULT);
        debouncer.update(true, at(0));
        assert!(debouncer.update(true, at(30)));

        assert!(!debouncer.update(false, at(40)));
        assert!(!debouncer.update(false, at(70)));
        assert!(!debouncer.is_pressed());

        assert!(!debouncer.update(true, at(80)));
        assert!(debouncer.update(true, at(110)));
    }

    #[test]
    fn test_short_release_does_not_repeat() {
        let mut debouncer = Debouncer::new(&DebounceConfig::DEFAULT);
        debouncer.update(true, at(0));
        assert!(debouncer.update(true, at(30)));

        assert!(!debouncer.update(false, at(40)));
        assert!(!debouncer.update(true, at(45)));
        assert!(!debouncer.update(true, at(200)));
    }

    #[test]
    fn test_custom_window() {
        let config = DebounceConfig {
            stable_for: Duration::from_millis(5),
        };
        let mut debouncer = Debouncer::new(&config);
        debouncer.update(true, at(0));
        assert!(debouncer.update(true, at(5)));
    }

    #[test]
    fn test_buttons_are_independent() {
        let mut buttons = Buttons::new(&DebounceConfig::DEFAULT);
        let start = RawButtons {
            start: true,
            change: false,
        };
        let both = RawButtons {
            start: true,
            change: true,
        };

        assert_eq!(buttons.update(start, at(0)), ButtonEdges::NONE);
        assert_eq!(buttons.update(both, at(20)), ButtonEdges::NONE);
        assert_eq!(buttons.update(both, at(30)), ButtonEdges::START);
        assert_eq!(buttons.update(both, at(50)), ButtonEdges::CHANGE);
        assert!(!buttons.update(both, at(60)).any());
    }

    #[test]
    fn test_suppressed_press_needs_release() {
        let mut debouncer = Debouncer::new(&DebounceConfig::DEFAULT);
        debouncer.suppress_until_release(true, at(0));
        assert!(debouncer.is_pressed());
        assert!(!debouncer.update(true, at(30)));
        assert!(!debouncer.update(true, at(500)));

        assert!(!debouncer.update(false, at(510)));
        assert!(!debouncer.update(false, at(540)));
        assert!(!debouncer.update(true, at(550)));
        assert!(debouncer.update(true, at(580)));
    }

    #[test]
    fn test_suppress_ignores_released_line() {
        let mut debouncer = Debouncer::new(&DebounceConfig::DEFAULT);
        debouncer.suppress_until_release(false, at(0));
        assert!(!debouncer.is_pressed());
        assert!(!debouncer.update(true, at(10)));
        assert!(debouncer.update(true, at(40)));
    }
}
