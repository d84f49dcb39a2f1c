mod tests {
    use myrtio_dotstar::Brightness;

    #[test]
    fn test_set_value_roundtrip() {
        let mut brightness = Brightness::default();
        for v in 0..=255u8 {
            brightness.set(v);
            assert_eq!(brightness.value(), v);
        }
    }

    #[test]
    fn test_zero_is_passthrough() {
        assert!(Brightness::new(0).is_passthrough());
        assert!(!Brightness::new(1).is_passthrough());
        assert!(!Brightness::new(255).is_passthrough());
    }

    #[test]
    fn test_apply_fixed_point() {
        // factor/256, truncated down
        assert_eq!(Brightness::new(255).apply(255), 254);
        assert_eq!(Brightness::new(255).apply(128), 127);
        assert_eq!(Brightness::new(128).apply(255), 127);
        assert_eq!(Brightness::new(128).apply(128), 64);
        assert_eq!(Brightness::new(1).apply(255), 0);
        assert_eq!(Brightness::new(200).apply(0), 0);
    }
}
