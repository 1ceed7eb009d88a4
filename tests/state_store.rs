mod tests {
    use std::fs;

    use lightctl::color::{OFF, rgbw, rgbw_from_u32};
    use lightctl::state_store::{read_colors, write_colors};
    use lightctl::{Error, StateStore};

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("leds0"));
        assert_eq!(store.load(5), vec![OFF; 5]);
        assert!(matches!(
            read_colors(store.path(), 5),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("leds0"));
        let colors = vec![rgbw(1, 2, 3, 4), rgbw(255, 0, 0, 0), OFF];

        store.save(&colors);
        assert_eq!(store.load(3), colors);
    }

    #[test]
    fn test_file_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leds0");
        write_colors(&path, &[rgbw_from_u32(0x1122_3344), rgbw_from_u32(0xFF00_00AA)]).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(bytes, [0x44, 0x33, 0x22, 0x11, 0xAA, 0x00, 0x00, 0xFF]);
    }

    #[test]
    fn test_load_pads_short_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leds1");
        // Two whole colors and a partial third one
        fs::write(&path, [0x00_u8, 0x00, 0xFF, 0x00, 0x01, 0x00, 0x00, 0x00, 0x07, 0x07]).unwrap();

        let colors = StateStore::new(&path).load(4);
        assert_eq!(
            colors,
            vec![rgbw(0, 255, 0, 0), rgbw(0, 0, 0, 1), OFF, OFF]
        );
    }

    #[test]
    fn test_load_ignores_excess_data() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("leds0"));
        store.save(&[rgbw(9, 9, 9, 9); 10]);

        assert_eq!(store.load(3), vec![rgbw(9, 9, 9, 9); 3]);
        assert_eq!(read_colors(store.path(), 3).unwrap().len(), 3);
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leds0");
        fs::write(&path, b"").unwrap();
        assert_eq!(StateStore::new(&path).load(2), vec![OFF; 2]);
    }

    #[test]
    fn test_save_overwrites_longer_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("leds0"));
        store.save(&[rgbw(1, 1, 1, 1); 4]);
        store.save(&[rgbw(2, 2, 2, 2); 2]);

        assert_eq!(fs::read(store.path()).unwrap().len(), 8);
        assert_eq!(store.load(4), vec![rgbw(2, 2, 2, 2), rgbw(2, 2, 2, 2), OFF, OFF]);
    }

    #[test]
    fn test_failed_save_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        // Parent directory does not exist
        let store = StateStore::new(dir.path().join("missing").join("leds0"));
        store.save(&[rgbw(1, 2, 3, 4)]);
        assert!(write_colors(store.path(), &[OFF]).is_err());
        assert_eq!(store.load(1), vec![OFF]);
    }
}
