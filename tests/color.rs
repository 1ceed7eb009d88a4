mod tests {
    use lightctl::color::{
        OFF, blend_colors, parse_hex_color, rgbw, rgbw_from_u32, rgbw_to_u32, white,
    };
    use lightctl::{Error, Rgbw};

    const RED: Rgbw = rgbw(0, 255, 0, 0);
    const BLUE: Rgbw = rgbw(0, 0, 0, 255);
    const WHITE: Rgbw = rgbw(255, 255, 255, 255);

    #[test]
    fn test_rgbw_from_u32() {
        let color = rgbw_from_u32(0x1122_3344);
        assert_eq!(white(color), 0x11);
        assert_eq!(color.r, 0x22);
        assert_eq!(color.g, 0x33);
        assert_eq!(color.b, 0x44);
        assert_eq!(rgbw_to_u32(color), 0x1122_3344);
        assert_eq!(rgbw_from_u32(0x00FF_0000), RED);
        assert_eq!(rgbw_to_u32(OFF), 0);
    }

    #[test]
    fn test_blend_colors() {
        assert_eq!(blend_colors(RED, BLUE, 0.0), RED);
        assert_eq!(blend_colors(RED, BLUE, 1.0), BLUE);
        assert_eq!(blend_colors(RED, BLUE, 0.5), rgbw(0, 127, 0, 127));
        assert_eq!(blend_colors(OFF, WHITE, 0.5), rgbw(127, 127, 127, 127));
        assert_eq!(blend_colors(WHITE, OFF, 1.0), OFF);
        assert_eq!(blend_colors(WHITE, OFF, 0.0), WHITE);
    }

    #[test]
    fn test_blend_colors_truncates() {
        assert_eq!(blend_colors(OFF, WHITE, 0.999), rgbw(254, 254, 254, 254));
        assert_eq!(blend_colors(rgbw(0, 0, 0, 3), rgbw(0, 0, 0, 4), 0.99).b, 3);
    }

    #[test]
    fn test_blend_colors_is_monotonic() {
        let from = rgbw(10, 200, 0, 255);
        let to = rgbw(250, 20, 0, 0);
        let mut previous = from;
        for step in 0..=100u8 {
            let current = blend_colors(from, to, f32::from(step) / 100.0);
            assert!(white(current) >= white(previous));
            assert!(current.r <= previous.r);
            assert_eq!(current.g, 0);
            assert!(current.b <= previous.b);
            previous = current;
        }
        assert_eq!(previous, to);
    }

    #[test]
    fn test_blend_colors_same_color_is_exact() {
        for value in 0..=255u8 {
            let color = rgbw(value, value, 255 - value, value / 2);
            for step in 0..=100u8 {
                assert_eq!(blend_colors(color, color, f32::from(step) / 100.0), color);
            }
        }
    }

    #[test]
    fn test_blend_colors_steps_from_start() {
        // Offset from `a`, not a weighted sum of both ends
        assert_eq!(blend_colors(rgbw(0, 2, 0, 0), rgbw(0, 77, 0, 0), 0.52).r, 41);
    }

    #[test]
    fn test_blend_colors_out_of_range_alpha_saturates() {
        assert_eq!(blend_colors(OFF, WHITE, 2.0), WHITE);
        assert_eq!(blend_colors(WHITE, OFF, 2.0), OFF);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("00ff0000").unwrap(), RED);
        assert_eq!(parse_hex_color("0x00FF0000").unwrap(), RED);
        assert_eq!(parse_hex_color("ffffffff").unwrap(), WHITE);
        assert_eq!(parse_hex_color("ff").unwrap(), BLUE);
        assert_eq!(parse_hex_color("0").unwrap(), OFF);
    }

    #[test]
    fn test_parse_hex_color_rejects_garbage() {
        for input in ["", "0x", "red", "+ff", "1ffffffff", "ff ff"] {
            assert!(
                matches!(parse_hex_color(input), Err(Error::InvalidColor(_))),
                "{input:?} should be rejected"
            );
        }
    }
}
