mod tests {
    use lightctl::ChannelTransition;
    use lightctl::color::{OFF, limit_brightness, rgbw};

    #[test]
    fn test_flat_target() {
        let start = vec![OFF, rgbw(10, 20, 30, 40), rgbw(255, 255, 255, 255)];
        let target = rgbw(0, 255, 0, 0);
        let transition = ChannelTransition::new(start.clone(), target, false);

        assert_eq!(transition.len(), 3);
        assert_eq!(transition.start(), start.as_slice());
        assert_eq!(transition.end(), &[target; 3]);
    }

    #[test]
    fn test_not_brighter_limits_each_led() {
        let start = vec![OFF, rgbw(0, 0, 128, 0), rgbw(255, 255, 255, 255)];
        let target = rgbw(200, 100, 50, 0);
        let transition = ChannelTransition::new(start, target, true);

        assert_eq!(transition.end()[0], OFF);
        assert_eq!(transition.end()[1], limit_brightness(target, rgbw(0, 0, 128, 0)));
        assert_eq!(transition.end()[2], target);
    }

    #[test]
    fn test_not_brighter_from_black_target() {
        // A black target is never limited, there is nothing to scale
        let transition = ChannelTransition::new(vec![rgbw(1, 1, 1, 1); 2], OFF, true);
        assert_eq!(transition.end(), &[OFF; 2]);
    }

    #[test]
    fn test_render() {
        let transition =
            ChannelTransition::new(vec![OFF, rgbw(200, 0, 0, 0)], rgbw(100, 0, 0, 200), false);
        let mut leds = [OFF; 2];

        transition.render(0.0, &mut leds);
        assert_eq!(leds, [OFF, rgbw(200, 0, 0, 0)]);

        transition.render(0.5, &mut leds);
        assert_eq!(leds, [rgbw(50, 0, 0, 100), rgbw(150, 0, 0, 100)]);

        transition.render(1.0, &mut leds);
        assert_eq!(leds, [rgbw(100, 0, 0, 200); 2]);
    }

    #[test]
    fn test_empty_channel() {
        let transition = ChannelTransition::new(Vec::new(), OFF, true);
        assert!(transition.is_empty());
        transition.render(0.5, &mut []);
    }
}
