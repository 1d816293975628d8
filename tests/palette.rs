mod tests {
    use selenite_glow::Rgb;
    use selenite_glow::palette::{EMERALD, FIRE, GradientPalette, HEAT, ICE, MOON, PLUM};

    const ALL: [GradientPalette; 6] = [ICE, FIRE, PLUM, EMERALD, MOON, HEAT];

    fn between(value: u8, a: u8, b: u8) -> bool {
        value >= a.min(b) && value <= a.max(b)
    }

    #[test]
    fn test_stop_positions_return_stop_colors() {
        for palette in ALL {
            let stops = palette.stops();
            for (i, stop) in stops.iter().enumerate() {
                // Repeated positions resolve to the later stop
                let shadowed = stops
                    .get(i + 1)
                    .is_some_and(|next| next.position == stop.position);
                if !shadowed {
                    assert_eq!(palette.color_at(stop.position), stop.color);
                }
            }
        }
    }

    #[test]
    fn test_interpolation_is_monotone_between_stops() {
        for palette in ALL {
            for window in palette.stops().windows(2) {
                let (lower, upper) = (window[0], window[1]);
                let mut previous = lower.color;
                for index in lower.position..upper.position {
                    let color = palette.color_at(index);
                    assert!(between(color.r, lower.color.r, upper.color.r));
                    assert!(between(color.g, lower.color.g, upper.color.g));
                    assert!(between(color.b, lower.color.b, upper.color.b));
                    assert!(between(color.r, previous.r, upper.color.r));
                    assert!(between(color.g, previous.g, upper.color.g));
                    assert!(between(color.b, previous.b, upper.color.b));
                    previous = color;
                }
            }
        }
    }

    #[test]
    fn test_scaled_color() {
        for palette in ALL {
            for index in (0..=255u8).step_by(5) {
                assert_eq!(palette.color_at_scaled(index, 255), palette.color_at(index));
                assert_eq!(palette.color_at_scaled(index, 0), Rgb::default());
            }
        }
    }

    #[test]
    fn test_fill_wraps_around_palette() {
        let mut leds = [Rgb::default(); 5];
        ICE.fill(&mut leds, 200, 51, 255);
        let expected = [200u8, 251, 46, 97, 148].map(|index| ICE.color_at(index));
        assert_eq!(leds, expected);
    }

    #[test]
    fn test_fill_applies_value() {
        let mut leds = [Rgb::default(); 3];
        PLUM.fill(&mut leds, 0, 1, 100);
        for (i, led) in leds.iter().enumerate() {
            let index = u8::try_from(i).unwrap();
            assert_eq!(*led, PLUM.color_at_scaled(index, 100));
        }
    }

    #[test]
    fn test_custom_palette() {
        const STOPS: [selenite_glow::palette::GradientStop; 2] = [
            selenite_glow::palette::GradientStop::new(0, 0, 0, 0),
            selenite_glow::palette::GradientStop::new(255, 255, 255, 255),
        ];
        const GREY: GradientPalette = GradientPalette::new(&STOPS);
        assert_eq!(GREY.color_at(0), Rgb::new(0, 0, 0));
        assert_eq!(GREY.color_at(255), Rgb::new(255, 255, 255));
        assert_eq!(GREY.color_at(128), Rgb::new(128, 128, 128));
    }
}
