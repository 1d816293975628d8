mod tests {
    use selenite_glow::{Crossfade, Rgb, Slot};

    fn filled(crossfade: &mut Crossfade<4>) {
        *crossfade.source_mut(Slot::First) = [
            Rgb::new(255, 0, 0),
            Rgb::new(10, 20, 30),
            Rgb::new(0, 0, 0),
            Rgb::new(200, 100, 50),
        ];
        *crossfade.source_mut(Slot::Second) = [
            Rgb::new(0, 0, 255),
            Rgb::new(30, 20, 10),
            Rgb::new(255, 255, 255),
            Rgb::new(1, 2, 3),
        ];
    }

    #[test]
    fn test_starts_on_first_source() {
        let crossfade = Crossfade::<4>::new();
        assert_eq!(crossfade.ratio(), 0);
        assert_eq!(crossfade.target(), Slot::First);
        assert_eq!(crossfade.output(), &[Rgb::default(); 4]);
    }

    #[test]
    fn test_ratio_zero_shows_first_source() {
        let mut crossfade = Crossfade::<4>::new();
        filled(&mut crossfade);
        crossfade.step();
        assert_eq!(crossfade.output(), crossfade.source(Slot::First));
        assert_eq!(crossfade.ratio(), 0);
    }

    #[test]
    fn test_ratio_full_shows_second_source() {
        let mut crossfade = Crossfade::<4>::new();
        filled(&mut crossfade);
        crossfade.ramp_toward(Slot::Second);
        for _ in 0..300 {
            crossfade.step();
        }
        assert_eq!(crossfade.ratio(), 255);
        assert_eq!(crossfade.output(), crossfade.source(Slot::Second));
    }

    #[test]
    fn test_ratio_moves_one_unit_per_step() {
        let mut crossfade = Crossfade::<4>::new();
        crossfade.ramp_toward(Slot::Second);
        for expected in 1..=10 {
            crossfade.step();
            assert_eq!(crossfade.ratio(), expected);
        }
    }

    #[test]
    fn test_reversal_continues_from_current_ratio() {
        let mut crossfade = Crossfade::<4>::new();
        crossfade.ramp_toward(Slot::Second);
        for _ in 0..100 {
            crossfade.step();
        }
        crossfade.ramp_toward(Slot::First);
        crossfade.step();
        assert_eq!(crossfade.ratio(), 99);
    }

    #[test]
    fn test_ratio_stays_in_bounds_under_flips() {
        let mut crossfade = Crossfade::<4>::new();
        let mut target = Slot::First;
        let mut seed: u32 = 0x1234_5678;
        for _ in 0..20_000 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            if seed >> 28 == 0 {
                target = target.other();
                crossfade.ramp_toward(target);
            }
            let before = crossfade.ratio();
            crossfade.step();
            let after = crossfade.ratio();
            assert!(before.abs_diff(after) <= 1);
        }
    }

    #[test]
    fn test_midpoint_blend() {
        let mut crossfade = Crossfade::<4>::new();
        filled(&mut crossfade);
        crossfade.ramp_toward(Slot::Second);
        for _ in 0..129 {
            crossfade.step();
        }
        // output was composited at ratio 128
        assert_eq!(crossfade.output()[2], Rgb::new(128, 128, 128));
    }
}
