mod tests {
    use embassy_time::Instant;
    use selenite_glow::math8::{
        beat8, beatsin8, beatsin16, blend8, ease_in_out_quad, qadd8, qsub8, scale8, sin8, sin16,
    };

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_blend8_endpoints_are_exact() {
        for a in (0..=255u8).step_by(15) {
            for b in (0..=255u8).step_by(17) {
                assert_eq!(blend8(a, b, 0), a);
                assert_eq!(blend8(a, b, 255), b);
            }
        }
    }

    #[test]
    fn test_saturating_ops() {
        assert_eq!(qsub8(10, 20), 0);
        assert_eq!(qsub8(200, 20), 180);
        assert_eq!(qadd8(200, 100), 255);
        assert_eq!(qadd8(20, 30), 50);
    }

    #[test]
    fn test_sin8_quadrants() {
        assert_eq!(sin8(0), 128);
        assert_eq!(sin8(64), 255);
        assert_eq!(sin8(128), 128);
        assert_eq!(sin8(192), 1);
    }

    #[test]
    fn test_sin16_quadrants() {
        assert_eq!(sin16(0), 0);
        assert!(sin16(16384) > 32000);
        assert!(sin16(49152) < -32000);
    }

    #[test]
    fn test_ease_in_out_quad_endpoints() {
        assert_eq!(ease_in_out_quad(0), 0);
        assert_eq!(ease_in_out_quad(255), 255);
        assert!(ease_in_out_quad(64) < 64);
        assert!(ease_in_out_quad(192) > 192);
    }

    #[test]
    fn test_beat8_starts_at_zero() {
        assert_eq!(beat8(60, Instant::from_millis(0)), 0);
    }

    #[test]
    fn test_beat8_one_bpm_advances_slowly() {
        // One beat per minute: a quarter of a cycle after 15 seconds
        let phase = beat8(1, Instant::from_millis(15_000));
        assert!((62..=66).contains(&phase));
    }

    #[test]
    fn test_beatsin8_stays_in_range() {
        for ms in (0..120_000u64).step_by(37) {
            let value = beatsin8(12, 64, 92, 0, Instant::from_millis(ms));
            assert!((64..=92).contains(&value), "{value} at {ms}ms");
        }
    }

    #[test]
    fn test_beatsin16_stays_in_range() {
        for ms in (0..120_000u64).step_by(41) {
            let value = beatsin16(1, 64, 92, 0, Instant::from_millis(ms));
            assert!((64..=92).contains(&value), "{value} at {ms}ms");
        }
    }
}
