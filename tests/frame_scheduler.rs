mod tests {
    use embassy_time::{Duration, Instant};
    use selenite_glow::math8::scale8;
    use selenite_glow::{
        ButtonInput, ClickChannel, ClickSender, EffectId, FrameScheduler, OutputConfig,
        OutputDriver, Renderer, RendererConfig, Rgb, Slot,
    };

    const LEDS: usize = 5;
    const QUEUE: usize = 4;

    fn ms(value: u64) -> Instant {
        Instant::from_millis(value)
    }

    #[derive(Default)]
    struct RecordingDriver {
        frames: Vec<Vec<Rgb>>,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames.push(colors.to_vec());
        }
    }

    /// Clicks once at a fixed time
    struct ScriptedButton<'a> {
        clicks: ClickSender<'a, QUEUE>,
        at: Instant,
        done: bool,
    }

    impl ButtonInput for ScriptedButton<'_> {
        fn poll(&mut self, now: Instant) {
            if !self.done && now >= self.at {
                self.clicks.click().unwrap();
                self.done = true;
            }
        }
    }

    const PASSTHROUGH: OutputConfig = OutputConfig {
        brightness: 255,
        color_correction: Rgb {
            r: 255,
            g: 255,
            b: 255,
        },
    };

    #[test]
    fn test_writes_one_frame_per_tick() {
        let channel = ClickChannel::<QUEUE>::new();
        let renderer =
            Renderer::<LEDS, QUEUE>::new(channel.receiver(), &RendererConfig::default(), ms(0));
        let mut scheduler =
            FrameScheduler::new(renderer, RecordingDriver::default(), (), &PASSTHROUGH);

        for t in 0..10 {
            scheduler.tick(ms(t * 7));
        }
        let frames = &scheduler.output().frames;
        assert_eq!(frames.len(), 10);
        assert!(frames.iter().all(|frame| frame.len() == LEDS));
    }

    #[test]
    fn test_passthrough_writes_crossfade_output() {
        let channel = ClickChannel::<QUEUE>::new();
        let renderer =
            Renderer::<LEDS, QUEUE>::new(channel.receiver(), &RendererConfig::default(), ms(0));
        let mut scheduler =
            FrameScheduler::new(renderer, RecordingDriver::default(), (), &PASSTHROUGH);

        scheduler.tick(ms(0));
        scheduler.tick(ms(20));
        let written = scheduler.output().frames.last().unwrap();
        assert_eq!(
            written.as_slice(),
            scheduler.renderer().crossfade().output().as_slice()
        );
    }

    #[test]
    fn test_default_output_applies_correction_and_brightness() {
        let channel = ClickChannel::<QUEUE>::new();
        let renderer =
            Renderer::<LEDS, QUEUE>::new(channel.receiver(), &RendererConfig::default(), ms(0));
        let config = OutputConfig::default();
        let mut scheduler = FrameScheduler::new(renderer, RecordingDriver::default(), (), &config);

        scheduler.tick(ms(0));
        scheduler.tick(ms(20));
        let output = *scheduler.renderer().crossfade().output();
        let written = scheduler.output().frames.last().unwrap();
        for (pixel, source) in written.iter().zip(output) {
            assert_eq!(pixel.r, scale8(scale8(source.r, 255), 160));
            assert_eq!(pixel.g, scale8(scale8(source.g, 176), 160));
            assert_eq!(pixel.b, scale8(scale8(source.b, 240), 160));
        }
    }

    #[test]
    fn test_filters_do_not_touch_engine_buffers() {
        let channel = ClickChannel::<QUEUE>::new();
        let renderer =
            Renderer::<LEDS, QUEUE>::new(channel.receiver(), &RendererConfig::default(), ms(0));
        let config = OutputConfig {
            brightness: 0,
            ..OutputConfig::default()
        };
        let mut scheduler = FrameScheduler::new(renderer, RecordingDriver::default(), (), &config);

        scheduler.tick(ms(0));
        scheduler.tick(ms(20));
        let written = scheduler.output().frames.last().unwrap();
        assert!(written.iter().all(|pixel| *pixel == Rgb::default()));
        assert_ne!(
            scheduler.renderer().crossfade().output(),
            &[Rgb::default(); LEDS]
        );
    }

    #[test]
    fn test_button_click_switches_effect() {
        let channel = ClickChannel::<QUEUE>::new();
        let renderer =
            Renderer::<LEDS, QUEUE>::new(channel.receiver(), &RendererConfig::default(), ms(0));
        let button = ScriptedButton {
            clicks: channel.sender(),
            at: ms(500),
            done: false,
        };
        let mut scheduler =
            FrameScheduler::new(renderer, RecordingDriver::default(), button, &PASSTHROUGH);

        for t in (0..=500).step_by(20) {
            scheduler.tick(ms(t));
        }
        assert_eq!(scheduler.renderer().active_effect(), EffectId::CoolMoon);
        assert_eq!(scheduler.renderer().crossfade().target(), Slot::Second);
        assert_eq!(scheduler.renderer().crossfade().ratio(), 0);

        for t in (520..=1000).step_by(20) {
            scheduler.tick(ms(t));
        }
        assert_eq!(scheduler.renderer().crossfade().ratio(), 25);
    }

    #[test]
    fn test_tick_reports_next_blend_step() {
        let channel = ClickChannel::<QUEUE>::new();
        let renderer =
            Renderer::<LEDS, QUEUE>::new(channel.receiver(), &RendererConfig::default(), ms(0));
        let mut scheduler =
            FrameScheduler::new(renderer, RecordingDriver::default(), (), &PASSTHROUGH);

        let result = scheduler.tick(ms(0));
        assert_eq!(result.next_deadline, ms(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));

        // A late tick keeps the 20 ms grid
        let result = scheduler.tick(ms(27));
        assert_eq!(result.next_deadline, ms(40));
        assert_eq!(result.sleep_duration, Duration::from_millis(13));
    }
}
