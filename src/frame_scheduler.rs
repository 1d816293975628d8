//! Frame loop
//!
//! One [`FrameScheduler::tick`] is one iteration of the main loop. Nothing
//! here sleeps, the caller decides whether to wait for the returned
//! deadline or to spin.

use embassy_time::{Duration, Instant};

use crate::color::Rgb;
use crate::filter::{FilterProcessor, OutputConfig};
use crate::{ButtonInput, OutputDriver, Renderer};

/// Result of a frame tick
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// Time of the next crossfade step
    pub next_deadline: Instant,
    /// Time left until `next_deadline`, zero when behind
    pub sleep_duration: Duration,
}

/// Runs the renderer, the output filters, the driver and the button
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, driver, button, &OutputConfig::default());
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     Timer::at(result.next_deadline).await;
/// }
/// ```
pub struct FrameScheduler<
    'a,
    O: OutputDriver,
    B: ButtonInput,
    const LEDS: usize,
    const CLICK_QUEUE: usize,
> {
    output: O,
    button: B,
    renderer: Renderer<'a, LEDS, CLICK_QUEUE>,
    filters: FilterProcessor,
    frame: [Rgb; LEDS],
}

impl<'a, O: OutputDriver, B: ButtonInput, const LEDS: usize, const CLICK_QUEUE: usize>
    FrameScheduler<'a, O, B, LEDS, CLICK_QUEUE>
{
    pub fn new(
        renderer: Renderer<'a, LEDS, CLICK_QUEUE>,
        output: O,
        button: B,
        config: &OutputConfig,
    ) -> Self {
        Self {
            output,
            button,
            renderer,
            filters: FilterProcessor::new(config),
            frame: [Rgb::default(); LEDS],
        }
    }

    /// Run one loop iteration
    ///
    /// 1. Renders the frame, stepping the crossfade when it is due
    /// 2. Applies the output filters to a copy and writes it to the driver
    /// 3. Polls the button and applies the clicks it produced
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        self.frame = *self.renderer.render(now);
        self.filters.apply(&mut self.frame);
        self.output.write(&self.frame);

        self.button.poll(now);
        self.renderer.process_clicks();

        let next_deadline = self.renderer.next_blend_step();
        FrameResult {
            next_deadline,
            sleep_duration: next_deadline.saturating_duration_since(now),
        }
    }

    pub const fn renderer(&self) -> &Renderer<'a, LEDS, CLICK_QUEUE> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer<'a, LEDS, CLICK_QUEUE> {
        &mut self.renderer
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub fn button_mut(&mut self) -> &mut B {
        &mut self.button
    }

    pub const fn filters(&self) -> &FilterProcessor {
        &self.filters
    }
}
