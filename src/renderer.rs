use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::click::ClickReceiver;
use crate::clock::{AnimationClock, IntervalGate};
use crate::color::Rgb;
use crate::config::DEFAULT_BLEND_INTERVAL;
use crate::crossfade::{Crossfade, Slot};
use crate::effect::{EffectId, EffectSlot};
use crate::selector::{EffectCatalog, EffectSelector, Selection};

/// Configuration for the renderer
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Effects the button cycles through, in order
    pub catalog: EffectCatalog,
    /// Interval between crossfade steps
    pub blend_interval: Duration,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            catalog: EffectCatalog::default(),
            blend_interval: DEFAULT_BLEND_INTERVAL,
        }
    }
}

/// Renderer - owns the effects, their animation state and the crossfade
///
/// Both source slots are rendered on every call, the crossfade output is
/// composited from them once per blend interval.
pub struct Renderer<'a, const LEDS: usize, const CLICK_QUEUE: usize> {
    clicks: ClickReceiver<'a, CLICK_QUEUE>,
    blend_gate: IntervalGate,

    selector: EffectSelector,
    sources: [EffectSlot; 2],
    clock: AnimationClock,
    crossfade: Crossfade<LEDS>,
}

impl<'a, const LEDS: usize, const CLICK_QUEUE: usize> Renderer<'a, LEDS, CLICK_QUEUE> {
    /// Create a renderer showing the first catalog entry
    ///
    /// All interval gates start counting at `start`.
    pub fn new(
        clicks: ClickReceiver<'a, CLICK_QUEUE>,
        config: &RendererConfig,
        start: Instant,
    ) -> Self {
        let selector = EffectSelector::new(config.catalog.clone());
        let sources = Slot::BOTH.map(|slot| selector.effect_in(slot).to_slot());
        Self {
            clicks,
            blend_gate: IntervalGate::new(config.blend_interval, start),
            selector,
            sources,
            clock: AnimationClock::new(start),
            crossfade: Crossfade::new(),
        }
    }

    /// Render one frame
    ///
    /// Steps the crossfade if the blend interval has elapsed, then renders
    /// both sources for the next composite. Returns the current output.
    pub fn render(&mut self, now: Instant) -> &[Rgb; LEDS] {
        if self.blend_gate.ready(now) {
            self.crossfade.step();
        }

        for slot in Slot::BOTH {
            let effect = self.sources[slot.index()];
            let id = effect.id();
            self.clock.advance(id, now);
            effect.render(self.clock.frame(id, now), self.crossfade.source_mut(slot));
        }

        self.crossfade.output()
    }

    /// Apply all pending clicks
    ///
    /// Returns the number of clicks applied.
    pub fn process_clicks(&mut self) -> usize {
        let mut applied = 0;
        for _click in self.clicks.drain() {
            self.select_next();
            applied += 1;
        }
        applied
    }

    /// Switch to the next effect of the catalog
    pub fn select_next(&mut self) -> Selection {
        let selection = self.selector.select_next();
        self.sources[selection.slot.index()] = selection.effect.to_slot();
        self.crossfade.ramp_toward(selection.slot);
        #[cfg(feature = "esp32-log")]
        println!(
            "[Renderer] switching to {} ({:?}, ratio {})",
            selection.effect.as_str(),
            selection.slot,
            self.crossfade.ratio()
        );
        selection
    }

    /// Deadline of the next crossfade step
    pub fn next_blend_step(&self) -> Instant {
        self.blend_gate.last_fired() + self.blend_gate.interval()
    }

    pub fn active_effect(&self) -> EffectId {
        self.selector.active_effect()
    }

    pub const fn selector(&self) -> &EffectSelector {
        &self.selector
    }

    /// Effect rendered into `slot`
    pub const fn effect_in(&self, slot: Slot) -> EffectId {
        self.sources[slot.index()].id()
    }

    pub const fn crossfade(&self) -> &Crossfade<LEDS> {
        &self.crossfade
    }

    pub const fn clock(&self) -> &AnimationClock {
        &self.clock
    }
}
