//! Interval gates and palette rotation counters
//!
//! Nothing here sleeps. A gate is polled with the current time and reports
//! whether its interval has elapsed since it last fired.

use embassy_time::{Duration, Instant};

use crate::effect::{EffectId, FrameContext};

/// Fires at most once per interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalGate {
    interval: Duration,
    last_fired: Instant,
}

impl IntervalGate {
    /// Create a gate whose first interval starts at `start`
    pub const fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            last_fired: start,
        }
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    pub const fn last_fired(&self) -> Instant {
        self.last_fired
    }

    /// Check the gate at `now`
    ///
    /// Returns `true` if at least one interval has passed since the gate
    /// last fired. Firings stay on the interval grid, so late polls do not
    /// drift the schedule. After falling behind by two intervals or more the
    /// grid restarts at `now` instead of firing a burst of catch-ups.
    pub fn ready(&mut self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.last_fired);
        if elapsed < self.interval {
            return false;
        }
        if elapsed >= self.interval + self.interval {
            self.last_fired = now;
        } else {
            self.last_fired += self.interval;
        }
        true
    }
}

#[derive(Debug, Clone, Copy)]
struct Rotation {
    offset: u8,
    gate: Option<IntervalGate>,
}

/// Palette offsets of all effects
///
/// Each rotating effect owns an offset that advances by one, wrapping at
/// 256, whenever its rotation interval elapses while it is being rendered.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    rotations: [Rotation; EffectId::COUNT],
}

impl AnimationClock {
    /// Create a clock with all offsets at zero
    pub fn new(start: Instant) -> Self {
        let rotations = EffectId::ALL.map(|effect| Rotation {
            offset: 0,
            gate: effect
                .rotation_interval()
                .map(|interval| IntervalGate::new(interval, start)),
        });
        Self { rotations }
    }

    /// Current palette offset of `effect`
    pub const fn palette_offset(&self, effect: EffectId) -> u8 {
        self.rotations[effect.index()].offset
    }

    /// Frame inputs for rendering `effect` at `now`
    pub const fn frame(&self, effect: EffectId, now: Instant) -> FrameContext {
        FrameContext::new(now, self.palette_offset(effect))
    }

    /// Advance the palette offset of `effect` if its interval has elapsed
    pub fn advance(&mut self, effect: EffectId, now: Instant) {
        let rotation = &mut self.rotations[effect.index()];
        let Some(gate) = rotation.gate.as_mut() else {
            return;
        };
        if gate.ready(now) {
            rotation.offset = rotation.offset.wrapping_add(1);
        }
    }
}
