#![no_std]

pub mod channel;
pub mod click;
pub mod clock;
pub mod color;
pub mod config;
pub mod crossfade;
pub mod effect;
pub mod filter;
pub mod frame_scheduler;
pub mod math8;
pub mod noise;
pub mod palette;
pub mod renderer;
pub mod selector;

pub use click::{Click, ClickChannel, ClickReceiver, ClickSender};
pub use crossfade::{Crossfade, Slot};
pub use effect::{EffectId, EffectSlot};
pub use filter::OutputConfig;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use palette::GradientPalette;
pub use renderer::{Renderer, RendererConfig};
pub use selector::{CatalogError, EffectCatalog, EffectSelector, Selection};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// Channel ordering of the strip is up to the driver.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

/// Button adapter
///
/// Polled once per loop iteration. Detected clicks are registered through a
/// [`ClickSender`]; an interrupt driven button may register them at any time
/// and leave `poll` empty.
pub trait ButtonInput {
    fn poll(&mut self, now: Instant);
}

/// Buttonless setups
impl ButtonInput for () {
    fn poll(&mut self, _now: Instant) {}
}
