//! Desktop preview app for selenite-glow effects
//!
//! Shows the crossfade output and both source buffers of a simulated strip.
//! The "Click" button feeds the same click queue a hardware button would.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use selenite_glow::{
    ClickChannel, ClickSender, EffectId, Instant, OutputConfig, Renderer, RendererConfig, Rgb,
    Slot, filter::FilterProcessor,
};

/// Number of LEDs in the simulated strip
const LEDS: usize = 5;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 32.0;

/// Gap between LEDs
const LED_GAP: f32 = 4.0;

/// Click queue size
const CLICK_QUEUE_SIZE: usize = 4;

/// Static click channel shared by the UI and the renderer
static CLICKS: ClickChannel<CLICK_QUEUE_SIZE> = ClickChannel::<CLICK_QUEUE_SIZE>::new();

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 360.0])
            .with_title("Selenite Glow Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "selenite-glow-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

fn new_renderer() -> Renderer<'static, LEDS, CLICK_QUEUE_SIZE> {
    Renderer::new(
        CLICKS.receiver(),
        &RendererConfig::default(),
        Instant::from_millis(0),
    )
}

struct PreviewApp {
    renderer: Renderer<'static, LEDS, CLICK_QUEUE_SIZE>,
    clicks: ClickSender<'static, CLICK_QUEUE_SIZE>,
    filters: FilterProcessor,

    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Apply brightness and color correction like the hardware does
    apply_filters: bool,
    /// Dropped clicks since start
    dropped: usize,
}

impl PreviewApp {
    fn new() -> Self {
        Self {
            renderer: new_renderer(),
            clicks: CLICKS.sender(),
            filters: FilterProcessor::new(&OutputConfig::default()),
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            apply_filters: false,
            dropped: 0,
        }
    }

    /// Restart from the first effect at time zero
    fn reset(&mut self) {
        while CLICKS.try_receive().is_ok() {}
        self.renderer = new_renderer();
        self.t_ms = 0;
        self.last_frame = StdInstant::now();
    }

    fn click(&mut self) {
        if self.clicks.click().is_err() {
            self.dropped += 1;
        }
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = if delta_ms.is_finite() {
                delta_ms.max(0.0) as u64
            } else {
                0
            };
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }
}

fn draw_strip(ui: &mut egui::Ui, label: &str, pixels: &[Rgb]) {
    ui.horizontal(|ui| {
        ui.add_sized([80.0, LED_SIZE], egui::Label::new(label));

        let led_pitch = LED_SIZE + LED_GAP;
        #[allow(clippy::cast_precision_loss)]
        let width = pixels.len() as f32 * led_pitch;
        let (response, painter) =
            ui.allocate_painter(egui::vec2(width, LED_SIZE), egui::Sense::hover());
        let origin = response.rect.min;

        #[allow(clippy::cast_precision_loss)]
        for (i, pixel) in pixels.iter().enumerate() {
            let x = origin.x + i as f32 * led_pitch;
            let rect = egui::Rect::from_min_size(
                egui::pos2(x, origin.y),
                egui::vec2(LED_SIZE, LED_SIZE),
            );
            let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
            painter.rect_filled(rect, 4.0, color);
        }
    });
}

fn slot_label(effect: EffectId, slot: Slot, target: Slot) -> String {
    let marker = if slot == target { " ◀" } else { "" };
    format!("{}{marker}", effect.as_str())
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();

        // Same order as the hardware loop: render, output, then clicks
        let now = Instant::from_millis(self.t_ms);
        let mut output = *self.renderer.render(now);
        if self.apply_filters {
            self.filters.apply(&mut output);
        }
        self.renderer.process_clicks();

        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("⏮ Reset").clicked() {
                    self.reset();
                }
                if ui
                    .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                    .clicked()
                {
                    self.playing = !self.playing;
                }
                ui.add_space(8.0);
                if ui.button("Click").clicked() {
                    self.click();
                }
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let secs = self.t_ms / 1000;
                let ms = self.t_ms % 1000;
                ui.label(format!("Time: {secs}.{ms:03}s"));
                ui.add_space(8.0);
                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=10.0).logarithmic(true));
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.checkbox(&mut self.apply_filters, "Output filters");
                ui.add_space(8.0);
                ui.label(format!("Dropped clicks: {}", self.dropped));
            });

            ui.add_space(16.0);

            let crossfade = self.renderer.crossfade();
            let target = crossfade.target();
            ui.label(format!(
                "Active: {}  ratio: {}",
                self.renderer.active_effect().as_str(),
                crossfade.ratio()
            ));

            ui.add_space(8.0);

            draw_strip(ui, "output", &output);
            ui.add_space(8.0);
            for slot in Slot::BOTH {
                let label = slot_label(self.renderer.effect_in(slot), slot, target);
                draw_strip(ui, &label, crossfade.source(slot));
            }
        });
    }
}
