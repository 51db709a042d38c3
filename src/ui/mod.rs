// ── Immediate-mode UI shell ───────────────────────────────────────────────────
//
// Owns the egui context and its winit translation state.  The widget tree is
// re-described from scratch every frame (`draw_panels`): a fixed 48 px
// sidebar and a content region sized to the remaining width.  No layout
// state survives between frames.

pub(crate) mod layout;

use std::sync::Arc;

use winit::event::WindowEvent;
use winit::window::Window;

use crate::{assets, theme};

/// Output of one UI frame, ready for the GPU pass.
pub(crate) struct FrameOutput {
    pub(crate) textures_delta: egui::TexturesDelta,
    pub(crate) primitives: Vec<egui::ClippedPrimitive>,
    pub(crate) pixels_per_point: f32,
}

/// The immediate-mode UI context bound to the main window.
pub(crate) struct UiShell {
    context: egui::Context,
    state: egui_winit::State,
}

impl UiShell {
    /// Build the UI context for `window` and stage the embedded font.
    ///
    /// Font staging is advisory: a blob that fails validation leaves the
    /// context on egui's built-in fonts, with a warning.
    pub(crate) fn new(window: &Window, font_blob: &'static [u8]) -> Self {
        let context = egui::Context::default();
        install_fonts(&context, font_blob);
        apply_style(&context);

        let state = egui_winit::State::new(
            context.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        log::info!("UI context initialized");

        Self { context, state }
    }

    /// Forward one window event to the UI context.
    pub(crate) fn on_window_event(&mut self, window: &Window, event: &WindowEvent) {
        let _ = self.state.on_window_event(window, event);
    }

    /// Run one immediate-mode frame and return its tessellated output.
    pub(crate) fn run_frame(&mut self, window: &Window) -> FrameOutput {
        let input = self.state.take_egui_input(window);
        let output = self.context.run(input, draw_panels);
        self.state
            .handle_platform_output(window, output.platform_output);

        let primitives = self
            .context
            .tessellate(output.shapes, output.pixels_per_point);

        FrameOutput {
            textures_delta: output.textures_delta,
            primitives,
            pixels_per_point: output.pixels_per_point,
        }
    }
}

/// Re-issue the fixed two-panel description from constants and the current
/// window dimensions.
fn draw_panels(ctx: &egui::Context) {
    let window = ctx.screen_rect().size();

    let sidebar = layout::sidebar_rect(window);
    egui::Area::new(egui::Id::new("sidebar"))
        .fixed_pos(sidebar.min)
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(theme::color32(theme::SIDEBAR_FILL))
                .stroke(egui::Stroke::new(1.0, theme::color32(theme::SIDEBAR_BORDER)))
                .show(ui, |ui| {
                    ui.set_min_size(sidebar.size());
                    ui.set_max_width(layout::SIDEBAR_WIDTH);
                    ui.vertical_centered(|ui| {
                        ui.add_space(4.0);
                        let _ = ui.button("☰");
                    });
                });
        });

    let content = layout::content_rect(window);
    egui::Area::new(egui::Id::new("content"))
        .fixed_pos(content.min)
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(theme::color32(theme::CONTENT_FILL))
                .show(ui, |ui| {
                    ui.set_min_size(content.size());
                    ui.set_max_size(content.size());
                    ui.centered_and_justified(|ui| {
                        ui.label("Hello, egui + wgpu!");
                    });
                });
        });
}

/// Stage the embedded font, preferring it for proportional text.
fn install_fonts(context: &egui::Context, blob: &'static [u8]) {
    log::info!("loading embedded UI font ({} bytes)", blob.len());
    if !assets::is_valid_font(blob) {
        log::warn!("embedded font failed to parse; using built-in default font");
        return;
    }

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        assets::UI_FONT_NAME.to_owned(),
        Arc::new(egui::FontData::from_static(blob)),
    );
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, assets::UI_FONT_NAME.to_owned());
    context.set_fonts(fonts);
    log::info!("embedded UI font staged");
}

/// Dark visuals plus the demo's fixed text size.
fn apply_style(context: &egui::Context) {
    context.set_visuals(egui::Visuals::dark());
    context.all_styles_mut(|style| {
        for font_id in style.text_styles.values_mut() {
            font_id.size = assets::UI_FONT_SIZE;
        }
    });
}
