// ── Application bootstrap & main loop ─────────────────────────────────────────
//
// A single `App` is created on startup and driven by the windowing
// library's callbacks.  All mutations happen on the event-loop thread —
// there is no global mutable state and no other thread.
//
// Bring-up is strictly phased: windowing subsystem → window → renderer →
// (advisory) native decoration → UI context + font.  Any fatal phase
// records its error, exits the loop, and `run` returns it; `main` then
// exits with status 1.  Teardown is by drop order, the reverse of
// acquisition.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::config::WindowConfig;
use crate::error::{MicaError, Result};
use crate::platform;
use crate::renderer::Gpu;
use crate::ui::UiShell;

// ── Window identity ───────────────────────────────────────────────────────────

/// Title bar text on every platform.
pub(crate) const APP_TITLE: &str = "Mica Demo";

/// Title the X11 decorator applies (platform suffix on that branch only).
pub(crate) const X11_TITLE: &str = "Mica Demo — X11";

// ── Public API ────────────────────────────────────────────────────────────────

/// Run the demo to completion: initialise the windowing subsystem, drive
/// the event/render loop until a quit signal, and tear everything down.
pub(crate) fn run(config: WindowConfig, font: &'static [u8]) -> Result<()> {
    let event_loop = EventLoop::new().map_err(MicaError::EventLoop)?;
    log::info!("windowing subsystem initialized");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, font);
    event_loop.run_app(&mut app).map_err(MicaError::EventLoop)?;

    match app.fatal.take() {
        Some(e) => Err(e),
        None => {
            log::info!("clean shutdown");
            Ok(())
        }
    }
}

// ── App state ─────────────────────────────────────────────────────────────────

/// Everything that exists only between window creation and shutdown.
/// Field order is teardown order: UI context first, then the renderer,
/// then the window itself.
struct Shell {
    ui: UiShell,
    gpu: Gpu,
    window: Arc<Window>,
}

/// Top-level state, owned by the event loop for the process lifetime.
struct App {
    config: WindowConfig,
    font: &'static [u8],
    /// Populated once by `resumed`; never re-initialised.
    shell: Option<Shell>,
    /// First fatal bring-up error; returned by `run` after the loop unwinds.
    fatal: Option<MicaError>,
    /// Quit signal observed.  Events queued in the same tick are still
    /// drained, but no further frame is requested or rendered.
    exiting: bool,
}

impl App {
    fn new(config: WindowConfig, font: &'static [u8]) -> Self {
        Self {
            config,
            font,
            shell: None,
            fatal: None,
            exiting: false,
        }
    }

    /// Phases 2–6: window, renderer, native decoration, UI context + font.
    fn bring_up(&self, event_loop: &ActiveEventLoop) -> Result<Shell> {
        let mut attributes = Window::default_attributes()
            .with_title(APP_TITLE)
            .with_inner_size(LogicalSize::new(
                f64::from(self.config.width),
                f64::from(self.config.height),
            ));
        if let Some(position) = centered_position(event_loop, self.config.width, self.config.height)
        {
            attributes = attributes.with_position(position);
        }
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .map_err(MicaError::Window)?,
        );
        log::info!(
            "window created: {}x{} logical",
            self.config.width,
            self.config.height
        );

        let gpu = Gpu::new(window.clone(), self.config.vsync)?;

        if self.config.decorate {
            let outcome = platform::decorate(&window, X11_TITLE);
            log::info!("window decoration: {}", outcome.as_str());
        }

        let ui = UiShell::new(&window, self.font);

        Ok(Shell { ui, gpu, window })
    }
}

// ── Centering ─────────────────────────────────────────────────────────────────

/// Position that centers a `width`×`height` logical window on the primary
/// monitor.  `None` when the monitor or its size is unknown; the window
/// manager then picks the placement.
fn centered_position(
    event_loop: &ActiveEventLoop,
    width: u32,
    height: u32,
) -> Option<PhysicalPosition<i32>> {
    let monitor = event_loop.primary_monitor()?;
    let monitor_size = monitor.size();
    if monitor_size.width == 0 || monitor_size.height == 0 {
        return None;
    }
    let scale = monitor.scale_factor();
    let window_size = PhysicalSize::new(
        (f64::from(width) * scale).round() as u32,
        (f64::from(height) * scale).round() as u32,
    );
    Some(center(monitor.position(), monitor_size, window_size))
}

/// Pure centering math, separated from the monitor query for testing.
fn center(
    origin: PhysicalPosition<i32>,
    monitor: PhysicalSize<u32>,
    window: PhysicalSize<u32>,
) -> PhysicalPosition<i32> {
    PhysicalPosition::new(
        origin.x + (monitor.width.saturating_sub(window.width) / 2) as i32,
        origin.y + (monitor.height.saturating_sub(window.height) / 2) as i32,
    )
}

// ── Event loop ────────────────────────────────────────────────────────────────
//
// The tick cycle maps onto the callbacks as: event draining (`window_event`
// batch) → frame description + rasterisation (`RedrawRequested`) → present
// (inside the GPU pass, vsync-paced) → next tick requested in
// `about_to_wait`.  A close request flips `exiting`: the rest of the batch
// is still forwarded to the UI, but no further redraw is requested.

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.shell.is_some() {
            // Suspended/resumed cycle on a platform that re-fires this;
            // the window and renderer already exist.
            return;
        }
        match self.bring_up(event_loop) {
            Ok(shell) => {
                shell.window.request_redraw();
                self.shell = Some(shell);
            }
            Err(e) => {
                self.fatal = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(shell) = self.shell.as_mut() else {
            return;
        };

        // Every event reaches the UI context, including the remainder of a
        // tick in which a quit was observed.
        shell.ui.on_window_event(&shell.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                log::info!("quit requested");
                self.exiting = true;
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                shell.gpu.resize(size);
            }
            WindowEvent::RedrawRequested if !self.exiting => {
                let frame = shell.ui.run_frame(&shell.window);
                shell.gpu.render(frame);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.exiting {
            return;
        }
        if let Some(shell) = self.shell.as_ref() {
            shell.window.request_redraw();
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_on_monitor_at_origin() {
        let pos = center(
            PhysicalPosition::new(0, 0),
            PhysicalSize::new(2560, 1440),
            PhysicalSize::new(800, 600),
        );
        assert_eq!(pos, PhysicalPosition::new(880, 420));
    }

    #[test]
    fn center_respects_monitor_origin() {
        // Secondary-monitor layouts give the primary a non-zero origin.
        let pos = center(
            PhysicalPosition::new(1920, 200),
            PhysicalSize::new(1920, 1080),
            PhysicalSize::new(800, 600),
        );
        assert_eq!(pos, PhysicalPosition::new(1920 + 560, 200 + 240));
    }

    #[test]
    fn oversized_window_pins_to_origin() {
        let pos = center(
            PhysicalPosition::new(0, 0),
            PhysicalSize::new(640, 480),
            PhysicalSize::new(800, 600),
        );
        assert_eq!(pos, PhysicalPosition::new(0, 0));
    }

    #[test]
    fn x11_title_extends_the_base_title() {
        assert!(X11_TITLE.starts_with(APP_TITLE));
    }
}
