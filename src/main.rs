// ── Safety policy ────────────────────────────────────────────────────────────
// Unsafe code is forbidden everywhere except:
//   • `platform::win32` – DWM dark-titlebar FFI
//   • `platform::x11`   – Xlib window-property FFI
// Each unsafe block in those modules MUST carry a `// SAFETY:` comment.
#![deny(unsafe_code)]

// Release builds run as a GUI application (no console window).
// Debug builds keep the console so the phase-transition log lines are visible.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod assets;
mod config;
mod error;
mod platform;
mod renderer;
mod theme;
mod ui;

fn main() {
    // Default to `info` so the phase transitions print without RUST_LOG set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = config::load();
    if let Err(e) = app::run(config, assets::UI_FONT) {
        log::error!("startup failed: {e}");
        std::process::exit(1);
    }
}
