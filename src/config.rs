// ── Window configuration ──────────────────────────────────────────────────────
//
// Reads `<platform config dir>/mica/config.json`.  The file is optional and
// the app never writes it: a missing or malformed file silently falls back
// to the defaults below.  No `unsafe` — pure safe Rust + serde_json.

use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};

// ── On-disk type ──────────────────────────────────────────────────────────────

/// Root of the JSON config file.  Every field is optional on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct WindowConfig {
    /// Logical client width.
    #[serde(default = "default_width")]
    pub(crate) width: u32,
    /// Logical client height.
    #[serde(default = "default_height")]
    pub(crate) height: u32,
    /// Present frames on vsync.  Turning this off uncaps the frame rate.
    #[serde(default = "default_on")]
    pub(crate) vsync: bool,
    /// Ask the OS for native chrome tweaks (dark titlebar, WM hints).
    #[serde(default = "default_on")]
    pub(crate) decorate: bool,
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_on() -> bool {
    true
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            vsync: default_on(),
            decorate: default_on(),
        }
    }
}

// ── Path ──────────────────────────────────────────────────────────────────────

/// Return the path to the config file, or `None` when the platform exposes
/// no config directory (e.g. `$HOME` unset).
fn config_path() -> Option<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "Mica")?;
    Some(dirs.config_dir().join("config.json"))
}

// ── Load ──────────────────────────────────────────────────────────────────────

/// Load the window configuration, falling back to defaults on any failure.
pub(crate) fn load() -> WindowConfig {
    let Some(path) = config_path() else {
        return WindowConfig::default();
    };
    match fs::read_to_string(&path) {
        Ok(text) => parse(&text),
        Err(e) => {
            // Absent file is the common case; not worth a warning.
            log::debug!("no config at {}: {e}", path.display());
            WindowConfig::default()
        }
    }
}

/// Parse `text`, falling back to defaults when it is not valid JSON.
fn parse(text: &str) -> WindowConfig {
    match serde_json::from_str(text) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("config file ignored (parse error): {e}");
            WindowConfig::default()
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = WindowConfig::default();
        assert_eq!(c.width, 800);
        assert_eq!(c.height, 600);
        assert!(c.vsync);
        assert!(c.decorate);
    }

    #[test]
    fn roundtrip() {
        let c = WindowConfig {
            width: 1280,
            height: 720,
            vsync: false,
            decorate: false,
        };
        let json = serde_json::to_string(&c).expect("serialize");
        assert_eq!(parse(&json), c);
    }

    /// A file that names only some fields must fill the rest from defaults.
    #[test]
    fn partial_file_fills_defaults() {
        let c = parse(r#"{ "width": 1024 }"#);
        assert_eq!(c.width, 1024);
        assert_eq!(c.height, 600);
        assert!(c.vsync);
        assert!(c.decorate);
    }

    #[test]
    fn empty_object_is_all_defaults() {
        assert_eq!(parse("{}"), WindowConfig::default());
    }

    #[test]
    fn malformed_json_falls_back() {
        assert_eq!(parse("not json at all {"), WindowConfig::default());
    }
}
