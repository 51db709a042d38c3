// ── Platform integration layer ────────────────────────────────────────────────
//
// Native window decoration: cosmetic/WM properties the windowing library
// does not cover.  The rest of the codebase talks to this module through
// `decorate` alone; all OS FFI is confined to the `win32` and `x11`
// sub-modules and never leaks outward.
//
// Every operation here is advisory.  A missing OS feature, an unsupported
// backend or a failed handle retrieval degrades to "property not set" —
// never to an error the caller must handle.

#[cfg(target_os = "windows")]
pub(crate) mod win32;

#[cfg(all(unix, not(target_os = "macos")))]
pub(crate) mod x11;

use winit::raw_window_handle::{
    HasDisplayHandle, HasWindowHandle, RawDisplayHandle, RawWindowHandle,
};
use winit::window::Window;

/// What `decorate` managed to apply.
// Which variants get constructed depends on the compile target.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decoration {
    /// Win32: immersive dark titlebar requested from the compositor.
    DarkTitlebar,
    /// X11: class hint, close protocol, window type and title set.
    X11Properties,
    /// Unsupported backend, or the native handle was unavailable.
    Skipped,
}

impl Decoration {
    /// Short label for the phase-transition log line.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::DarkTitlebar => "dark titlebar (Win32)",
            Self::X11Properties => "X11 window properties",
            Self::Skipped => "skipped",
        }
    }
}

/// Apply the platform's cosmetic window properties to `window`.
///
/// `title` is only consumed by the X11 branch, which re-titles the window
/// with its platform suffix.  Best-effort by contract: every failure path
/// returns [`Decoration::Skipped`] and the window keeps its stock chrome.
pub(crate) fn decorate(window: &Window, title: &str) -> Decoration {
    let (window_handle, display_handle) = match (window.window_handle(), window.display_handle()) {
        (Ok(w), Ok(d)) => (w.as_raw(), d.as_raw()),
        _ => {
            // Distinct from the unsupported-backend skip below: here the
            // windowing library could not produce a native handle at all.
            log::warn!("native window handle unavailable; decoration skipped");
            return Decoration::Skipped;
        }
    };
    apply(window_handle, display_handle, title)
}

fn apply(window: RawWindowHandle, display: RawDisplayHandle, title: &str) -> Decoration {
    #[cfg(target_os = "windows")]
    if let RawWindowHandle::Win32(handle) = window {
        win32::enable_dark_titlebar(handle.hwnd.get());
        return Decoration::DarkTitlebar;
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    if let (RawWindowHandle::Xlib(w), RawDisplayHandle::Xlib(d)) = (window, display) {
        let display_ptr = d
            .display
            .map_or(std::ptr::null_mut(), |p| p.as_ptr())
            .cast::<x11_dl::xlib::Display>();
        x11::configure_window_properties(display_ptr, w.window);
        x11::set_window_title(display_ptr, w.window, title);
        return Decoration::X11Properties;
    }

    // The arms above compile out on other targets.
    let _ = (window, display, title);
    log::debug!("no decorator for this window backend; decoration skipped");
    Decoration::Skipped
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_labels() {
        assert_eq!(Decoration::DarkTitlebar.as_str(), "dark titlebar (Win32)");
        assert_eq!(Decoration::X11Properties.as_str(), "X11 window properties");
        assert_eq!(Decoration::Skipped.as_str(), "skipped");
    }
}
