// ── X11 window-manager properties ─────────────────────────────────────────────
//
// One of exactly two modules in the codebase where `unsafe` code is
// permitted (the other is `platform::win32`).  Every `unsafe` block MUST
// carry a `// SAFETY:` comment stating which invariant makes it sound.
//
// Xlib is loaded at runtime (`Xlib::open`), so a host without libX11 skips
// decoration instead of failing at link or start.  Every entry point is
// guarded by null-display / zero-window checks *before* any Xlib access, and
// each property step is independently best-effort: a failed atom intern
// (atom 0) skips that step only.

#![allow(unsafe_code)]

use std::ffi::{c_int, c_uchar, c_ulong, CStr, CString};

use x11_dl::xlib::{self, Atom, Display, XClassHint, Xlib};

/// WM_CLASS resource name/class, used by desktop environments for
/// taskbar grouping.
pub(crate) const WM_CLASS: &str = "Mica";

fn open_xlib() -> Option<Xlib> {
    match Xlib::open() {
        Ok(lib) => Some(lib),
        Err(e) => {
            log::debug!("libX11 unavailable: {e}");
            None
        }
    }
}

/// Intern `name`, returning 0 when the lookup fails.
fn intern(xlib: &Xlib, display: *mut Display, name: &CStr) -> Atom {
    // SAFETY: callers have verified `display` is non-null; `name` is a
    // NUL-terminated string whose storage outlives the call.
    unsafe { (xlib.XInternAtom)(display, name.as_ptr(), xlib::False) }
}

/// Set the WM_CLASS hint (both resource name and resource class) to
/// `class_name`.
///
/// No-op when the display or window is absent, or when `class_name` is
/// empty or contains an interior NUL.
pub(crate) fn set_window_class(display: *mut Display, window: c_ulong, class_name: &str) {
    if display.is_null() || window == 0 || class_name.is_empty() {
        return;
    }
    let Ok(name) = CString::new(class_name) else {
        return;
    };
    let Some(xlib) = open_xlib() else {
        return;
    };

    let mut hint = XClassHint {
        res_name: name.as_ptr() as *mut _,
        res_class: name.as_ptr() as *mut _,
    };
    // SAFETY: display/window were produced by the live window's native
    // handle; `hint` and the backing CString outlive the call, and Xlib
    // copies the strings before returning.
    unsafe {
        (xlib.XSetClassHint)(display, window, &mut hint);
    }
}

/// Set the legacy window title and, separately, the UTF-8 `_NET_WM_NAME`
/// property so non-ASCII titles render correctly in modern desktops.
///
/// No-op when the display or window is absent.
pub(crate) fn set_window_title(display: *mut Display, window: c_ulong, title: &str) {
    if display.is_null() || window == 0 {
        return;
    }
    let Ok(c_title) = CString::new(title) else {
        return;
    };
    let Some(xlib) = open_xlib() else {
        return;
    };

    // SAFETY: display/window are valid for the window's lifetime; both
    // strings outlive their calls.  XChangeProperty copies the data.
    unsafe {
        (xlib.XStoreName)(display, window, c_title.as_ptr());

        let net_wm_name = intern(&xlib, display, c"_NET_WM_NAME");
        let utf8_string = intern(&xlib, display, c"UTF8_STRING");
        if net_wm_name != 0 && utf8_string != 0 {
            (xlib.XChangeProperty)(
                display,
                window,
                net_wm_name,
                utf8_string,
                8,
                xlib::PropModeReplace,
                title.as_ptr(),
                title.len() as c_int,
            );
        }
    }
}

/// Configure the window for desktop integration: the fixed WM_CLASS
/// identifier, the window-manager close protocol (so closing sends a
/// request instead of killing the process), and a normal top-level window
/// type for placement/decoration heuristics.
pub(crate) fn configure_window_properties(display: *mut Display, window: c_ulong) {
    if display.is_null() || window == 0 {
        log::warn!("invalid X11 display or window; properties not set");
        return;
    }

    set_window_class(display, window, WM_CLASS);

    let Some(xlib) = open_xlib() else {
        return;
    };

    // SAFETY: display/window checked non-null/non-zero above and remain
    // valid for the window's lifetime; atom storage outlives each call.
    unsafe {
        let wm_protocols = intern(&xlib, display, c"WM_PROTOCOLS");
        let mut wm_delete_window = intern(&xlib, display, c"WM_DELETE_WINDOW");
        if wm_protocols != 0 && wm_delete_window != 0 {
            (xlib.XSetWMProtocols)(display, window, &mut wm_delete_window, 1);
        }

        let window_type = intern(&xlib, display, c"_NET_WM_WINDOW_TYPE");
        let window_type_normal = intern(&xlib, display, c"_NET_WM_WINDOW_TYPE_NORMAL");
        if window_type != 0 && window_type_normal != 0 {
            (xlib.XChangeProperty)(
                display,
                window,
                window_type,
                xlib::XA_ATOM,
                32,
                xlib::PropModeReplace,
                (&window_type_normal as *const Atom).cast::<c_uchar>(),
                1,
            );
        }
    }

    log::info!("X11 window properties configured");
}

// ── Tests ─────────────────────────────────────────────────────────────────────
//
// The null/zero guards run before any Xlib access, so these are safe to run
// on a headless host with no X server (and no libX11).

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr::{self, NonNull};

    #[test]
    fn null_display_is_noop() {
        set_window_class(ptr::null_mut(), 7, "Class");
        set_window_title(ptr::null_mut(), 7, "Title");
        configure_window_properties(ptr::null_mut(), 7);
    }

    #[test]
    fn zero_window_is_noop() {
        // Never dereferenced: the guard rejects window 0 first.
        let dangling = NonNull::<Display>::dangling().as_ptr();
        set_window_class(dangling, 0, "Class");
        set_window_title(dangling, 0, "Title");
        configure_window_properties(dangling, 0);
    }

    #[test]
    fn empty_class_name_is_noop() {
        // Guard fires before any Xlib access, so the pointer is never read.
        let dangling = NonNull::<Display>::dangling().as_ptr();
        set_window_class(dangling, 7, "");
        set_window_class(dangling, 7, "interior\0nul");
    }

    #[test]
    fn class_constant_matches_app_identity() {
        assert_eq!(WM_CLASS, "Mica");
    }
}
