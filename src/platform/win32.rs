// ── Win32 dark titlebar ───────────────────────────────────────────────────────
//
// One of exactly two modules in the codebase where `unsafe` code is
// permitted (the other is `platform::x11`).  Every `unsafe` block MUST
// carry a `// SAFETY:` comment stating which invariant makes it sound.

#![allow(unsafe_code)]

use std::ffi::c_void;

use windows::Win32::Foundation::{BOOL, HWND, TRUE};
use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWA_USE_IMMERSIVE_DARK_MODE};

/// Ask the compositor to draw this window's titlebar in immersive dark mode
/// (Windows 10 1809+).
///
/// Purely cosmetic and strictly best-effort: on older Windows builds, or for
/// an invalid handle, the attribute call fails and the window keeps its
/// stock titlebar.  The result is intentionally ignored — this is never a
/// hard dependency.  Idempotent.
pub(crate) fn enable_dark_titlebar(hwnd: isize) {
    let hwnd = HWND(hwnd as *mut c_void);
    let dark: BOOL = TRUE;

    // SAFETY: `hwnd` comes from the live window's native handle and the
    // attribute pointer is valid for the duration of the call.  A failure
    // HRESULT only means the OS declined the cosmetic request.
    unsafe {
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWA_USE_IMMERSIVE_DARK_MODE,
            (&dark as *const BOOL).cast::<c_void>(),
            std::mem::size_of::<BOOL>() as u32,
        );
    }
}
