// ── Embedded resources ────────────────────────────────────────────────────────
//
// The UI font ships inside the binary so the demo has no runtime file
// dependencies.  The blob is read here exactly once (at compile time) and
// handed to the UI shell as a plain byte slice; nothing else in the crate
// references the symbol directly.

/// DejaVu Sans, compiled into the binary.
pub(crate) const UI_FONT: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");

/// Family name the font is registered under in the UI context.
pub(crate) const UI_FONT_NAME: &str = "DejaVu Sans";

/// Pixel size applied to every text style in the demo.
pub(crate) const UI_FONT_SIZE: f32 = 14.0;

/// `true` when `blob` parses as a usable font.
///
/// Uses the same parser the UI's glyph atlas is built with, so a blob
/// accepted here cannot fail later during rasterisation.  A rejected blob
/// leaves the UI on its built-in default fonts (advisory, never fatal).
pub(crate) fn is_valid_font(blob: &[u8]) -> bool {
    ab_glyph::FontRef::try_from_slice(blob).is_ok()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_font_parses() {
        assert!(is_valid_font(UI_FONT));
    }

    #[test]
    fn empty_blob_is_rejected() {
        assert!(!is_valid_font(&[]));
    }

    #[test]
    fn garbage_blob_is_rejected() {
        assert!(!is_valid_font(b"this is not a font file"));
    }

    #[test]
    fn truncated_font_is_rejected() {
        // A valid header alone is not a loadable font.
        assert!(!is_valid_font(&UI_FONT[..16]));
    }
}
