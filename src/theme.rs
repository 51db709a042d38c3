// ── Fixed demo palette ────────────────────────────────────────────────────────
//
// Colour conventions:
//   • All palette entries are in 0xRRGGBB form.
//   • Conversion to the consumer's colour type happens at the API boundary:
//     `color32` for UI fills/strokes, `clear_color` for the surface clear
//     (wgpu clears in linear space, so the sRGB transfer curve is undone).

/// Sidebar background.
pub(crate) const SIDEBAR_FILL: u32 = 0x17_17_17;

/// Sidebar border, 1 px.
pub(crate) const SIDEBAR_BORDER: u32 = 0x26_26_26;

/// Content panel background; also the surface clear colour.
pub(crate) const CONTENT_FILL: u32 = 0x1E_1E_1E;

/// Convert a 0xRRGGBB palette entry to an opaque UI colour.
pub(crate) fn color32(rgb: u32) -> egui::Color32 {
    egui::Color32::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// The surface clear colour (`CONTENT_FILL`) as a linear-space wgpu value.
pub(crate) fn clear_color() -> wgpu::Color {
    wgpu::Color {
        r: srgb_to_linear((CONTENT_FILL >> 16) as u8),
        g: srgb_to_linear((CONTENT_FILL >> 8) as u8),
        b: srgb_to_linear(CONTENT_FILL as u8),
        a: 1.0,
    }
}

/// Undo the sRGB transfer curve for one 8-bit channel.
fn srgb_to_linear(channel: u8) -> f64 {
    let c = channel as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color32_unpacks_channels() {
        assert_eq!(color32(0x17_17_17), egui::Color32::from_rgb(0x17, 0x17, 0x17));
        assert_eq!(color32(0x26_26_26), egui::Color32::from_rgb(0x26, 0x26, 0x26));
        assert_eq!(color32(0x12_34_56), egui::Color32::from_rgb(0x12, 0x34, 0x56));
    }

    #[test]
    fn srgb_endpoints_are_exact() {
        assert_eq!(srgb_to_linear(0), 0.0);
        assert!((srgb_to_linear(255) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn srgb_curve_is_monotonic() {
        let mut prev = -1.0;
        for channel in 0..=255u8 {
            let v = srgb_to_linear(channel);
            assert!(v > prev);
            prev = v;
        }
    }

    #[test]
    fn clear_color_is_darker_than_srgb_value() {
        // 0x1e/255 ≈ 0.118 in sRGB is well below that in linear space.
        let c = clear_color();
        assert!(c.r < 0.118 && c.r > 0.0);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
        assert_eq!(c.a, 1.0);
    }
}
