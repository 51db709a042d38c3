// ── Fixed two-panel layout ────────────────────────────────────────────────────
//
// Panel geometry is recomputed from the current window size every frame;
// nothing is retained between frames.  All values are in logical points.

use egui::{pos2, vec2, Rect, Vec2};

/// Sidebar width.  Constant regardless of window size.
pub(crate) const SIDEBAR_WIDTH: f32 = 48.0;

/// Full-height sidebar at the window's left edge.
pub(crate) fn sidebar_rect(window: Vec2) -> Rect {
    Rect::from_min_size(pos2(0.0, 0.0), vec2(SIDEBAR_WIDTH, window.y))
}

/// Content region filling the remaining width to the right of the sidebar.
pub(crate) fn content_rect(window: Vec2) -> Rect {
    Rect::from_min_max(pos2(SIDEBAR_WIDTH, 0.0), pos2(window.x, window.y))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: [[f32; 2]; 4] = [[800.0, 600.0], [1920.0, 1080.0], [320.0, 240.0], [100.0, 1.0]];

    #[test]
    fn sidebar_is_always_48_wide() {
        for [w, h] in SIZES {
            let rect = sidebar_rect(vec2(w, h));
            assert_eq!(rect.width(), 48.0);
            assert_eq!(rect.height(), h);
            assert_eq!(rect.min, pos2(0.0, 0.0));
        }
    }

    #[test]
    fn content_fills_remaining_width() {
        for [w, h] in SIZES {
            let rect = content_rect(vec2(w, h));
            assert_eq!(rect.width(), w - 48.0);
            assert_eq!(rect.height(), h);
        }
    }

    #[test]
    fn panels_tile_the_window_exactly() {
        let window = vec2(800.0, 600.0);
        let sidebar = sidebar_rect(window);
        let content = content_rect(window);
        assert_eq!(sidebar.max.x, content.min.x);
        assert_eq!(sidebar.union(content), Rect::from_min_size(pos2(0.0, 0.0), window));
    }
}
