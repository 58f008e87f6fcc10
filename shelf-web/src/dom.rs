//! Small browser helpers
//!
//! Scroll capture/restore keeps the viewport in place when a filter change
//! shrinks the book grid. Restore runs after the next render pass, so the
//! new DOM height is already in place.

/// Current vertical scroll offset, 0 outside a browser.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Scroll the window back to a captured offset.
pub fn scroll_to_y(y: f64) {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, y);
    }
}

/// Restore a captured scroll offset after the next render pass, so the
/// viewport doesn't jump to the top when the result set shrinks.
pub fn restore_scroll_after_render(y: f64) {
    dioxus::prelude::spawn(async move {
        crate::time::sleep_ms(16).await;
        scroll_to_y(y);
    });
}
