//! DOM measurement helpers. Missing elements measure as zero.

#[cfg(feature = "hydrate")]
use assistant::scroll::ChatScrollMetrics;

/// Scroll flags of a chat message container.
#[cfg(feature = "hydrate")]
pub fn chat_metrics(el: &web_sys::Element) -> ChatScrollMetrics {
    ChatScrollMetrics::from_element(
        f64::from(el.scroll_top()),
        f64::from(el.scroll_height()),
        f64::from(el.client_height()),
    )
}

#[cfg(feature = "hydrate")]
pub fn scroll_to_bottom(el: &web_sys::Element) {
    el.set_scroll_top(el.scroll_height());
}

/// `window.innerHeight`, or zero.
pub fn viewport_height() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.inner_height().ok()).and_then(|v| v.as_f64()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
