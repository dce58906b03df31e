//! Scroll-progress mapping and scroll-driven layout math.
//!
//! DESIGN
//! ======
//! Everything here is a pure function of measurements the client reads from
//! the DOM. Missing measurements arrive as `None` and count as zero, so a
//! layout pass before refs mount yields a neutral result instead of failing.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Scroll distance that maps to full progress on the homepage.
pub const DEFAULT_MAX_SCROLL: f64 = 400.0;
/// Distance from the bottom within which the chat view keeps following.
pub const NEAR_BOTTOM_PX: f64 = 100.0;
/// Workflow grid width in cards.
pub const GRID_COLUMNS: usize = 4;

/// Normalized scroll depth in `[0, 1]`.
#[must_use]
pub fn scroll_progress(scroll_top: f64, max_scroll: f64) -> f64 {
    if !scroll_top.is_finite() || scroll_top <= 0.0 {
        return 0.0;
    }
    if !max_scroll.is_finite() || max_scroll <= 0.0 {
        return 1.0;
    }
    (scroll_top / max_scroll).clamp(0.0, 1.0)
}

/// Coalesces scroll events into at most one pending animation frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the caller should request a frame. Calls made
    /// while a frame is pending are dropped.
    pub fn try_schedule(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Mark the pending frame as run.
    pub fn complete(&mut self) {
        self.pending = false;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Tuning for the staggered card reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub columns: usize,
    /// Progress span over which one row fades in.
    pub row_span: f64,
    /// Progress lag between neighbouring cards in a row.
    pub column_stagger: f64,
    /// Initial downward offset of a hidden card.
    pub max_translate_px: f64,
    pub opacity_exponent: f64,
    pub opacity_gain: f64,
    pub column_delay_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            columns: GRID_COLUMNS,
            row_span: 0.22,
            column_stagger: 0.045,
            max_translate_px: 36.0,
            opacity_exponent: 0.7,
            opacity_gain: 1.5,
            column_delay_ms: 60,
        }
    }
}

/// Style values for one workflow card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardReveal {
    pub opacity: f64,
    pub translate_y_px: f64,
    pub transition_delay_ms: u32,
}

impl CardReveal {
    pub const VISIBLE: Self = Self { opacity: 1.0, translate_y_px: 0.0, transition_delay_ms: 0 };
}

/// Reveal state of the card at `index` for the given scroll progress. The
/// first row is always fully visible.
#[must_use]
pub fn card_reveal(index: usize, progress: f64, config: &RevealConfig) -> CardReveal {
    let columns = config.columns.max(1);
    let row = index / columns;
    let col = index % columns;
    if row == 0 {
        return CardReveal::VISIBLE;
    }

    #[allow(clippy::cast_precision_loss)]
    let (row_f, col_f) = (row as f64, col as f64);
    let row_start = (row_f - 1.0) * config.row_span;
    let row_progress = ((progress - row_start) / config.row_span).max(0.0);
    let card = (row_progress - col_f * config.column_stagger).max(0.0);
    let opacity = (card.powf(config.opacity_exponent) * config.opacity_gain).clamp(0.0, 1.0);
    let translate_y_px = (config.max_translate_px * (1.0 - card)).max(0.0);
    #[allow(clippy::cast_possible_truncation)]
    let transition_delay_ms = config.column_delay_ms.saturating_mul(col as u32);

    CardReveal { opacity, translate_y_px, transition_delay_ms }
}

/// Delay before the scroll hint fades in, in seconds.
pub const SCROLL_HINT_DELAY_S: f64 = 0.12;
const SCROLL_HINT_OPACITY_CUTOFF: f64 = 0.06;

/// Whether the "scroll for more" hint should show: more cards exist than the
/// first row and the second row has not started to appear.
#[must_use]
pub fn scroll_hint_visible(total: usize, progress: f64, config: &RevealConfig) -> bool {
    if total <= config.columns {
        return false;
    }
    let first_hidden = (2.0 * progress / config.row_span).clamp(0.0, 1.0);
    first_hidden <= SCROLL_HINT_OPACITY_CUTOFF
}

/// Chat viewport flags derived from a scroll container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChatScrollMetrics {
    pub is_scrolled: bool,
    pub near_bottom: bool,
    pub show_bottom_gradient: bool,
}

impl ChatScrollMetrics {
    #[must_use]
    pub fn from_element(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        let distance = distance_from_bottom(scroll_top, scroll_height, client_height);
        Self {
            is_scrolled: scroll_top > 0.0,
            near_bottom: distance < NEAR_BOTTOM_PX,
            show_bottom_gradient: distance > 1.0,
        }
    }
}

#[must_use]
pub fn distance_from_bottom(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    scroll_height - scroll_top - client_height
}

/// Vertical gap between composer controls and the workflow grid.
pub const TOP_SPACING_PX: f64 = 88.0;
/// Extra room so the first card row peeks above the fold.
pub const TOP_OFFSET_PX: f64 = 16.0;

/// Minimum height of the homepage hero block so the first workflow row sits
/// at the bottom of the viewport.
#[must_use]
pub fn top_min_height(viewport_height: f64, controls_height: Option<f64>, first_card_height: Option<f64>) -> f64 {
    let controls = controls_height.unwrap_or(0.0);
    let card = first_card_height.unwrap_or(0.0);
    (viewport_height - controls - card - TOP_SPACING_PX + TOP_OFFSET_PX).max(0.0)
}
