//! Page chrome state: theme, navigation menu, scroll-driven flags.
//!
//! DESIGN
//! ======
//! The offset-driven flags (navbar, back-to-top, parallax) are cheap and
//! follow every scroll event through `apply_scroll_offset`. The active
//! section needs DOM measurements, so `handle_scroll` only recomputes it
//! when the throttle lets the event through.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::config::ScrollConfig;
use crate::util::scroll::{self, SectionBounds};
use crate::util::theme::Theme;
use crate::util::throttle::Throttle;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub theme: Theme,
    /// Mobile navigation menu open.
    pub nav_open: bool,
    pub navbar_scrolled: bool,
    /// Id of the section the nav highlights.
    pub active_section: Option<String>,
    pub back_to_top_visible: bool,
    /// Parallax shift for hero content and hero image.
    pub hero_offsets: (f64, f64),
}

impl UiState {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }

    /// Returns the new open state.
    pub fn toggle_nav(&mut self) -> bool {
        self.nav_open = !self.nav_open;
        self.nav_open
    }

    pub fn close_nav(&mut self) {
        self.nav_open = false;
    }

    /// Navbar style, back-to-top visibility and parallax for offset `y`.
    pub fn apply_scroll_offset(&mut self, y: f64, cfg: &ScrollConfig) {
        self.navbar_scrolled = scroll::navbar_scrolled(y, cfg);
        self.back_to_top_visible = scroll::back_to_top_visible(y, cfg);
        self.hero_offsets = scroll::parallax(y);
    }

    pub fn apply_active_section(&mut self, y: f64, sections: &[SectionBounds], cfg: &ScrollConfig) {
        self.active_section = scroll::active_section(sections, y, cfg.section_offset).map(str::to_owned);
    }

    /// One window scroll event at `now_ms`. `sections` is only measured when
    /// `throttle` fires.
    pub fn handle_scroll(
        &mut self,
        y: f64,
        now_ms: f64,
        throttle: &mut Throttle,
        sections: impl FnOnce() -> Vec<SectionBounds>,
        cfg: &ScrollConfig,
    ) {
        self.apply_scroll_offset(y, cfg);
        if throttle.try_fire(now_ms) {
            self.apply_active_section(y, &sections(), cfg);
        }
    }

    /// Recompute every scroll-dependent flag for offset `y`.
    pub fn apply_scroll(&mut self, y: f64, sections: &[SectionBounds], cfg: &ScrollConfig) {
        self.apply_scroll_offset(y, cfg);
        self.apply_active_section(y, sections, cfg);
    }

    /// Whether the nav link for `href` (`#id`) is the highlighted one.
    #[must_use]
    pub fn is_active_link(&self, href: &str) -> bool {
        match (scroll::anchor_id(href), self.active_section.as_deref()) {
            (Some(id), Some(active)) => id == active,
            _ => false,
        }
    }
}
