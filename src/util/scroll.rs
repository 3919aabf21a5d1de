//! Scroll-position rules and window scrolling glue.
//!
//! SYSTEM CONTEXT
//! ==============
//! The pure functions decide what the page looks like at a given offset
//! (navbar style, current section, back-to-top, parallax). The `csr` glue
//! reads offsets from the DOM and performs smooth scrolls.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::ScrollConfig;
use crate::util::theme::Theme;

/// Document-space top of a `section[id]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
}

/// The last section (document order) whose top is within `offset` of `scroll_y`.
#[must_use]
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| scroll_y >= s.top - offset)
        .map(|s| s.id.as_str())
}

#[must_use]
pub fn navbar_scrolled(scroll_y: f64, cfg: &ScrollConfig) -> bool {
    scroll_y > cfg.navbar_threshold
}

#[must_use]
pub fn back_to_top_visible(scroll_y: f64, cfg: &ScrollConfig) -> bool {
    scroll_y > cfg.back_to_top_threshold
}

/// Inline `style` for the navbar.
#[must_use]
pub fn navbar_style(theme: Theme, scrolled: bool) -> String {
    let background = match (theme, scrolled) {
        (Theme::Dark, true) => "rgba(17, 24, 39, 0.98)",
        (Theme::Dark, false) => "rgba(17, 24, 39, 0.95)",
        (Theme::Light, true) => "rgba(255, 255, 255, 0.98)",
        (Theme::Light, false) => "rgba(255, 255, 255, 0.95)",
    };
    let shadow = if scrolled { "0 2px 20px rgba(0, 0, 0, 0.1)" } else { "none" };
    format!("background: {background}; box-shadow: {shadow};")
}

/// Vertical parallax shift for hero content and hero image.
#[must_use]
pub fn parallax(scroll_y: f64) -> (f64, f64) {
    (scroll_y * 0.1, scroll_y * 0.15)
}

/// Scroll target for an in-page anchor, leaving room for the fixed navbar.
#[must_use]
pub fn anchor_target(offset_top: f64, cfg: &ScrollConfig) -> f64 {
    (offset_top - cfg.anchor_offset).max(0.0)
}

/// `id` from an in-page `#id` href.
#[must_use]
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Current vertical scroll offset.
#[must_use]
pub fn scroll_y() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Tops of every `section[id]` in document order.
#[must_use]
pub fn section_bounds() -> Vec<SectionBounds> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(list) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector_all("section[id]").ok())
        else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
            .map(|el| SectionBounds { id: el.id(), top: f64::from(el.offset_top()) })
            .collect()
    }
    #[cfg(not(feature = "csr"))]
    {
        Vec::new()
    }
}

/// Smooth-scroll the window to `top`.
pub fn scroll_to(top: f64) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = top;
    }
}

/// Smooth-scroll to the element with `id`, below the fixed navbar.
///
/// Returns `false` when no such element exists.
pub fn scroll_to_anchor(id: &str, cfg: &ScrollConfig) -> bool {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return false;
        };
        scroll_to(anchor_target(f64::from(el.offset_top()), cfg));
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, cfg);
        false
    }
}

/// Smooth-scroll the element with `id` to the top of the viewport.
pub fn scroll_into_view(id: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            opts.set_block(web_sys::ScrollLogicalPosition::Start);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}
