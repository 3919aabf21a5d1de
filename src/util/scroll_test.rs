use super::*;

fn sections() -> Vec<SectionBounds> {
    [("home", 0.0), ("about", 800.0), ("projects", 1600.0), ("contact", 2600.0)]
        .into_iter()
        .map(|(id, top)| SectionBounds { id: id.to_owned(), top })
        .collect()
}

// =============================================================
// active_section
// =============================================================

#[test]
fn active_section_at_top_is_first() {
    assert_eq!(active_section(&sections(), 0.0, 200.0), Some("home"));
}

#[test]
fn active_section_switches_offset_before_top() {
    let s = sections();
    assert_eq!(active_section(&s, 599.0, 200.0), Some("home"));
    assert_eq!(active_section(&s, 600.0, 200.0), Some("about"));
    assert_eq!(active_section(&s, 2400.0, 200.0), Some("contact"));
}

#[test]
fn active_section_none_without_sections() {
    assert_eq!(active_section(&[], 500.0, 200.0), None);
}

#[test]
fn active_section_none_above_first_section() {
    let s = vec![SectionBounds { id: "about".to_owned(), top: 900.0 }];
    assert_eq!(active_section(&s, 100.0, 200.0), None);
}

// =============================================================
// thresholds
// =============================================================

#[test]
fn navbar_scrolled_past_threshold() {
    let cfg = ScrollConfig::default();
    assert!(!navbar_scrolled(100.0, &cfg));
    assert!(navbar_scrolled(100.5, &cfg));
}

#[test]
fn back_to_top_visible_past_threshold() {
    let cfg = ScrollConfig::default();
    assert!(!back_to_top_visible(300.0, &cfg));
    assert!(back_to_top_visible(301.0, &cfg));
}

#[test]
fn navbar_style_depends_on_theme_and_scroll() {
    assert_eq!(
        navbar_style(Theme::Light, false),
        "background: rgba(255, 255, 255, 0.95); box-shadow: none;"
    );
    assert_eq!(
        navbar_style(Theme::Dark, true),
        "background: rgba(17, 24, 39, 0.98); box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1);"
    );
}

#[test]
fn parallax_rates() {
    assert_eq!(parallax(0.0), (0.0, 0.0));
    assert_eq!(parallax(200.0), (20.0, 30.0));
}

// =============================================================
// anchors
// =============================================================

#[test]
fn anchor_target_subtracts_navbar_and_clamps() {
    let cfg = ScrollConfig::default();
    assert_eq!(anchor_target(800.0, &cfg), 730.0);
    assert_eq!(anchor_target(20.0, &cfg), 0.0);
}

#[test]
fn anchor_id_strips_hash() {
    assert_eq!(anchor_id("#about"), Some("about"));
    assert_eq!(anchor_id("#"), None);
    assert_eq!(anchor_id("https://example.com/#about"), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn missing_anchor_target_is_noop() {
    assert!(!scroll_to_anchor("nowhere", &ScrollConfig::default()));
}
