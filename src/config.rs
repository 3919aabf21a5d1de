//! Site-wide configuration.
//!
//! Everything tunable lives here and is handed to components through Leptos
//! context. The only value read from the hosting page is the contact relay
//! endpoint (`<meta name="contact-endpoint" content="...">`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::content;
use crate::util::typewriter::TypewriterConfig;

/// Name of the `<meta>` tag carrying the contact relay endpoint.
pub const ENDPOINT_META: &str = "contact-endpoint";

/// Scroll thresholds and offsets, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Navbar switches to its solid style past this offset.
    pub navbar_threshold: f64,
    /// Back-to-top button appears past this offset.
    pub back_to_top_threshold: f64,
    /// A section counts as current once the viewport is this close to its top.
    pub section_offset: f64,
    /// Height of the fixed navbar, subtracted from anchor scroll targets.
    pub anchor_offset: f64,
    /// Minimum spacing between scroll handler runs.
    pub throttle_ms: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            navbar_threshold: 100.0,
            back_to_top_threshold: 300.0,
            section_offset: 200.0,
            anchor_offset: 70.0,
            throttle_ms: 100.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Form relay endpoint; `None` disables the contact form.
    pub contact_endpoint: Option<String>,
    pub theme_storage_key: &'static str,
    pub service_worker_path: &'static str,
    pub scroll: ScrollConfig,
    pub typewriter: TypewriterConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: None,
            theme_storage_key: "theme",
            service_worker_path: "/sw.js",
            scroll: ScrollConfig::default(),
            typewriter: TypewriterConfig::new(content::ROLES),
        }
    }
}

impl SiteConfig {
    /// Defaults plus the endpoint declared by the hosting page.
    #[must_use]
    pub fn from_document() -> Self {
        Self {
            contact_endpoint: normalize_endpoint(read_meta(ENDPOINT_META)),
            ..Self::default()
        }
    }
}

fn normalize_endpoint(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_owned()).filter(|value| !value.is_empty())
}

fn read_meta(name: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let doc = web_sys::window()?.document()?;
        let el = doc
            .query_selector(&format!("meta[name=\"{name}\"]"))
            .ok()
            .flatten()?;
        el.get_attribute("content")
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = name;
        None
    }
}
