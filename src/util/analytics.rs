//! Interaction tracking.
//!
//! Events go to the log at debug level; there is no analytics backend.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

/// Render `name` and its key/value data as one log line.
#[must_use]
pub fn format_event(name: &str, data: &[(&str, &str)]) -> String {
    let fields = data
        .iter()
        .map(|(key, value)| format!("{key}={value:?}"))
        .collect::<Vec<_>>()
        .join(" ");
    if fields.is_empty() { name.to_owned() } else { format!("{name} {fields}") }
}

pub fn track_event(name: &str, data: &[(&str, &str)]) {
    log::debug!("event tracked: {}", format_event(name, data));
}

/// Button click inside the section with id `section` (`"unknown"` when none).
pub fn track_button_click(label: &str, section: Option<&str>) {
    track_event(
        "button_click",
        &[("button_text", label.trim()), ("button_location", section.unwrap_or("unknown"))],
    );
}

pub fn track_project_view(title: &str) {
    track_event("project_view", &[("project_name", title)]);
}

/// Log clicks on `.btn` elements and project cards anywhere on the page.
pub fn install_click_tracking() {
    #[cfg(feature = "csr")]
    {
        use leptos::prelude::window_event_listener;
        use wasm_bindgen::JsCast;

        let _listener = window_event_listener(leptos::ev::click, |ev| {
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
                return;
            };
            if target.class_list().contains("btn") {
                let label = target.text_content().unwrap_or_default();
                let section = target.closest("section").ok().flatten().map(|s| s.id());
                track_button_click(&label, section.as_deref());
            }
            if let Some(card) = target.closest(".project-card").ok().flatten() {
                let title = card
                    .query_selector(".project-title")
                    .ok()
                    .flatten()
                    .and_then(|el| el.text_content())
                    .unwrap_or_default();
                track_project_view(title.trim());
            }
        });
    }
}
