//! Root application component, context providers, and the CSR entry point.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::SiteConfig;
use crate::content;
use crate::pages::home::HomePage;
use crate::state::notification::ToastState;
use crate::state::projects::ProjectsState;
use crate::state::ui::UiState;
use crate::util::theme::{self, BrowserStorage, Theme};

/// Root application component.
///
/// Loads configuration and the stored theme once, then provides all shared
/// state contexts to the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::from_document();
    let initial_theme = Theme::load(&BrowserStorage, config.theme_storage_key);
    theme::apply(initial_theme);

    let ui = RwSignal::new(UiState::new(initial_theme));
    let projects = RwSignal::new(ProjectsState::new(content::PROJECTS.len()));
    let toasts = RwSignal::new(ToastState::default());

    provide_context(config);
    provide_context(ui);
    provide_context(projects);
    provide_context(toasts);

    view! {
        <Title text=content::OWNER/>
        <HomePage/>
    }
}

/// Start-up enhancements that do not depend on rendering.
#[cfg(feature = "csr")]
fn enhance_document(config: &SiteConfig) -> crate::util::features::FeatureSet {
    use crate::util::{analytics, errors, features};

    errors::install_global_handlers();
    features::add_root_class(features::JS_ENABLED_CLASS);
    let detected = features::FeatureSet::detect();
    log::debug!("features: {detected:?}");
    features::preload_images(&content::critical_images());
    features::probe_webp(|supported| {
        if supported {
            features::add_root_class(features::WEBP_CLASS);
        }
        log::debug!("webp supported: {supported}");
    });
    analytics::install_click_tracking();

    let sw_path = config.service_worker_path;
    wasm_bindgen_futures::spawn_local(async move {
        features::register_service_worker(sw_path).await;
    });
    detected
}

/// WASM entry point: logging, panic hook, enhancements, mount, then the
/// scroll reveal observer over the rendered page.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    let detected = enhance_document(&SiteConfig::from_document());
    leptos::mount::mount_to_body(App);
    crate::util::features::observe_reveal_targets(detected.intersection_observer);
}
