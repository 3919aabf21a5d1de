//! Browser feature detection and progressive-enhancement hooks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once at start-up: marks `<html>` as script-enabled, probes WebP
//! decoding, preloads critical images, and registers the service worker.
//! After mount, `observe_reveal_targets` adds `ANIMATE_CLASS` to
//! `[data-aos]` elements as they scroll into view. Every step is optional;
//! a missing API just leaves the corresponding class or registration out.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "features_test.rs"]
mod features_test;

/// Class added to `<html>` once scripts run.
pub const JS_ENABLED_CLASS: &str = "js-enabled";
/// Class added to `<html>` when WebP images decode.
pub const WEBP_CLASS: &str = "webp-support";
/// 2x2 lossy WebP image; decodes to height 2 when WebP is supported.
pub const WEBP_PROBE: &str =
    "data:image/webp;base64,UklGRjoAAABXRUJQVlA4IC4AAACyAgCdASoCAAIALmk0mk0iIiIiIgBoSygABc6WWgAA/veff/0PP8bA//LwYAAA";

/// Elements revealed on scroll.
pub const REVEAL_SELECTOR: &str = "[data-aos]";
/// Class that starts an element's entrance animation.
pub const ANIMATE_CLASS: &str = "animate";
/// Fraction of the element that must be visible.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Shrinks the viewport bottom so elements reveal slightly after entering.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Detected browser capabilities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeatureSet {
    pub intersection_observer: bool,
    pub webp: bool,
    pub local_storage: bool,
}

impl FeatureSet {
    /// Synchronous checks. `webp` starts `false` and is settled by `probe_webp`.
    #[must_use]
    pub fn detect() -> Self {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return Self::default();
            };
            let intersection_observer =
                js_sys::Reflect::has(&window, &wasm_bindgen::JsValue::from_str("IntersectionObserver"))
                    .unwrap_or(false);
            let local_storage = matches!(window.local_storage(), Ok(Some(_)));
            Self { intersection_observer, webp: false, local_storage }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}

/// WebP is supported when the probe image decoded to its real height.
#[must_use]
pub fn webp_probe_passed(decoded_height: u32) -> bool {
    decoded_height == 2
}

/// Class to add for an observed element. Without observer support every
/// target is revealed up front.
#[must_use]
pub fn reveal_class(observer_supported: bool, is_intersecting: bool) -> Option<&'static str> {
    (!observer_supported || is_intersecting).then_some(ANIMATE_CLASS)
}

/// Add `class` to the `<html>` element.
pub fn add_root_class(class: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.class_list().add_1(class);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = class;
    }
}

/// Decode `WEBP_PROBE` and call `on_result` with the verdict.
pub fn probe_webp<F>(on_result: F)
where
    F: FnOnce(bool) + 'static,
{
    #[cfg(feature = "csr")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Ok(img) = web_sys::HtmlImageElement::new() else {
            on_result(false);
            return;
        };
        // onload and onerror share one callback; whichever fires first wins.
        let callback = Rc::new(RefCell::new(Some(on_result)));
        let probe = img.clone();
        let settle = Closure::<dyn FnMut()>::new(move || {
            if let Some(cb) = callback.borrow_mut().take() {
                cb(webp_probe_passed(probe.height()));
            }
        });
        img.set_onload(Some(settle.as_ref().unchecked_ref()));
        img.set_onerror(Some(settle.as_ref().unchecked_ref()));
        settle.forget();
        img.set_src(WEBP_PROBE);
    }
    #[cfg(not(feature = "csr"))]
    {
        on_result(false);
    }
}

/// Start fetching `sources` so they are cached before layout needs them.
pub fn preload_images(sources: &[&str]) {
    #[cfg(feature = "csr")]
    {
        for src in sources {
            match web_sys::HtmlImageElement::new() {
                Ok(img) => img.set_src(src),
                Err(e) => log::warn!("image preload skipped for {src}: {e:?}"),
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = sources;
    }
}

/// Watch every `REVEAL_SELECTOR` element and add `ANIMATE_CLASS` once it
/// intersects the viewport. Call after the page is mounted.
pub fn observe_reveal_targets(observer_supported: bool) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let targets: Vec<web_sys::Element> = match document.query_selector_all(REVEAL_SELECTOR) {
            Ok(list) => (0..list.length())
                .filter_map(|i| list.item(i))
                .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
                .collect(),
            Err(_) => return,
        };

        if !observer_supported {
            for el in &targets {
                if let Some(class) = reveal_class(false, false) {
                    let _ = el.class_list().add_1(class);
                }
            }
            return;
        }

        let on_entries = Closure::<dyn FnMut(js_sys::Array)>::new(|entries: js_sys::Array| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if let Some(class) = reveal_class(true, entry.is_intersecting()) {
                    let _ = entry.target().class_list().add_1(class);
                }
            }
        });
        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer = match web_sys::IntersectionObserver::new_with_options(
            on_entries.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("reveal observer unavailable: {e:?}");
                return;
            }
        };
        on_entries.forget();
        for el in &targets {
            observer.observe(el);
        }
        log::debug!("observing {} reveal targets", targets.len());
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = observer_supported;
    }
}

/// Register the service worker at `path` when the browser supports it.
pub async fn register_service_worker(path: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let navigator = window.navigator();
        let has_sw = js_sys::Reflect::has(&navigator, &wasm_bindgen::JsValue::from_str("serviceWorker"))
            .unwrap_or(false);
        if !has_sw {
            log::debug!("service worker API unavailable");
            return;
        }
        let promise = navigator.service_worker().register(path);
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(_) => log::info!("ServiceWorker registration successful: {path}"),
            Err(e) => log::warn!("ServiceWorker registration failed: {e:?}"),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
    }
}
