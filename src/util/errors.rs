//! Page-wide handlers for script errors and unhandled promise rejections.
//!
//! `console_error_panic_hook` covers Rust panics; these listeners catch
//! everything else the page throws and route it to the log.

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

/// Log line for an uncaught script error.
#[must_use]
pub fn describe_script_error(message: &str, source: &str, line: u32, column: u32) -> String {
    if source.is_empty() {
        format!("An error occurred: {message}")
    } else {
        format!("An error occurred: {message} ({source}:{line}:{column})")
    }
}

/// Log line for a rejected promise nobody awaited.
#[must_use]
pub fn describe_rejection(reason: &str) -> String {
    format!("Unhandled promise rejection: {reason}")
}

/// Log uncaught errors, and log and swallow unhandled rejections.
pub fn install_global_handlers() {
    #[cfg(feature = "csr")]
    {
        use leptos::ev::Custom;
        use leptos::prelude::window_event_listener;
        use wasm_bindgen::JsCast;

        let _errors = window_event_listener(Custom::<web_sys::Event>::new("error"), |ev| {
            match ev.dyn_ref::<web_sys::ErrorEvent>() {
                Some(err) => log::error!(
                    "{}",
                    describe_script_error(&err.message(), &err.filename(), err.lineno(), err.colno())
                ),
                None => log::error!("{}", describe_script_error(&ev.type_(), "", 0, 0)),
            }
        });

        let _rejections = window_event_listener(Custom::<web_sys::Event>::new("unhandledrejection"), |ev| {
            let reason = ev
                .dyn_ref::<web_sys::PromiseRejectionEvent>()
                .map(|rejection| {
                    let reason = rejection.reason();
                    reason.as_string().unwrap_or_else(|| format!("{reason:?}"))
                })
                .unwrap_or_default();
            log::error!("{}", describe_rejection(&reason));
            ev.prevent_default();
        });
    }
}
