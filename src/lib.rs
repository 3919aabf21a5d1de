//! # portfolio
//!
//! Leptos + WASM behavior layer for a static personal portfolio site:
//! theme switching, navigation highlighting, typed hero text, project
//! filters, a contact form posted to a hosted form relay, and
//! progressive-enhancement touches (back-to-top, smooth scroll, WebP
//! detection, service-worker registration).
//!
//! Browser glue sits behind the `csr` feature; everything else builds and
//! tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
