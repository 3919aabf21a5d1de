//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic. Each keeps its decision rules pure and its `web-sys`
//! glue behind the `csr` feature.

pub mod analytics;
pub mod errors;
pub mod features;
pub mod scroll;
pub mod theme;
pub mod throttle;
pub mod timer;
pub mod typewriter;
