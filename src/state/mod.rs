//! Application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain structs and state machines; components wrap them in `RwSignal`s and
//! provide them through context. Nothing here touches the DOM.

pub mod contact;
pub mod notification;
pub mod projects;
pub mod ui;
