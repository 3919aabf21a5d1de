//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from context and keep their own logic to
//! small pure helpers; page assembly happens in `pages`.

pub mod back_to_top;
pub mod contact_form;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod toast;
