//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is a single page; `home` owns page-scoped orchestration and
//! delegates rendering details to `components`.

pub mod home;
