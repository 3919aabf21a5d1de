//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `relay` owns the single outbound HTTP call this site makes: posting the
//! contact form to a hosted form-relay service.

pub mod relay;
