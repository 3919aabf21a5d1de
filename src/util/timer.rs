//! One-shot UI timers.

/// Run `f` once after `ms` milliseconds. Native builds never fire.
pub fn after<F>(ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "csr")]
    {
        gloo_timers::callback::Timeout::new(ms, f).forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ms, f);
    }
}
