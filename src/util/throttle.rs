//! Leading-edge throttle for high-frequency browser events.

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

/// Lets one call through, then drops calls until `limit_ms` has elapsed.
#[derive(Clone, Debug)]
pub struct Throttle {
    limit_ms: f64,
    last_fired: Option<f64>,
}

impl Throttle {
    #[must_use]
    pub fn new(limit_ms: f64) -> Self {
        Self { limit_ms, last_fired: None }
    }

    /// Whether a call at `now_ms` should run. Records it when it does.
    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_fired {
            if now_ms - last < self.limit_ms {
                return false;
            }
        }
        self.last_fired = Some(now_ms);
        true
    }
}

/// Milliseconds since the epoch from the browser clock; `0.0` natively.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}
