//! Transient notification (toast) state.
//!
//! DESIGN
//! ======
//! One notification is visible at a time. Showing a new one replaces the
//! current one outright; lifetime timers carry the id they were scheduled for
//! so a timer belonging to a replaced notification is ignored.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

/// Delay before a new notification slides in.
pub const ENTER_DELAY_MS: u32 = 100;
/// Time a notification stays fully visible.
pub const HOLD_MS: u32 = 3000;
/// Slide-out duration before removal.
pub const EXIT_MS: u32 = 300;

/// Visual severity of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "notification notification-success",
            Self::Error => "notification notification-error",
        }
    }

    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle",
            Self::Error => "fas fa-exclamation-circle",
        }
    }
}

/// A user-visible message with severity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub severity: Severity,
}

impl Notification {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: Severity::Success }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: Severity::Error }
    }
}

/// Lifecycle phase of the visible notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    /// Mounted off-screen, waiting to slide in.
    Entering,
    /// Fully visible.
    Shown,
    /// Sliding out; removed when the next step fires.
    Leaving,
}

impl ToastPhase {
    /// Milliseconds until the next lifecycle step.
    #[must_use]
    pub fn step_delay_ms(self) -> u32 {
        match self {
            Self::Entering => ENTER_DELAY_MS,
            Self::Shown => HOLD_MS,
            Self::Leaving => EXIT_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveToast {
    pub id: u64,
    pub notification: Notification,
    pub phase: ToastPhase,
}

/// Current notification slot.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    pub current: Option<ActiveToast>,
}

impl ToastState {
    /// Replace whatever is visible with `notification`. Returns its id.
    pub fn show(&mut self, notification: Notification) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(ActiveToast { id, notification, phase: ToastPhase::Entering });
        id
    }

    /// Advance the notification `id` one lifecycle step.
    ///
    /// Returns `false` when `id` is no longer the visible notification.
    pub fn advance(&mut self, id: u64) -> bool {
        let Some(active) = self.current.as_mut().filter(|t| t.id == id) else {
            return false;
        };
        match active.phase {
            ToastPhase::Entering => active.phase = ToastPhase::Shown,
            ToastPhase::Shown => active.phase = ToastPhase::Leaving,
            ToastPhase::Leaving => self.current = None,
        }
        true
    }
}
