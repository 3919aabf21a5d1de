//! Transient notification shown in the top-right corner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the single `ToastState` slot and drives its lifecycle timers:
//! slide in after a short delay, hold, slide out, remove.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::state::notification::{Notification, ToastPhase, ToastState};
use crate::util::timer;

/// Replace the visible notification with `notification`.
pub fn show_toast(toasts: RwSignal<ToastState>, notification: Notification) {
    toasts.update(|state| {
        state.show(notification);
    });
}

fn toast_transform(phase: ToastPhase) -> &'static str {
    match phase {
        ToastPhase::Shown => "transform: translateX(0);",
        ToastPhase::Entering | ToastPhase::Leaving => "transform: translateX(100%);",
    }
}

#[component]
pub fn Toast() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let step = Memo::new(move |_| toasts.with(|s| s.current.as_ref().map(|t| (t.id, t.phase))));

    Effect::new(move || {
        if let Some((id, phase)) = step.get() {
            timer::after(phase.step_delay_ms(), move || {
                toasts.maybe_update(|s| s.advance(id));
            });
        }
    });

    view! {
        {move || {
            toasts.get().current.map(|active| {
                let severity = active.notification.severity;
                view! {
                    <div
                        class=severity.css_class()
                        role="status"
                        style=toast_transform(active.phase)
                    >
                        <i class=severity.icon_class()></i>
                        <span>{active.notification.text}</span>
                    </div>
                }
            })
        }}
    }
}
