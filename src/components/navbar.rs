//! Fixed top navigation: brand, section links, theme toggle, mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Highlights the link for the section currently in view and restyles itself
//! once the page scrolls. In-page links scroll smoothly below the navbar.

use leptos::prelude::*;

use crate::config::{ScrollConfig, SiteConfig};
use crate::content;
use crate::state::ui::UiState;
use crate::util::scroll;
use crate::util::theme::{self, BrowserStorage};
use crate::util::timer;

/// Smooth-scroll handler for `#id` links. Missing targets are ignored.
pub fn follow_anchor(ev: &leptos::ev::MouseEvent, href: &str, cfg: &ScrollConfig) {
    if !href.starts_with('#') {
        return;
    }
    ev.prevent_default();
    if let Some(id) = scroll::anchor_id(href) {
        scroll::scroll_to_anchor(id, cfg);
    }
}

fn focus_first_nav_link() {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        if let Some(link) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector("#nav-menu .nav-link").ok().flatten())
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let _ = link.focus();
        }
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let ui = expect_context::<RwSignal<UiState>>();
    let scroll_cfg = config.scroll;
    let storage_key = config.theme_storage_key;

    let spinning = RwSignal::new(false);
    let on_theme_toggle = move |_| {
        let next = theme::toggle(ui.get_untracked().theme, &BrowserStorage, storage_key);
        ui.update(|u| u.theme = next);
        spinning.set(true);
        timer::after(300, move || spinning.set(false));
    };

    let on_menu_toggle = move |_| {
        let open = ui.try_update(UiState::toggle_nav).unwrap_or(false);
        if open {
            timer::after(100, focus_first_nav_link);
        }
    };

    let links = content::NAV_LINKS
        .iter()
        .map(move |&(href, label)| {
            view! {
                <li class="nav-item">
                    <a
                        href=href
                        class="nav-link"
                        class:active=move || ui.get().is_active_link(href)
                        on:click=move |ev| {
                            ui.update(UiState::close_nav);
                            follow_anchor(&ev, href, &scroll_cfg);
                        }
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav
            id="navbar"
            class="navbar"
            style=move || {
                let state = ui.get();
                scroll::navbar_style(state.theme, state.navbar_scrolled)
            }
        >
            <div class="nav-container">
                <a href="#home" class="nav-logo" on:click=move |ev| follow_anchor(&ev, "#home", &scroll_cfg)>
                    {content::OWNER}
                </a>
                <ul id="nav-menu" class="nav-menu" class:active=move || ui.get().nav_open>
                    {links}
                </ul>
                <div class="nav-actions">
                    <button
                        id="theme-toggle"
                        class="theme-toggle"
                        title="Toggle theme"
                        style=move || if spinning.get() { "transform: rotate(360deg);" } else { "transform: rotate(0deg);" }
                        on:click=on_theme_toggle
                    >
                        <i class=move || ui.get().theme.icon_class()></i>
                    </button>
                    <button
                        id="nav-toggle"
                        class="nav-toggle"
                        class:active=move || ui.get().nav_open
                        aria-label="Toggle navigation"
                        on:click=on_menu_toggle
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </div>
        </nav>
    }
}
