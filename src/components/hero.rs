//! Landing section: typed role headline, calls to action, parallax.

use leptos::prelude::*;

use crate::components::navbar::follow_anchor;
use crate::config::SiteConfig;
use crate::content;
use crate::state::ui::UiState;
use crate::util::scroll;

fn translate_y(px: f64) -> String {
    format!("transform: translateY({px}px);")
}

#[component]
pub fn Hero() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let ui = expect_context::<RwSignal<UiState>>();
    let scroll_cfg = config.scroll;
    let cursor = config.typewriter.cursor;

    let typed = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    {
        let mut writer = crate::util::typewriter::Typewriter::new(config.typewriter.clone());
        // Ends once the component is disposed and `typed` with it.
        leptos::task::spawn_local(async move {
            while let Some(delay) = writer.advance(|text| typed.try_set(text).is_none()) {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay))).await;
            }
        });
    }

    view! {
        <section id="home" class="hero">
            <div class="hero-container">
                <div class="hero-content" style=move || translate_y(ui.get().hero_offsets.0)>
                    <h1 class="hero-title">"Hi, I'm " <span class="highlight">{content::OWNER}</span></h1>
                    <h2 class="hero-subtitle">
                        <span id="typed-text">{move || typed.get()}</span>
                        <span class="typed-cursor">{cursor.to_string()}</span>
                    </h2>
                    <div class="hero-buttons">
                        <a href="#projects" class="btn btn-primary" on:click=move |ev| follow_anchor(&ev, "#projects", &scroll_cfg)>
                            "View My Work"
                        </a>
                        <a href="#contact" class="btn btn-secondary" on:click=move |ev| follow_anchor(&ev, "#contact", &scroll_cfg)>
                            "Get In Touch"
                        </a>
                    </div>
                </div>
                <div class="hero-image" style=move || translate_y(ui.get().hero_offsets.1)>
                    <img src=content::HERO_IMAGE alt="Portrait"/>
                </div>
            </div>
            <div class="scroll-indicator" on:click=move |_| scroll::scroll_into_view("about")>
                <i class="fas fa-chevron-down"></i>
            </div>
        </section>
    }
}
