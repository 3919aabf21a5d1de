//! The single portfolio page.
//!
//! ARCHITECTURE
//! ============
//! Assembles the sections and owns the window scroll listener. Every event
//! updates the offset-driven flags; the active-section lookup is throttled
//! to the configured interval.

use leptos::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::contact_form::ContactForm;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::projects::ProjectsSection;
use crate::components::toast::Toast;
use crate::config::SiteConfig;
use crate::content;
use crate::state::ui::UiState;

fn install_scroll_listener(ui: RwSignal<UiState>, config: &SiteConfig) {
    #[cfg(feature = "csr")]
    {
        use crate::util::scroll;
        use crate::util::throttle::{Throttle, now_ms};

        let scroll_cfg = config.scroll;
        let throttle = StoredValue::new(Throttle::new(scroll_cfg.throttle_ms));
        let _listener = window_event_listener(leptos::ev::scroll, move |_| {
            let y = scroll::scroll_y();
            throttle.update_value(|t| {
                ui.update(|u| u.handle_scroll(y, now_ms(), t, scroll::section_bounds, &scroll_cfg));
            });
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ui, config);
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let ui = expect_context::<RwSignal<UiState>>();

    install_scroll_listener(ui, &config);

    view! {
        <Navbar/>
        <main>
            <Hero/>
            <section id="about" class="about">
                <div class="container">
                    <h2 class="section-title" data-aos="fade-up">"About Me"</h2>
                    <p class="about-text" data-aos="fade-up">
                        "I turn data into decisions: cleaning it, modelling it, and shipping the results as tools people use."
                    </p>
                </div>
            </section>
            <ProjectsSection/>
            <section id="contact" class="contact">
                <div class="container">
                    <h2 class="section-title" data-aos="fade-up">"Get In Touch"</h2>
                    <ContactForm/>
                </div>
            </section>
        </main>
        <footer class="footer">
            <p>{format!("© {}", content::OWNER)}</p>
        </footer>
        <BackToTop/>
        <Toast/>
    }
}
