//! Project grid with category filters and the collapsible more-projects list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Cards are indexed by their position in `content::PROJECTS`; featured and
//! extra cards share one `ProjectsState` so a filter applies to both lists.

use leptos::prelude::*;

use crate::content;
use crate::state::projects::{
    FADE_OUT_MS, Project, ProjectsState, is_activation_key, more_projects_icon, more_projects_label,
};
use crate::util::{scroll, timer};

const MORE_SECTION_ID: &str = "more-projects-details";

#[component]
fn ProjectCard(index: usize, project: &'static Project) -> impl IntoView {
    let projects = expect_context::<RwSignal<ProjectsState>>();
    let link_ref = NodeRef::<leptos::html::A>::new();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_activation_key(&ev.key()) {
            if let Some(link) = link_ref.get() {
                ev.prevent_default();
                link.click();
            }
        }
    };

    let categories = project.categories.join(" ");
    let tech = project
        .tech
        .iter()
        .map(|t| view! { <span class="tech-tag">{*t}</span> })
        .collect_view();

    view! {
        <div
            class="project-card"
            tabindex="0"
            data-category=categories
            style=move || projects.get().visibility(index).style()
            on:keydown=on_keydown
            data-aos="fade-up"
        >
            {project.image.map(|src| view! {
                <div class="project-image">
                    <img src=src alt=project.title loading="lazy"/>
                </div>
            })}
            <div class="project-content">
                <h3 class="project-title">{project.title}</h3>
                <p class="project-description">{project.description}</p>
                <div class="project-tech">{tech}</div>
                <a node_ref=link_ref href=project.link class="project-link" target="_blank" rel="noopener noreferrer">
                    <i class="fab fa-github"></i>
                    " View Project"
                </a>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let projects = expect_context::<RwSignal<ProjectsState>>();
    let extra_count = content::extra_project_count();

    let buttons = content::FILTERS
        .iter()
        .map(|option| {
            let key = option.key;
            let on_click = move |_| {
                let fading = projects
                    .try_update(|p| p.apply_filter(key, content::PROJECTS))
                    .unwrap_or_default();
                for idx in fading {
                    timer::after(FADE_OUT_MS, move || {
                        projects.maybe_update(|p| p.finish_fade(idx));
                    });
                }
            };
            view! {
                <button
                    class="filter-btn"
                    class:active=move || projects.get().filter == key
                    data-filter=key
                    on:click=on_click
                >
                    {option.label}
                </button>
            }
        })
        .collect_view();

    let cards = |featured: bool| {
        content::PROJECTS
            .iter()
            .enumerate()
            .filter(|(_, p)| p.featured == featured)
            .map(|(index, project)| view! { <ProjectCard index=index project=project/> })
            .collect_view()
    };

    let on_more_toggle = move |_| {
        let expanded = projects.try_update(ProjectsState::toggle_more).unwrap_or(false);
        if expanded {
            scroll::scroll_into_view(MORE_SECTION_ID);
        }
    };

    view! {
        <section id="projects" class="projects">
            <div class="container">
                <h2 class="section-title" data-aos="fade-up">"Projects"</h2>
                <div class="project-filters">{buttons}</div>
                <div class="projects-grid">{cards(true)}</div>
                <div class="more-projects">
                    <button id="toggle-more-projects" class="btn btn-secondary" on:click=on_more_toggle>
                        <i class=move || more_projects_icon(projects.get().more_expanded)></i>
                        " "
                        {move || more_projects_label(projects.get().more_expanded, extra_count)}
                    </button>
                    <div
                        id=MORE_SECTION_ID
                        class="more-projects-details"
                        class:collapsed=move || !projects.get().more_expanded
                    >
                        <div class="projects-grid">{cards(false)}</div>
                        <button id="hide-more-projects" class="btn btn-secondary" on:click=on_more_toggle>
                            "Hide Projects"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
