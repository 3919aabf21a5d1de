//! Project grid state: category filter, card visibility, more-projects toggle.
//!
//! DESIGN
//! ======
//! Hiding a card is two-step: it fades out first and only collapses to
//! `display: none` when the fade timer fires. If the filter brings the card
//! back before then, the pending collapse is ignored.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

pub const FILTER_ALL: &str = "all";
/// Fade-out duration before a filtered card is removed from layout.
pub const FADE_OUT_MS: u32 = 300;

/// One portfolio project card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub categories: &'static [&'static str],
    pub tech: &'static [&'static str],
    pub link: &'static str,
    /// Card thumbnail.
    pub image: Option<&'static str>,
    /// Featured projects show up front; the rest live in the collapsible section.
    pub featured: bool,
}

/// A filter button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterOption {
    pub key: &'static str,
    pub label: &'static str,
}

#[must_use]
pub fn matches_filter(filter: &str, categories: &[&str]) -> bool {
    filter == FILTER_ALL || categories.contains(&filter)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVisibility {
    /// Initial layout, no filter animation applied yet.
    #[default]
    Resting,
    Visible,
    FadingOut,
    Hidden,
}

impl CardVisibility {
    #[must_use]
    pub fn style(self) -> &'static str {
        match self {
            Self::Resting => "",
            Self::Visible => "display: grid; opacity: 1; animation: fadeInUp 0.6s ease-in-out;",
            Self::FadingOut => "display: grid; animation: fadeOut 0.3s ease-in-out;",
            Self::Hidden => "display: none;",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectsState {
    pub filter: &'static str,
    pub cards: Vec<CardVisibility>,
    pub more_expanded: bool,
}

impl ProjectsState {
    #[must_use]
    pub fn new(card_count: usize) -> Self {
        Self {
            filter: FILTER_ALL,
            cards: vec![CardVisibility::Resting; card_count],
            more_expanded: false,
        }
    }

    /// Switch to `filter`. Returns the indices that started fading out; the
    /// caller schedules `finish_fade` for each after `FADE_OUT_MS`.
    pub fn apply_filter(&mut self, filter: &'static str, projects: &[Project]) -> Vec<usize> {
        self.filter = filter;
        let mut fading = Vec::new();
        for (idx, (card, project)) in self.cards.iter_mut().zip(projects).enumerate() {
            if matches_filter(filter, project.categories) {
                *card = CardVisibility::Visible;
            } else if *card != CardVisibility::Hidden {
                *card = CardVisibility::FadingOut;
                fading.push(idx);
            }
        }
        fading
    }

    /// Collapse card `idx` if it is still fading out.
    pub fn finish_fade(&mut self, idx: usize) -> bool {
        match self.cards.get_mut(idx) {
            Some(card) if *card == CardVisibility::FadingOut => {
                *card = CardVisibility::Hidden;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn visibility(&self, idx: usize) -> CardVisibility {
        self.cards.get(idx).copied().unwrap_or_default()
    }

    /// Flip the more-projects section. Returns the new expanded state.
    pub fn toggle_more(&mut self) -> bool {
        self.more_expanded = !self.more_expanded;
        self.more_expanded
    }
}

#[must_use]
pub fn more_projects_label(expanded: bool, extra_count: usize) -> String {
    if expanded {
        "Collapse Projects".to_owned()
    } else {
        format!("View {extra_count} More Projects")
    }
}

#[must_use]
pub fn more_projects_icon(expanded: bool) -> &'static str {
    if expanded { "fas fa-chevron-up" } else { "fas fa-chevron-down" }
}

/// Enter or Space on a focused card follows its link.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}
