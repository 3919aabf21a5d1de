//! Static portfolio content.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::state::projects::{FilterOption, Project};

pub const OWNER: &str = "Portfolio";

pub const HERO_IMAGE: &str = "./assets/images/hero-image.jpg";

/// Roles cycled by the hero typewriter.
pub const ROLES: &[&str] = &[
    "Data Science Enthusiast",
    "Machine Learning Engineer",
    "Python Developer",
    "Data Analyst",
    "Problem Solver",
];

/// In-page navigation: (href, label).
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

pub const FILTERS: &[FilterOption] = &[
    FilterOption { key: "all", label: "All" },
    FilterOption { key: "ml", label: "Machine Learning" },
    FilterOption { key: "data", label: "Data Analysis" },
    FilterOption { key: "web", label: "Web" },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Customer Churn Prediction",
        description: "Gradient-boosted model flagging at-risk subscribers from usage history.",
        categories: &["ml", "data"],
        tech: &["Python", "scikit-learn", "pandas"],
        link: "https://github.com/",
        image: Some("./assets/images/project-1.jpg"),
        featured: true,
    },
    Project {
        title: "Sales Insights Dashboard",
        description: "Interactive dashboard summarising regional sales trends.",
        categories: &["data", "web"],
        tech: &["SQL", "Power BI"],
        link: "https://github.com/",
        image: Some("./assets/images/project-2.jpg"),
        featured: true,
    },
    Project {
        title: "Sentiment Classifier",
        description: "Transformer fine-tuned on product reviews.",
        categories: &["ml"],
        tech: &["PyTorch", "Hugging Face"],
        link: "https://github.com/",
        image: None,
        featured: true,
    },
    Project {
        title: "Housing Price Regression",
        description: "Feature engineering and regularised regression on housing data.",
        categories: &["ml", "data"],
        tech: &["Python", "NumPy"],
        link: "https://github.com/",
        image: None,
        featured: false,
    },
    Project {
        title: "COVID-19 Trend Analysis",
        description: "Exploratory analysis of case and vaccination time series.",
        categories: &["data"],
        tech: &["pandas", "Matplotlib"],
        link: "https://github.com/",
        image: None,
        featured: false,
    },
    Project {
        title: "Personal Portfolio",
        description: "This site: static pages with a Rust/WASM behavior layer.",
        categories: &["web"],
        tech: &["Rust", "Leptos"],
        link: "https://github.com/",
        image: None,
        featured: false,
    },
];

/// Number of projects behind the more-projects toggle.
#[must_use]
pub fn extra_project_count() -> usize {
    PROJECTS.iter().filter(|p| !p.featured).count()
}

/// Images fetched ahead of layout: the hero portrait and featured thumbnails.
#[must_use]
pub fn critical_images() -> Vec<&'static str> {
    std::iter::once(HERO_IMAGE)
        .chain(PROJECTS.iter().filter(|p| p.featured).filter_map(|p| p.image))
        .collect()
}
