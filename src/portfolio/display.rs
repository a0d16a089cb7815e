// Output capability for the projects panel.
// The renderer and counter animation only ever talk to a `Display`.

use chrono::{DateTime, Utc};

use crate::github::Repository;

/// One repository as materialised in the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCard {
    pub name: String,
    pub description: String,
    pub language: String,
    pub stars: u64,
    pub updated_at: DateTime<Utc>,
    pub url: String,
    /// Beyond the initial page; shown only while the list is expanded.
    pub hidden: bool,
}

impl RepoCard {
    pub fn new(repo: &Repository, hidden: bool) -> Self {
        Self {
            name: repo.name.clone(),
            description: repo.description.clone().unwrap_or_default(),
            language: repo.language.clone().unwrap_or_default(),
            stars: repo.stargazers_count,
            updated_at: repo.updated_at,
            url: repo.html_url.clone(),
            hidden,
        }
    }
}

/// The "See More" / "Show Less" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    pub expanded: bool,
}

impl Toggle {
    pub fn label(&self) -> &'static str {
        if self.expanded { "Show Less" } else { "See More" }
    }

    /// Mirrors the accessibility attribute of the web control.
    pub fn aria_expanded(&self) -> bool {
        self.expanded
    }
}

/// A surface the projects panel can be drawn on.
pub trait Display {
    fn show_loading(&mut self);
    /// Replace the panel content with `cards`, hidden ones included.
    fn show_list(&mut self, cards: Vec<RepoCard>);
    fn show_empty(&mut self);
    fn show_error(&mut self);
    fn set_counters(&mut self, projects: &str, stars: &str);
    /// `None` removes the toggle entirely.
    fn set_toggle(&mut self, toggle: Option<Toggle>);
    fn set_hidden_revealed(&mut self, revealed: bool);
    fn scroll_to_top(&mut self);
}
