// Projects panel view state.
// The terminal `Display`: panel body, counter slots, toggle, and selection.

use ratatui::widgets::ListState;

use crate::portfolio::{Display, RepoCard, Toggle};

pub const LOADING_TEXT: &str = "Loading projects…";
pub const EMPTY_TEXT: &str = "No projects found.";
pub const ERROR_TEXT: &str = "Unable to load projects. Try again later.";

/// What the panel body currently holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PanelBody {
    #[default]
    Loading,
    List(Vec<RepoCard>),
    Empty,
    Error,
}

/// Everything drawn for the projects panel.
#[derive(Debug, Clone, Default)]
pub struct PanelView {
    pub body: PanelBody,
    /// Project counter text; `None` until first populated.
    pub projects: Option<String>,
    /// Star counter text; `None` until first populated.
    pub stars: Option<String>,
    pub toggle: Option<Toggle>,
    /// Whether hidden cards are currently shown.
    pub revealed: bool,
    pub list_state: ListState,
}

impl PanelView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every materialised card, hidden ones included.
    pub fn cards(&self) -> &[RepoCard] {
        match &self.body {
            PanelBody::List(cards) => cards,
            _ => &[],
        }
    }

    /// Cards currently on screen.
    pub fn displayed(&self) -> Vec<&RepoCard> {
        self.cards()
            .iter()
            .filter(|card| self.revealed || !card.hidden)
            .collect()
    }

    /// Select the next card, staying on the last one.
    pub fn select_next(&mut self) {
        let len = self.displayed().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Select the previous card, staying on the first one.
    pub fn select_prev(&mut self) {
        if self.displayed().is_empty() {
            return;
        }
        let i = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(i));
    }

    pub fn selected_card(&self) -> Option<&RepoCard> {
        let index = self.list_state.selected()?;
        self.displayed().get(index).copied()
    }

    fn reset_selection(&mut self) {
        let first = (!self.displayed().is_empty()).then_some(0);
        self.list_state.select(first);
        *self.list_state.offset_mut() = 0;
    }
}

impl Display for PanelView {
    fn show_loading(&mut self) {
        self.body = PanelBody::Loading;
        self.reset_selection();
    }

    fn show_list(&mut self, cards: Vec<RepoCard>) {
        self.body = PanelBody::List(cards);
        self.reset_selection();
    }

    fn show_empty(&mut self) {
        self.body = PanelBody::Empty;
        self.reset_selection();
    }

    fn show_error(&mut self) {
        self.body = PanelBody::Error;
        self.reset_selection();
    }

    fn set_counters(&mut self, projects: &str, stars: &str) {
        self.projects = Some(projects.to_string());
        self.stars = Some(stars.to_string());
    }

    fn set_toggle(&mut self, toggle: Option<Toggle>) {
        self.toggle = toggle;
    }

    fn set_hidden_revealed(&mut self, revealed: bool) {
        self.revealed = revealed;
        // Keep the selection inside the shorter list after hiding cards
        let len = self.displayed().len();
        if let Some(i) = self.list_state.selected()
            && i >= len
        {
            self.list_state.select(len.checked_sub(1));
        }
    }

    fn scroll_to_top(&mut self) {
        self.reset_selection();
    }
}
