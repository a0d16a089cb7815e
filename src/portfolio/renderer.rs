// Paginated rendering of the ranked repository list.
// Owns the render state and the expand/collapse toggle.

use tokio::sync::broadcast;

use crate::config::{FALLBACK_PROJECTS, FALLBACK_STARS};

use super::display::{Display, RepoCard, Toggle};
use super::fetcher::FetchOutcome;
use super::ranking::{RankOptions, rank, total_stars};

/// Counter values published after a successful, non-empty render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rendered {
    pub visible_count: u64,
    pub star_total: u64,
}

/// Page size plus whether the hidden suffix is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    pub threshold: usize,
    pub expanded: bool,
}

impl RenderState {
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            expanded: false,
        }
    }
}

pub struct Renderer {
    state: RenderState,
    options: RankOptions,
    ranked_len: usize,
    events: broadcast::Sender<Rendered>,
}

impl Renderer {
    pub fn new(threshold: usize, options: RankOptions) -> Self {
        let (events, _) = broadcast::channel(4);
        Self {
            state: RenderState::new(threshold),
            options,
            ranked_len: 0,
            events,
        }
    }

    /// Receive a [`Rendered`] event for every populated render.
    pub fn subscribe(&self) -> broadcast::Receiver<Rendered> {
        self.events.subscribe()
    }

    /// Items in the initial page.
    pub fn visible_len(&self) -> usize {
        self.ranked_len.min(self.state.threshold)
    }

    /// Items past the initial page.
    pub fn hidden_len(&self) -> usize {
        self.ranked_len.saturating_sub(self.state.threshold)
    }

    /// Replace the panel with the loading placeholder. The toggle stays
    /// inert until the next populated render.
    pub fn loading(&mut self, display: &mut impl Display) {
        self.state.expanded = false;
        self.ranked_len = 0;
        display.set_toggle(None);
        display.show_loading();
        display.set_hidden_revealed(false);
    }

    /// Rank the fetched records and draw them, replacing any previous content.
    pub fn render(&mut self, outcome: &FetchOutcome, display: &mut impl Display) {
        self.state.expanded = false;

        let records = match outcome {
            FetchOutcome::Loaded(records) => records,
            FetchOutcome::Unavailable => {
                self.ranked_len = 0;
                display.set_toggle(None);
                display.show_error();
                display.set_hidden_revealed(false);
                display.set_counters(FALLBACK_PROJECTS, FALLBACK_STARS);
                return;
            }
        };

        let ranked = rank(records, self.options);
        self.ranked_len = ranked.len();

        if ranked.is_empty() {
            display.set_toggle(None);
            display.show_empty();
            display.set_hidden_revealed(false);
            return;
        }

        let threshold = self.state.threshold;
        let cards = ranked
            .iter()
            .enumerate()
            .map(|(i, repo)| RepoCard::new(repo, i >= threshold))
            .collect();
        display.show_list(cards);
        display.set_hidden_revealed(false);
        display.set_toggle((self.hidden_len() > 0).then_some(Toggle { expanded: false }));

        let rendered = Rendered {
            visible_count: self.visible_len() as u64,
            star_total: total_stars(&ranked),
        };
        display.set_counters(
            &rendered.visible_count.to_string(),
            &rendered.star_total.to_string(),
        );
        tracing::debug!(
            ranked = self.ranked_len,
            visible = rendered.visible_count,
            stars = rendered.star_total,
            "rendered projects"
        );

        // Nobody listening is fine.
        let _ = self.events.send(rendered);
    }

    pub fn expand(&mut self, display: &mut impl Display) {
        if self.hidden_len() == 0 || self.state.expanded {
            return;
        }
        self.state.expanded = true;
        display.set_hidden_revealed(true);
        display.set_toggle(Some(Toggle { expanded: true }));
    }

    pub fn collapse(&mut self, display: &mut impl Display) {
        if self.hidden_len() == 0 || !self.state.expanded {
            return;
        }
        self.state.expanded = false;
        display.set_hidden_revealed(false);
        display.set_toggle(Some(Toggle { expanded: false }));
        display.scroll_to_top();
    }

    pub fn toggle(&mut self, display: &mut impl Display) {
        if self.state.expanded {
            self.collapse(display);
        } else {
            self.expand(display);
        }
    }
}
