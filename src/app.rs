// App state and main event loop.
// Wires the fetch task, renderer, and counter animation to keyboard input.

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use crate::cache::{ExpiringCache, FileStore, KeyValueStore, MemoryStore};
use crate::config::Config;
use crate::error::{FolioError, Result};
use crate::github::GitHubClient;
use crate::portfolio::{
    CounterAnimator, FetchOutcome, Fetcher, RankOptions, Renderer, UserRepos,
};
use crate::state::PanelView;
use crate::{ui, util};

/// Idle poll interval when nothing is animating.
const IDLE_POLL: Duration = Duration::from_millis(100);

type PortfolioFetcher = Fetcher<UserRepos, Box<dyn KeyValueStore + Send>>;

/// Main application state.
pub struct App {
    pub config: Config,
    /// Projects panel as drawn.
    pub panel: PanelView,
    /// Fetches spawned and not yet delivered.
    in_flight: usize,
    renderer: Renderer,
    animator: CounterAnimator,
    fetcher: Arc<PortfolioFetcher>,
    outcomes_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcomes_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let client = GitHubClient::new(
            &config.api_base,
            config.token.as_deref(),
            config.request_timeout,
        )?;

        let store: Box<dyn KeyValueStore + Send> = if config.persist_cache {
            Box::new(FileStore::in_cache_dir().ok_or(FolioError::NoCacheDir)?)
        } else {
            Box::new(MemoryStore::new())
        };
        let cache = ExpiringCache::new(store, config.cache_key.clone(), config.cache_ttl);
        let fetcher = Fetcher::new(UserRepos::new(client, config.user.clone()), cache);

        let renderer = Renderer::new(
            config.threshold,
            RankOptions {
                exclude_archived: config.exclude_archived,
            },
        );
        let animator = CounterAnimator::new(
            renderer.subscribe(),
            config.counter_duration,
            config.counter_tick,
        );
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();

        Ok(Self {
            config,
            panel: PanelView::new(),
            in_flight: 0,
            renderer,
            animator,
            fetcher: Arc::new(fetcher),
            outcomes_tx,
            outcomes_rx,
            should_quit: false,
        })
    }

    /// Main event loop. Must be called from within a tokio runtime.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        self.refresh();

        while !self.should_quit {
            self.deliver_outcomes();
            let animating = self.animator.advance(Instant::now(), &mut self.panel);
            terminal.draw(|frame| ui::draw(frame, self))?;

            let timeout = if animating {
                self.animator.tick_interval()
            } else {
                IDLE_POLL
            };
            self.handle_events(timeout)?;
        }
        Ok(())
    }

    /// Whether any spawned fetch is still outstanding.
    pub fn fetching(&self) -> bool {
        self.in_flight > 0
    }

    /// Show the loading state and spawn a fetch.
    pub fn refresh(&mut self) {
        self.animator.stop();
        self.renderer.loading(&mut self.panel);
        self.in_flight += 1;

        let fetcher = Arc::clone(&self.fetcher);
        let tx = self.outcomes_tx.clone();
        tokio::spawn(async move {
            let outcome = fetcher.get_repositories().await;
            // Receiver only goes away on shutdown.
            let _ = tx.send(outcome);
        });
        tracing::debug!(user = %self.config.user, "fetch spawned");
    }

    /// Render any fetch results that arrived since the last frame.
    fn deliver_outcomes(&mut self) {
        while let Ok(outcome) = self.outcomes_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.renderer.render(&outcome, &mut self.panel);
        }
    }

    /// Handle keyboard and other events.
    fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            self.handle_key(key.code);
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') | KeyCode::Char('m') => self.renderer.toggle(&mut self.panel),
            KeyCode::Down | KeyCode::Char('j') => self.panel.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.panel.select_prev(),
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('o') => util::open_url(&self.config.profile_url()),
            KeyCode::Enter => {
                if let Some(card) = self.panel.selected_card() {
                    util::open_url(&card.url);
                }
            }
            _ => {}
        }
    }
}
