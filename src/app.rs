use crate::config::Config;
use crate::feed::{self, FeedEntry, FetchError};
use crate::pagination::Cursor;
use crate::view::{self, NewsCard, PageSummary};
use anyhow::Result;
use reqwest::redirect::Policy;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Descriptive client identifier sent with every feed request.
pub const USER_AGENT: &str = concat!("newsdesk/", env!("CARGO_PKG_VERSION"));

/// How long transient status messages stay in the status bar.
const STATUS_TTL: Duration = Duration::from_secs(5);

/// Redirect policy with loop detection and limited hops. Google News entry
/// links are redirectors, so the feed endpoint itself may bounce once.
fn create_redirect_policy() -> Policy {
    Policy::custom(|attempt| {
        if attempt.previous().len() >= 3 {
            return attempt.error("Too many redirects (max 3)");
        }
        let url = attempt.url();
        if attempt.previous().iter().any(|prev| prev.as_str() == url.as_str()) {
            return attempt.error("Redirect loop detected");
        }
        attempt.follow()
    })
}

/// HTTP client used for every feed request, whichever surface issues it:
/// descriptive User-Agent plus the capped redirect policy.
pub fn build_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .redirect(create_redirect_policy())
        .build()
}

/// Outcome of the last completed fetch, driving which message the UI shows.
///
/// `Failed` is distinct from an empty `Ready` on purpose: "the network is
/// down" and "zero news today" get different messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    /// No fetch has completed yet this session.
    Loading,
    /// Last fetch succeeded; `entries` is current (possibly empty).
    Ready,
    /// Last fetch failed; any previously shown entries are kept on screen.
    Failed,
}

/// Events from background tasks back into the UI loop.
#[derive(Debug)]
pub enum AppEvent {
    FetchCompleted {
        /// Matches `App::fetch_generation`; stale completions are dropped.
        generation: u64,
        result: Result<Vec<FeedEntry>, FetchError>,
    },
}

/// Application state: the fetched entry list, the pagination cursor, and
/// transient UI bits. The cursor lives here — caller-owned, not ambient —
/// so refresh/load-more are plain methods testable without a terminal.
pub struct App {
    pub config: Config,
    pub client: reqwest::Client,
    pub entries: Vec<FeedEntry>,
    /// Display records for the visible prefix, rebuilt only when the
    /// entries or the cursor change, never per redraw.
    cards: Vec<NewsCard>,
    pub cursor: Cursor,
    pub fetch_state: FetchState,
    /// A fetch task is in flight.
    pub fetching: bool,
    /// Selected card index within the visible prefix.
    pub selected: usize,
    pub status_message: Option<(String, Instant)>,
    pub needs_redraw: bool,
    fetch_generation: u64,
    fetch_handle: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let client = build_client()?;

        Ok(Self {
            cursor: Cursor::new(config.page_size),
            config,
            client,
            entries: Vec::new(),
            cards: Vec::new(),
            fetch_state: FetchState::Loading,
            fetching: false,
            selected: 0,
            status_message: None,
            needs_redraw: true,
            fetch_generation: 0,
            fetch_handle: None,
        })
    }

    /// Display records for the visible prefix.
    pub fn page(&self) -> &[NewsCard] {
        &self.cards
    }

    fn rebuild_page(&mut self) {
        let (cards, _) = view::page(&self.entries, self.cursor);
        self.cards = cards;
    }

    pub fn summary(&self) -> PageSummary {
        PageSummary {
            shown: self.cursor.visible_count(self.entries.len()),
            total: self.entries.len(),
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), Instant::now()));
        self.needs_redraw = true;
    }

    /// Drop the status message once it has been on screen long enough.
    /// Returns true if a message was cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        match &self.status_message {
            Some((_, shown_at)) if shown_at.elapsed() >= STATUS_TTL => {
                self.status_message = None;
                true
            }
            _ => false,
        }
    }

    /// Re-fetch the feed. The cursor is untouched: a refresh replaces the
    /// entries but preserves how many are revealed.
    pub fn refresh(&mut self, event_tx: &mpsc::Sender<AppEvent>) {
        self.spawn_fetch(event_tx);
    }

    /// Reveal one more page. Enabled only while entries remain hidden.
    /// With `always_fresh` (the default) this also re-fetches, matching the
    /// always-current behavior of the feed page; otherwise the session's
    /// entries are reused and only `r` hits the network.
    pub fn load_more(&mut self, event_tx: &mpsc::Sender<AppEvent>) {
        if self.cursor.exhausted(self.entries.len()) {
            return;
        }
        self.cursor = self.cursor.advance();
        self.rebuild_page();
        self.needs_redraw = true;
        if self.config.always_fresh {
            self.spawn_fetch(event_tx);
        }
    }

    /// Start a background fetch, aborting any fetch still in flight. The
    /// generation counter makes sure a slow stale fetch can never clobber
    /// the result of a newer one.
    pub fn spawn_fetch(&mut self, event_tx: &mpsc::Sender<AppEvent>) {
        if let Some(handle) = self.fetch_handle.take() {
            handle.abort();
        }

        self.fetch_generation = self.fetch_generation.wrapping_add(1);
        let generation = self.fetch_generation;
        self.fetching = true;
        self.needs_redraw = true;

        let client = self.client.clone();
        let endpoint = self.config.endpoint.clone();
        let query = self.config.query.clone();
        let timeout = self.config.request_timeout();
        let tx = event_tx.clone();

        self.fetch_handle = Some(tokio::spawn(async move {
            let result = feed::fetch(&client, &endpoint, &query, timeout).await;
            if let Err(e) = tx.send(AppEvent::FetchCompleted { generation, result }).await {
                tracing::warn!(error = %e, "Failed to send fetch result (receiver dropped)");
            }
        }));
    }

    /// Fold a completed fetch into the state.
    pub fn apply_fetch(&mut self, generation: u64, result: Result<Vec<FeedEntry>, FetchError>) {
        if generation != self.fetch_generation {
            tracing::debug!(generation, current = self.fetch_generation, "Dropping stale fetch result");
            return;
        }
        self.fetching = false;
        self.needs_redraw = true;

        match result {
            Ok(entries) => {
                self.fetch_state = FetchState::Ready;
                self.entries = entries;
                self.rebuild_page();
                let visible = self.cursor.visible_count(self.entries.len());
                self.selected = self.selected.min(visible.saturating_sub(1));
                if self.entries.is_empty() {
                    self.set_status("No news items found. Please try again later.");
                } else {
                    self.status_message = None;
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Feed fetch failed");
                self.fetch_state = FetchState::Failed;
                self.set_status(format!("Error fetching news: {e}"));
            }
        }
    }

    /// Move the selection by `delta`, clamped to the visible prefix.
    pub fn move_selection(&mut self, delta: isize) {
        let visible = self.cursor.visible_count(self.entries.len());
        if visible == 0 {
            return;
        }
        let max = visible - 1;
        self.selected = self
            .selected
            .saturating_add_signed(delta)
            .min(max);
        self.needs_redraw = true;
    }

    /// Link of the selected entry, if any entries are visible.
    pub fn selected_link(&self) -> Option<&str> {
        let visible = self.cursor.visible_count(self.entries.len());
        self.entries[..visible]
            .get(self.selected)
            .map(|e| e.link.as_str())
    }
}
