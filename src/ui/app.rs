//! Main TUI application state and event loop.
//!
//! The [`App`] is the interaction controller: it maps key events onto
//! selection transitions, rebuilds the cached view descriptions, and drives
//! the transition scheduler. Header, metrics, and card list update the
//! moment a collection is selected; the detail and visual panes go through
//! a short hide → rebuild → show swap so stale content never flashes.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use atelier_core::content::{Catalogue, ContentError};
use atelier_core::schedule::{Scheduler, TaskKey, TransitionGroup};
use atelier_core::state::Selection;
use atelier_core::view::{
    self, CertificationCardView, CollectionHeaderView, MetricView, ProjectDetailView, ProjectList,
};

use super::render;
use super::theme::Theme;

/// Delay between hiding stale detail/visual content and showing the new.
const SWAP_DELAY: Duration = Duration::from_millis(140);

/// Per-card delay of the staggered list entrance.
const REVEAL_INTERVAL: Duration = Duration::from_millis(40);

/// Focus targets among the interactive regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRegion {
    Collections,
    Projects,
    Certifications,
}

/// Deferred UI effects sequenced by the transition scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Effect {
    /// Rebuild the detail + visual panes from the current selection, show
    /// them, and update the live region.
    CommitSwap,
    /// Reveal the sub-project card at this index.
    RevealCard(usize),
    /// Move keyboard focus to the first card once the reveal settles.
    FocusFirstCard,
}

/// View descriptions currently on screen.
struct ViewCache {
    header: CollectionHeaderView,
    metrics: Vec<MetricView>,
    cards: ProjectList,
    detail: ProjectDetailView,
    certifications: Vec<CertificationCardView>,
}

/// Main TUI application.
pub struct App {
    catalogue: Catalogue,
    selection: Selection,
    scheduler: Scheduler<Effect>,
    views: ViewCache,
    pub theme: Theme,
    focus: FocusRegion,
    /// Roving focus among collection cards; moves without changing the
    /// selection until Enter/Space commits it.
    focused_collection: usize,
    /// Cursor within the sub-project card list.
    cursor_project: usize,
    /// Cursor within the certification strip.
    focused_cert: usize,
    /// How many sub-project cards have entered so far.
    revealed_cards: usize,
    /// True while the detail/visual panes are hidden awaiting a swap.
    swap_pending: bool,
    /// Live-region text narrating the last settled change.
    live_region: String,
    /// Which card opened the lightbox, for focus restoration on close.
    lightbox_opener: Option<usize>,
    help_visible: bool,
    reduced_motion: bool,
    should_quit: bool,
    needs_redraw: bool,
}

impl App {
    /// Build the application and perform the initial collection selection
    /// that establishes the default view.
    pub fn new(catalogue: Catalogue, reduced_motion: bool) -> Result<Self, ContentError> {
        let selection = Selection::initial(&catalogue)?;
        let collection = selection
            .active_collection(&catalogue)
            .ok_or(ContentError::EmptyCatalogue)?;

        let views = ViewCache {
            header: view::collection_header(collection),
            metrics: view::metrics(collection),
            cards: view::project_cards(collection),
            detail: view::project_detail(collection, None),
            certifications: view::certification_cards(catalogue.certifications()),
        };

        let mut app = Self {
            catalogue,
            selection,
            scheduler: Scheduler::new(),
            views,
            theme: Theme::default(),
            focus: FocusRegion::Collections,
            focused_collection: 0,
            cursor_project: 0,
            focused_cert: 0,
            revealed_cards: 0,
            swap_pending: false,
            live_region: String::new(),
            lightbox_opener: None,
            help_visible: false,
            reduced_motion,
            should_quit: false,
            needs_redraw: true,
        };

        // One select_collection for the first card establishes the default
        // view through the same path user input takes.
        app.activate_collection(0, Instant::now());
        Ok(app)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Check if redraw is needed and clear the flag.
    pub fn take_redraw(&mut self) -> bool {
        let needed = self.needs_redraw;
        self.needs_redraw = false;
        needed
    }

    // ============================================================
    // Accessors for the renderer
    // ============================================================

    pub(super) fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub(super) fn selection(&self) -> &Selection {
        &self.selection
    }

    pub(super) fn focus(&self) -> FocusRegion {
        self.focus
    }

    pub(super) fn focused_collection(&self) -> usize {
        self.focused_collection
    }

    pub(super) fn cursor_project(&self) -> usize {
        self.cursor_project
    }

    pub(super) fn focused_cert(&self) -> usize {
        self.focused_cert
    }

    pub(super) fn revealed_cards(&self) -> usize {
        self.revealed_cards
    }

    pub(super) fn swap_pending(&self) -> bool {
        self.swap_pending
    }

    pub(super) fn live_region(&self) -> &str {
        &self.live_region
    }

    pub(super) fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub(super) fn header(&self) -> &CollectionHeaderView {
        &self.views.header
    }

    pub(super) fn metrics(&self) -> &[MetricView] {
        &self.views.metrics
    }

    pub(super) fn cards(&self) -> &ProjectList {
        &self.views.cards
    }

    pub(super) fn detail(&self) -> &ProjectDetailView {
        &self.views.detail
    }

    pub(super) fn certifications(&self) -> &[CertificationCardView] {
        &self.views.certifications
    }

    // ============================================================
    // Event handling
    // ============================================================

    /// Handle a terminal event.
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Resize(_, _) => {
                self.needs_redraw = true;
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key(key, now);
                self.needs_redraw = true;
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // The lightbox is modal; route its keys first.
        if self.selection.lightbox().is_some() {
            self.handle_lightbox_key(key);
            return;
        }

        if self.help_visible {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')
            ) {
                self.help_visible = false;
            }
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.help_visible = true,
            KeyCode::Tab => self.cycle_focus(true),
            KeyCode::BackTab => self.cycle_focus(false),
            // Duplicate "theme shortcut" controls: digits select the nth
            // collection through the same transition the rail uses.
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                if index < self.catalogue.collections().len() {
                    self.activate_collection(index, now);
                }
            }
            _ => match self.focus {
                FocusRegion::Collections => self.handle_collections_key(key, now),
                FocusRegion::Projects => self.handle_projects_key(key, now),
                FocusRegion::Certifications => self.handle_certifications_key(key),
            },
        }
    }

    /// Arrow keys rove focus cyclically without changing the selection;
    /// Enter/Space commits the focused card.
    fn handle_collections_key(&mut self, key: KeyEvent, now: Instant) {
        let count = self.catalogue.collections().len();
        match key.code {
            KeyCode::Right | KeyCode::Down => {
                self.focused_collection = (self.focused_collection + 1) % count;
            }
            KeyCode::Left | KeyCode::Up => {
                self.focused_collection = (self.focused_collection + count - 1) % count;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.activate_collection(self.focused_collection, now);
            }
            _ => {}
        }
    }

    fn handle_projects_key(&mut self, key: KeyEvent, now: Instant) {
        let count = self.views.cards.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') if count > 0 => {
                self.cursor_project = (self.cursor_project + 1) % count;
            }
            KeyCode::Up | KeyCode::Char('k') if count > 0 => {
                self.cursor_project = (self.cursor_project + count - 1) % count;
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.select_project_at_cursor(now),
            KeyCode::Esc => self.clear_project_selection(now),
            _ => {}
        }
    }

    fn handle_certifications_key(&mut self, key: KeyEvent) {
        let count = self.views.certifications.len();
        if count == 0 {
            return;
        }
        match key.code {
            KeyCode::Right | KeyCode::Down => {
                self.focused_cert = (self.focused_cert + 1) % count;
            }
            KeyCode::Left | KeyCode::Up => {
                self.focused_cert = (self.focused_cert + count - 1) % count;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self
                    .selection
                    .open_lightbox(self.focused_cert, count)
                    .is_applied()
                {
                    self.lightbox_opener = Some(self.focused_cert);
                }
            }
            _ => {}
        }
    }

    fn handle_lightbox_key(&mut self, key: KeyEvent) {
        let count = self.views.certifications.len();
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => {
                self.selection.lightbox_next(count);
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.selection.lightbox_prev(count);
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
                if self.selection.close_lightbox().is_applied() {
                    // Keyboard focus returns to the card that opened it.
                    self.focus = FocusRegion::Certifications;
                    if let Some(opener) = self.lightbox_opener.take() {
                        self.focused_cert = opener;
                    }
                }
            }
            _ => {}
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let order = [
            FocusRegion::Collections,
            FocusRegion::Projects,
            FocusRegion::Certifications,
        ];
        let available: Vec<FocusRegion> = order
            .into_iter()
            .filter(|region| match region {
                FocusRegion::Collections => true,
                FocusRegion::Projects => !self.views.cards.is_empty(),
                FocusRegion::Certifications => !self.views.certifications.is_empty(),
            })
            .collect();
        let current = available
            .iter()
            .position(|region| *region == self.focus)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % available.len()
        } else {
            (current + available.len() - 1) % available.len()
        };
        self.focus = available[next];
    }

    // ============================================================
    // Selection transitions
    // ============================================================

    /// Select the collection at `index`: rebuild the immediate regions,
    /// restart the card entrance, and swap the detail/visual panes.
    fn activate_collection(&mut self, index: usize, now: Instant) {
        let Some(collection) = self.catalogue.collections().get(index) else {
            return;
        };
        let id = collection.id.clone();
        if !self.selection.select_collection(&self.catalogue, &id).is_applied() {
            return;
        }
        tracing::debug!(collection = %id, "collection selected");

        self.focused_collection = index;
        self.cursor_project = 0;
        self.rebuild_collection_views();
        self.start_reveal(now);
        self.begin_swap(now);
    }

    fn select_project_at_cursor(&mut self, now: Instant) {
        let Some(card) = self.views.cards.cards().get(self.cursor_project) else {
            return;
        };
        let id = card.id.clone();
        if self
            .selection
            .select_project(&self.catalogue, Some(&id))
            .is_applied()
        {
            tracing::debug!(project = %id, "sub-project selected");
            self.begin_swap(now);
        }
    }

    /// Esc in the project strip returns to the collection default view.
    fn clear_project_selection(&mut self, now: Instant) {
        if self.selection.project_id().is_none() {
            return;
        }
        if self
            .selection
            .select_project(&self.catalogue, None)
            .is_applied()
        {
            self.begin_swap(now);
        }
    }

    fn rebuild_collection_views(&mut self) {
        if let Some(collection) = self.selection.active_collection(&self.catalogue) {
            self.views.header = view::collection_header(collection);
            self.views.metrics = view::metrics(collection);
            self.views.cards = view::project_cards(collection);
        }
    }

    /// Restart the staggered card entrance for the current card list.
    fn start_reveal(&mut self, now: Instant) {
        self.scheduler.cancel_group(TransitionGroup::Reveal);
        self.scheduler.cancel_group(TransitionGroup::Focus);

        let count = self.views.cards.len();
        if self.reduced_motion || count == 0 {
            self.revealed_cards = count;
            if count > 0 {
                self.apply_effect(Effect::FocusFirstCard);
            }
            return;
        }

        self.revealed_cards = 0;
        for index in 0..count {
            self.scheduler.schedule(
                TaskKey::indexed(TransitionGroup::Reveal, index),
                now,
                REVEAL_INTERVAL * (index as u32 + 1),
                Effect::RevealCard(index),
            );
        }
        self.scheduler.schedule(
            TaskKey::of(TransitionGroup::Focus),
            now,
            REVEAL_INTERVAL * (count as u32 + 1),
            Effect::FocusFirstCard,
        );
    }

    /// Hide the detail/visual panes and schedule the rebuild. Scheduling
    /// reuses one key, so a newer selection supersedes a pending swap and
    /// the panes always settle on the most recent request.
    fn begin_swap(&mut self, now: Instant) {
        self.swap_pending = true;
        if self.reduced_motion {
            self.apply_effect(Effect::CommitSwap);
        } else {
            self.scheduler.schedule(
                TaskKey::of(TransitionGroup::Swap),
                now,
                SWAP_DELAY,
                Effect::CommitSwap,
            );
        }
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::CommitSwap => {
                let Some(collection) = self.selection.active_collection(&self.catalogue) else {
                    return;
                };
                let project = self.selection.active_project(&self.catalogue);
                self.views.detail = view::project_detail(collection, project);
                self.swap_pending = false;
                // Announce only after the settled content is in place.
                self.live_region = view::announcement(collection, project);
            }
            Effect::RevealCard(index) => {
                self.revealed_cards = self.revealed_cards.max(index + 1);
            }
            Effect::FocusFirstCard => {
                if !self.views.cards.is_empty() {
                    self.focus = FocusRegion::Projects;
                    self.cursor_project = 0;
                }
            }
        }
    }

    /// Drain and apply due scheduler effects.
    pub fn tick(&mut self, now: Instant) {
        let effects = self.scheduler.poll(now);
        if effects.is_empty() {
            return;
        }
        self.needs_redraw = true;
        for effect in effects {
            self.apply_effect(effect);
        }
    }

    /// Poll timeout for the event loop: until the next scheduled task,
    /// capped so resize events stay responsive.
    fn poll_timeout(&self, now: Instant) -> Duration {
        const IDLE: Duration = Duration::from_millis(100);
        match self.scheduler.next_due() {
            Some(due) => due.saturating_duration_since(now).min(IDLE),
            None => IDLE,
        }
    }
}

// ============================================================
// Terminal setup and event loop
// ============================================================

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the browser UI until the user quits. Sets up the terminal, runs the
/// event loop, and always restores the terminal on the way out.
pub fn run(catalogue: Catalogue, reduced_motion: bool) -> Result<()> {
    let mut app = App::new(catalogue, reduced_motion)?;
    let mut terminal = init_terminal()?;

    let result = run_event_loop(&mut terminal, &mut app);
    let restore_result = restore_terminal(&mut terminal);

    result?;
    restore_result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        if app.take_redraw() {
            terminal.draw(|frame| render::draw(frame, app))?;
        }

        let timeout = app.poll_timeout(Instant::now());
        if event::poll(timeout)? {
            let event = event::read()?;
            app.handle_event(event, Instant::now());
        }
        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}
