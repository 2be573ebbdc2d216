//! TUI application state and event loop.
//!
//! Design: two phases. In `Idle` the user can draw a new array or start a
//! sort. `Start Sort` builds the whole timeline up front and hands it to a
//! [`Player`]; the phase becomes `Playing` and both actions are rejected
//! until the player has applied `Complete`. Everything runs on the UI
//! thread: each frame advances the player to the elapsed wall-clock offset.

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use bubbleviz_core::{Bar, Player, Progress, SortingModel, TimelineConfig, build_timeline};

/// Redraw interval while bars are moving.
const FRAME: Duration = Duration::from_millis(16);

/// Input poll interval while nothing is animating.
const IDLE_POLL: Duration = Duration::from_millis(250);

// ---------------------------------------------------------------------------
// Phase / Action
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Playing,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Playing => "sorting",
        }
    }
}

/// Controls shown in the control bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NewArray,
    StartSort,
    Quit,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::NewArray, Action::StartSort, Action::Quit];

    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Char('n') | KeyCode::Char('N') => Some(Self::NewArray),
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Enter => Some(Self::StartSort),
            KeyCode::Char('q') | KeyCode::Esc => Some(Self::Quit),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NewArray => "New Array",
            Self::StartSort => "Start Sort",
            Self::Quit => "Quit",
        }
    }

    pub fn key_hint(self) -> &'static str {
        match self {
            Self::NewArray => "n",
            Self::StartSort => "s",
            Self::Quit => "q",
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    model: SortingModel,
    config: TimelineConfig,
    phase: Phase,
    /// Bars drawn when no player exists (fresh array).
    resting: Vec<Bar>,
    /// Current or most recently finished playback.
    player: Option<Player>,
    started: Option<Instant>,
    running: bool,
    sorts_completed: u64,
}

impl App {
    pub fn new(model: SortingModel, config: TimelineConfig) -> Self {
        let resting = Bar::at_rest(model.snapshot());
        Self {
            model,
            config,
            phase: Phase::Idle,
            resting,
            player: None,
            started: None,
            running: true,
            sorts_completed: 0,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook that restores terminal before printing the panic.
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
            original_hook(info);
        }));

        let result = self.run_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error.
        let _ = std::panic::take_hook();
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            crossterm::cursor::Show
        )?;

        log::info!("exiting after {} completed sort(s)", self.sorts_completed);
        result
    }

    fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        while self.running {
            self.tick(Instant::now());
            terminal.draw(|f| super::ui::draw(f, self))?;

            if event::poll(self.poll_timeout(Instant::now()))?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && let Some(action) = Action::from_key(key.code)
            {
                self.handle_action(action, Instant::now());
            }
        }

        Ok(())
    }

    /// Apply a user action. Returns false when the action was rejected.
    pub fn handle_action(&mut self, action: Action, now: Instant) -> bool {
        if !self.is_enabled(action) {
            log::debug!("ignoring '{}' while {}", action.label(), self.phase.label());
            return false;
        }
        match action {
            Action::Quit => self.running = false,
            Action::NewArray => self.new_array(),
            Action::StartSort => self.start_sort(now),
        }
        true
    }

    fn new_array(&mut self) {
        self.model.regenerate();
        self.player = None;
        self.started = None;
        self.resting = Bar::at_rest(self.model.snapshot());
        log::info!("new array of {} values", self.model.len());
    }

    fn start_sort(&mut self, now: Instant) {
        let timeline = build_timeline(self.model.snapshot(), &self.config);
        log::info!(
            "sorting {} values: {} comparisons, {} swaps, {:?}",
            self.model.len(),
            timeline.comparisons(),
            timeline.swaps(),
            timeline.total()
        );
        self.player = Some(Player::new(timeline));
        self.started = Some(now);
        self.phase = Phase::Playing;
    }

    /// Advance playback to `now`; leaves `Playing` once `Complete` is applied.
    pub fn tick(&mut self, now: Instant) {
        if self.phase != Phase::Playing {
            return;
        }
        let (Some(player), Some(started)) = (self.player.as_mut(), self.started) else {
            self.phase = Phase::Idle;
            return;
        };

        player.advance_to(now.saturating_duration_since(started));
        if player.is_finished() {
            let sorted = player.timeline().sorted().to_vec();
            self.model.replace_with_sorted(sorted);
            self.phase = Phase::Idle;
            self.sorts_completed += 1;
            log::info!("sort finished after {:?}", player.clock());
        }
    }

    fn poll_timeout(&self, now: Instant) -> Duration {
        if self.phase != Phase::Playing {
            return IDLE_POLL;
        }
        match (self.player.as_ref().and_then(Player::next_due), self.started) {
            (Some(due), Some(started)) => (started + due).saturating_duration_since(now).min(FRAME),
            _ => FRAME,
        }
    }

    // -----------------------------------------------------------------------
    // Read accessors for the UI
    // -----------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Only Quit is available while a sort is playing.
    pub fn is_enabled(&self, action: Action) -> bool {
        match action {
            Action::Quit => true,
            Action::NewArray | Action::StartSort => self.phase == Phase::Idle,
        }
    }

    pub fn size(&self) -> usize {
        self.model.len()
    }

    pub fn max_value(&self) -> u32 {
        self.model.max_value()
    }

    /// Every bar with its horizontal position in slot units.
    pub fn bar_positions(&self) -> Vec<(f64, &Bar)> {
        match &self.player {
            Some(player) => player
                .bars()
                .iter()
                .map(|bar| (bar.x_at(player.clock()), bar))
                .collect(),
            None => self.resting.iter().map(|bar| (bar.slot as f64, bar)).collect(),
        }
    }

    pub fn progress(&self) -> Option<Progress> {
        self.player.as_ref().map(Player::progress)
    }

    /// Total comparisons and swaps of the current timeline.
    pub fn totals(&self) -> Option<(usize, usize)> {
        self.player
            .as_ref()
            .map(|p| (p.timeline().comparisons(), p.timeline().swaps()))
    }

    /// Playback clock and total duration of the current timeline.
    pub fn playback_time(&self) -> Option<(Duration, Duration)> {
        self.player
            .as_ref()
            .map(|p| (p.clock().min(p.timeline().total()), p.timeline().total()))
    }

    pub fn sorts_completed(&self) -> u64 {
        self.sorts_completed
    }
}
