use std::time::Duration;
use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    layout::{Constraint, Direction, Layout},
    DefaultTerminal, Frame,
};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::time;
use tracing::{debug, warn};
use tui_input::backend::crossterm::EventHandler;

use super::events::AppEvent;
use super::state::*;
use super::theme::Theme;
use crate::contact::SubmissionTimer;
use crate::view::{Tab, ViewController};
use crate::{FolioError, Result};

/// How long the input thread blocks before checking for shutdown
const INPUT_POLL: Duration = Duration::from_millis(100);

/// Redraw interval when no event arrives
const TICK: Duration = Duration::from_millis(50);

/// Main application struct
pub struct App {
    /// Everything that is rendered
    state: BrowserState,
    /// Whether the app should quit
    should_quit: bool,
    /// Theme for styling
    theme: Theme,
    /// Event sender for background tasks
    event_tx: Option<UnboundedSender<AppEvent>>,
    /// In-flight contact submission
    pending: Option<SubmissionTimer>,
}

impl App {
    /// Create a new app instance
    pub fn new(controller: ViewController) -> Self {
        Self {
            state: BrowserState::new(controller),
            should_quit: false,
            theme: Theme::default(),
            event_tx: None,
            pending: None,
        }
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Channel that timer completions are delivered on
    pub fn attach_events(&mut self, event_tx: UnboundedSender<AppEvent>) {
        self.event_tx = Some(event_tx);
    }

    /// Run the application
    pub async fn run(mut self) -> Result<()> {
        // Initialize terminal
        let mut terminal = ratatui::init();
        terminal.clear()?;

        // Create event channel
        let (event_tx, mut event_rx) = unbounded_channel();
        self.attach_events(event_tx.clone());
        spawn_input_reader(event_tx);

        // Main render loop
        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        // Cleanup
        self.quit();
        ratatui::restore();
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            // Draw UI
            terminal.draw(|frame| self.render(frame))?;

            // Handle events with timeout for animations
            match time::timeout(TICK, event_rx.recv()).await {
                Ok(Some(event)) => self.handle_event(event)?,
                Ok(None) => break, // Channel closed
                Err(_) => self.handle_event(AppEvent::Tick)?,
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Render the current state
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tabs
                Constraint::Min(5),    // Body
                Constraint::Length(1), // Status
                Constraint::Length(1), // Help
            ])
            .split(frame.area());

        super::screens::render_tabs(frame, chunks[0], &self.state, &self.theme);
        match self.state.view.state().active_tab {
            Tab::Catalog => super::screens::catalog::render(frame, chunks[1], &self.state, &self.theme),
            Tab::About => super::screens::about::render(frame, chunks[1], &self.state, &self.theme),
        }
        super::screens::render_status(frame, chunks[2], &self.state, &self.theme);
        super::screens::render_help(frame, chunks[3], &self.state);

        if self.state.view.contact().is_submitting() {
            super::modal::render_submitting_modal(frame, frame.area(), self.state.tick, &self.theme);
        }
    }

    /// Handle an event
    pub fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::SubmissionComplete => {
                self.finish_submission();
                Ok(())
            }
            AppEvent::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                Ok(())
            }
            AppEvent::Tick => {
                self.state.tick = self.state.tick.wrapping_add(1);
                Ok(())
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle global keys first
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                return Ok(());
            }
            KeyCode::F(1) => {
                self.state.view.set_tab(Tab::Catalog);
                return Ok(());
            }
            KeyCode::F(2) => {
                self.state.view.set_tab(Tab::About);
                return Ok(());
            }
            _ => {}
        }

        // Route to tab-specific handler
        match self.state.view.state().active_tab {
            Tab::Catalog => {
                self.handle_catalog_key(key);
                Ok(())
            }
            Tab::About => self.handle_about_key(key),
        }
    }

    fn handle_catalog_key(&mut self, key: KeyEvent) {
        if self.state.catalog.focus == CatalogFocus::List
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        {
            self.quit();
            return;
        }

        let state = &mut self.state;

        if state.catalog.focus == CatalogFocus::Search {
            match key.code {
                KeyCode::Enter => state.catalog.focus = CatalogFocus::List,
                KeyCode::Esc => {
                    // Cancel search entirely
                    state.catalog.search_input.reset();
                    state.sync_search();
                    state.catalog.focus = CatalogFocus::List;
                }
                _ => {
                    if state.catalog.search_input.handle_event(&Event::Key(key)).is_some() {
                        state.sync_search();
                    }
                }
            }
            return;
        }

        match key.code {
            KeyCode::Char('/') => state.catalog.focus = CatalogFocus::Search,
            KeyCode::Left => {
                state.view.cycle_category(-1);
                state.catalog.scroll = 0;
            }
            KeyCode::Right => {
                state.view.cycle_category(1);
                state.catalog.scroll = 0;
            }
            KeyCode::Char('s') => {
                state.view.cycle_sort();
                state.catalog.scroll = 0;
            }
            KeyCode::Char('r') => {
                state.view.reset_filters();
                state.catalog.search_input = state.view.state().search_query.clone().into();
                state.catalog.scroll = 0;
            }
            KeyCode::Up => state.catalog.scroll = state.catalog.scroll.saturating_sub(1),
            KeyCode::Down => state.catalog.scroll = state.catalog.scroll.saturating_add(1),
            KeyCode::PageUp => state.catalog.scroll = state.catalog.scroll.saturating_sub(10),
            KeyCode::PageDown => state.catalog.scroll = state.catalog.scroll.saturating_add(10),
            KeyCode::Home => state.catalog.scroll = 0,
            KeyCode::Tab => state.view.set_tab(Tab::About),
            _ => {}
        }
    }

    fn handle_about_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.state.view.set_tab(Tab::Catalog);
            }
            KeyCode::Tab | KeyCode::Down => {
                self.state.about.focus = self.state.about.focus.next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.about.focus = self.state.about.focus.prev();
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_contact()?;
            }
            KeyCode::Enter => match self.state.about.focus {
                FormFocus::Submit => self.submit_contact()?,
                FormFocus::Field(_) => {
                    self.state.about.focus = self.state.about.focus.next();
                }
            },
            _ => {
                if let FormFocus::Field(field) = self.state.about.focus {
                    // The form is locked while a submission is pending
                    if self.state.view.contact().is_submitting() {
                        return Ok(());
                    }
                    if self
                        .state
                        .about
                        .inputs
                        .get_mut(field)
                        .handle_event(&Event::Key(key))
                        .is_some()
                    {
                        self.state.sync_field(field);
                    }
                }
            }
        }
        Ok(())
    }

    /// idle -> submitting, and start the delay
    fn submit_contact(&mut self) -> Result<()> {
        match self.state.view.contact_mut().begin() {
            Ok(()) => {
                let delay = self.state.view.contact().settings().delay();
                match &self.event_tx {
                    Some(tx) => {
                        self.pending = Some(SubmissionTimer::spawn(
                            delay,
                            tx.clone(),
                            AppEvent::SubmissionComplete,
                        ));
                    }
                    None => warn!("No event channel attached, submission will not complete"),
                }
                self.state.status = Some(StatusLine::info("Отправка сообщения..."));
                Ok(())
            }
            Err(FolioError::MissingField(field)) => {
                self.state.about.focus = FormFocus::Field(field);
                self.state.status = Some(StatusLine::error(format!(
                    "Заполните поле «{}»",
                    field.label()
                )));
                Ok(())
            }
            // Submit control is disabled
            Err(FolioError::AlreadySubmitting) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// submitting -> idle, clearing the form and showing the acknowledgment
    fn finish_submission(&mut self) {
        self.pending = None;
        if let Some(ack) = self.state.view.contact_mut().complete() {
            self.state.about.inputs.reset();
            self.state.about.focus = FormFocus::default();
            self.state.status = Some(StatusLine::success(ack.message));
        }
    }

    /// Stop the loop, abandoning any pending submission
    fn quit(&mut self) {
        if let Some(timer) = self.pending.take() {
            timer.cancel();
            self.state.view.contact_mut().cancel();
        }
        self.should_quit = true;
    }
}

/// Forward terminal input on a dedicated thread until the app goes away
fn spawn_input_reader(input_tx: UnboundedSender<AppEvent>) {
    std::thread::spawn(move || {
        while !input_tx.is_closed() {
            match event::poll(INPUT_POLL) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        let _ = input_tx.send(AppEvent::Key(key));
                    }
                    Ok(Event::Resize(width, height)) => {
                        let _ = input_tx.send(AppEvent::Resize(width, height));
                    }
                    Ok(_) => {}
                    Err(e) => {
                        warn!("Terminal read failed: {}", e);
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    warn!("Terminal poll failed: {}", e);
                    break;
                }
            }
        }
    });
}
