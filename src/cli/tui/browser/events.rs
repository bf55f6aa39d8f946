use ratatui::crossterm::event::KeyEvent;

/// All possible events in the application
#[derive(Debug)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    Resize(u16, u16),

    // The simulated contact round trip finished
    SubmissionComplete,

    // UI events
    Tick, // drives the submitting spinner
}
