//! Application state and main UI controller

use crossterm::event::Event;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use mz_core::{Buttons, Frame as MazeFrame, FrameInput, MazeError, Phase, Session};
use mz_save::Progress;

use crate::input::{KeyAction, key_help, key_to_action};
use crate::theme::Theme;
use crate::widgets::{MazeWidget, StatusWidget, viewport_for};

pub struct App {
    session: Session,
    theme: Theme,
    /// `None` when progress is not being kept
    progress: Option<Progress>,
    /// Last frame produced by the session
    frame: MazeFrame,
    /// Buttons gathered since the previous tick
    held: Buttons,
    pressed: Buttons,
    ticks: u64,
    last_message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(session: Session, theme: Theme, progress: Option<Progress>) -> Self {
        let frame = session.render(0);
        let mut app = Self {
            session,
            theme,
            progress,
            frame,
            held: Buttons::empty(),
            pressed: Buttons::empty(),
            ticks: 0,
            last_message: None,
            should_quit: false,
        };
        app.drain_messages();
        app
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn progress(&self) -> Option<&Progress> {
        self.progress.as_ref()
    }

    pub fn frame(&self) -> &MazeFrame {
        &self.frame
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_should_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    /// Show a message on the status line
    pub fn message(&mut self, msg: impl Into<String>) {
        self.last_message = Some(msg.into());
    }

    /// Record a terminal event for the next tick
    pub fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        match key_to_action(key) {
            Some(KeyAction::Hold(button)) => self.held |= button,
            Some(KeyAction::Press(button)) => self.pressed |= button,
            Some(KeyAction::Quit) => self.should_quit = true,
            None => {}
        }
    }

    /// Advance the session to `ticks` with the buttons gathered so far.
    ///
    /// Returns whether the progress record changed and should be saved.
    pub fn tick(&mut self, ticks: u64) -> Result<bool, MazeError> {
        let input = FrameInput {
            ticks,
            held: self.held | self.pressed,
            pressed: self.pressed,
        };
        self.held = Buttons::empty();
        self.pressed = Buttons::empty();
        self.ticks = ticks;

        let before = self.session.phase();
        self.frame = self.session.step(&input)?;
        self.drain_messages();

        let completed = before == Phase::Playing && self.session.phase() == Phase::LevelComplete;
        if completed && let Some(progress) = self.progress.as_mut() {
            progress.record_completion(self.session.level() + 1, self.session.seed());
            return Ok(true);
        }
        Ok(false)
    }

    fn drain_messages(&mut self) {
        if let Some(msg) = self.session.take_messages().pop() {
            self.last_message = Some(msg);
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Maze on top, two status lines below
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(2)])
            .split(frame.area());

        let inner = MazeWidget::inner(chunks[0], &self.theme);
        let (width, height) = viewport_for(inner);
        let config = self.session.config();
        if (config.viewport_width, config.viewport_height) != (width, height) {
            self.session.set_viewport(width, height);
            self.frame = self.session.render(self.ticks);
        }

        frame.render_widget(MazeWidget::new(&self.frame, &self.theme), chunks[0]);

        let help = key_help();
        let message = self.last_message.as_deref().unwrap_or(&help);
        let status = StatusWidget::new(
            self.session.level() + 1,
            self.progress.as_ref().map(|p| p.best_level),
            message,
            &self.theme,
        );
        frame.render_widget(status, chunks[1]);
    }
}
