//! One play session: level progression and the per-tick frame stepper
//!
//! The session owns everything a running game needs: config, rng, the
//! current wall grid, the player and the phase. An outer loop feeds it one
//! [`FrameInput`] per display tick and draws the returned [`Frame`].

#[cfg(not(feature = "std"))]
use crate::compat::*;

use crate::config::MazeConfig;
use crate::consts::{BLINK_TICKS, CONTINUE_PROMPT, START_PROMPT, TITLE_TEXT};
use crate::error::MazeError;
use crate::input::{Buttons, FrameInput};
use crate::maze::{Direction, MazeBuilder, Position, WallGrid};
use crate::player::Player;
use crate::render::{DrawCommand, Frame, Layout, animation_frame};
use crate::rng::GameRng;

/// Where the session is in its loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Title screen, waiting for B
    Intro,
    /// Navigating the current maze
    Playing,
    /// Goal reached, waiting for B to build the next maze
    LevelComplete,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: MazeConfig,
    rng: GameRng,
    builder: MazeBuilder,
    grid: WallGrid,
    layout: Layout,
    player: Player,
    /// Levels completed so far; drives difficulty
    level: u32,
    phase: Phase,
    /// Pending messages for the outer loop
    messages: Vec<String>,
}

impl Session {
    /// Validate the config and build the first maze.
    pub fn new(config: MazeConfig, rng: GameRng) -> Result<Self, MazeError> {
        config.validate()?;

        let mut session = Self {
            config,
            rng,
            builder: MazeBuilder::new(),
            grid: WallGrid::default(),
            layout: Layout::default(),
            player: Player::new(Position::default(), 0),
            level: 0,
            phase: Phase::Intro,
            messages: Vec::new(),
        };
        session.build_maze(0)?;
        session.player = Player::new(session.grid.start(), 0);
        Ok(session)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Levels completed so far (0 while on the first maze)
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn grid(&self) -> &WallGrid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn start(&self) -> Position {
        self.grid.start()
    }

    pub fn goal(&self) -> Position {
        self.grid.goal()
    }

    /// Re-fit the maze to a new screen size
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.config.viewport_width = width;
        self.config.viewport_height = height;
        self.layout = Layout::for_grid(width, height, &self.grid);
    }

    /// Add a message to the log
    pub fn message(&mut self, msg: impl Into<String>) {
        self.messages.push(msg.into());
    }

    /// Drain pending messages
    pub fn take_messages(&mut self) -> Vec<String> {
        core::mem::take(&mut self.messages)
    }

    /// Advance one tick and describe what to draw.
    pub fn step(&mut self, input: &FrameInput) -> Result<Frame, MazeError> {
        match self.phase {
            Phase::Intro => {
                if input.pressed.contains(Buttons::B) {
                    self.phase = Phase::Playing;
                }
            }
            Phase::Playing => {
                self.player.update(
                    &mut self.grid,
                    input.held,
                    input.ticks,
                    self.config.move_interval,
                );
                if self.player.pos == self.grid.goal() {
                    self.phase = Phase::LevelComplete;
                    let msg = format!("Level {} complete!", self.level + 1);
                    self.message(msg);
                }
            }
            Phase::LevelComplete => {
                if input.pressed.contains(Buttons::B) {
                    self.next_level()?;
                }
            }
        }

        Ok(self.render(input.ticks))
    }

    /// Build a bigger maze and put the player at its start.
    ///
    /// On error the session stays on the current level and maze.
    pub fn next_level(&mut self) -> Result<(), MazeError> {
        let level = self.level.saturating_add(1);
        self.build_maze(level)?;
        self.level = level;
        self.player.position(self.grid.start());
        self.phase = Phase::Playing;
        Ok(())
    }

    /// Size and build the maze for `level`. Growth stops once the maze
    /// would no longer fit the viewport.
    fn build_maze(&mut self, level: u32) -> Result<(), MazeError> {
        let difficulty = self.config.difficulty(level);
        let (max_width, max_height) =
            Layout::max_cells(self.config.viewport_width, self.config.viewport_height);
        let width = self
            .rng
            .range(self.config.min_width, self.config.max_width)
            .saturating_add(difficulty)
            .min(max_width);
        let height = self
            .rng
            .range(self.config.min_height, self.config.max_height)
            .saturating_add(difficulty)
            .min(max_height);

        self.builder.build(width, height, &mut self.rng)?;
        self.grid = self.builder.take_maze();
        self.layout = Layout::for_grid(
            self.config.viewport_width,
            self.config.viewport_height,
            &self.grid,
        );

        let msg = format!("Level {}: {}x{} maze", level + 1, width, height);
        self.message(msg);
        Ok(())
    }

    /// Describe the current state without advancing it
    pub fn render(&self, ticks: u64) -> Frame {
        let mut frame = Frame::new();
        frame.push(DrawCommand::Background);
        let anim = animation_frame(ticks);

        if self.phase == Phase::Intro {
            frame.push(DrawCommand::Mascot {
                facing: Direction::South,
                frame: anim,
            });
            frame.push(DrawCommand::Title(TITLE_TEXT));
            if (ticks / BLINK_TICKS) % 2 == 1 {
                frame.push(DrawCommand::Prompt(START_PROMPT));
            }
            return frame;
        }

        frame.draw_maze(&self.grid, &self.layout);
        frame.push(DrawCommand::Player {
            rect: self.layout.sprite_rect(self.player.pos),
            facing: self.player.facing,
            frame: anim,
        });

        if self.phase == Phase::LevelComplete {
            frame.push(DrawCommand::Banner {
                heading: format!("Level {} Complete!", self.level + 1),
                prompt: CONTINUE_PROMPT,
            });
        }

        frame
    }
}
