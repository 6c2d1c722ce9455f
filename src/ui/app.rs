//! Main TUI application state and logic

use crate::config::{self, VisualizerConfig};
use crate::engine::EngineError;
use crate::playback::{PlaybackController, TickOutcome};
use crate::ui::panes::{
    render_bars_pane, render_controls_pane, render_stats_pane, render_status_bar,
    ControlsRenderData, PlaybackIndicator, StatsRenderData, ALGORITHM_KEYS,
};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// The main application state
pub struct App {
    /// Run lifecycle, dataset and metrics
    pub controller: PlaybackController,

    /// Size used by the generate command
    pub size: usize,

    /// How long to wait for input each frame
    pub frame_interval: Duration,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Last refused command, shown in place of the status message
    pub error_message: Option<String>,

    /// Time the previous frame's tick happened
    pub last_frame: Instant,
}

impl App {
    /// Create a new app around a controller that already holds a dataset
    pub fn new(controller: PlaybackController, config: &VisualizerConfig) -> Self {
        App {
            size: controller.dataset_len().max(1),
            controller,
            frame_interval: config.frame_interval,
            should_quit: false,
            error_message: None,
            last_frame: Instant::now(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let now = Instant::now();
            let elapsed = now.duration_since(self.last_frame);
            self.last_frame = now;
            self.tick(elapsed);

            // Poll with the frame interval as timeout so playback keeps moving
            if event::poll(self.frame_interval)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance playback by one frame
    pub fn tick(&mut self, elapsed: Duration) {
        match self.controller.tick(elapsed) {
            Ok(TickOutcome::Finished(summary)) => info!(%summary, "sort finished"),
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "tick failed, stopping run");
                self.controller.stop();
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(DEFAULT_THEME.bg)), size);

        // Sidebar | main area, plus status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(30), Constraint::Min(0)])
            .split(main_chunks[0]);

        // Right column: stats (top) | bars (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(columns[1]);

        let controller = &self.controller;

        render_controls_pane(
            frame,
            columns[0],
            &ControlsRenderData {
                current_run: controller.algorithm(),
                is_running: controller.is_running(),
                size: self.size,
                delay: controller.delay(),
            },
        );

        render_stats_pane(
            frame,
            right_rows[0],
            &StatsRenderData {
                algorithm_label: controller.algorithm_label(),
                status: controller.status(),
                metrics: controller.metrics(),
                is_running: controller.is_running(),
                size: controller.dataset_len(),
                quick_sort: controller.quick_sort_strategy().to_string(),
            },
        );

        render_bars_pane(
            frame,
            right_rows[1],
            controller.working(),
            controller.max_value(),
            controller.highlight(),
            controller.algorithm_label(),
        );

        render_status_bar(
            frame,
            main_chunks[1],
            controller.status(),
            self.error_message.as_deref(),
            controller.steps(),
            self.indicator(),
        );
    }

    fn indicator(&self) -> PlaybackIndicator {
        if self.controller.is_running() {
            PlaybackIndicator::Playing
        } else if self.controller.is_paused() {
            PlaybackIndicator::Paused
        } else if self.controller.last_summary().is_some()
            && self.controller.algorithm_label() == "Completed"
        {
            PlaybackIndicator::Done
        } else {
            PlaybackIndicator::Ready
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let result = match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
                Ok(())
            }
            KeyCode::Char(c @ '1'..='4') => match ALGORITHM_KEYS.iter().find(|(k, _)| *k == c) {
                Some(&(_, kind)) => self.controller.start(kind),
                None => Ok(()),
            },
            KeyCode::Char('g') | KeyCode::Char('G') => self.controller.generate(self.size),
            KeyCode::Char('+') | KeyCode::Char('=') => self.resize(config::next_size(self.size)),
            KeyCode::Char('-') | KeyCode::Char('_') => self.resize(config::prev_size(self.size)),
            KeyCode::Char('r') | KeyCode::Char('R') => self.controller.reset(),
            KeyCode::Char(' ') => self.controller.toggle_pause(),
            KeyCode::Esc => {
                self.controller.stop();
                Ok(())
            }
            KeyCode::Tab => {
                let delay = self.controller.delay().next();
                self.controller.set_delay(delay);
                Ok(())
            }
            _ => Ok(()),
        };

        self.error_message = result.err().map(|e| e.to_string());
    }

    fn resize(&mut self, size: usize) -> Result<(), EngineError> {
        self.controller.generate(size)?;
        self.size = size;
        Ok(())
    }
}
