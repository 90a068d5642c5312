//! Interactive event loop.
//!
//! A dedicated thread blocks on terminal input and forwards events over
//! a channel; the main thread drains the channel, processes each event
//! to completion and redraws. While effect glyphs are live the wait
//! carries a deadline so the animation advances without busy-polling.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::cursor;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use tracing::{debug, warn};

use crate::calculator::{DisplayUpdate, Engine, Token};
use crate::config::Config;
use crate::input::{self, InputAction};

use super::effects::EffectsState;
use super::view::{self, DisplayContent};

/// Events that wake the main loop.
enum AppEvent {
    Input(Event),
    /// The input thread died or stdin closed.
    Closed,
}

/// The interactive calculator.
pub struct App {
    engine: Engine,
    display: String,
    is_error: bool,
    effects: EffectsState,
    mouse: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            engine: Engine::new(),
            display: "0".to_string(),
            is_error: false,
            effects: EffectsState::new(
                config.effects,
                Duration::from_millis(config.effect_duration_ms),
            ),
            mouse: config.mouse,
        }
    }

    /// Run until quit. Terminal modes are restored on every exit path.
    pub fn run(mut self) -> Result<()> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        execute!(stdout, EnterAlternateScreen, cursor::Hide)
            .context("failed to enter the alternate screen")?;
        if self.mouse {
            execute!(stdout, EnableMouseCapture).context("failed to capture the mouse")?;
        }

        let result = self.event_loop(&mut stdout);

        if self.mouse {
            let _ = execute!(stdout, DisableMouseCapture);
        }
        let _ = execute!(stdout, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();

        result
    }

    fn event_loop(&mut self, out: &mut impl Write) -> Result<()> {
        let (tx, rx) = flume::unbounded();
        spawn_input_thread(tx);

        self.redraw(out)?;
        loop {
            let event = match self.effects.next_deadline() {
                Some(deadline) => match rx.recv_deadline(deadline) {
                    Ok(event) => Some(event),
                    Err(flume::RecvTimeoutError::Timeout) => None,
                    Err(flume::RecvTimeoutError::Disconnected) => break,
                },
                None => match rx.recv() {
                    Ok(event) => Some(event),
                    Err(_) => break,
                },
            };

            match event {
                // Effect deadline passed: advance the animation.
                None => {
                    self.effects.sweep();
                    self.redraw(out)?;
                }
                Some(AppEvent::Closed) => break,
                Some(AppEvent::Input(input_event)) => {
                    if self.handle_input(input_event, out)? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    /// Handle one terminal event. Returns `true` on quit.
    fn handle_input(&mut self, event: Event, out: &mut impl Write) -> Result<bool> {
        match event {
            Event::Key(key) => match input::map_key(key) {
                Some(InputAction::Quit) => return Ok(true),
                Some(InputAction::Token(token)) => {
                    self.feed(token);
                    self.redraw(out)?;
                }
                None => {}
            },
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind
                    && let Some(hit) = view::button_at(mouse.column, mouse.row)
                {
                    if let Some(token) = Token::classify(hit.label) {
                        self.feed(token);
                        self.effects.spawn(hit.anchor);
                    }
                    self.redraw(out)?;
                }
            }
            Event::Resize(_, _) => self.redraw(out)?,
            _ => {}
        }
        Ok(false)
    }

    fn feed(&mut self, token: Token) {
        debug!(?token, "processing token");
        if let Some(update) = self.engine.process(token) {
            if let DisplayUpdate::Error(err) = &update {
                warn!(%err, "calculation error");
            }
            self.is_error = update.is_error();
            self.display = update.text();
        }
    }

    fn redraw(&mut self, out: &mut impl Write) -> Result<()> {
        let pending = self.engine.pending();
        let content = DisplayContent {
            text: &self.display,
            pending: pending.as_deref(),
            is_error: self.is_error,
        };
        view::render(out, &content, &self.effects)?;
        Ok(())
    }
}

/// Input thread: blocks on terminal events, forwards them, and exits
/// once the receiver is gone.
fn spawn_input_thread(tx: flume::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            // Poll with a timeout so a dropped receiver is noticed.
            match event::poll(Duration::from_millis(100)) {
                Ok(true) => match event::read() {
                    Ok(input_event) => {
                        if tx.send(AppEvent::Input(input_event)).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        debug!(%err, "input read failed");
                        let _ = tx.send(AppEvent::Closed);
                        break;
                    }
                },
                Ok(false) => {
                    if tx.is_disconnected() {
                        break;
                    }
                }
                Err(err) => {
                    debug!(%err, "input poll failed");
                    let _ = tx.send(AppEvent::Closed);
                    break;
                }
            }
        }
    });
}
