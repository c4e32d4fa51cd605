//! Menu-driven runner (default binary).
//!
//! Shows the queue and the stack, maps key presses to commands and reports
//! the result of each one on a status line.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use piece_reserve::config::{init_logging, AppConfig};
use piece_reserve::core::Session;
use piece_reserve::input::should_quit;
use piece_reserve::status_after_key;
use piece_reserve::term::{SessionView, StatusMessage, TerminalRenderer};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(config.log_path.as_deref())?;
    info!("starting with {:?}", config.session);

    let mut term = TerminalRenderer::new();
    term.enter().context("failed to enter terminal UI")?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut session = Session::new(&config.session);
    let view = SessionView::default();
    let mut snap = session.snapshot();
    let mut status: Option<StatusMessage> = None;

    loop {
        session.snapshot_into(&mut snap);
        term.draw(&view.render(&snap, status.as_ref()))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if should_quit(key) {
            info!("quit requested, next id was {}", session.next_id());
            return Ok(());
        }

        status = Some(status_after_key(&mut session, key));
    }
}
