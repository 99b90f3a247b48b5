use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use verdict_core::{update, Msg, UiState};
use verdict_logging::{verdict_debug, verdict_info, verdict_warn};

use super::commands::{parse_command, to_msg, Command, HELP};
use super::config::{load_config, AppConfig};
use super::effects::EffectRunner;
use super::render::render;

const POLL_INTERVAL: Duration = Duration::from_millis(20);
const DRAIN_TIMEOUT: Duration = Duration::from_secs(30);

enum SessionEvent {
    Line(String),
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("cannot resolve working directory")?;
    let (config, config_error) = match load_config(&cwd) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    verdict_logging::initialize(config.log_destination, config.log_level.into());
    if let Some(err) = config_error {
        verdict_warn!("{}; using defaults", err);
        eprintln!("Warning: {err}; using defaults");
    }
    verdict_info!("Session started with {:?}", config);

    let runner = EffectRunner::new(config.analysis_settings()).context("cannot start engine")?;
    let (line_tx, line_rx) = mpsc::channel::<SessionEvent>();

    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(SessionEvent::Line(line)).is_err() {
                return;
            }
        }
        let _ = line_tx.send(SessionEvent::InputClosed);
    });

    let mut session = Session::new(runner);
    println!("{HELP}\n");
    session.print_screen()?;

    loop {
        match line_rx.recv_timeout(POLL_INTERVAL) {
            Ok(SessionEvent::Line(line)) => {
                if !session.handle_line(&line)? {
                    break;
                }
            }
            Ok(SessionEvent::InputClosed) | Err(RecvTimeoutError::Disconnected) => {
                session.drain_in_flight()?;
                break;
            }
            Err(RecvTimeoutError::Timeout) => {}
        }
        session.pump_engine()?;
    }

    verdict_info!("Session ended");
    Ok(())
}

struct Session {
    state: UiState,
    runner: EffectRunner,
}

impl Session {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: UiState::new(),
            runner,
        }
    }

    /// Returns false once the user asked to quit.
    fn handle_line(&mut self, line: &str) -> anyhow::Result<bool> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                return Ok(true);
            }
        };
        match command {
            Command::Quit => return Ok(false),
            Command::Help => println!("{HELP}"),
            Command::Show => self.print_screen()?,
            other => match to_msg(other) {
                Ok(Some(msg)) => self.dispatch_msg(msg)?,
                Ok(None) => {}
                Err(err) => println!("{err:#}"),
            },
        }
        Ok(true)
    }

    fn dispatch_msg(&mut self, msg: Msg) -> anyhow::Result<()> {
        verdict_debug!("Dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.enqueue(effects);
        if was_dirty {
            self.print_screen()?;
        }
        Ok(())
    }

    fn pump_engine(&mut self) -> anyhow::Result<()> {
        for msg in self.runner.poll() {
            self.dispatch_msg(msg)?;
        }
        Ok(())
    }

    /// Waits for a pending analysis when input ends, so piped sessions still
    /// print their final verdict.
    fn drain_in_flight(&mut self) -> anyhow::Result<()> {
        let deadline = Instant::now() + DRAIN_TIMEOUT;
        while self.state.is_loading() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            // None means the deadline passed or the engine is gone.
            match self.runner.wait(remaining) {
                Some(msg) => self.dispatch_msg(msg)?,
                None => {
                    verdict_warn!(
                        "Gave up waiting for request {:?}",
                        self.state.in_flight_request()
                    );
                    break;
                }
            }
        }
        Ok(())
    }

    fn print_screen(&self) -> anyhow::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}\n", render(&self.state.view()))?;
        stdout.flush()?;
        Ok(())
    }
}
