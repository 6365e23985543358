use std::io::{self, BufRead, Write};

use log::warn;

use super::{ScriptedInput, TerminalDisplay};
use crate::board::Board;
use crate::config::ShellConfig;
use crate::feedback::{BoardFeedback, FeedbackSource, compute_feedback};
use crate::game_logic::{ClickOutcome, GameEngine, GameState, GameStatus, MoveOutcome};
use crate::{BoardDisplay, InputEvent, InputSource};

/// Clears the screen and moves cursor to top-left.
#[inline]
fn clear_screen() {
    print!("\x1B[2J\x1B[H");
}

/// Line-oriented input from a reader such as stdin.
///
/// Each line is a click script (see [`ScriptedInput::push_script`]) or
/// `c <x> <y>` for a click at pointer coordinates.
#[derive(Debug)]
pub struct TerminalInput<R> {
    reader: R,
    queued: ScriptedInput,
    prompt: bool,
}

impl<R: BufRead> TerminalInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            queued: ScriptedInput::new(),
            prompt: true,
        }
    }

    /// Do not print a prompt before reading each line.
    pub fn quiet(mut self) -> Self {
        self.prompt = false;
        self
    }

    fn parse_pointer(line: &str) -> Option<InputEvent> {
        let mut parts = line.split_whitespace();
        if parts.next()? != "c" {
            return None;
        }
        let x = parts.next()?.parse().ok()?;
        let y = parts.next()?.parse().ok()?;
        parts.next().is_none().then_some(InputEvent::Pointer { x, y })
    }
}

impl<R: BufRead> InputSource for TerminalInput<R> {
    type Error = io::Error;

    fn next_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        loop {
            if let Ok(Some(event)) = self.queued.next_event() {
                return Ok(Some(event));
            }

            if self.prompt {
                print!("> ");
                io::stdout().flush()?;
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            if let Some(event) = Self::parse_pointer(&line) {
                return Ok(Some(event));
            }
            if let Err(e) = self.queued.push_script(&line) {
                warn!("ignoring input line: {e}");
                println!("❌ {e}");
            }
        }
    }
}

/// Error from a session loop.
#[derive(Debug, thiserror::Error)]
pub enum SessionError<I, D>
where
    I: std::fmt::Debug + std::fmt::Display,
    D: std::fmt::Debug + std::fmt::Display,
{
    #[error("input failed: {0}")]
    Input(I),
    #[error("display failed: {0}")]
    Display(D),
}

/// Status line for the side to move, e.g. `"Black to move  (check)"`.
pub fn status_line(state: &GameState) -> String {
    let side = state.turn().fold_wb("White", "Black");
    let check = if state.check_info().is_some() {
        "  (check)"
    } else {
        ""
    };
    format!("{side} to move{check}")
}

/// Message shown when a move ends the game.
pub fn game_over_message(status: GameStatus) -> Option<String> {
    match status {
        GameStatus::Checkmate { winner } => Some(format!(
            "Checkmate! {} wins",
            winner.fold_wb("White", "Black")
        )),
        GameStatus::Stalemate => Some("Stalemate: draw, no legal move".to_string()),
        GameStatus::Ongoing | GameStatus::Check => None,
    }
}

fn show_state<D: BoardDisplay>(engine: &GameEngine, display: &mut D) -> Result<(), D::Error> {
    let state = engine.state();
    display.show(state.board(), &compute_feedback(&state), &status_line(&state))
}

fn finished_game(outcome: &ClickOutcome) -> Option<MoveOutcome> {
    match outcome {
        ClickOutcome::Attempted { outcome, .. } if outcome.status.is_game_over() => Some(*outcome),
        _ => None,
    }
}

/// Drive `engine` from `input`, rendering to `display` after every event.
///
/// Returns when the input is exhausted or a quit event arrives. A move
/// that ends the game is shown with its final position and message
/// before the fresh board.
pub fn run_session<I, D>(
    engine: &mut GameEngine,
    input: &mut I,
    display: &mut D,
    config: &ShellConfig,
) -> Result<(), SessionError<I::Error, D::Error>>
where
    I: InputSource,
    D: BoardDisplay,
{
    show_state(engine, display).map_err(SessionError::Display)?;

    while let Some(event) = input.next_event().map_err(SessionError::Input)? {
        let clicked = match event {
            InputEvent::Click(square) => engine.click(square),
            InputEvent::Pointer { x, y } => engine.click_at(x, y, config.cell_size),
            InputEvent::NewGame => {
                engine.new_game();
                ClickOutcome::Ignored
            }
            InputEvent::Quit => break,
        };

        if let Some(finished) = finished_game(&clicked)
            && let Some(message) = game_over_message(finished.status)
        {
            display
                .show(finished.board(), &BoardFeedback::new(), &message)
                .map_err(SessionError::Display)?;
        }
        show_state(engine, display).map_err(SessionError::Display)?;
    }
    Ok(())
}

/// Display that clears the screen before each frame.
struct ClearingDisplay(TerminalDisplay);

impl BoardDisplay for ClearingDisplay {
    type Error = <TerminalDisplay as BoardDisplay>::Error;

    fn show(
        &mut self,
        board: &Board,
        feedback: &BoardFeedback,
        status: &str,
    ) -> Result<(), Self::Error> {
        clear_screen();
        println!("♟️  Hotseat Chess");
        println!();
        println!("Commands: <square> (click) | c <x> <y> (pointer) | r (new game) | q (quit)");
        println!();
        self.0.show(board, feedback, status)
    }
}

/// Runs an interactive two-player game on stdin/stdout.
pub fn run_interactive_terminal(config: &ShellConfig) -> io::Result<()> {
    let mut engine = GameEngine::new();
    let mut input = TerminalInput::new(io::stdin().lock());
    let mut display = ClearingDisplay(TerminalDisplay::with_color(config.color));

    run_session(&mut engine, &mut input, &mut display, config).map_err(io::Error::other)?;
    println!("Games completed: {}", engine.games_completed());
    Ok(())
}
