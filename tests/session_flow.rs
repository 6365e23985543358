mod common;

use std::collections::VecDeque;
use std::convert::Infallible;

use common::{position_from_fen, sq};
use hotseat_chess::config::ShellConfig;
use hotseat_chess::feedback::{BoardFeedback, FeedbackSource, SquareFeedback, compute_feedback};
use hotseat_chess::game_logic::GameState;
use hotseat_chess::mock::{ScriptedInput, run_session};
use hotseat_chess::{
    Board, BoardDisplay, ClickOutcome, GameEngine, GameStatus, InputEvent, InputSource, Position,
};
use shakmaty::{Color, Role};

/// Helper: feed a click script into the engine and return the final state.
fn clicks(engine: &mut GameEngine, script: &str) -> GameState {
    let mut input = ScriptedInput::new();
    input.push_script(script).expect("valid script");
    input.drain(|event| {
        if let InputEvent::Click(square) = event {
            engine.click(square);
        }
    });
    engine.state()
}

/// Records every frame instead of drawing it.
#[derive(Default)]
struct Frames(Vec<(Board, BoardFeedback, String)>);

impl BoardDisplay for Frames {
    type Error = Infallible;

    fn show(
        &mut self,
        board: &Board,
        feedback: &BoardFeedback,
        status: &str,
    ) -> Result<(), Self::Error> {
        self.0.push((*board, feedback.clone(), status.to_string()));
        Ok(())
    }
}

/// Input that replays a fixed list of events.
struct Events(VecDeque<InputEvent>);

impl InputSource for Events {
    type Error = Infallible;

    fn next_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.0.pop_front())
    }
}

// ---------------------------------------------------------------
// Selection: click piece → destinations shown → click target → cleared
// ---------------------------------------------------------------

#[test]
fn selecting_pawn_shows_destinations() {
    let mut engine = GameEngine::new();

    let fb = compute_feedback(&clicks(&mut engine, "e2"));

    assert_eq!(
        fb.get(sq("e2")),
        Some(SquareFeedback::Origin),
        "selected square should be Origin"
    );
    assert_eq!(fb.get(sq("e3")), Some(SquareFeedback::Destination));
    assert_eq!(fb.get(sq("e4")), Some(SquareFeedback::Destination));
    assert_eq!(fb.get(sq("a1")), None);
}

#[test]
fn completed_move_clears_feedback() {
    let mut engine = GameEngine::new();

    let fb = compute_feedback(&clicks(&mut engine, "e2 e4"));

    assert!(fb.is_empty(), "feedback should be empty after a move");
    assert_eq!(engine.position().turn(), Color::Black);
}

#[test]
fn capture_destination_is_marked() {
    let mut engine = GameEngine::new();

    let fb = compute_feedback(&clicks(&mut engine, "e2e4 d7d5 e4"));

    assert_eq!(fb.get(sq("e4")), Some(SquareFeedback::Origin));
    assert_eq!(fb.get(sq("d5")), Some(SquareFeedback::Capture));
    assert_eq!(fb.get(sq("e5")), Some(SquareFeedback::Destination));
}

#[test]
fn rejected_move_keeps_turn_and_clears_selection() {
    let mut engine = GameEngine::new();

    let state = clicks(&mut engine, "e2 e5");

    assert_eq!(state.turn(), Color::White);
    assert!(compute_feedback(&state).is_empty());
    assert!(
        engine
            .piece_at(sq("e2"))
            .is_some_and(|p| p.role == Role::Pawn)
    );
}

#[test]
fn clicking_another_own_piece_switches_selection() {
    let mut engine = GameEngine::new();

    let fb = compute_feedback(&clicks(&mut engine, "g1 b1"));

    assert_eq!(fb.get(sq("b1")), Some(SquareFeedback::Origin));
    assert_eq!(fb.get(sq("g1")), None);
    assert_eq!(fb.get(sq("c3")), Some(SquareFeedback::Destination));
    assert_eq!(fb.get(sq("a3")), Some(SquareFeedback::Destination));
}

#[test]
fn opponent_piece_cannot_be_selected() {
    let mut engine = GameEngine::new();

    assert_eq!(engine.click(sq("e7")), ClickOutcome::Ignored);
    assert!(compute_feedback(&engine.state()).is_empty());
}

// ---------------------------------------------------------------
// Check
// ---------------------------------------------------------------

#[test]
fn check_highlights_king_and_checker() {
    let mut engine = GameEngine::new();

    let fb = compute_feedback(&clicks(&mut engine, "e2e4 f7f6 d1h5"));

    assert_eq!(fb.get(sq("e8")), Some(SquareFeedback::Check));
    assert_eq!(fb.get(sq("h5")), Some(SquareFeedback::Checker));
    assert_eq!(fb.squares().len(), 2);
}

#[test]
fn selection_in_check_only_offers_answers() {
    let mut engine = GameEngine::new();

    let state = clicks(&mut engine, "e2e4 f7f6 d1h5 g7");

    assert_eq!(state.legal_destinations(), &[sq("g6")]);
    let fb = compute_feedback(&state);
    assert_eq!(fb.get(sq("g7")), Some(SquareFeedback::Origin));
    assert_eq!(fb.get(sq("g6")), Some(SquareFeedback::Destination));
    assert_eq!(fb.get(sq("g5")), None);
    assert_eq!(fb.get(sq("e8")), None, "selection replaces check highlights");
}

#[test]
fn pinned_piece_has_no_destinations() {
    let position = position_from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1");
    let mut engine = GameEngine::from_position(position);

    let state = clicks(&mut engine, "e2");

    assert!(state.legal_destinations().is_empty());
    assert_eq!(compute_feedback(&state).squares().len(), 1);
}

// ---------------------------------------------------------------
// Game over
// ---------------------------------------------------------------

#[test]
fn checkmate_is_reported_then_board_resets() {
    let mut engine = GameEngine::new();
    clicks(&mut engine, "f2f3 e7e5 g2g4 d8");

    let ClickOutcome::Attempted { outcome, reselected } = engine.click(sq("h4")) else {
        panic!("clicking h4 should attempt a move");
    };

    assert_eq!(
        outcome.status,
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
    assert_eq!(reselected, None);
    assert_eq!(*engine.position(), Position::new_game());
    assert_eq!(engine.games_completed(), 1);
    assert!(compute_feedback(&engine.state()).is_empty());
}

#[test]
fn session_shows_final_position_before_reset() {
    let mut engine = GameEngine::new();
    let mut input = ScriptedInput::new();
    input
        .push_script("f2f3 e7e5 g2g4 d8h4")
        .expect("valid script");
    let mut frames = Frames::default();

    run_session(&mut engine, &mut input, &mut frames, &ShellConfig::default())
        .expect("session should not fail");

    let frames = frames.0;
    let (mated, feedback, message) = &frames[frames.len() - 2];
    assert_eq!(message, "Checkmate! Black wins");
    assert!(feedback.is_empty());
    assert!(
        mated
            .piece_at(sq("h4"))
            .is_some_and(|p| p.role == Role::Queen && p.color == Color::Black)
    );
    let (fresh, _, status) = &frames[frames.len() - 1];
    assert_eq!(*fresh, Board::standard());
    assert_eq!(status, "White to move");
}

// ---------------------------------------------------------------
// Pointer input and new game
// ---------------------------------------------------------------

#[test]
fn pointer_clicks_use_configured_cell_size() {
    let config = ShellConfig {
        cell_size: 40,
        color: false,
    };
    let mut engine = GameEngine::new();
    let mut input = Events(VecDeque::from([
        // e2, then e4, then a click below the board.
        InputEvent::Pointer { x: 165, y: 245 },
        InputEvent::Pointer { x: 165, y: 165 },
        InputEvent::Pointer { x: 10, y: 330 },
    ]));
    let mut frames = Frames::default();

    run_session(&mut engine, &mut input, &mut frames, &config).expect("session should not fail");

    assert!(
        engine
            .piece_at(sq("e4"))
            .is_some_and(|p| p.role == Role::Pawn && p.color == Color::White)
    );
    assert_eq!(engine.position().turn(), Color::Black);
    assert_eq!(engine.selected(), None);
    assert_eq!(frames.0.len(), 4);
}

#[test]
fn new_game_event_abandons_current_game() {
    let mut engine = GameEngine::new();
    let mut input = Events(VecDeque::from([
        InputEvent::Click(sq("e2")),
        InputEvent::Click(sq("e4")),
        InputEvent::Click(sq("d7")),
        InputEvent::NewGame,
    ]));
    let mut frames = Frames::default();

    run_session(&mut engine, &mut input, &mut frames, &ShellConfig::default())
        .expect("session should not fail");

    assert_eq!(*engine.position(), Position::new_game());
    assert_eq!(engine.selected(), None);
    assert_eq!(engine.games_completed(), 0);
    assert!(frames.0.last().is_some_and(|(_, fb, _)| fb.is_empty()));
}
