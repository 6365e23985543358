mod display;
mod script;
mod terminal;

pub use display::{DisplayError, TerminalDisplay};
pub use script::{ScriptError, ScriptedInput};
pub use terminal::{
    SessionError, TerminalInput, game_over_message, run_interactive_terminal, run_session,
    status_line,
};
