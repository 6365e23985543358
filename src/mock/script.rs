use std::collections::VecDeque;
use std::convert::Infallible;

use thiserror::Error;

use crate::board::Square;
use crate::{InputEvent, InputSource};

/// Error when parsing an input script.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid script token: '{0}'")]
pub struct ScriptError(String);

/// A scriptable input source.
///
/// Queues events parsed from a script and hands them out one at a time.
/// New script can be appended at any time.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    pending: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and queue additional script for execution.
    ///
    /// Format:
    /// - Squares are 2 characters (e.g., "e2", "a1") and mean a click
    /// - `r` starts a new game, `q` quits
    /// - Spaces and periods separate tokens
    ///
    /// Examples:
    /// - `"e2e4."` - Click e2, then e4
    /// - `"e2 e4. e7 e5."` - Two moves
    /// - `"e2 r"` - Select e2, then start a new game
    ///
    /// A script with any invalid token queues nothing.
    pub fn push_script(&mut self, script: &str) -> Result<(), ScriptError> {
        let events = parse_script(script)?;
        self.pending.extend(events);
        Ok(())
    }

    /// Number of queued events.
    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pop all pending events, calling the provided callback for each.
    pub fn drain<F>(&mut self, mut on_event: F)
    where
        F: FnMut(InputEvent),
    {
        while let Some(event) = self.pending.pop_front() {
            on_event(event);
        }
    }
}

impl InputSource for ScriptedInput {
    type Error = Infallible;

    fn next_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.pending.pop_front())
    }
}

/// Parse a script string into input events.
fn parse_script(script: &str) -> Result<Vec<InputEvent>, ScriptError> {
    let mut events = Vec::new();
    let mut current_token = String::new();

    for ch in script.chars() {
        match ch {
            '.' => flush_token(&mut current_token, &mut events)?,
            c if c.is_whitespace() => flush_token(&mut current_token, &mut events)?,
            'r' | 'R' | 'q' | 'Q' if current_token.is_empty() => {
                current_token.push(ch);
                flush_token(&mut current_token, &mut events)?;
            }
            _ => {
                current_token.push(ch);

                // Squares are exactly 2 characters (e.g., "e2", "a1")
                if current_token.len() == 2 {
                    flush_token(&mut current_token, &mut events)?;
                }
            }
        }
    }

    // Flush any remaining token
    flush_token(&mut current_token, &mut events)?;
    Ok(events)
}

/// Turn the current token into an event and clear it.
fn flush_token(token: &mut String, events: &mut Vec<InputEvent>) -> Result<(), ScriptError> {
    if token.is_empty() {
        return Ok(());
    }
    let event = match token.as_str() {
        "r" | "R" => InputEvent::NewGame,
        "q" | "Q" => InputEvent::Quit,
        name => InputEvent::Click(
            name.parse::<Square>()
                .map_err(|_| ScriptError(token.clone()))?,
        ),
    };
    events.push(event);
    token.clear();
    Ok(())
}
