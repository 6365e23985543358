use std::env;

/// Pixel size of one board cell when none is configured.
pub const DEFAULT_CELL_SIZE: u32 = 80;

/// Settings for the host shell, read from the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    /// Pixels per cell, used to map pointer coordinates to squares.
    pub cell_size: u32,
    /// Emit ANSI colors in the terminal display.
    pub color: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            color: true,
        }
    }
}

impl ShellConfig {
    /// Reads `CHESS_CELL_SIZE` and `CHESS_COLOR` (`always` or `never`).
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            cell_size: var("CHESS_CELL_SIZE")
                .and_then(|v| v.trim().parse().ok())
                .filter(|&size: &u32| size > 0)
                .unwrap_or(defaults.cell_size),
            color: var("CHESS_COLOR")
                .map(|v| !v.trim().eq_ignore_ascii_case("never"))
                .unwrap_or(defaults.color),
        }
    }
}
