use std::process::ExitCode;

use hotseat_chess::GameEngine;
use hotseat_chess::config::ShellConfig;
use hotseat_chess::mock::{ScriptedInput, TerminalDisplay, run_interactive_terminal, run_session};

fn main() -> ExitCode {
    env_logger::init();
    let config = ShellConfig::from_env();
    log::info!("Hotseat chess, cell size {}px", config.cell_size);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        Some("--script") => run_script(&args[1..].join(" "), &config),
        _ => run_interactive_terminal(&config).map_err(|e| e.to_string()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Play a click script non-interactively, printing every frame.
fn run_script(script: &str, config: &ShellConfig) -> Result<(), String> {
    let mut input = ScriptedInput::new();
    input.push_script(script).map_err(|e| e.to_string())?;

    let mut engine = GameEngine::new();
    let mut display = TerminalDisplay::with_color(config.color);
    run_session(&mut engine, &mut input, &mut display, config).map_err(|e| e.to_string())
}
