use std::io::{BufRead, Write};

use common::log;
use common::tictactoe::{CELL_COUNT, TicTacToeGameState};

use crate::config::Config;
use crate::game_ui::render_game;

#[derive(Debug, PartialEq, Eq)]
pub enum InputCommand {
    Place(usize),
    NewGame,
    Help,
    Quit,
}

impl InputCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "new" | "n" => Ok(InputCommand::NewGame),
            "help" | "h" | "?" => Ok(InputCommand::Help),
            "quit" | "q" | "exit" => Ok(InputCommand::Quit),
            _ => line
                .parse::<usize>()
                .map(InputCommand::Place)
                .map_err(|_| format!("Unrecognized input '{}', type help for commands", line)),
        }
    }
}

const HELP: &str = "Type a cell number 0-8 to place your mark, new to restart, quit to exit.";

pub fn run_game<R: BufRead, W: Write>(
    game: &mut TicTacToeGameState,
    config: &Config,
    input: R,
    output: &mut W,
) -> Result<(), String> {
    let write_err = |e: std::io::Error| format!("Failed to write output: {}", e);

    writeln!(output, "{}", HELP).map_err(write_err)?;
    write!(output, "{}", render_game(game, config)).map_err(write_err)?;

    for line in input.lines() {
        let line = line.map_err(|e| format!("Failed to read input: {}", e))?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match InputCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", e).map_err(write_err)?;
                continue;
            }
        };

        match command {
            InputCommand::Quit => break,
            InputCommand::Help => {
                writeln!(output, "{}", HELP).map_err(write_err)?;
            }
            InputCommand::NewGame => {
                game.reset();
                log!("New game started");
                write!(output, "{}", render_game(game, config)).map_err(write_err)?;
            }
            InputCommand::Place(cell) => match game.place_human_mark(cell) {
                Ok(_) => {
                    write!(output, "{}", render_game(game, config)).map_err(write_err)?;
                    if game.is_over() {
                        writeln!(output, "Type new to play again or quit to exit.")
                            .map_err(write_err)?;
                    }
                }
                Err(e) => {
                    log!("Rejected move {}: {}", cell, e);
                    writeln!(output, "{}", e).map_err(write_err)?;
                    if cell < CELL_COUNT && !game.is_over() {
                        writeln!(output, "Pick one of {:?}", game.grid().empty_cells())
                            .map_err(write_err)?;
                    }
                }
            },
        }

        output.flush().map_err(write_err)?;
    }

    Ok(())
}
