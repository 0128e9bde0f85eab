use common::tictactoe::{Grid, TicTacToeGameState};

use crate::config::Config;

/// Draws the grid as three text rows. Empty cells show their index so the
/// player knows what to type; cells of a completed line are wrapped in
/// brackets.
pub fn render_grid(grid: &Grid, highlight: Option<[usize; 3]>, config: &Config) -> String {
    let mut out = String::new();

    for row in 0..3 {
        if row > 0 {
            out.push_str("-----+-----+-----\n");
        }
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let cell = row * 3 + col;
                let symbol = grid
                    .get(cell)
                    .and_then(|mark| mark.player())
                    .map_or_else(|| cell.to_string(), |player| config.symbol(player).to_string());
                if highlight.is_some_and(|line| line.contains(&cell)) {
                    format!(" [{}] ", symbol)
                } else {
                    format!("  {}  ", symbol)
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
    }

    out
}

pub fn render_game(game: &TicTacToeGameState, config: &Config) -> String {
    let mut out = String::new();
    if let Some((player, cell)) = game.last_move() {
        out.push_str(&format!("{} marked cell {}\n", player, cell));
    }
    out.push_str(&render_grid(game.grid(), game.winning_cells(), config));
    if let Some(message) = game.status().result_message() {
        out.push_str(message);
        out.push('\n');
    }
    out
}
