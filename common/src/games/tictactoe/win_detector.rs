use super::board::Grid;
use super::types::{Outcome, Player, WIN_LINES};

/// Evaluates `grid` from the point of view of `player`.
///
/// The first completed line in `WIN_LINES` order wins. A full grid without
/// such a line is a tie, even if the opponent owns a line; callers check the
/// player who just moved.
pub fn evaluate(grid: &Grid, player: Player) -> Outcome {
    if let Some(line) = winning_line(grid, player) {
        return Outcome::Win { line, player };
    }

    if grid.is_full() {
        Outcome::Tie
    } else {
        Outcome::NoResult
    }
}

pub fn winning_line(grid: &Grid, player: Player) -> Option<usize> {
    let mark = player.mark();
    let cells = grid.cells();
    WIN_LINES
        .iter()
        .position(|line| line.iter().all(|&cell| cells[cell] == mark))
}

pub fn has_won(grid: &Grid, player: Player) -> bool {
    winning_line(grid, player).is_some()
}

pub fn line_cells(line: usize) -> Option<[usize; 3]> {
    WIN_LINES.get(line).copied()
}
