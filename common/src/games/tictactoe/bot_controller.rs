use crate::games::SessionRng;
use super::board::Grid;
use super::types::{BotType, Mark, Player, ScoredMove};
use super::win_detector::has_won;

pub const HUMAN_WIN_SCORE: i32 = -10;
pub const COMPUTER_WIN_SCORE: i32 = 10;
pub const TIE_SCORE: i32 = 0;

pub fn calculate_move(bot_type: BotType, grid: &Grid, rng: &mut SessionRng) -> Option<usize> {
    match bot_type {
        BotType::Minimax => select_move(grid),
        BotType::Random => calculate_random_move(grid, rng),
    }
}

fn calculate_random_move(grid: &Grid, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = grid.empty_cells();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

/// Picks the computer's reply by exhaustive minimax.
///
/// Returns `None` when the grid is already decided (a completed line or no
/// empty cell), which the caller must not ask about in the first place.
pub fn select_move(grid: &Grid) -> Option<usize> {
    best_move(grid, Player::Computer).map(|scored| scored.cell)
}

/// Same search as [`select_move`] with an arbitrary side to move.
/// The returned score is always from the computer's point of view.
pub fn best_move(grid: &Grid, side: Player) -> Option<ScoredMove> {
    if terminal_score(grid).is_some() {
        return None;
    }

    let mut board = grid.clone();
    let moves = score_moves(&mut board, side);
    pick_best(&moves, side)
}

/// Scores of a decided grid, checked in this order: human line, computer
/// line, full grid.
fn terminal_score(grid: &Grid) -> Option<i32> {
    if has_won(grid, Player::Human) {
        Some(HUMAN_WIN_SCORE)
    } else if has_won(grid, Player::Computer) {
        Some(COMPUTER_WIN_SCORE)
    } else if grid.is_full() {
        Some(TIE_SCORE)
    } else {
        None
    }
}

fn minimax(board: &mut Grid, side: Player) -> i32 {
    if let Some(score) = terminal_score(board) {
        return score;
    }

    let moves = score_moves(board, side);
    pick_best(&moves, side).map_or(TIE_SCORE, |scored| scored.score)
}

fn score_moves(board: &mut Grid, side: Player) -> Vec<ScoredMove> {
    let available_moves = board.empty_cells();
    let mut moves = Vec::with_capacity(available_moves.len());

    for cell in available_moves {
        board.set(cell, side.mark());
        let score = minimax(board, side.opponent());
        board.set(cell, Mark::Empty);

        moves.push(ScoredMove::new(cell, score));
    }

    moves
}

/// Computer maximizes, human minimizes. Only a strictly better score replaces
/// the incumbent, so the lowest cell wins among equals.
fn pick_best(moves: &[ScoredMove], side: Player) -> Option<ScoredMove> {
    let mut best: Option<ScoredMove> = None;

    for &candidate in moves {
        let better = match best {
            None => true,
            Some(current) => match side {
                Player::Computer => candidate.score > current.score,
                Player::Human => candidate.score < current.score,
            },
        };
        if better {
            best = Some(candidate);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::grid_from_str;
    use crate::games::tictactoe::types::Outcome;
    use crate::games::tictactoe::win_detector::evaluate;

    #[test]
    fn test_blocks_human_row() {
        let grid = grid_from_str("OO.XX....");
        assert_eq!(select_move(&grid), Some(2));
    }

    #[test]
    fn test_completes_own_row() {
        let grid = grid_from_str("XX.OO....");
        assert_eq!(select_move(&grid), Some(2));
    }

    #[test]
    fn test_takes_only_remaining_cell() {
        let grid = grid_from_str("OXOOXX.OX");
        assert_eq!(select_move(&grid), Some(6));
    }

    #[test]
    fn test_decided_grid_yields_no_move() {
        assert_eq!(select_move(&grid_from_str("OOOXX....")), None);
        assert_eq!(select_move(&grid_from_str("XXXOO....")), None);
        assert_eq!(select_move(&grid_from_str("OXOOXXXOO")), None);
    }

    #[test]
    fn test_equal_scores_prefer_lowest_cell() {
        let moves = [
            ScoredMove::new(3, 0),
            ScoredMove::new(5, 10),
            ScoredMove::new(7, 10),
            ScoredMove::new(8, -10),
        ];
        assert_eq!(pick_best(&moves, Player::Computer), Some(ScoredMove::new(5, 10)));
        assert_eq!(pick_best(&moves, Player::Human), Some(ScoredMove::new(8, -10)));
        assert_eq!(pick_best(&moves[..1], Player::Human), Some(ScoredMove::new(3, 0)));
        assert_eq!(pick_best(&[], Player::Computer), None);
    }

    #[test]
    fn test_terminal_score_checks_human_first() {
        // Not reachable in play, but the order is fixed.
        let grid = grid_from_str("OOOXXX...");
        assert_eq!(terminal_score(&grid), Some(HUMAN_WIN_SCORE));
        assert_eq!(terminal_score(&grid_from_str("XXXOO....")), Some(COMPUTER_WIN_SCORE));
        assert_eq!(terminal_score(&grid_from_str("OXOOXXXOO")), Some(TIE_SCORE));
        assert_eq!(terminal_score(&Grid::new()), None);
    }

    #[test]
    fn test_select_move_leaves_grid_untouched_and_is_repeatable() {
        let grid = grid_from_str("O...X...O");
        let before = grid.clone();
        let first = select_move(&grid);
        let second = select_move(&grid);
        assert_eq!(first, second);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_search_restores_scratch_board() {
        let mut board = grid_from_str("O...X....");
        let before = board.clone();
        let moves = score_moves(&mut board, Player::Computer);
        assert_eq!(board, before);
        assert_eq!(
            moves.iter().map(|m| m.cell).collect::<Vec<_>>(),
            before.empty_cells()
        );
    }

    #[test]
    fn test_never_picks_occupied_cell() {
        let layouts = ["O........", "....O....", "O...X...O", "OX..O....", "O.X.X.O.."];
        for layout in layouts {
            let grid = grid_from_str(layout);
            let cell = select_move(&grid).unwrap();
            assert!(grid.is_valid_move(cell), "layout {} picked {}", layout, cell);
        }
    }

    #[test]
    fn test_optimal_play_from_empty_grid_is_a_tie() {
        let mut grid = Grid::new();
        let mut side = Player::Human;

        loop {
            let scored = best_move(&grid, side).unwrap();
            grid.set(scored.cell, side.mark());
            let outcome = evaluate(&grid, side);
            if outcome.is_final() {
                assert_eq!(outcome, Outcome::Tie);
                break;
            }
            side = side.opponent();
        }
    }

    fn assert_computer_never_loses(grid: &mut Grid) {
        for cell in grid.empty_cells() {
            grid.set(cell, Mark::Human);

            match evaluate(grid, Player::Human) {
                Outcome::Win { .. } => panic!("human won on {:?}", grid),
                Outcome::Tie => {}
                Outcome::NoResult => {
                    let reply = select_move(grid).unwrap();
                    assert!(grid.is_valid_move(reply));
                    grid.set(reply, Mark::Computer);
                    if !evaluate(grid, Player::Computer).is_final() {
                        assert_computer_never_loses(grid);
                    }
                    grid.set(reply, Mark::Empty);
                }
            }

            grid.set(cell, Mark::Empty);
        }
    }

    #[test]
    fn test_computer_never_loses_against_any_human_line() {
        let mut grid = Grid::new();
        assert_computer_never_loses(&mut grid);
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn test_random_bot_picks_empty_cell() {
        let grid = grid_from_str("OXOX.OXO.");
        let mut rng = SessionRng::new(7);
        for _ in 0..20 {
            let cell = calculate_move(BotType::Random, &grid, &mut rng).unwrap();
            assert!(cell == 4 || cell == 8);
        }
        assert_eq!(calculate_move(BotType::Random, &grid_from_str("OXOOXXXOO"), &mut rng), None);
    }

    #[test]
    fn test_minimax_bot_ignores_rng() {
        let grid = grid_from_str("OO.XX....");
        let mut rng = SessionRng::new(1);
        assert_eq!(calculate_move(BotType::Minimax, &grid, &mut rng), Some(2));
    }
}
