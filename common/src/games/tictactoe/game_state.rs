use crate::games::SessionRng;
use crate::log;
use super::board::Grid;
use super::bot_controller::calculate_move;
use super::types::{BotType, CELL_COUNT, GameStatus, Player};
use super::win_detector::{evaluate, line_cells};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub human_cell: usize,
    pub computer_cell: Option<usize>,
    pub status: GameStatus,
}

/// One human-vs-computer game. The human always moves first.
pub struct TicTacToeGameState {
    grid: Grid,
    status: GameStatus,
    bot_type: BotType,
    rng: SessionRng,
    last_move: Option<(Player, usize)>,
}

impl TicTacToeGameState {
    pub fn new(bot_type: BotType, rng: SessionRng) -> Self {
        Self {
            grid: Grid::new(),
            status: GameStatus::InProgress,
            bot_type,
            rng,
            last_move: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn bot_type(&self) -> BotType {
        self.bot_type
    }

    pub fn last_move(&self) -> Option<(Player, usize)> {
        self.last_move
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn winning_cells(&self) -> Option<[usize; 3]> {
        self.status.winning_line().and_then(line_cells)
    }

    pub fn reset(&mut self) {
        self.grid.clear();
        self.status = GameStatus::InProgress;
        self.last_move = None;
    }

    pub fn place_human_mark(&mut self, cell: usize) -> Result<TurnReport, String> {
        if self.is_over() {
            return Err("Game is already over".to_string());
        }

        if cell >= CELL_COUNT {
            return Err(format!("Cell {} is out of range 0..{}", cell, CELL_COUNT - 1));
        }

        if !self.grid.is_valid_move(cell) {
            return Err(format!("Cell {} is already marked", cell));
        }

        self.apply_mark(Player::Human, cell);

        let mut report = TurnReport {
            human_cell: cell,
            computer_cell: None,
            status: self.status,
        };

        if self.is_over() {
            return Ok(report);
        }

        let Some(reply) = calculate_move(self.bot_type, &self.grid, &mut self.rng) else {
            return Err("Computer found no move on an undecided grid".to_string());
        };
        log!("Computer ({}) picks cell {}", self.bot_type, reply);

        self.apply_mark(Player::Computer, reply);
        report.computer_cell = Some(reply);
        report.status = self.status;

        Ok(report)
    }

    fn apply_mark(&mut self, player: Player, cell: usize) {
        self.grid.set(cell, player.mark());
        self.last_move = Some((player, cell));
        self.status = GameStatus::from_outcome(evaluate(&self.grid, player));

        if let Some(message) = self.status.result_message() {
            log!("Game over: {}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Mark;

    fn new_game() -> TicTacToeGameState {
        TicTacToeGameState::new(BotType::Minimax, SessionRng::new(0))
    }

    #[test]
    fn test_human_move_gets_computer_reply() {
        let mut game = new_game();
        let report = game.place_human_mark(4).unwrap();

        assert_eq!(report.human_cell, 4);
        assert_eq!(game.bot_type(), BotType::Minimax);
        assert_eq!(report.status, GameStatus::InProgress);
        let reply = report.computer_cell.unwrap();
        assert_ne!(reply, 4);
        assert_eq!(game.grid().get(4), Some(Mark::Human));
        assert_eq!(game.grid().get(reply), Some(Mark::Computer));
        assert_eq!(game.last_move(), Some((Player::Computer, reply)));
        assert_eq!(game.grid().mark_count(), 2);
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_change() {
        let mut game = new_game();
        let report = game.place_human_mark(0).unwrap();
        let reply = report.computer_cell.unwrap();
        let before = game.grid().clone();

        let result = game.place_human_mark(reply);
        assert_eq!(result, Err(format!("Cell {} is already marked", reply)));
        assert!(game.place_human_mark(0).is_err());
        assert_eq!(game.grid(), &before);
    }

    #[test]
    fn test_out_of_range_cell_is_rejected() {
        let mut game = new_game();
        assert!(game.place_human_mark(9).is_err());
        assert_eq!(game.grid(), &Grid::new());
        assert_eq!(game.last_move(), None);
    }

    #[test]
    fn test_minimax_bot_wins_when_human_blunders() {
        let mut game = new_game();
        // Human: corner, then edges that ignore the computer's threats.
        let mut human_moves = [0, 1, 3, 5, 6, 7, 8, 2].into_iter();
        while !game.is_over() {
            let cell = human_moves.find(|&cell| game.grid().is_valid_move(cell)).unwrap();
            game.place_human_mark(cell).unwrap();
        }

        // 0 / 4, 1 / 2, 3 / 6 completes the anti-diagonal.
        assert_eq!(game.status(), GameStatus::ComputerWon { line: 7 });
        assert_eq!(game.winning_cells(), Some([6, 4, 2]));
        assert_eq!(game.grid().mark_count(), 6);
    }

    #[test]
    fn test_human_win_stops_the_computer() {
        let mut game = new_game();
        game.grid.set(0, Mark::Human);
        game.grid.set(1, Mark::Human);
        game.grid.set(3, Mark::Computer);
        game.grid.set(4, Mark::Computer);

        let report = game.place_human_mark(2).unwrap();

        assert_eq!(report.computer_cell, None);
        assert_eq!(report.status, GameStatus::HumanWon { line: 0 });
        assert_eq!(game.winning_cells(), Some([0, 1, 2]));
        assert_eq!(game.grid().mark_count(), 5);
        assert_eq!(game.status().result_message(), Some("You have won!"));
    }

    #[test]
    fn test_finished_game_rejects_moves_until_reset() {
        let mut game = new_game();
        while !game.is_over() {
            let cell = game.grid().empty_cells()[0];
            game.place_human_mark(cell).unwrap();
        }
        let finished = game.grid().clone();

        assert_eq!(game.place_human_mark(0), Err("Game is already over".to_string()));
        assert_eq!(game.grid(), &finished);

        game.reset();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.grid(), &Grid::new());
        assert_eq!(game.last_move(), None);
        assert_eq!(game.winning_cells(), None);
    }

    #[test]
    fn test_game_against_minimax_never_ends_with_human_win() {
        for first in 0..CELL_COUNT {
            let mut game = new_game();
            game.place_human_mark(first).unwrap();
            while !game.is_over() {
                let cell = *game.grid().empty_cells().last().unwrap();
                game.place_human_mark(cell).unwrap();
            }
            assert!(!matches!(game.status(), GameStatus::HumanWon { .. }));
        }
    }
}
