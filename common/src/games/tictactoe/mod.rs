mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::Grid;
pub use bot_controller::{
    best_move, calculate_move, select_move, COMPUTER_WIN_SCORE, HUMAN_WIN_SCORE, TIE_SCORE,
};
pub use game_state::{TicTacToeGameState, TurnReport};
pub use types::{
    BotType, CELL_COUNT, GameStatus, Mark, Outcome, Player, ScoredMove, WIN_LINES,
};
pub use win_detector::{evaluate, has_won, line_cells, winning_line};
