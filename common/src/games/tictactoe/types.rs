use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const CELL_COUNT: usize = 9;

/// Winning combinations of the 3x3 grid: rows, columns, diagonals.
/// The declaration order decides which line is reported when several match.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [6, 4, 2],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    pub fn mark(&self) -> Mark {
        match self {
            Player::Human => Mark::Human,
            Player::Computer => Mark::Computer,
        }
    }

    pub fn default_symbol(&self) -> char {
        match self {
            Player::Human => 'O',
            Player::Computer => 'X',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "Human"),
            Player::Computer => write!(f, "Computer"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    Empty,
    Human,
    Computer,
}

impl Mark {
    pub fn player(&self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Human => Some(Player::Human),
            Mark::Computer => Some(Player::Computer),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    NoResult,
    Win { line: usize, player: Player },
    Tie,
}

impl Outcome {
    pub fn is_final(&self) -> bool {
        !matches!(self, Outcome::NoResult)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub cell: usize,
    pub score: i32,
}

impl ScoredMove {
    pub fn new(cell: usize, score: i32) -> Self {
        Self { cell, score }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    HumanWon { line: usize },
    ComputerWon { line: usize },
    Tie,
}

impl GameStatus {
    pub fn from_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::NoResult => GameStatus::InProgress,
            Outcome::Win { line, player: Player::Human } => GameStatus::HumanWon { line },
            Outcome::Win { line, player: Player::Computer } => GameStatus::ComputerWon { line },
            Outcome::Tie => GameStatus::Tie,
        }
    }

    pub fn winning_line(&self) -> Option<usize> {
        match self {
            GameStatus::HumanWon { line } | GameStatus::ComputerWon { line } => Some(*line),
            _ => None,
        }
    }

    pub fn result_message(&self) -> Option<&'static str> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::HumanWon { .. } => Some("You have won!"),
            GameStatus::ComputerWon { .. } => Some("AI has won!"),
            GameStatus::Tie => Some("The game is tied!"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BotType {
    #[default]
    Minimax,
    Random,
}

impl FromStr for BotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(BotType::Minimax),
            "random" => Ok(BotType::Random),
            other => Err(format!("Unknown bot type '{}', expected minimax or random", other)),
        }
    }
}

impl fmt::Display for BotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotType::Minimax => write!(f, "minimax"),
            BotType::Random => write!(f, "random"),
        }
    }
}
