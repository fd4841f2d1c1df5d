use thiserror::Error;

use super::board::{Board, empty_board};
use super::bot_controller::{BotInput, calculate_move};
use super::save_file::SavedGame;
use super::types::{GameStatus, Mark, PlayerSlot, Position};
use super::win_detector::{check_win, is_full};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("Game is already over")]
    GameOver,
    #[error("Position ({row}, {col}) is out of bounds")]
    OutOfBounds { row: usize, col: usize },
    #[error("Cell ({row}, {col}) is already marked")]
    CellOccupied { row: usize, col: usize },
}

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_player: PlayerSlot,
    pub vs_computer: bool,
    pub status: GameStatus,
    pub last_move: Option<Position>,
}

impl TicTacToeGameState {
    pub fn new(vs_computer: bool) -> Self {
        Self {
            board: empty_board(),
            current_player: PlayerSlot::One,
            vs_computer,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    /// Resumes a saved game. Saved games are validated on load, so they are
    /// never terminal.
    pub fn from_saved(saved: SavedGame) -> Self {
        let mut state = Self {
            board: saved.board,
            current_player: saved.player_turn,
            vs_computer: saved.vs_computer,
            status: GameStatus::InProgress,
            last_move: None,
        };
        state.check_game_over(saved.player_turn.other());
        state
    }

    pub fn to_saved(&self) -> SavedGame {
        SavedGame {
            board: self.board,
            player_turn: self.current_player,
            vs_computer: self.vs_computer,
        }
    }

    pub fn current_mark(&self) -> Mark {
        self.current_player.mark()
    }

    /// The computer always takes the second seat.
    pub fn is_computer_turn(&self) -> bool {
        self.vs_computer && self.current_player == PlayerSlot::Two
    }

    pub fn computer_move(&self) -> Option<Position> {
        if self.status.is_over() {
            return None;
        }
        calculate_move(&BotInput::from_game_state(self))
    }

    pub fn place_mark(&mut self, position: Position) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        if !position.is_on_board() {
            return Err(MoveError::OutOfBounds {
                row: position.row,
                col: position.col,
            });
        }

        if self.board[position.row][position.col] != Mark::Empty {
            return Err(MoveError::CellOccupied {
                row: position.row,
                col: position.col,
            });
        }

        let mover = self.current_player;
        self.board[position.row][position.col] = mover.mark();
        self.last_move = Some(position);

        self.check_game_over(mover);

        if self.status == GameStatus::InProgress {
            self.current_player = mover.other();
        }

        Ok(())
    }

    fn check_game_over(&mut self, last_mover: PlayerSlot) {
        if let Some(winner_mark) = check_win(&self.board) {
            let winner = if winner_mark == last_mover.mark() {
                last_mover
            } else {
                last_mover.other()
            };
            self.status = GameStatus::Won(winner);
            return;
        }

        if is_full(&self.board) {
            self.status = GameStatus::Draw;
        }
    }

    pub fn winner(&self) -> Option<PlayerSlot> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// True when the given winner is the computer rather than a person.
    pub fn is_computer(&self, player: PlayerSlot) -> bool {
        self.vs_computer && player == PlayerSlot::Two
    }
}
