mod board;
mod bot_controller;
mod game_state;
mod save_file;
mod scoreboard;
mod types;
mod win_detector;

pub use board::{Board, count_marks, empty_board, get_available_moves, is_valid_move};
pub use bot_controller::{BotInput, best_move, calculate_move};
pub use game_state::{MoveError, TicTacToeGameState};
pub use save_file::{
    SaveError, SavedGame, delete_save, load_from_str, load_game, save_game, save_to_string,
};
pub use scoreboard::{ParseScoreEntryError, ScoreEntry, ScoreTally, Scoreboard};
pub use types::{BOARD_SIZE, GameStatus, Mark, PlayerSlot, Position};
pub use win_detector::{check_win, has_won, is_full, winning_line};
