use std::ops::{Deref, DerefMut};

use super::board::{Board, get_available_moves};
use super::game_state::TicTacToeGameState;
use super::types::{BOARD_SIZE, Mark, Position};
use super::win_detector::{has_won, is_full};

const WIN_SCORE: i32 = 10;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
    pub opponent_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        let bot_mark = state.current_mark();
        Self {
            board: state.board,
            bot_mark,
            opponent_mark: bot_mark.opponent().unwrap_or(Mark::Empty),
        }
    }
}

pub fn calculate_move(input: &BotInput) -> Option<Position> {
    best_move(&input.board, input.bot_mark, input.opponent_mark)
}

/// Exhaustive minimax over every continuation of `board`.
///
/// Returns `None` only for a full board. Among equally scored moves the first
/// one in row-major order is kept.
pub fn best_move(board: &Board, bot_mark: Mark, opponent_mark: Mark) -> Option<Position> {
    debug_assert!(bot_mark != Mark::Empty && opponent_mark != Mark::Empty);
    debug_assert!(bot_mark != opponent_mark);

    let mut board = *board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for position in get_available_moves(&board) {
        let score = {
            let mut placed = Placement::new(&mut board, position, bot_mark);
            minimax(&mut placed, 1, false, bot_mark, opponent_mark)
        };

        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    best_move
}

/// Score of `board` from the bot's point of view, `depth` plies below the root.
fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
) -> i32 {
    if has_won(board, bot_mark) {
        return WIN_SCORE - depth;
    }
    if has_won(board, opponent_mark) {
        return depth - WIN_SCORE;
    }
    if is_full(board) {
        return 0;
    }

    let mover = if is_maximizing { bot_mark } else { opponent_mark };
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if board[row][col] != Mark::Empty {
                continue;
            }

            let mut placed = Placement::new(board, Position::new(row, col), mover);
            let score = minimax(
                &mut placed,
                depth + 1,
                !is_maximizing,
                bot_mark,
                opponent_mark,
            );

            best = if is_maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
    }

    best
}

/// A hypothetical mark on the board, cleared again when the guard drops.
struct Placement<'a> {
    board: &'a mut Board,
    position: Position,
}

impl<'a> Placement<'a> {
    fn new(board: &'a mut Board, position: Position, mark: Mark) -> Self {
        debug_assert_eq!(board[position.row][position.col], Mark::Empty);
        board[position.row][position.col] = mark;
        Self { board, position }
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board[self.position.row][self.position.col] = Mark::Empty;
    }
}
