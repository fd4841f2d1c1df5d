use std::io::ErrorKind;
use std::path::Path;

use thiserror::Error;

use super::board::{Board, count_marks, empty_board};
use super::types::{BOARD_SIZE, Mark, PlayerSlot};
use super::win_detector::{check_win, is_full};

const PLAYER_TURN_LABEL: &str = "Player Turn";
const VS_AI_LABEL: &str = "Vs AI";

/// An in-progress game as written to the save file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedGame {
    pub board: Board,
    pub player_turn: PlayerSlot,
    pub vs_computer: bool,
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Save file is missing line {0}")]
    MissingLine(usize),
    #[error("Line {line}: expected 3 comma-separated cells, got {content:?}")]
    InvalidRow { line: usize, content: String },
    #[error("Line {line}: invalid cell {value:?}")]
    InvalidCell { line: usize, value: String },
    #[error("Invalid player turn: {0:?}")]
    InvalidTurn(String),
    #[error("Invalid vs AI flag: {0:?}")]
    InvalidFlag(String),
    #[error("Saved board is not a reachable in-progress position")]
    InconsistentBoard,
}

pub fn save_game(path: &Path, game: &SavedGame) -> Result<(), SaveError> {
    std::fs::write(path, save_to_string(game))?;
    Ok(())
}

pub fn save_to_string(game: &SavedGame) -> String {
    let mut result = String::new();
    for row in &game.board {
        let cells: Vec<String> = row.iter().map(|mark| mark.symbol().to_string()).collect();
        result.push_str(&cells.join(","));
        result.push('\n');
    }
    result.push_str(&format!(
        "{}: {}\n",
        PLAYER_TURN_LABEL,
        game.player_turn.number()
    ));
    let flag = if game.vs_computer { "True" } else { "False" };
    result.push_str(&format!("{}: {}\n", VS_AI_LABEL, flag));
    result
}

/// `Ok(None)` when there is no save file.
pub fn load_game(path: &Path) -> Result<Option<SavedGame>, SaveError> {
    match std::fs::read_to_string(path) {
        Ok(content) => load_from_str(&content).map(Some),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

pub fn load_from_str(content: &str) -> Result<SavedGame, SaveError> {
    let lines: Vec<&str> = content.lines().collect();
    let line = |index: usize| lines.get(index).copied().ok_or(SaveError::MissingLine(index + 1));

    let mut board = empty_board();
    for (row, cells) in board.iter_mut().enumerate() {
        *cells = parse_row(line(row)?, row + 1)?;
    }

    let turn = labelled_value(line(BOARD_SIZE)?);
    let player_turn = turn
        .parse::<u8>()
        .ok()
        .and_then(PlayerSlot::from_number)
        .ok_or_else(|| SaveError::InvalidTurn(turn.to_string()))?;

    let flag = labelled_value(line(BOARD_SIZE + 1)?);
    let vs_computer = match flag.to_lowercase().as_str() {
        "true" => true,
        "false" => false,
        _ => return Err(SaveError::InvalidFlag(flag.to_string())),
    };

    let game = SavedGame {
        board,
        player_turn,
        vs_computer,
    };
    validate(&game)?;
    Ok(game)
}

pub fn delete_save(path: &Path) -> Result<(), SaveError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}

fn parse_row(line: &str, line_number: usize) -> Result<[Mark; BOARD_SIZE], SaveError> {
    let values: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    if values.len() != BOARD_SIZE {
        return Err(SaveError::InvalidRow {
            line: line_number,
            content: line.to_string(),
        });
    }

    let mut row = [Mark::Empty; BOARD_SIZE];
    for (cell, value) in row.iter_mut().zip(values) {
        let mut chars = value.chars();
        *cell = match (chars.next(), chars.next()) {
            (Some(symbol), None) => Mark::from_symbol(symbol),
            _ => None,
        }
        .ok_or_else(|| SaveError::InvalidCell {
            line: line_number,
            value: value.to_string(),
        })?;
    }
    Ok(row)
}

fn labelled_value(line: &str) -> &str {
    line.split_once(':')
        .map(|(_, value)| value)
        .unwrap_or(line)
        .trim()
}

/// X moves first, so X leads O by zero or one, and the side to move follows
/// from that. Finished games are never saved.
fn validate(game: &SavedGame) -> Result<(), SaveError> {
    let x_count = count_marks(&game.board, Mark::X);
    let o_count = count_marks(&game.board, Mark::O);

    let expected_turn = if x_count == o_count {
        PlayerSlot::One
    } else if x_count == o_count + 1 {
        PlayerSlot::Two
    } else {
        return Err(SaveError::InconsistentBoard);
    };

    if game.player_turn != expected_turn
        || check_win(&game.board).is_some()
        || is_full(&game.board)
    {
        return Err(SaveError::InconsistentBoard);
    }

    Ok(())
}
