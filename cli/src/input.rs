use common::games::tictactoe::{Board, Position, is_valid_move};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input. Enter a number between 1 and 9.")]
    NotANumber,
    #[error("Invalid input. Enter a number between 1 and 9.")]
    OutOfRange,
    #[error("Cell already taken. Try again.")]
    CellTaken,
}

/// Parses a keypad cell number (1-9) into a free position on `board`.
pub fn parse_move(input: &str, board: &Board) -> Result<Position, InputError> {
    let number: usize = input.trim().parse().map_err(|_| InputError::NotANumber)?;
    let position = Position::from_cell_number(number).ok_or(InputError::OutOfRange)?;
    if !is_valid_move(board, position) {
        return Err(InputError::CellTaken);
    }
    Ok(position)
}

pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::{Mark, empty_board};

    #[test]
    fn test_parse_move_maps_numbers_to_cells() {
        let board = empty_board();

        assert_eq!(parse_move("1", &board), Ok(Position::new(0, 0)));
        assert_eq!(parse_move(" 6\n", &board), Ok(Position::new(1, 2)));
        assert_eq!(parse_move("9", &board), Ok(Position::new(2, 2)));
    }

    #[test]
    fn test_parse_move_rejects_garbage() {
        let board = empty_board();

        assert_eq!(parse_move("five", &board), Err(InputError::NotANumber));
        assert_eq!(parse_move("", &board), Err(InputError::NotANumber));
        assert_eq!(parse_move("-1", &board), Err(InputError::NotANumber));
    }

    #[test]
    fn test_parse_move_rejects_out_of_range() {
        let board = empty_board();

        assert_eq!(parse_move("0", &board), Err(InputError::OutOfRange));
        assert_eq!(parse_move("10", &board), Err(InputError::OutOfRange));
    }

    #[test]
    fn test_parse_move_rejects_taken_cell() {
        let mut board = empty_board();
        board[1][1] = Mark::O;

        assert_eq!(parse_move("5", &board), Err(InputError::CellTaken));
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y"));
        assert!(is_yes(" Y \n"));
        assert!(!is_yes("yes"));
        assert!(!is_yes("n"));
    }
}
