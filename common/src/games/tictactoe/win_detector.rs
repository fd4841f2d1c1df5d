use super::board::Board;
use super::types::{Mark, Position};

const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// True iff some row, column or diagonal is entirely `mark`.
pub fn has_won(board: &Board, mark: Mark) -> bool {
    winning_line(board, mark).is_some()
}

pub fn is_full(board: &Board) -> bool {
    board
        .iter()
        .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| has_won(board, mark))
}

/// First completed line for `mark`, as its end cells.
pub fn winning_line(board: &Board, mark: Mark) -> Option<(Position, Position)> {
    if mark == Mark::Empty {
        return None;
    }

    WINNING_LINES
        .iter()
        .find(|line| line.iter().all(|&(row, col)| board[row][col] == mark))
        .map(|line| {
            let (start_row, start_col) = line[0];
            let (end_row, end_col) = line[2];
            (
                Position::new(start_row, start_col),
                Position::new(end_row, end_col),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::empty_board;

    fn board_with_line(line: &[(usize, usize); 3], mark: Mark) -> Board {
        let mut board = empty_board();
        for &(row, col) in line {
            board[row][col] = mark;
        }
        board
    }

    #[test]
    fn test_every_line_is_detected_for_its_mark_only() {
        for line in &WINNING_LINES {
            for mark in [Mark::X, Mark::O] {
                let board = board_with_line(line, mark);
                let other = mark.opponent().unwrap();

                assert!(has_won(&board, mark), "line {:?} for {:?}", line, mark);
                assert!(!has_won(&board, other), "line {:?} for {:?}", line, other);
                assert_eq!(check_win(&board), Some(mark));
            }
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let mut board = empty_board();
        board[0][0] = Mark::X;
        board[0][1] = Mark::X;
        board[1][0] = Mark::O;

        assert!(!has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = [
            [Mark::X, Mark::O, Mark::X],
            [Mark::Empty, Mark::Empty, Mark::Empty],
            [Mark::Empty, Mark::Empty, Mark::Empty],
        ];

        assert!(!has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
    }

    #[test]
    fn test_empty_mark_never_wins() {
        assert!(!has_won(&empty_board(), Mark::Empty));
    }

    #[test]
    fn test_is_full() {
        let mut board = [
            [Mark::X, Mark::O, Mark::X],
            [Mark::X, Mark::O, Mark::O],
            [Mark::O, Mark::X, Mark::X],
        ];
        assert!(is_full(&board));

        board[1][1] = Mark::Empty;
        assert!(!is_full(&board));
        assert!(!is_full(&empty_board()));
    }

    #[test]
    fn test_full_board_without_line_is_not_a_win() {
        let board = [
            [Mark::X, Mark::O, Mark::X],
            [Mark::X, Mark::O, Mark::O],
            [Mark::O, Mark::X, Mark::X],
        ];

        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_winning_line_reports_diagonal_ends() {
        let board = board_with_line(&[(0, 2), (1, 1), (2, 0)], Mark::O);

        assert_eq!(
            winning_line(&board, Mark::O),
            Some((Position::new(0, 2), Position::new(2, 0)))
        );
    }
}
