use super::types::{BOARD_SIZE, Mark, Position};

pub type Board = [[Mark; BOARD_SIZE]; BOARD_SIZE];

pub fn empty_board() -> Board {
    [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE]
}

/// Empty cells in row-major order.
pub fn get_available_moves(board: &Board) -> Vec<Position> {
    let mut moves = Vec::new();
    for (row, cells) in board.iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(Position::new(row, col));
            }
        }
    }
    moves
}

pub fn is_valid_move(board: &Board, position: Position) -> bool {
    position.is_on_board() && board[position.row][position.col] == Mark::Empty
}

pub fn count_marks(board: &Board, mark: Mark) -> usize {
    board
        .iter()
        .flat_map(|row| row.iter())
        .filter(|&&cell| cell == mark)
        .count()
}
