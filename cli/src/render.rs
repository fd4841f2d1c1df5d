use common::games::tictactoe::{BOARD_SIZE, Board, Mark, Position};
use crossterm::style::{Color, Stylize, style};

const ROW_SEPARATOR: &str = "---+---+---";

/// Terminal colours; plain text when disabled.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    colored: bool,
}

impl Palette {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.colored {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// The most recently played cell is underlined.
    pub fn mark(&self, mark: Mark, last_played: bool) -> String {
        let color = match mark {
            Mark::X => Color::Red,
            Mark::O => Color::Blue,
            Mark::Empty => Color::White,
        };
        if !self.colored {
            return mark.symbol().to_string();
        }
        let styled = style(mark.symbol()).with(color);
        if last_played {
            styled.underlined().to_string()
        } else {
            styled.to_string()
        }
    }

    pub fn board(&self, board: &Board, last_move: Option<Position>) -> String {
        let mut result = String::from("\nCurrent Board:\n");
        for (row_index, row) in board.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(col_index, &mark)| {
                    self.mark(mark, last_move == Some(Position::new(row_index, col_index)))
                })
                .collect();
            result.push(' ');
            result.push_str(&cells.join(" | "));
            result.push('\n');
            if row_index + 1 < BOARD_SIZE {
                result.push_str(ROW_SEPARATOR);
                result.push('\n');
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::empty_board;

    #[test]
    fn test_plain_board_layout() {
        let mut board = empty_board();
        board[0][0] = Mark::X;
        board[1][2] = Mark::O;

        let text = Palette::new(false).board(&board, Some(Position::new(1, 2)));

        assert_eq!(
            text,
            "\nCurrent Board:\n X | - | -\n---+---+---\n - | - | O\n---+---+---\n - | - | -\n"
        );
    }

    #[test]
    fn test_colored_marks_keep_symbols() {
        let palette = Palette::new(true);

        assert!(palette.mark(Mark::X, false).contains('X'));
        assert!(palette.mark(Mark::O, true).contains('O'));
        assert!(palette.mark(Mark::Empty, false).contains('-'));
    }

    #[test]
    fn test_last_move_is_underlined() {
        let mut board = empty_board();
        board[0][0] = Mark::X;
        board[1][1] = Mark::O;
        let palette = Palette::new(true);
        let underline = "\x1b[4m";

        let highlighted = palette.board(&board, Some(Position::new(1, 1)));
        let plain = palette.board(&board, None);

        assert_eq!(highlighted.matches(underline).count(), 1);
        assert!(!plain.contains(underline));
        assert_eq!(palette.mark(Mark::O, true).matches(underline).count(), 1);
    }
}
