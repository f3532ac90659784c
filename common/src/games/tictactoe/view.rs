use super::board::Board;
use super::settings::TicTacToeOptions;

/// Text rendering of the board. Cells on the winning line are bracketed.
pub fn render_board(board: &Board, options: &TicTacToeOptions) -> String {
    let size = board.size();
    let mut out = String::new();

    out.push_str("   ");
    let header: Vec<String> = (0..size).map(|x| format!("{:^3}", x)).collect();
    out.push_str(&header.join(" "));
    out.push('\n');

    for (y, row) in board.rows().iter().enumerate() {
        if y > 0 {
            out.push_str("   ");
            out.push_str(&vec!["---"; size].join("+"));
            out.push('\n');
        }
        let cells: Vec<String> = row
            .iter()
            .map(|cell| {
                let symbol = options.symbol(cell.value);
                if cell.in_winning_line {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        out.push_str(&format!("{:>2} ", y));
        out.push_str(&cells.join("|"));
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;
    use Mark::{Empty as E, PlayerOne as P, PlayerTwo as B};

    #[test]
    fn test_render_empty_board() {
        let rendered = render_board(&Board::new(2), &TicTacToeOptions::default());
        assert_eq!(rendered, "    0   1 \n 0    |   \n   ---+---\n 1    |   \n");
    }

    #[test]
    fn test_render_uses_symbols() {
        let board = Board::from_marks(&[vec![P, B], vec![E, E]]);
        let rendered = render_board(&board, &TicTacToeOptions::default());
        assert!(rendered.contains(" 0  O | X \n"));
    }

    #[test]
    fn test_render_brackets_winning_cells() {
        let mut board = Board::from_marks(&[vec![P, P, P], vec![B, B, E], vec![E, E, E]]);
        let line = crate::games::tictactoe::all_lines(&board).remove(0);
        board.mark_winning(&line);
        let rendered = render_board(&board, &TicTacToeOptions::default());
        assert!(rendered.contains(" 0 [O]|[O]|[O]\n"));
        assert!(rendered.contains(" 1  X | X |   \n"));
    }
}
