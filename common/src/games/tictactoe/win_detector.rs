use super::board::Board;
use super::lines::{Line, all_lines};
use super::types::{Mark, Player};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endgame {
    Win { player: Player, line: Line },
    Draw,
}

/// First uniform, non-empty line in enumeration order.
pub fn check_win_with_line(board: &Board) -> Option<(Mark, Line)> {
    all_lines(board)
        .into_iter()
        .find_map(|line| line.owner(board).map(|mark| (mark, line)))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

/// A win is reported before a full board is considered, so a move that fills
/// the last cell and completes a line is a win, not a draw.
pub fn detect_endgame(board: &Board) -> Option<Endgame> {
    if let Some((mark, line)) = check_win_with_line(board)
        && let Some(player) = mark.player()
    {
        return Some(Endgame::Win { player, line });
    }

    if board.is_full() {
        return Some(Endgame::Draw);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{LineKind, Position};
    use Mark::{Empty as E, PlayerOne as P, PlayerTwo as B};

    #[test]
    fn test_empty_board_has_no_endgame() {
        assert_eq!(detect_endgame(&Board::new(3)), None);
    }

    #[test]
    fn test_row_win() {
        let board = Board::from_marks(&[vec![E, E, E], vec![B, B, B], vec![P, P, E]]);
        match detect_endgame(&board) {
            Some(Endgame::Win { player, line }) => {
                assert_eq!(player, Player::Bot);
                assert_eq!(line.kind(), LineKind::Row(1));
            }
            other => panic!("expected a win, got {:?}", other),
        }
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = Board::from_marks(&[vec![B, B, P], vec![E, P, E], vec![P, E, B]]);
        let (mark, line) = check_win_with_line(&board).unwrap();
        assert_eq!(mark, P);
        assert_eq!(line.kind(), LineKind::AntiDiagonal);
        assert!(line.contains(Position::new(0, 2)));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_marks(&[vec![P, B, P], vec![P, B, B], vec![B, P, P]]);
        assert_eq!(check_win(&board), None);
        assert_eq!(detect_endgame(&board), Some(Endgame::Draw));
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        let board = Board::from_marks(&[vec![P, B, P], vec![B, P, B], vec![B, P, P]]);
        assert!(board.is_full());
        assert!(matches!(
            detect_endgame(&board),
            Some(Endgame::Win { player: Player::Human, .. })
        ));
    }

    #[test]
    fn test_rows_are_scanned_before_columns() {
        let board = Board::from_marks(&[vec![P, P, P], vec![P, B, B], vec![P, B, E]]);
        let (_, line) = check_win_with_line(&board).unwrap();
        assert_eq!(line.kind(), LineKind::Row(0));
    }

    #[test]
    fn test_larger_board_needs_full_line() {
        let board = Board::from_marks(&[
            vec![P, P, P, E],
            vec![E, E, E, E],
            vec![E, E, E, E],
            vec![E, E, E, E],
        ]);
        assert_eq!(detect_endgame(&board), None);
    }
}
