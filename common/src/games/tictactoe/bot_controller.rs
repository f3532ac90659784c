use std::collections::HashMap;

use crate::error::BotError;
use crate::games::SessionRng;
use super::board::Board;
use super::lines::all_lines;
use super::types::Position;

pub const CORNER_BONUS: i32 = 5;
pub const CENTER_BONUS: i32 = 2;

/// Line interest, indexed `[player_count][bot_count]`. Anything outside the
/// table (mixed lines beyond it, boards larger than 3) scores 0.
const LINE_SCORES: [&[i32]; 4] = [
    &[2, 0, 20, 0], // open line, bot builds towards a win
    &[5, 0, 0],     // one player mark
    &[30, 0],       // two player marks, block
    &[0],           // full player line
];

pub type ScoreMap = HashMap<Position, i32>;

pub fn line_score(bot_count: usize, player_count: usize) -> i32 {
    LINE_SCORES
        .get(player_count)
        .and_then(|row| row.get(bot_count))
        .copied()
        .unwrap_or(0)
}

/// The corner test only ever fires for `(0, 0)`: `y == size` is never true on
/// the board. Kept as is, the heuristic table is tuned around it.
pub fn positional_bonus(size: usize, pos: Position) -> i32 {
    let Position { x, y } = pos;
    if (x == 0 || y == size) && (y == 0 || y == size) {
        CORNER_BONUS
    } else if size % 2 != 0 && x == (size - 1) / 2 && y == (size - 1) / 2 {
        CENTER_BONUS
    } else {
        0
    }
}

/// Scores every empty cell from the bot's point of view. Occupied cells are
/// absent from the map. The board is not touched.
pub fn score_cells(board: &Board) -> ScoreMap {
    let size = board.size();
    let mut scores: ScoreMap = board
        .available_moves()
        .into_iter()
        .map(|pos| (pos, positional_bonus(size, pos)))
        .collect();

    for line in all_lines(board) {
        let (player_count, bot_count) = line.occupancy(board);
        let score = line_score(bot_count, player_count);
        for pos in line.positions() {
            if let Some(cell_score) = scores.get_mut(pos) {
                *cell_score += score;
            }
        }
    }

    scores
}

/// Empty cells sharing the highest score, in board order.
pub fn best_cells(board: &Board, scores: &ScoreMap) -> Vec<Position> {
    let Some(best) = scores.values().copied().max() else {
        return Vec::new();
    };
    board
        .available_moves()
        .into_iter()
        .filter(|pos| scores.get(pos) == Some(&best))
        .collect()
}

pub fn calculate_move(board: &Board, rng: &mut SessionRng) -> Result<Position, BotError> {
    let scores = score_cells(board);
    let candidates = best_cells(board, &scores);
    if candidates.is_empty() {
        return Err(BotError::NoPlayableCell);
    }
    Ok(candidates[rng.random_range(0..candidates.len())])
}

/// First move of a round the bot opens: any cell, no heuristic.
pub fn calculate_opening_move(size: usize, rng: &mut SessionRng) -> Position {
    Position::new(rng.random_range(0..size), rng.random_range(0..size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;
    use Mark::{Empty as E, PlayerOne as P, PlayerTwo as B};

    #[test]
    fn test_line_score_table() {
        assert_eq!(line_score(0, 0), 2);
        assert_eq!(line_score(1, 0), 0);
        assert_eq!(line_score(2, 0), 20);
        assert_eq!(line_score(0, 1), 5);
        assert_eq!(line_score(0, 2), 30);
        assert_eq!(line_score(1, 1), 0);
        assert_eq!(line_score(2, 1), 0);
        assert_eq!(line_score(1, 2), 0);
        assert_eq!(line_score(0, 3), 0);
        assert_eq!(line_score(3, 0), 0);
        assert_eq!(line_score(0, 4), 0);
        assert_eq!(line_score(5, 0), 0);
    }

    #[test]
    fn test_positional_bonus_is_literal() {
        assert_eq!(positional_bonus(3, Position::new(0, 0)), CORNER_BONUS);
        assert_eq!(positional_bonus(3, Position::new(2, 0)), 0);
        assert_eq!(positional_bonus(3, Position::new(0, 2)), 0);
        assert_eq!(positional_bonus(3, Position::new(2, 2)), 0);
        assert_eq!(positional_bonus(3, Position::new(1, 1)), CENTER_BONUS);
        assert_eq!(positional_bonus(4, Position::new(1, 1)), 0);
        assert_eq!(positional_bonus(5, Position::new(2, 2)), CENTER_BONUS);
    }

    #[test]
    fn test_empty_board_scores() {
        let scores = score_cells(&Board::new(3));
        assert_eq!(scores.len(), 9);
        assert_eq!(scores[&Position::new(0, 0)], 5 + 3 * 2);
        assert_eq!(scores[&Position::new(1, 1)], 2 + 4 * 2);
        assert_eq!(scores[&Position::new(2, 2)], 3 * 2);
        assert_eq!(scores[&Position::new(1, 0)], 2 * 2);
    }

    #[test]
    fn test_occupied_cells_are_not_scored() {
        let board = Board::from_marks(&[vec![P, E, E], vec![E, B, E], vec![E, E, E]]);
        let scores = score_cells(&board);
        assert_eq!(scores.len(), 7);
        assert!(!scores.contains_key(&Position::new(0, 0)));
        assert!(!scores.contains_key(&Position::new(1, 1)));
    }

    #[test]
    fn test_scoring_does_not_touch_board() {
        let board = Board::from_marks(&[vec![P, P, E], vec![B, E, E], vec![E, E, E]]);
        let before = board.clone();
        let _ = score_cells(&board);
        assert_eq!(board, before);
    }

    #[test]
    fn test_block_outranks_own_line() {
        let board = Board::from_marks(&[vec![P, P, E], vec![B, B, E], vec![E, E, E]]);
        let scores = score_cells(&board);
        assert_eq!(scores[&Position::new(2, 0)], 32);
        assert_eq!(scores[&Position::new(2, 1)], 22);
        assert_eq!(scores[&Position::new(2, 2)], 4);

        let mut rng = SessionRng::new(7);
        for _ in 0..20 {
            assert_eq!(calculate_move(&board, &mut rng), Ok(Position::new(2, 0)));
        }
    }

    #[test]
    fn test_bot_completes_its_line_when_nothing_to_block() {
        let board = Board::from_marks(&[vec![B, B, E], vec![P, E, E], vec![E, P, E]]);
        let mut rng = SessionRng::new(1);
        assert_eq!(calculate_move(&board, &mut rng), Ok(Position::new(2, 0)));
    }

    #[test]
    fn test_ties_are_broken_at_random() {
        let board = Board::from_marks(&[vec![B, E, E], vec![E, P, E], vec![E, E, E]]);
        let scores = score_cells(&board);
        let candidates = best_cells(&board, &scores);
        assert!(candidates.len() > 1);

        let mut rng = SessionRng::new(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let pos = calculate_move(&board, &mut rng).unwrap();
            assert!(candidates.contains(&pos));
            seen.insert(pos);
        }
        assert_eq!(seen.len(), candidates.len());
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_marks(&[vec![P, B, P], vec![P, B, B], vec![B, P, P]]);
        let mut rng = SessionRng::new(3);
        assert_eq!(calculate_move(&board, &mut rng), Err(BotError::NoPlayableCell));
    }

    #[test]
    fn test_opening_move_is_uniform() {
        let mut rng = SessionRng::new(2024);
        let mut counts = [[0usize; 3]; 3];
        let runs = 9_000;
        for _ in 0..runs {
            let pos = calculate_opening_move(3, &mut rng);
            counts[pos.y][pos.x] += 1;
        }
        for row in counts {
            for count in row {
                assert!((800..=1200).contains(&count), "skewed count {}", count);
            }
        }
    }
}
