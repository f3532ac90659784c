mod board;
mod bot_controller;
mod game_state;
mod lines;
mod settings;
mod types;
mod view;
mod widget;
mod win_detector;

pub use board::{Board, Cell};
pub use bot_controller::{
    CENTER_BONUS, CORNER_BONUS, ScoreMap, best_cells, calculate_move, calculate_opening_move,
    line_score, positional_bonus, score_cells,
};
pub use game_state::TicTacToeGameState;
pub use lines::{Line, LineKind, all_lines};
pub use settings::{MAX_SIDE_SIZE, MIN_SIDE_SIZE, TicTacToeOptions, TicTacToeSettings};
pub use types::{GameStatus, Mark, Player, Position};
pub use view::render_board;
pub use widget::TicTacToeWidget;
pub use win_detector::{Endgame, check_win, check_win_with_line, detect_endgame};
