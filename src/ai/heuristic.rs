use serde::{Deserialize, Serialize};

use crate::game::{Board, Player, COLS, ROWS};

/// Points per own piece in the center column.
pub const CENTER_WEIGHT: i32 = 3;

/// Column counted by the center heuristics.
pub const CENTER_COL: usize = COLS / 2;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i32;

    fn name(&self) -> &'static str;
}

/// Baseline evaluation: own pieces in the center column times
/// [`CENTER_WEIGHT`]. The opponent's pieces are not counted.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterColumnHeuristic;

impl Heuristic for CenterColumnHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        board.count_in_column(CENTER_COL, player.to_cell()) as i32 * CENTER_WEIGHT
    }

    fn name(&self) -> &'static str {
        "center"
    }
}

/// Stronger evaluation: symmetric center bonus plus a score for every
/// 4-cell window holding open threats for either side.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl WindowHeuristic {
    fn score_window(own: usize, opp: usize, empty: usize) -> i32 {
        match (own, opp, empty) {
            (3, _, 1) => 50,
            (2, _, 2) => 10,
            (_, 3, 1) => -80,
            (_, 2, 2) => -10,
            _ => 0,
        }
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();

        let mut score = (board.count_in_column(CENTER_COL, own_cell) as i32
            - board.count_in_column(CENTER_COL, opp_cell) as i32)
            * CENTER_WEIGHT;

        // (start row, start col, row step, col step) over every window
        let horizontal =
            (0..ROWS).flat_map(|r| (0..COLS - 3).map(move |c| (r, c, 0isize, 1isize)));
        let vertical =
            (0..ROWS - 3).flat_map(|r| (0..COLS).map(move |c| (r, c, 1isize, 0isize)));
        let diag_down =
            (0..ROWS - 3).flat_map(|r| (0..COLS - 3).map(move |c| (r, c, 1isize, 1isize)));
        let diag_up =
            (3..ROWS).flat_map(|r| (0..COLS - 3).map(move |c| (r, c, -1isize, 1isize)));

        let windows = horizontal.chain(vertical).chain(diag_down).chain(diag_up);
        for (row, col, dr, dc) in windows {
            let (mut own, mut opp, mut empty) = (0, 0, 0);
            for i in 0..4isize {
                let r = (row as isize + dr * i) as usize;
                let c = (col as isize + dc * i) as usize;
                match board.get(r, c) {
                    cell if cell == own_cell => own += 1,
                    cell if cell == opp_cell => opp += 1,
                    _ => empty += 1,
                }
            }
            score += Self::score_window(own, opp, empty);
        }

        score
    }

    fn name(&self) -> &'static str {
        "window"
    }
}

/// Configurable choice of evaluation function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeuristicKind {
    #[default]
    Center,
    Window,
}

impl HeuristicKind {
    pub fn build(self) -> Box<dyn Heuristic> {
        match self {
            HeuristicKind::Center => Box::new(CenterColumnHeuristic),
            HeuristicKind::Window => Box::new(WindowHeuristic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn center_empty_board_is_zero() {
        let board = Board::new();
        assert_eq!(CenterColumnHeuristic.evaluate(&board, Player::Red), 0);
        assert_eq!(CenterColumnHeuristic.evaluate(&board, Player::Yellow), 0);
    }

    #[test]
    fn center_counts_only_own_pieces_in_column_three() {
        let mut board = Board::new();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Red).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Yellow).unwrap();

        assert_eq!(CenterColumnHeuristic.evaluate(&board, Player::Yellow), 6);
        assert_eq!(CenterColumnHeuristic.evaluate(&board, Player::Red), 3);
    }

    #[test]
    fn window_empty_board_is_zero() {
        let board = Board::new();
        assert_eq!(WindowHeuristic.evaluate(&board, Player::Red), 0);
        assert_eq!(WindowHeuristic.evaluate(&board, Player::Yellow), 0);
    }

    #[test]
    fn window_center_preference() {
        let mut board_center = Board::new();
        board_center.drop_piece(3, Cell::Red).unwrap();
        let mut board_edge = Board::new();
        board_edge.drop_piece(0, Cell::Red).unwrap();

        let score_center = WindowHeuristic.evaluate(&board_center, Player::Red);
        let score_edge = WindowHeuristic.evaluate(&board_edge, Player::Red);
        assert!(
            score_center > score_edge,
            "Center ({score_center}) should score higher than edge ({score_edge})"
        );
    }

    #[test]
    fn window_three_in_a_row_scores_high() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::Red).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();
        board.drop_piece(2, Cell::Red).unwrap();
        let score = WindowHeuristic.evaluate(&board, Player::Red);
        assert!(score > 40, "3-in-a-row should score high, got {score}");
        assert!(WindowHeuristic.evaluate(&board, Player::Yellow) < 0);
    }

    #[test]
    fn kind_builds_matching_heuristic() {
        assert_eq!(HeuristicKind::Center.build().name(), "center");
        assert_eq!(HeuristicKind::Window.build().name(), "window");
        assert_eq!(HeuristicKind::default(), HeuristicKind::Center);
    }
}
