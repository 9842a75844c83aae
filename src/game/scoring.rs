//! Chain scoring and the single-cell queries the opponent heuristic is built on.
//!
//! Only horizontal and vertical lines count. Diagonals are never considered.

use super::board::{Board, Cell, SIZE};
use super::player::Player;

/// Run length at which a hypothetical placement counts as a threat.
pub const WINNING_RUN: usize = 4;

/// Points for a chain of `length` cells.
pub fn chain_score(length: usize) -> u32 {
    match length {
        3 => 3,
        4 => 10,
        5 => 25,
        6 => 56,
        7 => 119,
        _ => 0,
    }
}

/// Longest run of `target` in a line. Each run is measured once from its
/// first cell, then the scan jumps past it.
fn longest_run(line: &[Cell], target: Cell) -> usize {
    let mut longest = 0;
    let mut i = 0;
    while i < line.len() {
        if line[i] != target {
            i += 1;
            continue;
        }
        let length = line[i..].iter().take_while(|&&c| c == target).count();
        longest = longest.max(length);
        i += length;
    }
    longest
}

fn line_score(line: &[Cell], target: Cell) -> u32 {
    let longest = longest_run(line, target);
    if longest >= 3 {
        chain_score(longest)
    } else {
        0
    }
}

/// Score for `player` on the current board.
///
/// Each row and each column contributes the chain score of its single
/// longest run of `player` marks, so two separate triples in one row still
/// count once.
pub fn calculate_score(board: &Board, player: Player) -> u32 {
    let target = player.to_cell();
    let rows: u32 = (0..SIZE).map(|row| line_score(board.row(row), target)).sum();
    let cols: u32 = (0..SIZE)
        .map(|col| line_score(&board.column(col), target))
        .sum();
    rows + cols
}

/// Length of the horizontal run `player` would have through `(row, col)`,
/// counting that cell as theirs whatever it currently holds.
///
/// # Panics
///
/// Panics if `row` or `col` is not below [`SIZE`]. The same holds for
/// [`vertical_run`], [`position_score`] and [`potential_win`].
pub fn horizontal_run(board: &Board, row: usize, col: usize, player: Player) -> usize {
    debug_assert!(row < SIZE && col < SIZE, "cell ({row}, {col}) is off the board");
    let target = player.to_cell();
    let left = (0..col).rev().take_while(|&c| board.get(row, c) == target).count();
    let right = (col + 1..SIZE)
        .take_while(|&c| board.get(row, c) == target)
        .count();
    left + 1 + right
}

/// Vertical counterpart of [`horizontal_run`].
pub fn vertical_run(board: &Board, row: usize, col: usize, player: Player) -> usize {
    debug_assert!(row < SIZE && col < SIZE, "cell ({row}, {col}) is off the board");
    let target = player.to_cell();
    let up = (0..row).rev().take_while(|&r| board.get(r, col) == target).count();
    let down = (row + 1..SIZE)
        .take_while(|&r| board.get(r, col) == target)
        .count();
    up + 1 + down
}

/// How attractive `(row, col)` is for `player`: the longer of the two runs
/// the placement would form, or 0 if it touches no same-symbol cell on
/// either axis. Does not modify the board.
pub fn position_score(board: &Board, row: usize, col: usize, player: Player) -> u32 {
    let longest = horizontal_run(board, row, col, player)
        .max(vertical_run(board, row, col, player));
    if longest > 1 {
        longest as u32
    } else {
        0
    }
}

/// Whether `player` holding `(row, col)` gives a horizontal or vertical run
/// of at least four through it.
pub fn potential_win(board: &Board, row: usize, col: usize, player: Player) -> bool {
    horizontal_run(board, row, col, player) >= WINNING_RUN
        || vertical_run(board, row, col, player) >= WINNING_RUN
}
