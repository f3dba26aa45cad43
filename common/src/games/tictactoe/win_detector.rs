use super::{CELL_COUNT, Mark};

pub type WinLine = [usize; 3];

/// Rows, then columns, then diagonals. Move selection depends on this order.
pub static WIN_LINES: [WinLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn line_sum(cells: &[Mark; CELL_COUNT], line: &WinLine) -> i32 {
    line.iter().map(|&index| cells[index].code()).sum()
}

pub fn is_win(cells: &[Mark; CELL_COUNT], mark: Mark) -> bool {
    if mark.is_empty() {
        return false;
    }

    let target = mark.code() * 3;
    WIN_LINES.iter().any(|line| line_sum(cells, line) == target)
}

/// Full board. Callers check for a win first.
pub fn is_tied(cells: &[Mark; CELL_COUNT]) -> bool {
    cells.iter().all(|mark| !mark.is_empty())
}

/// Cell that completes a line for `mark`: the first line holding two of its cells and one empty.
pub fn winning_move(cells: &[Mark; CELL_COUNT], mark: Mark) -> Option<usize> {
    if mark.is_empty() {
        return None;
    }

    let target = mark.code() * 2;
    WIN_LINES
        .iter()
        .find(|line| line_sum(cells, line) == target)
        .map(|&[first, second, third]| {
            if cells[first].is_empty() {
                first
            } else if cells[second].is_empty() {
                second
            } else {
                third
            }
        })
}
