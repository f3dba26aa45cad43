use super::win_detector::winning_move;
use super::{CELL_COUNT, Mark};

/// Heuristic move for `mark`: complete an own line, else block the opponent's.
/// `None` means no line is one move from completion and the caller should pick at random.
pub fn decide_move(cells: &[Mark; CELL_COUNT], mark: Mark) -> Option<usize> {
    winning_move(cells, mark).or_else(|| winning_move(cells, other_player(mark)))
}

/// Anything that is not `Positive` is answered with `Positive`.
pub fn other_player(mark: Mark) -> Mark {
    match mark {
        Mark::Positive => Mark::Negative,
        _ => Mark::Positive,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_heuristic_move() {
        let cells = [Mark::Empty; CELL_COUNT];
        assert_eq!(decide_move(&cells, Mark::Positive), None);
        assert_eq!(decide_move(&cells, Mark::Negative), None);
    }

    #[test]
    fn test_own_win_beats_block() {
        let mut cells = [Mark::Empty; CELL_COUNT];
        // Opponent threatens row (0,1,2), we threaten row (6,7,8).
        cells[0] = Mark::Negative;
        cells[1] = Mark::Negative;
        cells[6] = Mark::Positive;
        cells[7] = Mark::Positive;
        assert_eq!(decide_move(&cells, Mark::Positive), Some(8));
        assert_eq!(decide_move(&cells, Mark::Negative), Some(2));
    }

    #[test]
    fn test_blocks_opponent_when_no_own_win() {
        let mut cells = [Mark::Empty; CELL_COUNT];
        cells[2] = Mark::Negative;
        cells[4] = Mark::Negative;
        cells[0] = Mark::Positive;
        assert_eq!(decide_move(&cells, Mark::Positive), Some(6));
    }

    #[test]
    fn test_blocked_line_is_ignored() {
        let mut cells = [Mark::Empty; CELL_COUNT];
        cells[0] = Mark::Positive;
        cells[1] = Mark::Positive;
        cells[2] = Mark::Negative;
        assert_eq!(decide_move(&cells, Mark::Positive), None);
        assert_eq!(decide_move(&cells, Mark::Negative), None);
    }

    #[test]
    fn test_other_player() {
        assert_eq!(other_player(Mark::Positive), Mark::Negative);
        assert_eq!(other_player(Mark::Negative), Mark::Positive);
        assert_eq!(other_player(Mark::Empty), Mark::Positive);
    }
}
