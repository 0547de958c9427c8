use crate::board::{BOARD_SIZE, Board};
use crate::session_rng::SessionRng;
use crate::types::{Mark, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub position: Option<Position>,
    pub score: i32,
}

/// +1 machine win, -1 human win, 0 otherwise.
pub fn evaluate(board: &Board) -> i32 {
    if board.wins(Mark::Machine) {
        1
    } else if board.wins(Mark::Human) {
        -1
    } else {
        0
    }
}

/// Exhaustive two-player search. `depth` is the number of remaining plies and
/// must match the count of empty cells so the search reaches the end of the
/// game. The board is mutated during exploration and restored before
/// returning.
pub fn minimax(board: &mut Board, depth: usize, player: Mark) -> SearchResult {
    let opponent = player
        .opponent()
        .expect("minimax player must be Human or Machine");

    if depth == 0 || board.game_over() {
        return SearchResult {
            position: None,
            score: evaluate(board),
        };
    }

    let mut best: Option<SearchResult> = None;
    for pos in board.empty_cells() {
        board.set(pos, player);
        let sub = minimax(board, depth - 1, opponent);
        board.set(pos, Mark::Empty);

        let candidate = SearchResult {
            position: Some(pos),
            score: sub.score,
        };
        // Strict comparison: ties keep the first candidate in row-major order.
        best = Some(match best {
            None => candidate,
            Some(current) if player == Mark::Machine && candidate.score > current.score => {
                candidate
            }
            Some(current) if player == Mark::Human && candidate.score < current.score => candidate,
            Some(current) => current,
        });
    }

    best.expect("depth is out of sync with the number of empty cells")
}

/// The machine's move for the given position, or `None` when the board is
/// full or already decided. The opening move on an empty board is drawn from
/// `rng` instead of searched: every opening holds at least a draw, so the
/// search result would carry no information.
pub fn choose_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let depth = board.empty_cells().len();
    if depth == 0 || board.game_over() {
        return None;
    }

    if depth == BOARD_SIZE * BOARD_SIZE {
        let row = rng.random_range(0..BOARD_SIZE);
        let col = rng.random_range(0..BOARD_SIZE);
        return Some(Position::new(row, col));
    }

    let mut scratch = *board;
    minimax(&mut scratch, depth, Mark::Machine).position
}
