use crate::board::{BOARD_SIZE, Board};
use crate::types::{GameStatus, Mark, Position};

/// Mutable state of one game as the driver sees it. Turn alternation is the
/// driver's responsibility; this type only rejects structurally invalid
/// moves and tracks the terminal transition.
#[derive(Debug)]
pub struct GameState {
    board: Board,
    status: GameStatus,
    last_move: Option<Position>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn place_mark(&mut self, mark: Mark, pos: Position) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if mark == Mark::Empty {
            return Err("Cannot place an empty mark".to_string());
        }

        if pos.row >= BOARD_SIZE || pos.col >= BOARD_SIZE {
            return Err("Position out of bounds".to_string());
        }

        if self.board.get(pos) != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board.set(pos, mark);
        self.last_move = Some(pos);
        self.check_game_over(mark);

        Ok(())
    }

    fn check_game_over(&mut self, mark: Mark) {
        if self.board.wins(mark) {
            self.status = match mark {
                Mark::Human => GameStatus::HumanWon,
                Mark::Machine => GameStatus::MachineWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
