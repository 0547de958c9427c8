mod board;
mod bot;
mod game_state;
mod session_rng;
mod types;

pub use board::{BOARD_SIZE, Board, LINES};
pub use bot::{SearchResult, choose_move, evaluate, minimax};
pub use game_state::GameState;
pub use session_rng::SessionRng;
pub use types::{GameStatus, Mark, Position};
