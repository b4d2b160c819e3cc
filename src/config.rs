use crate::common::Mark;

/// Board edge length.
pub const BOARD_SIZE: usize = 3;
/// Total number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
/// Turn order at the start of a session. Reversed at each new round,
/// restored by a new game.
pub const DEFAULT_PLAYERS: [Mark; 2] = [Mark::X, Mark::O];
