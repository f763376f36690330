//! Core Connect Four board: grid mutation with rollback, legality and
//! win/draw detection. Knows nothing about players or turn order.

mod board;

pub use board::{Board, BoardError, GameStatus, Mark, Move, COLS, ROWS};
