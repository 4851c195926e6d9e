//! Chess pieces, the board they stand on and the way they move.

pub mod board;
pub mod core;
pub mod movegen;
