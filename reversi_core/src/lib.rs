//! Reversi game core: board state, the flipping rules, and the computer
//! player's move evaluator. Front ends (rendering, input, delays) live
//! outside this crate and drive it through [`logic::game::GameSession`].

pub mod engine;
pub mod logic;
