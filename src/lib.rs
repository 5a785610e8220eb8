//! Reversi engine library.
//!
//! A two-player disc-flipping game on hexagonal or square boards. Exposes the
//! board representation, the capture resolver, move generation, the game
//! state machine, move-selection strategies, the text protocol, and the
//! self-play driver used by the binaries and integration tests.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod movegen;
pub mod observer;
pub mod protocol;
pub mod resolve;
pub mod selfplay;
pub mod strategy;
