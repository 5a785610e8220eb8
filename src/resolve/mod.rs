//! Capture resolution.
//!
//! Computes, for a candidate move, which opponent discs would be flipped.

pub mod capture;

pub use capture::{
    capture_count, captures, captures_at, is_legal, run_in_direction, Captures, Run,
};
