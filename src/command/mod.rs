//! Command parsing for interactive front ends.
//!
//! Parsing is board-independent; directional moves are resolved against a
//! board with [`MoveRequest::destination`].

mod parse;

pub use parse::{Command, MoveRequest, Target};
