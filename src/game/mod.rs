//! Game session tying a board to its history.
//!
//! A front end reads a line, hands it to [`GameSession::apply_str`], and turns
//! the returned [`Outcome`] into user-facing text. The session does no I/O.

mod session;

pub use session::{GameSession, Outcome};
