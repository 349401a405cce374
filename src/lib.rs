#![warn(missing_docs)]

//! # `wurtzite`
//!
//! Winner detection for finished games of [Hex](https://en.wikipedia.org/wiki/Hex_(board_game)).
//! Parse a textual grid into a [`Board`] with [`Board::parse`], then consume it with
//! [`winner()`](Board::winner), or do both at once with [`winner_of()`].
//! Black wins by linking the left edge of the rhombus to the right edge with an unbroken
//! chain of its stones; white wins by linking the top edge to the bottom edge.
//! A finished legal board links exactly one side, so at most one winner is ever reported.
//!
//! # Internals
//! The board is a rhombus of hexagonal cells addressed on square-grid axes; a cell at
//! `(x, y)` touches up to six neighbours, at offsets `(±1, 0)`, `(0, ±1)`, `(-1, +1)` and
//! `(+1, -1)`.
//! For each side in turn (black first, an observable contract), the crate runs a
//! depth-first walk from every cell on that side's start edge, over that side's stones
//! only, marking each reached cell as linked.
//! The marks are never cleared and double as the visited set, so rings of stones cannot
//! send the walk in circles and the whole evaluation is bounded by the cell count.
//! The walk keeps an explicit worklist rather than recursing, so call-stack depth is
//! constant regardless of board size.

pub use board::{winner_of, Board, Glyphs, ParseBoardError};
pub use cell::Colour;

pub(crate) mod board;
mod tests;
pub(crate) mod cell;
pub(crate) mod location;
pub(crate) mod orientation;
pub(crate) mod shape;
