use std::fmt::{Display, Formatter};
use std::num::NonZero;

use itertools::Itertools;
use ndarray::Array2;
use strum::VariantArray;

use crate::cell::{Cell, Colour};
use crate::location::{Dimension, Location};
use crate::orientation::Orientation;
use crate::shape::HexStep;

/// Reasons input lines cannot become a [`Board`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseBoardError {
    /// No lines were given, so the board has no height.
    #[error("no lines given")]
    NoLines,
    /// The first line is empty, so the board has no width.
    #[error("first line is empty")]
    EmptyFirstLine,
}

/// The characters recognized as stones while parsing.
/// Any other character, including space, reads as an empty cell.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Glyphs {
    /// Black's stone character.
    pub black: char,
    /// White's stone character.
    pub white: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self { black: 'X', white: 'O' }
    }
}

impl Glyphs {
    fn stone_of(&self, c: char) -> Option<Colour> {
        if c == self.black {
            Some(Colour::Black)
        } else if c == self.white {
            Some(Colour::White)
        } else {
            None
        }
    }
}

/// A Hex position parsed from text, ready to be asked for its winner.
///
/// Build one with [`Board::parse`] or [`Board::parse_with`], then consume it
/// with [`Board::winner`]. The [`Display`] impl is a debugging dump and has no
/// bearing on the result.
pub struct Board {
    cells: Array2<Cell>,
    // width, height
    dims: (Dimension, Dimension),
}

impl Board {
    /// Parse `lines` into a board using the default [`Glyphs`], `'X'` for black
    /// and `'O'` for white.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Self, ParseBoardError> {
        Self::parse_with(Glyphs::default(), lines)
    }

    /// Parse `lines` into a board, reading stones per `glyphs`.
    ///
    /// The first line fixes the width. Rows shorter than the first are not an
    /// error; their missing cells read as empty. Characters beyond the width
    /// are ignored.
    pub fn parse_with<S: AsRef<str>>(glyphs: Glyphs, lines: &[S]) -> Result<Self, ParseBoardError> {
        let rows = lines.iter().map(|line| line.as_ref().chars().collect_vec()).collect_vec();
        let height = NonZero::new(rows.len()).ok_or(ParseBoardError::NoLines)?;
        let width = NonZero::new(rows[0].len()).ok_or(ParseBoardError::EmptyFirstLine)?;

        let cells = Array2::from_shape_fn((height.get(), width.get()), |ind| {
            let Location(x, y) = Location::from(ind);
            Cell::with_stone(rows[y].get(x).copied().and_then(|c| glyphs.stone_of(c)))
        });

        Ok(Self { cells, dims: (width, height) })
    }

    /// Evaluate this board and return the winning [`Colour`], or [`None`] for a
    /// board without a finished chain.
    ///
    /// Black's chains are traced first; when one links the left edge to the
    /// right edge, white's search does not run at all. A board is good for one
    /// evaluation, hence `self` is consumed.
    pub fn winner(mut self) -> Option<Colour> {
        Colour::VARIANTS.iter().copied().find(|colour| self.trace_chain(Orientation::from(*colour)))
    }

    /// Whether an unbroken chain of `orientation`'s stones links its start edge
    /// to its target edge.
    ///
    /// Every reached stone is marked linked for that colour; the marks double as
    /// the visited set, so rings of same-coloured stones cannot recur and the
    /// walk is bounded by the cell count.
    pub(crate) fn trace_chain(&mut self, orientation: Orientation) -> bool {
        orientation.start_coords(self.dims).into_iter().any(|start| self.walk_from(start, orientation))
    }

    // worklist in place of call recursion, so pathological boards cannot
    // overflow the stack
    fn walk_from(&mut self, start: Location, orientation: Orientation) -> bool {
        let colour = orientation.colour();
        let mut pending = vec![start];

        while let Some(location) = pending.pop() {
            let cell = match self.cells.get_mut(location.as_index()) {
                Some(cell) => cell,
                // stepped off the grid
                None => continue,
            };
            if cell.stone != Some(colour) || cell.is_linked(colour) {
                continue;
            }
            cell.mark_linked(colour);

            if orientation.is_target(self.dims, location) {
                return true;
            }
            pending.extend(HexStep::neighbours_of(location));
        }

        false
    }
}

impl Display for Board {
    /// Render the board one line per row, each indented by its row index to
    /// convey the hexagonal skew.
    ///
    /// Empty cells print as `.`; stones print as `x`/`o`, uppercased where a
    /// colour's own search has linked them.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.cells.rows().into_iter().enumerate() {
            writeln!(f, "{}{}", " ".repeat(y), row.iter().map(Cell::render).join(" "))?;
        }
        Ok(())
    }
}

/// Evaluate `lines` and return the winner, if any.
///
/// Shorthand for [`Board::parse`] followed by [`Board::winner`]. The winning
/// [`Colour`] displays as `"black"` or `"white"`.
pub fn winner_of<S: AsRef<str>>(lines: &[S]) -> Result<Option<Colour>, ParseBoardError> {
    Board::parse(lines).map(Board::winner)
}
