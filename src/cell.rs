/// A stone colour, in the order the two sides are evaluated.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, strum::VariantArray, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Colour {
    /// Must link the left edge of the board to the right edge.
    Black,
    /// Must link the top edge of the board to the bottom edge.
    White,
}

/// One cell of the board: its occupant, frozen at parse time, plus one
/// "linked back to its colour's start edge" flag per colour.
///
/// The two linked flags are independent; tracing one colour's chains never
/// touches the other's flag.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Cell {
    pub(crate) stone: Option<Colour>,
    linked_black: bool,
    linked_white: bool,
}

impl Cell {
    pub(crate) fn with_stone(stone: Option<Colour>) -> Self {
        Self { stone, ..Self::default() }
    }

    pub(crate) fn is_linked(&self, colour: Colour) -> bool {
        match colour {
            Colour::Black => self.linked_black,
            Colour::White => self.linked_white,
        }
    }

    /// Irreversible; the linked flags double as the search's visited set.
    pub(crate) fn mark_linked(&mut self, colour: Colour) {
        match colour {
            Colour::Black => self.linked_black = true,
            Colour::White => self.linked_white = true,
        }
    }

    /// The dump glyph for this cell: `.` when empty, `x`/`o` for an unlinked
    /// stone, uppercased once its colour's search has linked it.
    pub(crate) fn render(&self) -> char {
        match self.stone {
            None => '.',
            Some(colour) => {
                let glyph = match colour {
                    Colour::Black => 'x',
                    Colour::White => 'o',
                };
                match self.is_linked(colour) {
                    true => glyph.to_ascii_uppercase(),
                    false => glyph,
                }
            }
        }
    }
}
