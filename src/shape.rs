use strum::VariantArray;

use crate::location::Location;

// NB: the rhombus is addressed on square-grid axes and sheared as y grows, so
// each cell touches two diagonal neighbours on top of the four cardinal ones:
// 0 1 2 3
//  0 1 2 3
//   0 1 2 3
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub(crate) enum HexStep {
    East,
    West,
    South,
    North,
    SouthWest,
    NorthEast,
}

impl HexStep {
    /// Attempt the step from `location` in the direction specified by `self` and
    /// return the resultant [`Location`].
    ///
    /// No bounds are checked here; a step off the top or left wraps and fails
    /// the cell lookup at the use site, same as a step past the far edges.
    pub(crate) fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::East => location.offset_by((1, 0)),
            Self::West => location.offset_by((-1, 0)),
            Self::South => location.offset_by((0, 1)),
            Self::North => location.offset_by((0, -1)),
            Self::SouthWest => location.offset_by((-1, 1)),
            Self::NorthEast => location.offset_by((1, -1)),
        }
    }

    /// All six neighbouring locations of `location`, in variant order.
    pub(crate) fn neighbours_of(location: Location) -> impl Iterator<Item = Location> {
        Self::VARIANTS.iter().map(move |dir| dir.attempt_from(location))
    }
}
