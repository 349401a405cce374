use itertools::Itertools;

use crate::cell::Colour;
use crate::location::{Dimension, Location};

/// One side's winning condition: which stones its chain is made of, where the
/// chain may start, and which edge it must reach.
///
/// The two fixed instances come from [`Orientation::from`]: black links the
/// left column to the right column, white links the top row to the bottom row.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) struct Orientation {
    colour: Colour,
}

impl From<Colour> for Orientation {
    fn from(colour: Colour) -> Self {
        Self { colour }
    }
}

impl Orientation {
    pub(crate) fn colour(&self) -> Colour {
        self.colour
    }

    /// Every coordinate on this side's start edge, with `dims` in `(width,
    /// height)` order.
    pub(crate) fn start_coords(&self, dims: (Dimension, Dimension)) -> Vec<Location> {
        match self.colour {
            Colour::Black => (0..dims.1.get()).map(|y| Location(0, y)).collect_vec(),
            Colour::White => (0..dims.0.get()).map(|x| Location(x, 0)).collect_vec(),
        }
    }

    /// Whether `location` lies on this side's target edge.
    pub(crate) fn is_target(&self, dims: (Dimension, Dimension), location: Location) -> bool {
        match self.colour {
            Colour::Black => location.0 == dims.0.get() - 1,
            Colour::White => location.1 == dims.1.get() - 1,
        }
    }
}
