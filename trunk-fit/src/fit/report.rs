use serde::{Deserialize, Serialize};

use crate::fit::Placement;
use crate::geometry::Dims;

/// An orientation of the item that fits, with the instruction to get it there
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FittingOrientation {
    /// Item dimensions along the trunk's (length, width, height)
    pub dims: Dims,
    pub placement: Placement,
}

/// Outcome of testing one item against one trunk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    pub fits: bool,
    /// All orientations that fit, in enumeration order
    pub orientations: Vec<FittingOrientation>,
    /// Placement of the first orientation that fits
    pub best_option: Option<Placement>,
}

impl FitReport {
    pub fn new(orientations: Vec<FittingOrientation>) -> Self {
        FitReport {
            fits: !orientations.is_empty(),
            best_option: orientations.first().map(|fo| fo.placement),
            orientations,
        }
    }

    pub fn total_orientations(&self) -> usize {
        self.orientations.len()
    }

    /// Placements of all fitting orientations except the best one
    pub fn alternatives(&self) -> impl Iterator<Item = Placement> + '_ {
        self.orientations.iter().skip(1).map(|fo| fo.placement)
    }

    /// One-line summary of the report
    pub fn message(&self) -> String {
        match (self.fits, self.total_orientations()) {
            (false, _) => "The item won't fit in your trunk in any position.".to_string(),
            (true, 1) => "The item will fit in your trunk!".to_string(),
            (true, n) => format!("The item will fit in your trunk! ({n} possible positions)"),
        }
    }
}
