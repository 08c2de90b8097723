use serde::{Deserialize, Serialize};

use crate::geometry::{Axis, Dims};

/// One of the six axis-aligned placements of a box.
/// Each variant names which of the box's own axes ends up along the cavity's length, width and height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// (L, W, H): as measured
    Lwh,
    /// (L, H, W)
    Lhw,
    /// (W, L, H)
    Wlh,
    /// (W, H, L)
    Whl,
    /// (H, L, W)
    Hlw,
    /// (H, W, L)
    Hwl,
}

impl Orientation {
    /// All orientations, in the order in which they are tried.
    /// The first one that fits is the preferred one.
    pub const ALL: [Orientation; 6] = [
        Orientation::Lwh,
        Orientation::Lhw,
        Orientation::Wlh,
        Orientation::Whl,
        Orientation::Hlw,
        Orientation::Hwl,
    ];

    /// Source axes of the box, placed along the cavity's (length, width, height)
    pub fn axes(&self) -> [Axis; 3] {
        use Axis::*;
        match self {
            Orientation::Lwh => [Length, Width, Height],
            Orientation::Lhw => [Length, Height, Width],
            Orientation::Wlh => [Width, Length, Height],
            Orientation::Whl => [Width, Height, Length],
            Orientation::Hlw => [Height, Length, Width],
            Orientation::Hwl => [Height, Width, Length],
        }
    }

    /// Position of `self` in [`Orientation::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the dimensions of `dims` when placed in this orientation.
    pub fn apply(&self, dims: &Dims) -> Dims {
        let [l, w, h] = self.axes().map(|axis| dims.get(axis));
        Dims::new(l, w, h)
    }
}
