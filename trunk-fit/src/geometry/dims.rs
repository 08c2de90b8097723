use std::fmt::{Display, Formatter};

use anyhow::Result;
use anyhow::ensure;
use serde::{Deserialize, Serialize};

/// Size of an axis-aligned box: length, width and height in one consistent unit.
/// Describes either an item as measured or the usable cavity of a trunk.
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
pub struct Dims {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// One of the three axes of a [`Dims`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Length,
    Width,
    Height,
}

impl Dims {
    pub const fn new(length: f64, width: f64, height: f64) -> Self {
        Dims {
            length,
            width,
            height,
        }
    }

    /// Like [`Dims::new`], but rejects non-finite or negative values.
    pub fn try_new(length: f64, width: f64, height: f64) -> Result<Self> {
        for (axis, value) in [
            (Axis::Length, length),
            (Axis::Width, width),
            (Axis::Height, height),
        ] {
            ensure!(
                value.is_finite() && value >= 0.0,
                "invalid {axis}: {value}, dimensions must be finite and non-negative"
            );
        }
        Ok(Dims::new(length + 0.0, width + 0.0, height + 0.0))
    }

    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Length => self.length,
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }

    /// Returns true if a box of size `self`, placed as is, fits inside `cavity`.
    /// Touching the cavity walls counts as fitting.
    #[inline(always)]
    pub fn fits_within(&self, cavity: &Dims) -> bool {
        self.length <= cavity.length && self.width <= cavity.width && self.height <= cavity.height
    }
}

impl From<[f64; 3]> for Dims {
    fn from([length, width, height]: [f64; 3]) -> Self {
        Dims::new(length, width, height)
    }
}

impl From<Dims> for [f64; 3] {
    fn from(d: Dims) -> Self {
        [d.length, d.width, d.height]
    }
}

impl From<(f64, f64, f64)> for Dims {
    fn from((length, width, height): (f64, f64, f64)) -> Self {
        Dims::new(length, width, height)
    }
}

impl Display for Dims {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {} x {}", self.length, self.width, self.height)
    }
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Length, Axis::Width, Axis::Height];
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Axis::Length => "length",
            Axis::Width => "width",
            Axis::Height => "height",
        };
        f.write_str(name)
    }
}
