use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::geometry::{Dims, Orientation};

/// Plain-language instruction on how to put an item in the trunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    AsMeasured,
    OnItsSide,
    RotatedHorizontally,
    RotatedOnItsSide,
    UprightRotated,
    Upright,
    /// The candidate could not be traced back to one of the six orientations
    Alternative,
}

impl Placement {
    pub fn instruction(&self) -> &'static str {
        match self {
            Placement::AsMeasured => "Place the item normally (as measured)",
            Placement::OnItsSide => "Lay the item on its side",
            Placement::RotatedHorizontally => "Rotate the item 90° horizontally",
            Placement::RotatedOnItsSide => "Rotate 90° horizontally and lay on its side",
            Placement::UprightRotated => "Stand the item upright and rotate 90°",
            Placement::Upright => "Stand the item upright",
            Placement::Alternative => "Alternative orientation possible",
        }
    }
}

impl From<Orientation> for Placement {
    fn from(o: Orientation) -> Self {
        match o {
            Orientation::Lwh => Placement::AsMeasured,
            Orientation::Lhw => Placement::OnItsSide,
            Orientation::Wlh => Placement::RotatedHorizontally,
            Orientation::Whl => Placement::RotatedOnItsSide,
            Orientation::Hlw => Placement::UprightRotated,
            Orientation::Hwl => Placement::Upright,
        }
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.instruction())
    }
}

/// Describes how to turn an item measured as `original` so it ends up as `candidate`.
///
/// Candidates are matched by value against the orientations in enumeration order.
/// When the item has equal dimensions several orientations produce the same values and the earliest one wins,
/// e.g. every orientation of a cube is described as [`Placement::AsMeasured`].
pub fn describe(original: &Dims, candidate: &Dims) -> Placement {
    Orientation::ALL
        .into_iter()
        .find(|o| o.apply(original) == *candidate)
        .map_or(Placement::Alternative, Placement::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const ITEM: Dims = Dims::new(10.0, 20.0, 30.0);

    #[test_case(Dims::new(10.0, 20.0, 30.0), "Place the item normally (as measured)")]
    #[test_case(Dims::new(10.0, 30.0, 20.0), "Lay the item on its side")]
    #[test_case(Dims::new(20.0, 10.0, 30.0), "Rotate the item 90° horizontally")]
    #[test_case(Dims::new(20.0, 30.0, 10.0), "Rotate 90° horizontally and lay on its side")]
    #[test_case(Dims::new(30.0, 10.0, 20.0), "Stand the item upright and rotate 90°")]
    #[test_case(Dims::new(30.0, 20.0, 10.0), "Stand the item upright")]
    fn distinct_dimensions(candidate: Dims, expected: &str) {
        assert_eq!(describe(&ITEM, &candidate).to_string(), expected);
    }

    #[test]
    fn not_a_permutation_falls_back() {
        let candidate = Dims::new(10.0, 20.0, 31.0);
        assert_eq!(describe(&ITEM, &candidate), Placement::Alternative);
        assert_eq!(
            describe(&ITEM, &candidate).to_string(),
            "Alternative orientation possible"
        );
    }

    #[test]
    fn nan_falls_back() {
        let item = Dims::new(f64::NAN, 1.0, 2.0);
        assert_eq!(describe(&item, &item), Placement::Alternative);
    }

    // (10, 10, 20): L and W are interchangeable, the earliest matching orientation wins
    #[test_case(Orientation::Lwh, Placement::AsMeasured)]
    #[test_case(Orientation::Lhw, Placement::OnItsSide)]
    #[test_case(Orientation::Wlh, Placement::AsMeasured)]
    #[test_case(Orientation::Whl, Placement::OnItsSide)]
    #[test_case(Orientation::Hlw, Placement::UprightRotated)]
    #[test_case(Orientation::Hwl, Placement::UprightRotated)]
    fn duplicate_dimensions(orientation: Orientation, expected: Placement) {
        let item = Dims::new(10.0, 10.0, 20.0);
        assert_eq!(describe(&item, &orientation.apply(&item)), expected);
    }

    #[test]
    fn distinct_dimensions_map_one_to_one() {
        for o in Orientation::ALL {
            assert_eq!(describe(&ITEM, &o.apply(&ITEM)), Placement::from(o));
        }
    }
}
