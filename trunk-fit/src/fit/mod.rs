mod describe;
mod report;

#[doc(inline)]
pub use describe::Placement;
#[doc(inline)]
pub use describe::describe;
#[doc(inline)]
pub use report::FitReport;
#[doc(inline)]
pub use report::FittingOrientation;

use log::{debug, trace};

use crate::geometry::{Dims, Orientation};
use crate::parse::{InputError, ItemInput, parse_item};
use crate::util::assertions;

/// Tests `item` against `trunk` in every [`Orientation`], in enumeration order.
///
/// Never fails: an item with NaN dimensions simply does not fit in any orientation.
pub fn test_fit(item: Dims, trunk: Dims) -> FitReport {
    let orientations = Orientation::ALL
        .iter()
        .map(|o| o.apply(&item))
        .filter(|candidate| {
            let fits = candidate.fits_within(&trunk);
            trace!("[FIT] {candidate} in {trunk}: {fits}");
            fits
        })
        .map(|candidate| FittingOrientation {
            dims: candidate,
            placement: describe(&item, &candidate),
        })
        .collect::<Vec<_>>();

    debug_assert!(orientations.len() <= Orientation::ALL.len());
    debug_assert!(
        orientations
            .iter()
            .all(|fo| assertions::is_permutation_of(&fo.dims, &item))
    );

    let report = FitReport::new(orientations);
    debug!(
        "[FIT] item {item} in trunk {trunk}: {} orientation(s) fit",
        report.total_orientations()
    );
    report
}

/// Runs [`test_fit`] only once all input is available.
///
/// Returns `Ok(None)` when no trunk is selected or any of the item fields is still empty.
/// Fields that are filled in but not a valid dimension are reported as an [`InputError`].
pub fn check_fit(trunk: Option<Dims>, item: &ItemInput) -> Result<Option<FitReport>, InputError> {
    let Some(trunk) = trunk else {
        return Ok(None);
    };
    Ok(parse_item(item)?.map(|item| test_fit(item, trunk)))
}
