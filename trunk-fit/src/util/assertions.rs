//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

use itertools::Itertools;

use crate::catalog::Catalog;
use crate::geometry::Dims;

/// Returns true if `a` holds the same values as `b`, in any order.
pub fn is_permutation_of(a: &Dims, b: &Dims) -> bool {
    let sorted = |d: &Dims| {
        <[f64; 3]>::from(*d)
            .into_iter()
            .sorted_by(|x, y| x.total_cmp(y))
            .map(f64::to_bits)
            .collect_vec()
    };
    sorted(a) == sorted(b)
}

/// Returns true if no two vehicles in the catalog share the same brand, model and year.
pub fn catalog_entries_unique(catalog: &Catalog) -> bool {
    catalog
        .vehicles()
        .iter()
        .map(|v| (&v.brand, &v.model, &v.year))
        .all_unique()
}
