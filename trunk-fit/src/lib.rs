//! Checks whether a box-shaped item fits in a car trunk.
//!
//! The item is tried in each of its six axis-aligned orientations against the trunk cavity.
//! Every orientation that fits is reported together with a plain-language placement instruction.

/// Dimension triples and the six axis-aligned orientations of a box
pub mod geometry;

/// Fit testing of an item against a trunk and the resulting report
pub mod fit;

/// Reference dataset of vehicles and their trunk cavities
pub mod catalog;

/// Turning raw form input into dimensions
pub mod parse;

/// Importing catalogs into and exporting reports out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use fit::check_fit;
#[doc(inline)]
pub use fit::test_fit;
