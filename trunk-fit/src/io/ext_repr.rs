use serde::{Deserialize, Serialize};

/// External representation of a [`Dims`](crate::geometry::Dims).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtDims {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// External representation of a [`Vehicle`](crate::catalog::Vehicle).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtVehicle {
    pub brand: String,
    pub model: String,
    /// Model year, kept as text (e.g. "2024")
    pub year: String,
    /// Usable dimensions of the trunk cavity
    pub trunk: ExtDims,
}

/// External representation of a [`Catalog`](crate::catalog::Catalog).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtCatalog {
    #[serde(default)]
    pub vehicles: Vec<ExtVehicle>,
}

/// External representation of a [`FittingOrientation`](crate::fit::FittingOrientation).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtFittingOrientation {
    /// Item dimensions along the trunk's length, width and height
    pub dimensions: [f64; 3],
    /// Placement instruction
    pub description: String,
}

/// External representation of a [`FitReport`](crate::fit::FitReport).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtFitReport {
    pub fits: bool,
    pub message: String,
    pub total_orientations: usize,
    /// Instruction for the first orientation that fits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_option: Option<String>,
    pub orientations: Vec<ExtFittingOrientation>,
}
