use itertools::Itertools;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::geometry::Dims;
use crate::util::assertions;

/// Source of trunk cavity dimensions for a selected vehicle.
/// The fit tester itself only ever sees the resulting [`Dims`].
pub trait TrunkProvider {
    fn lookup(&self, brand: &str, model: &str, year: &str) -> Option<Dims>;
}

/// A vehicle and the usable dimensions of its trunk
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub brand: String,
    pub model: String,
    pub year: String,
    pub trunk: Dims,
}

impl Vehicle {
    pub fn new(brand: &str, model: &str, year: &str, trunk: Dims) -> Self {
        Vehicle {
            brand: brand.to_string(),
            model: model.to_string(),
            year: year.to_string(),
            trunk,
        }
    }
}

/// In-memory list of vehicles, browsed by brand, then model, then year.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    vehicles: Vec<Vehicle>,
}

impl Catalog {
    /// Creates a catalog from `vehicles`.
    /// Repeated brand, model and year combinations are dropped, the first one is kept.
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        let n_total = vehicles.len();
        let vehicles = vehicles
            .into_iter()
            .unique_by(|v| (v.brand.clone(), v.model.clone(), v.year.clone()))
            .collect_vec();
        if vehicles.len() < n_total {
            warn!(
                "[CATALOG] dropped {} duplicate vehicle(s)",
                n_total - vehicles.len()
            );
        }
        let catalog = Catalog { vehicles };
        debug_assert!(assertions::catalog_entries_unique(&catalog));
        catalog
    }

    /// The reference dataset, trunk dimensions in cm
    pub fn builtin() -> Self {
        Catalog::new(vec![
            Vehicle::new("Toyota", "Camry", "2024", Dims::new(100.0, 55.0, 45.0)),
            Vehicle::new("Toyota", "Corolla", "2024", Dims::new(90.0, 52.0, 42.0)),
            Vehicle::new("Honda", "Civic", "2024", Dims::new(95.0, 50.0, 40.0)),
            Vehicle::new("Honda", "Accord", "2024", Dims::new(102.0, 57.0, 45.0)),
            Vehicle::new("Tesla", "Model 3", "2024", Dims::new(98.0, 54.0, 43.0)),
            Vehicle::new("BMW", "3 Series", "2024", Dims::new(105.0, 58.0, 45.0)),
            Vehicle::new("Mercedes", "C-Class", "2024", Dims::new(103.0, 56.0, 44.0)),
        ])
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// All brands, sorted alphabetically
    pub fn brands(&self) -> Vec<&str> {
        self.vehicles
            .iter()
            .map(|v| v.brand.as_str())
            .unique()
            .sorted()
            .collect()
    }

    /// All models of `brand`, sorted alphabetically
    pub fn models(&self, brand: &str) -> Vec<&str> {
        self.vehicles
            .iter()
            .filter(|v| v.brand == brand)
            .map(|v| v.model.as_str())
            .unique()
            .sorted()
            .collect()
    }

    /// All years of `brand` `model`, most recent first
    pub fn years(&self, brand: &str, model: &str) -> Vec<&str> {
        self.vehicles
            .iter()
            .filter(|v| v.brand == brand && v.model == model)
            .map(|v| v.year.as_str())
            .unique()
            .sorted()
            .rev()
            .collect()
    }

    pub fn find(&self, brand: &str, model: &str, year: &str) -> Option<&Vehicle> {
        self.vehicles
            .iter()
            .find(|v| v.brand == brand && v.model == model && v.year == year)
    }
}

impl TrunkProvider for Catalog {
    fn lookup(&self, brand: &str, model: &str, year: &str) -> Option<Dims> {
        self.find(brand, model, year).map(|v| v.trunk)
    }
}
