use anyhow::{Context, Result};
use log::{info, warn};

use crate::catalog::{Catalog, Vehicle};
use crate::geometry::Dims;
use crate::io::ext_repr::{ExtCatalog, ExtDims, ExtVehicle};

pub fn import_dims(ext_dims: &ExtDims) -> Result<Dims> {
    Dims::try_new(ext_dims.length, ext_dims.width, ext_dims.height)
}

pub fn import_vehicle(ext_vehicle: &ExtVehicle) -> Result<Vehicle> {
    let trunk = import_dims(&ext_vehicle.trunk).with_context(|| {
        format!(
            "invalid trunk for {} {} {}",
            ext_vehicle.brand, ext_vehicle.model, ext_vehicle.year
        )
    })?;
    Ok(Vehicle {
        brand: ext_vehicle.brand.clone(),
        model: ext_vehicle.model.clone(),
        year: ext_vehicle.year.clone(),
        trunk,
    })
}

/// Converts an external catalog into a [`Catalog`].
/// Fails on the first vehicle with an invalid trunk. Repeated entries are dropped, the first one is kept.
pub fn import_catalog(ext_catalog: &ExtCatalog) -> Result<Catalog> {
    let vehicles: Vec<Vehicle> = ext_catalog
        .vehicles
        .iter()
        .map(import_vehicle)
        .collect::<Result<_>>()?;

    let catalog = Catalog::new(vehicles);
    if catalog.vehicles().is_empty() {
        warn!("[IMPORT] catalog contains no vehicles");
    }
    info!(
        "[IMPORT] imported catalog with {} vehicle(s)",
        catalog.vehicles().len()
    );

    Ok(catalog)
}
