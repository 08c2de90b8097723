use crate::catalog::Vehicle;
use crate::fit::{FitReport, FittingOrientation};
use crate::geometry::Dims;
use crate::io::ext_repr::{ExtDims, ExtFitReport, ExtFittingOrientation, ExtVehicle};

pub fn export_dims(dims: &Dims) -> ExtDims {
    ExtDims {
        length: dims.length,
        width: dims.width,
        height: dims.height,
    }
}

pub fn export_vehicle(vehicle: &Vehicle) -> ExtVehicle {
    ExtVehicle {
        brand: vehicle.brand.clone(),
        model: vehicle.model.clone(),
        year: vehicle.year.clone(),
        trunk: export_dims(&vehicle.trunk),
    }
}

pub fn export_fitting_orientation(fo: &FittingOrientation) -> ExtFittingOrientation {
    ExtFittingOrientation {
        dimensions: fo.dims.into(),
        description: fo.placement.to_string(),
    }
}

pub fn export_report(report: &FitReport) -> ExtFitReport {
    ExtFitReport {
        fits: report.fits,
        message: report.message(),
        total_orientations: report.total_orientations(),
        best_option: report.best_option.map(|p| p.to_string()),
        orientations: report
            .orientations
            .iter()
            .map(export_fitting_orientation)
            .collect(),
    }
}
