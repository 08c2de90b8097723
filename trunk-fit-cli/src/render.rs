use trunk_fit::catalog::{Catalog, Vehicle};
use trunk_fit::fit::FitReport;

use crate::config::CliConfig;

/// Renders `report` as plain text: the verdict, the best placement and optionally the alternatives.
pub fn render_report(report: &FitReport, config: &CliConfig) -> String {
    let mut out = format!("{}\n", report.message());

    if let Some(best) = report.best_option {
        out.push_str(&format!("Best way to fit the item:\n  {best}\n"));

        if config.list_alternatives && report.total_orientations() > 1 {
            out.push_str("Alternative positions:\n");
            for alt in report.alternatives() {
                out.push_str(&format!("  - {alt}\n"));
            }
        }
    }
    out
}

pub fn render_trunk(vehicle: &Vehicle, config: &CliConfig) -> String {
    let unit = &config.unit;
    let trunk = &vehicle.trunk;
    format!(
        "{} {} {} Trunk Dimensions:\n  Length: {} {unit}\n  Width: {} {unit}\n  Height: {} {unit}\n",
        vehicle.brand, vehicle.model, vehicle.year, trunk.length, trunk.width, trunk.height
    )
}

/// Renders one entry per line
pub fn render_list<'a>(title: &str, entries: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = format!("{title}:\n");
    for e in entries {
        out.push_str(&format!("  {e}\n"));
    }
    out
}

/// Renders the brands, the models of `brand` or the years of `brand` `model`, depending on what is given
pub fn render_selection(catalog: &Catalog, brand: Option<&str>, model: Option<&str>) -> String {
    match (brand, model) {
        (None, _) => render_list("Brands", catalog.brands()),
        (Some(brand), None) => render_list(&format!("{brand} models"), catalog.models(brand)),
        (Some(brand), Some(model)) => {
            render_list(&format!("{brand} {model} years"), catalog.years(brand, model))
        }
    }
}
