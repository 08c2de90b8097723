use serde::{Deserialize, Serialize};
use trunk_fit::io::ext_repr::{ExtFitReport, ExtVehicle};
use trunk_fit::parse::ItemInput;

use crate::config::CliConfig;

/// Everything that went into, and came out of, a single `check`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CheckOutput {
    pub vehicle: ExtVehicle,
    pub item: ItemInput,
    /// Absent if the item dimensions were incomplete
    pub report: Option<ExtFitReport>,
    pub config: CliConfig,
}
