use serde::{Deserialize, Serialize};

/// Configuration of the command line front-end
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    /// Label of the unit all dimensions are expressed in. Only used for display, no conversion takes place
    pub unit: String,
    /// Whether to list the alternative positions besides the best one
    pub list_alternatives: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            unit: "cm".to_string(),
            list_alternatives: true,
        }
    }
}
