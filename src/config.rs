use ipnet::IpNet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// Fault actions accepted when the plan does not list its own
pub const DEFAULT_ACTIONS: &[&str] = &[
    "delay",
    "loss",
    "duplicate",
    "corrupt",
    "reorder",
    "rate",
    "partition",
];

/// Fault plan as written in the YAML file
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub faults: Vec<FaultConfig>,
}

/// Plan-wide settings
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Overrides the list of permitted fault actions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
}

/// One fault entry, fields kept as raw strings until validated
///
/// Missing string fields deserialize to the empty string, which the
/// validators treat as "not set".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaultConfig {
    pub name: String,
    pub action: String,
    #[serde(default)]
    pub interval: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub ports: String,
    #[serde(default)]
    pub targets: Vec<String>,
}

/// A fault entry after every field has passed validation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaultPlan {
    pub name: String,
    pub action: String,
    #[serde(with = "humantime_serde")]
    pub interval: Duration,
    #[serde(with = "humantime_serde")]
    pub duration: Duration,
    pub ports: Vec<String>,
    pub targets: Vec<IpNet>,
}

impl FaultPlan {
    /// True when the fault fires once rather than on a schedule
    pub fn is_one_shot(&self) -> bool {
        self.interval.is_zero()
    }
}

/// Structural problems in a plan file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Plan defines no faults")]
    NoFaults,
    #[error("Fault #{index} has an empty name")]
    EmptyName { index: usize },
    #[error("Duplicate fault name '{name}'")]
    DuplicateName { name: String },
    #[error("general.actions cannot be an empty list")]
    EmptyActions,
}

impl Config {
    /// Validate the plan structure
    ///
    /// Field contents (durations, ports, targets) are checked later when the
    /// plan is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.faults.is_empty() {
            return Err(ConfigError::NoFaults);
        }

        if let Some(actions) = &self.general.actions {
            if actions.is_empty() {
                return Err(ConfigError::EmptyActions);
            }
        }

        let mut seen = HashSet::new();
        for (index, fault) in self.faults.iter().enumerate() {
            if fault.name.trim().is_empty() {
                return Err(ConfigError::EmptyName { index });
            }
            if !seen.insert(fault.name.as_str()) {
                return Err(ConfigError::DuplicateName {
                    name: fault.name.clone(),
                });
            }
        }

        Ok(())
    }
}

impl GeneralConfig {
    /// Actions a fault may use: the plan's own list, or [`DEFAULT_ACTIONS`]
    pub fn allowed_actions(&self) -> Vec<String> {
        match &self.actions {
            Some(actions) => actions.clone(),
            None => DEFAULT_ACTIONS.iter().map(|a| a.to_string()).collect(),
        }
    }
}
