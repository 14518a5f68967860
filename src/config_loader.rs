use crate::config::{Config, FaultConfig, FaultPlan};
use crate::utils::{parse_cidr, parse_duration, parse_interval, parse_ports, slice_contains, ValidationError};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::{debug, info};
use std::fs::File;
use std::path::Path;

/// Errors raised while turning a fault entry into a [`FaultPlan`]
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("fault '{fault}': unsupported action '{action}' (allowed: {allowed})")]
    UnsupportedAction {
        fault: String,
        action: String,
        allowed: String,
    },

    #[error("fault '{fault}': invalid {field}: {source}")]
    InvalidField {
        fault: String,
        field: &'static str,
        #[source]
        source: ValidationError,
    },

    #[error("fault '{fault}': invalid target '{target}': {source}")]
    InvalidTarget {
        fault: String,
        target: String,
        #[source]
        source: ipnet::AddrParseError,
    },
}

/// Load and parse a fault plan from a YAML file
pub fn load_config(config_path: &Path) -> Result<Config> {
    info!("Loading fault plan from: {:?}", config_path);

    let file = File::open(config_path)
        .wrap_err_with(|| format!("Failed to open fault plan {:?}", config_path))?;

    let config: Config = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse fault plan {:?}", config_path))?;

    config.validate()?;

    info!("Fault plan defines {} fault(s)", config.faults.len());
    Ok(config)
}

/// Validate every field of one fault entry
pub fn build_plan(fault: &FaultConfig, allowed_actions: &[String]) -> Result<FaultPlan, PlanError> {
    if !slice_contains(allowed_actions, &fault.action) {
        return Err(PlanError::UnsupportedAction {
            fault: fault.name.clone(),
            action: fault.action.clone(),
            allowed: allowed_actions.join(", "),
        });
    }

    let field_error = |field: &'static str| {
        let fault = fault.name.clone();
        move |source: ValidationError| PlanError::InvalidField { fault, field, source }
    };

    let interval = parse_interval(&fault.interval).map_err(field_error("interval"))?;
    let duration = parse_duration(&fault.duration, interval).map_err(field_error("duration"))?;
    let ports = parse_ports(&fault.ports).map_err(field_error("ports"))?;

    let targets = fault
        .targets
        .iter()
        .map(|target| {
            parse_cidr(target).map_err(|source| PlanError::InvalidTarget {
                fault: fault.name.clone(),
                target: target.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "Fault '{}' validated: interval={:?} duration={:?} ports={} targets={}",
        fault.name,
        interval,
        duration,
        ports.len(),
        targets.len()
    );

    Ok(FaultPlan {
        name: fault.name.clone(),
        action: fault.action.clone(),
        interval,
        duration,
        ports,
        targets,
    })
}

/// Validate every fault in the plan, stopping at the first failure
pub fn build_plans(config: &Config) -> Result<Vec<FaultPlan>, PlanError> {
    let allowed_actions = config.general.allowed_actions();
    config
        .faults
        .iter()
        .map(|fault| build_plan(fault, &allowed_actions))
        .collect()
}

/// Load a plan file and validate all of its faults
pub fn load_plans(config_path: &Path) -> Result<Vec<FaultPlan>> {
    let config = load_config(config_path)?;
    let plans = build_plans(&config)
        .wrap_err_with(|| format!("Invalid fault plan {:?}", config_path))?;
    Ok(plans)
}
