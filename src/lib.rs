//! # netchaos - Validation helpers for network fault injection
//!
//! This library provides the small set of parsing and validation helpers a
//! fault-injection tool needs before it touches the network: recurrence
//! intervals, bounded execution durations, port lists and target networks.
//!
//! ## Overview
//!
//! All helpers in [`utils`] are pure functions over string input. They keep
//! no state, do no I/O and can be called from any thread.
//!
//! - **Membership**: [`utils::slice_contains`] checks a value against a list
//! - **Intervals**: [`utils::parse_interval`] accepts "30s", "1h30m" or "" (no interval)
//! - **Durations**: [`utils::parse_duration`] rejects durations that reach the interval
//! - **Ports**: [`utils::parse_ports`] splits and range-checks "80,443"
//! - **Targets**: [`utils::parse_cidr`] turns "10.0.0.1" into `10.0.0.1/32`
//!
//! ## Architecture
//!
//! - `utils`: the validation helpers and their error types
//! - `config`: YAML fault plan structures
//! - `config_loader`: plan loading and per-fault validation
//!
//! ## Example Usage
//!
//! ```rust
//! use std::time::Duration;
//! use netchaos::utils::{parse_cidr, parse_duration, parse_interval, parse_ports};
//!
//! let interval = parse_interval("1m")?;
//! let duration = parse_duration("15s", interval)?;
//! assert_eq!(duration, Duration::from_secs(15));
//!
//! assert_eq!(parse_ports("80,443")?, vec!["80", "443"]);
//! assert_eq!(parse_cidr("10.0.0.1")?.prefix_len(), 32);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Plan Format
//!
//! ```yaml
//! general:
//!   actions: ["delay", "loss"]   # optional, defaults to config::DEFAULT_ACTIONS
//!
//! faults:
//!   - name: "db-latency"
//!     action: "delay"
//!     interval: "5m"             # optional, empty means one-shot
//!     duration: "30s"            # required, shorter than interval
//!     ports: "5432,6432"         # optional
//!     targets: ["10.0.0.5", "10.1.0.0/16"]
//! ```
//!
//! ## Error Handling
//!
//! The helpers return typed `thiserror` errors ([`utils::ValidationError`],
//! [`ipnet::AddrParseError`] for CIDR parsing). Plan loading returns
//! `color_eyre::Result` with context attached.

pub mod config;
pub mod config_loader;
pub mod utils;

pub use config::{Config, FaultConfig, FaultPlan};
pub use config_loader::{build_plan, build_plans, load_config, load_plans, PlanError};
