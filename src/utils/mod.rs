//! Shared utilities: membership checks, interval and duration parsing, port lists, CIDR helpers.

pub mod duration;
pub mod ip_utils;
pub mod ports;
pub mod validation;

pub use duration::{parse_duration, parse_interval};
pub use ip_utils::{cidr_notation, parse_cidr};
pub use ports::{parse_ports, verify_port};
pub use validation::{slice_contains, ErrorKind, PortError, ValidationError};
