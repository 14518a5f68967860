//! Port list parsing.

use crate::utils::validation::{PortError, ValidationError};

/// Lowest valid port number
pub const MIN_PORT: i64 = 0;
/// Highest valid port number
pub const MAX_PORT: i64 = 65535;

/// Split a comma separated port list and validate every entry
///
/// An empty input means no ports. Empty entries inside the list (as in
/// `"80,,443"`) are accepted and returned as-is; every other entry must be a
/// base-10 integer within `MIN_PORT..=MAX_PORT`. The first invalid entry
/// fails the whole list.
///
/// # Examples
/// ```
/// use netchaos::utils::ports::parse_ports;
///
/// assert!(parse_ports("").unwrap().is_empty());
/// assert_eq!(parse_ports("80,443").unwrap(), vec!["80", "443"]);
/// assert!(parse_ports("80,99999").is_err());
/// ```
pub fn parse_ports(ports: &str) -> Result<Vec<String>, ValidationError> {
    if ports.is_empty() {
        return Ok(Vec::new());
    }

    let port_list: Vec<String> = ports.split(',').map(str::to_string).collect();
    for port in &port_list {
        verify_port(port)?;
    }

    log::debug!("Parsed {} port entries from '{}'", port_list.len(), ports);
    Ok(port_list)
}

/// Check that a single port literal is numeric and within range
///
/// The empty string is accepted.
pub fn verify_port(port: &str) -> Result<(), PortError> {
    if port.is_empty() {
        return Ok(());
    }

    let port_num: i64 = port.parse().map_err(|source| PortError::Format {
        port: port.to_string(),
        source,
    })?;

    if !(MIN_PORT..=MAX_PORT).contains(&port_num) {
        return Err(PortError::OutOfRange {
            port: port.to_string(),
        });
    }

    Ok(())
}
