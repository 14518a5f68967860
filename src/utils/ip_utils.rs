//! IP helpers for turning target addresses into networks.

use ipnet::{AddrParseError, IpNet};

/// Ensure an address string is in CIDR notation
///
/// Strings that already contain a `/` are returned unchanged; anything else
/// is treated as a single host and gets a `/32` suffix.
pub fn cidr_notation(ip: &str) -> String {
    if ip.contains('/') {
        ip.to_string()
    } else {
        format!("{}/32", ip)
    }
}

/// Parse an address or CIDR string into a network
///
/// Host bits are cleared, so `10.0.0.5/24` yields `10.0.0.0/24`.
///
/// # Examples
/// ```
/// use netchaos::utils::ip_utils::parse_cidr;
///
/// let net = parse_cidr("10.0.0.1").unwrap();
/// assert_eq!(net.to_string(), "10.0.0.1/32");
/// assert!(parse_cidr("not-an-ip").is_err());
/// ```
pub fn parse_cidr(ip: &str) -> Result<IpNet, AddrParseError> {
    let cidr = cidr_notation(ip);
    let net: IpNet = cidr.parse()?;
    Ok(net.trunc())
}
