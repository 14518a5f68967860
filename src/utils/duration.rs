//! Interval and duration parsing.
//!
//! An *interval* is the recurrence period of a fault action and may be left
//! empty to mean "run once". A *duration* is how long one execution lasts and
//! is always required; it must stay shorter than the interval, otherwise two
//! executions would overlap.

use std::time::Duration;

use crate::utils::validation::ValidationError;

/// Parse a recurrence interval such as "30s" or "1h30m"
///
/// An empty string means no recurring interval and yields `Duration::ZERO`.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use netchaos::utils::duration::parse_interval;
///
/// assert_eq!(parse_interval("").unwrap(), Duration::ZERO);
/// assert_eq!(parse_interval("5s").unwrap(), Duration::from_secs(5));
/// assert!(parse_interval("bogus").is_err());
/// ```
pub fn parse_interval(interval: &str) -> Result<Duration, ValidationError> {
    if interval.is_empty() {
        return Ok(Duration::ZERO);
    }
    humantime::parse_duration(interval).map_err(ValidationError::Interval)
}

/// Parse an execution duration and check it against `interval`
///
/// A zero `interval` disables the comparison.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use netchaos::utils::duration::parse_duration;
///
/// let interval = Duration::from_secs(5);
/// assert_eq!(parse_duration("2s", interval).unwrap(), Duration::from_secs(2));
/// assert!(parse_duration("10s", interval).is_err());
/// assert!(parse_duration("", interval).is_err());
/// ```
pub fn parse_duration(duration: &str, interval: Duration) -> Result<Duration, ValidationError> {
    if duration.is_empty() {
        return Err(ValidationError::UndefinedDuration);
    }

    let parsed = humantime::parse_duration(duration).map_err(ValidationError::Duration)?;

    if !interval.is_zero() && parsed >= interval {
        return Err(ValidationError::DurationNotShorterThanInterval {
            duration: parsed,
            interval,
        });
    }

    Ok(parsed)
}
