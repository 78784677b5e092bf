//! Subnet requests given on the command line.

use crate::models::{SubnetRequest, VlsmError};
use regex::Regex;
use std::sync::OnceLock;

/// Regex for `NAME=HOSTS`, `NAME:HOSTS` or a bare `HOSTS`.
static REQUEST_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_request_regex() -> &'static Regex {
    REQUEST_REGEX.get_or_init(|| {
        Regex::new(r"^(?:(?P<name>.+?)\s*[=:]\s*)?(?P<hosts>[+-]?[0-9]+)$").expect("Invalid Regex")
    })
}

/// Default name for a row without one, `index` is zero based.
pub fn default_subnet_name(index: usize) -> String {
    format!("Subnet {}", index + 1)
}

/// Parse one request argument.
///
/// # Examples
/// ```
/// use vlsm_planner::input::parse_request_arg;
/// let req = parse_request_arg("LAN=50", 0).unwrap();
/// assert_eq!((req.name.as_str(), req.hosts), ("LAN", 50));
/// assert_eq!(parse_request_arg("12", 2).unwrap().name, "Subnet 3");
/// ```
pub fn parse_request_arg(text: &str, index: usize) -> Result<SubnetRequest, VlsmError> {
    let text = text.trim();
    let caps = get_request_regex().captures(text).ok_or_else(|| {
        VlsmError::invalid_input(format!(
            "Cannot read subnet '{text}', expected NAME=HOSTS, NAME:HOSTS or HOSTS"
        ))
    })?;

    let hosts: i64 = caps["hosts"].parse().map_err(|_| {
        VlsmError::invalid_input(format!("Host count in '{text}' is out of range"))
    })?;
    let name = caps
        .name("name")
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| default_subnet_name(index));

    log::trace!("parse_request_arg({text}) -> name={name} hosts={hosts}");
    Ok(SubnetRequest { name, hosts })
}

/// Parse all request arguments in order.
pub fn parse_request_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<SubnetRequest>, VlsmError> {
    args.iter()
        .enumerate()
        .map(|(i, arg)| parse_request_arg(arg.as_ref(), i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ErrorKind;

    #[test]
    fn test_parse_named() {
        assert_eq!(
            parse_request_arg("Sales=20", 0).unwrap(),
            SubnetRequest::new("Sales", 20)
        );
        assert_eq!(
            parse_request_arg("Guest Wifi : 100", 0).unwrap(),
            SubnetRequest::new("Guest Wifi", 100)
        );
    }

    #[test]
    fn test_parse_bare_count() {
        assert_eq!(
            parse_request_arg("7", 4).unwrap(),
            SubnetRequest::new("Subnet 5", 7)
        );
    }

    #[test]
    fn test_parse_keeps_bad_counts_for_planner() {
        // sign is kept, the planner rejects it with a proper message
        assert_eq!(parse_request_arg("A=-3", 0).unwrap().hosts, -3);
        assert_eq!(parse_request_arg("A=0", 0).unwrap().hosts, 0);
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", "A=", "A=ten", "=5x", "A=99999999999999999999", "A=\u{663}"] {
            let err = parse_request_arg(bad, 0).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "input {bad:?}");
        }
    }

    #[test]
    fn test_parse_non_ascii_digits() {
        let err = parse_request_arg("A=\u{663}", 0).unwrap_err();
        assert!(
            err.message().starts_with("Cannot read subnet"),
            "unexpected message: {}",
            err.message()
        );
    }

    #[test]
    fn test_parse_request_args() {
        let reqs = parse_request_args(&["A=10", "20", "C:2"]).unwrap();
        assert_eq!(
            reqs,
            vec![
                SubnetRequest::new("A", 10),
                SubnetRequest::new("Subnet 2", 20),
                SubnetRequest::new("C", 2),
            ]
        );
    }
}
