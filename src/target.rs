//! Checking delegation targets.
//!
//! Whatever comes out of the DNS is checked before it ends up in a URL:
//! the host name may only contain letters, digits, hyphens and dots and
//! the port must be a valid TCP port.

use crate::scheme::Scheme;
use crate::srv::DelegationTarget;

//------------ PortValue -----------------------------------------------------

/// A value that may represent a port number.
///
/// This is implemented for the integer types and for strings so that
/// ports taken from DNS records and ports given as text pass through the
/// same checks. The value returned is not range checked yet.
pub trait PortValue {
    /// Returns the value as an integer or `None` if it isn’t one.
    fn port_value(&self) -> Option<i64>;
}

macro_rules! int_port_value {
    ( $( $t:ty ),* ) => {
        $(
            impl PortValue for $t {
                fn port_value(&self) -> Option<i64> {
                    Some(i64::from(*self))
                }
            }
        )*
    };
}

int_port_value!(u8, u16, u32, i8, i16, i32, i64);

impl PortValue for str {
    fn port_value(&self) -> Option<i64> {
        self.trim().parse().ok()
    }
}

impl PortValue for String {
    fn port_value(&self) -> Option<i64> {
        self.as_str().port_value()
    }
}

impl<'a, T: PortValue + ?Sized> PortValue for &'a T {
    fn port_value(&self) -> Option<i64> {
        (**self).port_value()
    }
}

//------------ sanitize_target -----------------------------------------------

/// Checks a target host and port and renders them for use in a URL.
///
/// Returns `None` if either is missing, the port is not a number between
/// 1 and 65535, or the host contains characters other than ASCII letters,
/// digits, `-` and `.`. Otherwise returns `"host:port"`, or just `"host"`
/// if the port is the default port of `scheme`.
pub fn sanitize_target<P: PortValue>(
    target: Option<&str>,
    port: Option<P>,
    scheme: Scheme,
) -> Option<String> {
    let target = target?;
    let port = port?.port_value()?;
    if !(1..=65535).contains(&port) {
        return None;
    }
    if !is_valid_host(target) {
        return None;
    }
    if port == i64::from(scheme.default_port()) {
        Some(target.into())
    } else {
        Some(format!("{}:{}", target, port))
    }
}

/// Checks and renders a delegation target picked from SRV records.
pub fn sanitize_delegation(
    target: &DelegationTarget,
    scheme: Scheme,
) -> Option<String> {
    sanitize_target(Some(target.host()), Some(target.port()), scheme)
}

fn is_valid_host(host: &str) -> bool {
    !host.is_empty()
        && host
            .bytes()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == b'-' || ch == b'.')
}

//============ Testing =======================================================
