//! Building the SRV service name for a domain.

use crate::scheme::Scheme;

/// Returns the name to query SRV records for to find the avatar server of
/// `domain`.
///
/// This is `_avatars._tcp.` or, for HTTPS, `_avatars-sec._tcp.` followed
/// by the domain. Returns `None` if there is no domain.
pub fn service_name(domain: Option<&str>, scheme: Scheme) -> Option<String> {
    match domain {
        Some(domain) if !domain.is_empty() => {
            Some(format!("{}._tcp.{}", scheme.service_label(), domain))
        }
        _ => None,
    }
}

//============ Testing =======================================================
