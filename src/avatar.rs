//! Composing the final avatar URL.

use crate::scheme::Scheme;

/// Assembles an avatar URL.
///
/// The URL starts with the base URL of the public CDN for `scheme` or, if
/// a non-empty `delegation` host is given, with `scheme://delegation/avatar/`.
/// The hash and query string are appended as they are.
pub fn compose_avatar_url(
    delegation: Option<&str>,
    hash: &str,
    query: &str,
    scheme: Scheme,
) -> String {
    match delegation {
        Some(host) if !host.is_empty() => {
            format!("{}://{}/avatar/{}{}", scheme, host, hash, query)
        }
        _ => format!("{}{}{}", scheme.base_url(), hash, query),
    }
}

//============ Testing =======================================================
