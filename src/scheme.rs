//! The URL scheme an avatar is requested over.

use std::fmt;

/// The base URL of the public avatar CDN reached over HTTP.
pub const BASE_URL: &str = "http://cdn.libravatar.org/avatar/";

/// The base URL of the public avatar CDN reached over HTTPS.
pub const SECURE_BASE_URL: &str = "https://seccdn.libravatar.org/avatar/";

//------------ Scheme --------------------------------------------------------

/// Whether avatars are requested over plain HTTP or over HTTPS.
///
/// The scheme decides the public CDN to fall back to, the SRV service
/// label used for discovering a delegated server, and the port that can
/// be left out when rendering a delegation target.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Scheme {
    #[default]
    Http,
    Https,
}

impl Scheme {
    /// Returns the scheme for the given `https` flag.
    pub fn from_https(https: bool) -> Self {
        if https {
            Scheme::Https
        } else {
            Scheme::Http
        }
    }

    pub fn is_https(self) -> bool {
        matches!(self, Scheme::Https)
    }

    /// Returns the scheme as it appears in a URL.
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    /// Returns the port a URL with this scheme uses if it names none.
    pub fn default_port(self) -> u16 {
        match self {
            Scheme::Http => 80,
            Scheme::Https => 443,
        }
    }

    /// Returns the base URL of the public CDN for this scheme.
    pub fn base_url(self) -> &'static str {
        match self {
            Scheme::Http => BASE_URL,
            Scheme::Https => SECURE_BASE_URL,
        }
    }

    /// Returns the service label of the SRV records for this scheme.
    pub fn service_label(self) -> &'static str {
        match self {
            Scheme::Http => "_avatars",
            Scheme::Https => "_avatars-sec",
        }
    }
}

impl From<bool> for Scheme {
    fn from(https: bool) -> Self {
        Self::from_https(https)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//============ Testing =======================================================
