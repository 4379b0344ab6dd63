//! Options for resolving an avatar URL.

use crate::scheme::Scheme;
use url::form_urlencoded;

//------------ AvatarOptions -------------------------------------------------

/// What avatar to resolve and how.
///
/// Exactly one of `email` and `openid` should be given. If both are
/// present, the email address is used. Everything in `params` ends up in
/// the query string of the avatar URL, in order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AvatarOptions {
    /// The email address of the user.
    pub email: Option<String>,

    /// The OpenID URL of the user.
    pub openid: Option<String>,

    /// Use HTTPS.
    ///
    /// This selects both the secure CDN and the `_avatars-sec` SRV
    /// records. Disabled by default.
    pub https: bool,

    /// Additional query parameters such as `s` for the size.
    pub params: Vec<(String, String)>,
}

impl AvatarOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for the avatar of an email address.
    pub fn from_email(email: impl Into<String>) -> Self {
        Self::new().with_email(email)
    }

    /// Creates options for the avatar of an OpenID.
    pub fn from_openid(openid: impl Into<String>) -> Self {
        Self::new().with_openid(openid)
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_openid(mut self, openid: impl Into<String>) -> Self {
        self.openid = Some(openid.into());
        self
    }

    pub fn with_https(mut self, https: bool) -> Self {
        self.https = https;
        self
    }

    /// Adds a query parameter.
    pub fn with_param(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Requests an avatar of `size` pixels square.
    pub fn with_size(self, size: u16) -> Self {
        self.with_param("s", size.to_string())
    }

    /// Sets the image to use if there is no avatar.
    ///
    /// This is either a URL or one of the keywords understood by the
    /// avatar service such as `404`, `mm`, or `identicon`.
    pub fn with_default_image(self, default: impl Into<String>) -> Self {
        self.with_param("d", default)
    }

    pub fn scheme(&self) -> Scheme {
        Scheme::from_https(self.https)
    }

    /// Returns the query string for the parameters.
    ///
    /// The string starts with `?` unless there are no parameters at all,
    /// in which case it is empty. Pairs are joined by `&` in the order they
    /// were added. Names and values are encoded as
    /// `application/x-www-form-urlencoded`, so a space becomes `+` rather
    /// than `%20`. Both are understood by the avatar service.
    pub fn query_string(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.extend_pairs(self.params.iter());
        format!("?{}", query.finish())
    }
}

//============ Testing =======================================================
