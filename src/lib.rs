//! Federated avatar URLs.
//!
//! This crate determines the URL of the avatar image for a user identified
//! by an email address or an OpenID, following the conventions of the
//! [Libravatar](https://www.libravatar.org/) service. The identity is
//! hashed, with MD5 for email addresses and SHA-256 for OpenIDs, and the
//! hash is appended to the base URL of an avatar server.
//!
//! Domains can run their own avatar server. They announce it through SRV
//! records for `_avatars._tcp` or, for HTTPS, `_avatars-sec._tcp` under
//! their domain name. If such records exist for the identity’s domain, a
//! target is picked following the rules of [RFC 2782] and the URL points
//! to that server. In all other cases, including any failure to look up
//! the records, the URL points to the public Libravatar CDN.
//!
//! The crate only produces the URL. It never fetches the image.
//!
//! # Usage
//!
//! The main entry point is [`lookup_avatar`] which takes anything that
//! implements [`SrvResolver`] and the [`AvatarOptions`] describing the
//! avatar:
//!
//! ```no_run
//! # #[cfg(feature = "resolv")]
//! # async fn run() -> Result<(), libravatar::Error> {
//! use domain::resolv::StubResolver;
//! use libravatar::{lookup_avatar, AvatarOptions};
//!
//! let options = AvatarOptions::from_email("someone@example.com")
//!     .with_https(true)
//!     .with_size(96);
//! let url = lookup_avatar(&StubResolver::new(), &options).await?;
//! println!("{}", url);
//! # Ok(())
//! # }
//! ```
//!
//! The building blocks of the lookup are available as well in case you
//! want to put them together differently:
//!
//! * [identity] parses and hashes user identities,
//! * [service] builds the SRV service name for a domain,
//! * [srv] picks a target from a set of SRV records,
//! * [target] checks a target and renders it for use in a URL, and
//! * [avatar] composes the final URL.
//!
//! # Reference of Feature Flags
//!
//! * `resolv`: Implements [`SrvResolver`] for the stub resolver of the
//!   [domain](https://github.com/nlnetlabs/domain) crate and adds the
//!   [`avatar_url`] and [`avatar_url_with_conf`] functions. This feature
//!   is enabled by default.
//! * `resolv-sync`: Adds the blocking [`avatar_url_blocking`] function.
//! * `serde`: Derives `Serialize` and `Deserialize` for the options and
//!   for SRV records.
//!
//! [RFC 2782]: https://tools.ietf.org/html/rfc2782

#![cfg_attr(docsrs, feature(doc_cfg))]

pub use self::error::{Error, Result};
pub use self::identity::{parse_user_identity, Identity, IdentityError};
pub use self::lookup::lookup_avatar;
pub use self::options::AvatarOptions;
pub use self::resolver::SrvResolver;
pub use self::scheme::Scheme;
pub use self::srv::{DelegationTarget, SrvRecord};

#[cfg(feature = "resolv")]
pub use self::lookup::{avatar_url, avatar_url_with_conf};
#[cfg(feature = "resolv-sync")]
pub use self::lookup::avatar_url_blocking;

pub mod avatar;
pub mod error;
pub mod identity;
pub mod lookup;
pub mod options;
pub mod resolver;
pub mod scheme;
pub mod service;
pub mod srv;
pub mod target;
