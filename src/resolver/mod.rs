//! The trait defining an abstract SRV resolver.
//!
//! Resolving an avatar URL needs exactly one thing from the DNS: the SRV
//! records for a service name. Anything that can provide them implements
//! [`SrvResolver`]. With the `resolv` feature, the trait is implemented
//! for the stub resolver of the `domain` crate.

use crate::srv::SrvRecord;
use std::error;
use std::future::Future;

#[cfg(feature = "resolv")]
mod stub;

//----------- SrvResolver ----------------------------------------------------

/// A type that can look up SRV records.
///
/// The [`resolve_srv`] method takes the full service name, for instance
/// `_avatars._tcp.example.com`, and returns a future that will eventually
/// resolve into either the SRV records found for the name or an error.
///
/// An empty list and an error are treated alike by the avatar lookup: no
/// delegation is used. The resolver is responsible for any timeouts; it
/// is asked only once per lookup and never retried.
///
/// [`resolve_srv`]: SrvResolver::resolve_srv
pub trait SrvResolver {
    /// The error returned when a query fails.
    type Error: error::Error;

    /// The future resolving into the records.
    type Query<'a>: Future<Output = Result<Vec<SrvRecord>, Self::Error>>
        + Send
    where
        Self: 'a;

    /// Returns a future looking up the SRV records for `name`.
    fn resolve_srv<'a>(&'a self, name: &'a str) -> Self::Query<'a>;
}
