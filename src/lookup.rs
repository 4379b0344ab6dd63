//! Resolving avatar URLs.
//!
//! This is where the pieces come together: the user identity is parsed and
//! hashed, the SRV records of the identity’s domain are looked up, and the
//! avatar URL is composed from whatever delegation target was found.

use crate::avatar::compose_avatar_url;
use crate::error::Error;
use crate::identity::parse_user_identity;
use crate::options::AvatarOptions;
use crate::resolver::SrvResolver;
use crate::scheme::Scheme;
use crate::service::service_name;
use crate::srv::select_target;
use crate::target::sanitize_delegation;
use tracing::{debug, trace};

#[cfg(feature = "resolv")]
use domain::resolv::stub::conf::ResolvConf;
#[cfg(feature = "resolv")]
use domain::resolv::StubResolver;
#[cfg(feature = "resolv-sync")]
use std::io;

//------------ lookup_avatar -------------------------------------------------

/// Resolves the avatar URL for the identity given in `options`.
///
/// The SRV records of the identity’s domain are queried once through
/// `resolver`. If the query fails, finds nothing, or finds nothing usable,
/// the URL points to the public CDN. The only error returned is for an
/// identity that is missing or can’t be parsed.
pub async fn lookup_avatar<R: SrvResolver + ?Sized>(
    resolver: &R,
    options: &AvatarOptions,
) -> Result<String, Error> {
    let identity = parse_user_identity(
        options.email.as_deref(),
        options.openid.as_deref(),
    )?;
    let scheme = options.scheme();
    let query = options.query_string();
    let delegation = match service_name(Some(identity.domain()), scheme) {
        Some(name) => find_delegation(resolver, &name, scheme).await,
        None => None,
    };
    Ok(compose_avatar_url(
        delegation.as_deref(),
        identity.hash(),
        &query,
        scheme,
    ))
}

/// Looks for a delegated avatar server under the service name `name`.
async fn find_delegation<R: SrvResolver + ?Sized>(
    resolver: &R,
    name: &str,
    scheme: Scheme,
) -> Option<String> {
    debug!("looking up SRV records for {}", name);
    let records = match resolver.resolve_srv(name).await {
        Ok(records) => records,
        Err(err) => {
            debug!("SRV lookup for {} failed: {}", name, err);
            return None;
        }
    };
    let target = match select_target(&records, &mut rand::thread_rng()) {
        Some(target) => target,
        None => {
            debug!("no SRV target for {}", name);
            return None;
        }
    };
    let host = sanitize_delegation(&target, scheme);
    match host {
        Some(ref host) => trace!("delegating {} to {}", name, host),
        None => debug!(
            "rejecting SRV target {}:{} for {}",
            target.host(),
            target.port(),
            name
        ),
    }
    host
}

//------------ Using the Stub Resolver ---------------------------------------

/// Resolves an avatar URL using the system’s resolver configuration.
#[cfg(feature = "resolv")]
#[cfg_attr(docsrs, doc(cfg(feature = "resolv")))]
pub async fn avatar_url(options: &AvatarOptions) -> Result<String, Error> {
    lookup_avatar(&StubResolver::new(), options).await
}

/// Resolves an avatar URL using the given resolver configuration.
#[cfg(feature = "resolv")]
#[cfg_attr(docsrs, doc(cfg(feature = "resolv")))]
pub async fn avatar_url_with_conf(
    conf: ResolvConf,
    options: &AvatarOptions,
) -> Result<String, Error> {
    lookup_avatar(&StubResolver::from_conf(conf), options).await
}

/// Synchronously resolves an avatar URL.
///
/// This runs the lookup on a runtime of its own using the system’s
/// resolver configuration and waits for the result. It must not be called
/// from within an async runtime.
#[cfg(feature = "resolv-sync")]
#[cfg_attr(docsrs, doc(cfg(feature = "resolv-sync")))]
pub fn avatar_url_blocking(options: &AvatarOptions) -> Result<String, Error> {
    let owned = options.clone();
    let res = StubResolver::run(move |stub| async move {
        Ok::<_, io::Error>(lookup_avatar(&stub, &owned).await)
    });
    match res {
        Ok(res) => res,
        Err(err) => {
            debug!("running the stub resolver failed: {}", err);
            undelegated_avatar_url(options)
        }
    }
}

/// Composes the avatar URL on the public CDN without any lookup.
#[cfg(feature = "resolv-sync")]
fn undelegated_avatar_url(options: &AvatarOptions) -> Result<String, Error> {
    let identity = parse_user_identity(
        options.email.as_deref(),
        options.openid.as_deref(),
    )?;
    Ok(compose_avatar_url(
        None,
        identity.hash(),
        &options.query_string(),
        options.scheme(),
    ))
}

//============ Testing =======================================================
