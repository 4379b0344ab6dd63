//! Resolving avatar URLs through the public API.

use libravatar::{
    lookup_avatar, AvatarOptions, Error, IdentityError, SrvRecord,
    SrvResolver,
};
use rstest::rstest;
use std::future::{ready, Ready};
use std::io;

const EMAIL_HASH: &str = "a60fc0828e808b9a6a9d50f1792240c8";
const OPENID_HASH: &str =
    "ce0064bb30c22b618f814c389e7941ce1bfff0659910523192868d2b71632c77";

/// A resolver that fails every query.
struct Unreachable;

impl SrvResolver for Unreachable {
    type Error = io::Error;
    type Query<'a> = Ready<Result<Vec<SrvRecord>, io::Error>>;

    fn resolve_srv<'a>(&'a self, _name: &'a str) -> Self::Query<'a> {
        ready(Err(io::ErrorKind::TimedOut.into()))
    }
}

/// A resolver that returns the same records for every name.
struct Fixed(Vec<SrvRecord>);

impl SrvResolver for Fixed {
    type Error = io::Error;
    type Query<'a> = Ready<Result<Vec<SrvRecord>, io::Error>>;

    fn resolve_srv<'a>(&'a self, name: &'a str) -> Self::Query<'a> {
        assert!(name.starts_with("_avatars"), "unexpected query {}", name);
        ready(Ok(self.0.clone()))
    }
}

#[rstest]
#[case::plain("whatever@wherever.whichever")]
#[case::shouting("WHATEVER@WHEREVER.WHICHEVER")]
#[case::padded("  whatever@wherever.whichever\t")]
fn email_without_delegation(#[case] email: &str) {
    let url = tokio_test::block_on(lookup_avatar(
        &Unreachable,
        &AvatarOptions::from_email(email),
    ))
    .unwrap();
    assert_eq!(url, format!("http://cdn.libravatar.org/avatar/{}", EMAIL_HASH));
}

#[test]
fn openid_without_delegation() {
    let options = AvatarOptions::from_openid("http://example.com/id")
        .with_https(true)
        .with_size(24)
        .with_default_image("mm");
    let url =
        tokio_test::block_on(lookup_avatar(&Fixed(Vec::new()), &options))
            .unwrap();
    assert_eq!(
        url,
        format!(
            "https://seccdn.libravatar.org/avatar/{}?s=24&d=mm",
            OPENID_HASH
        )
    );
}

#[test]
fn weighted_delegation() {
    let resolver = Fixed(vec![
        SrvRecord::new(20, 100, 80, "fallback.example.com"),
        SrvRecord::new(10, 30, 8080, "one.example.com"),
        SrvRecord::new(10, 70, 8080, "two.example.com"),
    ]);
    let options = AvatarOptions::from_email("someone@example.com");
    for _ in 0..100 {
        let url = tokio_test::block_on(lookup_avatar(&resolver, &options))
            .unwrap();
        assert!(
            url.starts_with("http://one.example.com:8080/avatar/")
                || url.starts_with("http://two.example.com:8080/avatar/"),
            "unexpected URL {}",
            url
        );
    }
}

#[test]
fn invalid_identity() {
    let err = tokio_test::block_on(lookup_avatar(
        &Unreachable,
        &AvatarOptions::from_openid("not a url"),
    ))
    .unwrap_err();
    assert!(matches!(
        err,
        Error::Identity(IdentityError::OpenIdUrl(_))
    ));
    assert!(err.to_string().starts_with("invalid user identity"));
}

#[tokio::test]
async fn lookup_is_send() {
    let handle = tokio::spawn(async {
        lookup_avatar(
            &Unreachable,
            &AvatarOptions::from_email("whatever@wherever.whichever"),
        )
        .await
    });
    assert_eq!(
        handle.await.unwrap().unwrap(),
        format!("http://cdn.libravatar.org/avatar/{}", EMAIL_HASH)
    );
}

#[cfg(feature = "resolv-sync")]
#[test]
fn blocking_lookup_falls_back() {
    let url = libravatar::avatar_url_blocking(&AvatarOptions::from_email(
        "whatever@wherever.whichever",
    ))
    .unwrap();
    assert_eq!(url, format!("http://cdn.libravatar.org/avatar/{}", EMAIL_HASH));
}
