//! High-level error type.
//!
//! Only problems with the user identity are ever reported to the caller.
//! Anything that goes wrong while looking for a delegated avatar server is
//! logged and results in the default, non-federated URL instead.

use crate::identity::IdentityError;
use std::convert;
use std::error;
use std::fmt;
use std::result;

pub type Result<T> = result::Result<T, Error>;

//------------ Error ---------------------------------------------------------

/// An avatar URL could not be produced.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Neither an email address nor an OpenID yielded a hash.
    Identity(IdentityError),
}

impl Error {
    /// Returns the identity error if this is one.
    pub fn as_identity(&self) -> Option<&IdentityError> {
        match *self {
            Error::Identity(ref err) => Some(err),
        }
    }
}

impl convert::From<IdentityError> for Error {
    fn from(err: IdentityError) -> Error {
        Error::Identity(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Identity(ref err) => {
                write!(f, "invalid user identity: {}", err)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Identity(ref err) => Some(err),
        }
    }
}
