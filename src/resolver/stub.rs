//! SRV lookups through the stub resolver of the `domain` crate.

use super::SrvResolver;
use crate::srv::SrvRecord;
use domain::base::iana::Rtype;
use domain::base::name::Name;
use domain::rdata::Srv;
use domain::resolv::stub::Answer;
use domain::resolv::StubResolver;
use std::future::Future;
use std::io;
use std::pin::Pin;
use std::str::FromStr;
use tracing::{debug, trace};

impl SrvResolver for StubResolver {
    type Error = io::Error;
    type Query<'a> = Pin<
        Box<dyn Future<Output = Result<Vec<SrvRecord>, io::Error>> + Send + 'a>,
    >;

    fn resolve_srv<'a>(&'a self, name: &'a str) -> Self::Query<'a> {
        Box::pin(async move {
            let qname = Name::<Vec<u8>>::from_str(name).map_err(|err| {
                io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
            })?;
            let answer = self.query((qname, Rtype::SRV)).await?;
            srv_records(&answer)
        })
    }
}

/// Collects the SRV records from the answer section of a response.
///
/// Records that fail to parse are skipped. So are records with the root
/// as their target which, according to RFC 2782, state that the service
/// is decidedly not available.
fn srv_records(answer: &Answer) -> Result<Vec<SrvRecord>, io::Error> {
    let section = answer.answer().map_err(|err| {
        io::Error::new(io::ErrorKind::InvalidData, err.to_string())
    })?;
    let mut res = Vec::new();
    for record in section.limit_to::<Srv<_>>() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                debug!("skipping unparseable SRV record: {}", err);
                continue;
            }
        };
        let data = record.data();
        if data.target().is_root() {
            trace!("skipping SRV record with root target");
            continue;
        }
        res.push(SrvRecord::new(
            data.priority(),
            data.weight(),
            data.port(),
            data.target().to_string(),
        ));
    }
    Ok(res)
}

//============ Testing =======================================================
