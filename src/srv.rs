//! Selecting a target from SRV records.
//!
//! The avatar server of a domain is advertised through SRV records. Out of
//! all the records found, exactly one target is picked following the usage
//! rules of [RFC 2782]: only the records with the lowest priority value are
//! considered and among those a record is chosen at random, weighted by
//! the record’s weight. Records with a weight of zero are placed first so
//! that they still have a chance of being picked.
//!
//! [RFC 2782]: https://tools.ietf.org/html/rfc2782

use rand::Rng;
use std::collections::VecDeque;
use std::fmt;
use std::slice;
use tracing::{trace, warn};

//------------ SrvRecord -----------------------------------------------------

/// The data of a single SRV record.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SrvRecord {
    priority: u16,
    weight: u16,
    port: u16,
    target: String,
}

impl SrvRecord {
    pub fn new(
        priority: u16,
        weight: u16,
        port: u16,
        target: impl Into<String>,
    ) -> Self {
        SrvRecord {
            priority,
            weight,
            port,
            target: target.into(),
        }
    }

    pub fn priority(&self) -> u16 {
        self.priority
    }

    pub fn weight(&self) -> u16 {
        self.weight
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the target host name without a trailing dot.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the target and port as a delegation target.
    pub fn to_delegation(&self) -> DelegationTarget {
        DelegationTarget::new(self.target.clone(), self.port)
    }
}

impl fmt::Display for SrvRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.priority, self.weight, self.port, self.target
        )
    }
}

//------------ DelegationTarget ----------------------------------------------

/// The host and port picked from a set of SRV records.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct DelegationTarget {
    host: String,
    port: u16,
}

impl DelegationTarget {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        DelegationTarget {
            host: host.into(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

//------------ select_target -------------------------------------------------

/// Picks the target to use from a set of SRV records.
///
/// Returns `None` if there are no records. A single record is returned
/// as is, whatever its priority and weight. Otherwise a record of the
/// lowest priority value is picked using `rng` as described in
/// [`SrvCandidates`].
pub fn select_target<R: Rng + ?Sized>(
    records: &[SrvRecord],
    rng: &mut R,
) -> Option<DelegationTarget> {
    match records {
        [] => None,
        [record] => Some(record.to_delegation()),
        _ => SrvCandidates::from_records(records)
            .choose(rng)
            .map(SrvRecord::to_delegation),
    }
}

//------------ SrvCandidates -------------------------------------------------

/// The records of the top priority, ready for a weighted pick.
///
/// The candidates are collected in a single pass over the records. The
/// first record’s priority starts out as the top priority. Records with a
/// higher priority value are skipped, a record with a lower value replaces
/// everything collected so far. Each kept record is paired with the running
/// total of the weights: records with a non-zero weight are appended,
/// records with a weight of zero are prepended and paired with zero.
#[derive(Clone, Debug, Default)]
pub struct SrvCandidates<'a> {
    /// The kept records with their cumulative weights.
    candidates: Vec<(u64, &'a SrvRecord)>,

    /// The sum of the weights of all kept records.
    total_weight: u64,
}

impl<'a> SrvCandidates<'a> {
    /// Collects the candidates from a slice of records.
    pub fn from_records(records: &'a [SrvRecord]) -> Self {
        let top = match records.first() {
            Some(record) => record.priority,
            None => return Self::default(),
        };
        let (_, total_weight, candidates) = records.iter().fold(
            (top, 0u64, VecDeque::new()),
            |(top, total, mut candidates), record| {
                if record.priority > top {
                    return (top, total, candidates);
                }
                let total = if record.priority < top {
                    candidates.clear();
                    0
                } else {
                    total
                };
                let total = total + u64::from(record.weight);
                if record.weight > 0 {
                    candidates.push_back((total, record));
                } else {
                    candidates.push_front((0, record));
                }
                (record.priority, total, candidates)
            },
        );
        SrvCandidates {
            candidates: candidates.into(),
            total_weight,
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Returns the sum of the weights of all candidates.
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Returns an iterator over the candidates in selection order.
    pub fn iter(&self) -> SrvCandidatesIter<'a, '_> {
        SrvCandidatesIter(self.candidates.iter())
    }

    /// Returns the first candidate whose cumulative weight reaches `draw`.
    pub fn pick(&self, draw: u64) -> Option<&'a SrvRecord> {
        self.candidates
            .iter()
            .find(|(weight, _)| *weight >= draw)
            .map(|(_, record)| *record)
    }

    /// Picks a candidate at random.
    ///
    /// If there is only one candidate, it is returned directly. Otherwise
    /// a number is drawn uniformly from zero up to and including the total
    /// weight and passed to [`pick`][Self::pick].
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'a SrvRecord> {
        match self.candidates.as_slice() {
            [] => None,
            [(_, record)] => Some(*record),
            _ => {
                let draw = rng.gen_range(0..=self.total_weight);
                trace!(draw, total_weight = self.total_weight, "SRV draw");
                let res = self.pick(draw);
                if res.is_none() {
                    warn!(
                        draw,
                        total_weight = self.total_weight,
                        "SRV weight ordering produced no target"
                    );
                }
                res
            }
        }
    }
}

//------------ SrvCandidatesIter ---------------------------------------------

/// An iterator over the records of [`SrvCandidates`].
pub struct SrvCandidatesIter<'a, 's>(slice::Iter<'s, (u64, &'a SrvRecord)>);

impl<'a, 's> Iterator for SrvCandidatesIter<'a, 's> {
    type Item = &'a SrvRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, record)| *record)
    }
}

//============ Testing =======================================================
