//! Pick records.
//!
//! A pick is held as a structured record but travels over the wire as a
//! single space-joined string, `"<drafter> <option> <sequence>"`, which is
//! what existing clients split on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// One completed pick within a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickRecord {
    /// The drafter who made the pick.
    pub drafter: String,
    /// The option that was taken.
    pub option: String,
    /// 1-based position of this pick within the draft.
    pub sequence: usize,
}

/// Failure to decode the wire form of a pick record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickRecordParseError {
    /// Fewer than three space-delimited fields.
    #[error("pick record '{0}' must have the form '<drafter> <option> <sequence>'")]
    Malformed(String),

    /// The trailing field is not a positive integer.
    #[error("pick record '{0}' has an invalid sequence number")]
    BadSequence(String),
}

impl fmt::Display for PickRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.drafter, self.option, self.sequence)
    }
}

impl FromStr for PickRecord {
    type Err = PickRecordParseError;

    /// The drafter is the first token and the sequence the last; anything in
    /// between is the option, so an option may contain spaces but a drafter
    /// may not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (drafter, rest) = s
            .split_once(' ')
            .ok_or_else(|| PickRecordParseError::Malformed(s.to_owned()))?;
        let (option, sequence) = rest
            .rsplit_once(' ')
            .ok_or_else(|| PickRecordParseError::Malformed(s.to_owned()))?;
        let sequence: usize = sequence
            .parse()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| PickRecordParseError::BadSequence(s.to_owned()))?;

        Ok(Self {
            drafter: drafter.to_owned(),
            option: option.to_owned(),
            sequence,
        })
    }
}

impl Serialize for PickRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PickRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
