use crate::error::{UmbraError, UmbraResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A positional annotation span with 1-based inclusive residue bounds.
///
/// Serialized as a `[start, end]` pair, the layout every store document
/// uses for interval data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[u32; 2]", into = "[u32; 2]")]
pub struct Interval {
    start: u32,
    end: u32,
}

impl Interval {
    pub fn new(start: u32, end: u32) -> UmbraResult<Self> {
        if end < start {
            return Err(UmbraError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Residue span under the `end - start` convention shared with every
    /// downstream consumer of coverage numbers.
    pub fn length(&self) -> u32 {
        self.end - self.start
    }

    /// Smallest interval containing both `self` and `other`.
    pub fn bounding_union(&self, other: Interval) -> Interval {
        Interval {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Two intervals overlap when their combined lengths exceed the span of
    /// their bounding union. Intervals that merely touch at an endpoint do
    /// not overlap under the `end - start` length convention.
    pub fn overlaps(&self, other: Interval) -> bool {
        let span = self.bounding_union(other);
        u64::from(self.length()) + u64::from(other.length()) > u64::from(span.length())
    }
}

impl TryFrom<[u32; 2]> for Interval {
    type Error = UmbraError;

    fn try_from(raw: [u32; 2]) -> UmbraResult<Self> {
        Interval::new(raw[0], raw[1])
    }
}

impl From<Interval> for [u32; 2] {
    fn from(interval: Interval) -> Self {
        [interval.start, interval.end]
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
