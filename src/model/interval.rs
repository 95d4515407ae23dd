//! Award intervals and the aggregated min/max result.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Gap in years between two consecutive wins by one producer.
///
/// Only constructible through [`AwardInterval::new`], which rejects
/// non-increasing years and gaps that don't match them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardInterval {
    producer: String,
    interval: i32,
    previous_win: i32,
    following_win: i32,
}

impl AwardInterval {
    pub fn new(
        producer: impl Into<String>,
        interval: i32,
        previous_win: i32,
        following_win: i32,
    ) -> Result<Self> {
        let producer = producer.into();
        if interval < 0
            || previous_win >= following_win
            || following_win - previous_win != interval
        {
            return Err(Error::InvalidInterval {
                producer,
                previous_win,
                following_win,
                interval,
            });
        }
        Ok(Self {
            producer,
            interval,
            previous_win,
            following_win,
        })
    }

    /// Interval between two wins, with the gap taken from the years.
    pub fn between(producer: impl Into<String>, previous_win: i32, following_win: i32) -> Result<Self> {
        Self::new(
            producer,
            following_win - previous_win,
            previous_win,
            following_win,
        )
    }

    pub fn producer(&self) -> &str {
        &self.producer
    }

    pub fn interval(&self) -> i32 {
        self.interval
    }

    pub fn previous_win(&self) -> i32 {
        self.previous_win
    }

    pub fn following_win(&self) -> i32 {
        self.following_win
    }
}

/// Public shape of one interval in the aggregated result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerIntervalItem {
    pub producer: String,
    pub interval: i32,
    pub previous_win: i32,
    pub following_win: i32,
}

impl From<AwardInterval> for ProducerIntervalItem {
    fn from(interval: AwardInterval) -> Self {
        Self {
            producer: interval.producer,
            interval: interval.interval,
            previous_win: interval.previous_win,
            following_win: interval.following_win,
        }
    }
}

/// Producers with the shortest (`min`) and longest (`max`) gaps between wins.
///
/// Both lists are empty when no producer has won twice. When every gap is
/// the same, the same items appear in both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardIntervals {
    pub min: Vec<ProducerIntervalItem>,
    pub max: Vec<ProducerIntervalItem>,
}

impl AwardIntervals {
    pub fn is_empty(&self) -> bool {
        self.min.is_empty() && self.max.is_empty()
    }
}
