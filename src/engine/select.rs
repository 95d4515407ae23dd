//! Pick the global shortest and longest intervals.

use crate::model::{AwardInterval, AwardIntervals, ProducerIntervalItem};

/// Keep every interval whose gap equals the global minimum or maximum.
///
/// Input order is preserved within each list. Ties are all kept, and when
/// min and max coincide the same intervals land in both lists.
pub fn select_extremes(intervals: Vec<AwardInterval>) -> AwardIntervals {
    let Some((min_gap, max_gap)) = intervals.iter().fold(None, |acc, i| {
        let gap = i.interval();
        Some(match acc {
            None => (gap, gap),
            Some((lo, hi)) => (gap.min(lo), gap.max(hi)),
        })
    }) else {
        return AwardIntervals::default();
    };

    let min = intervals
        .iter()
        .filter(|i| i.interval() == min_gap)
        .cloned()
        .map(ProducerIntervalItem::from)
        .collect();
    let max = intervals
        .into_iter()
        .filter(|i| i.interval() == max_gap)
        .map(ProducerIntervalItem::from)
        .collect();

    AwardIntervals { min, max }
}
