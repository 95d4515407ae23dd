//! Turn a producer's wins into consecutive-win intervals.

use crate::error::Result;
use crate::model::{AwardInterval, ProducerRecord};

/// One interval per consecutive pair of wins, in chronological order.
///
/// Fewer than two wins yields nothing. Two wins in the same year fail the
/// whole derivation rather than produce a zero gap.
pub fn derive_intervals(record: &ProducerRecord) -> Result<Vec<AwardInterval>> {
    let years = record.win_years();
    if years.len() < 2 {
        return Ok(Vec::new());
    }

    years
        .windows(2)
        .map(|pair| AwardInterval::between(record.name.as_str(), pair[0], pair[1]))
        .collect()
}
