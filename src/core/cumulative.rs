use tracing::trace;

use crate::core::primitives::parse_created_at;
use crate::core::{CumulativePoint, TimeSeriesPoint, XpRecord};
use crate::error::ChartResult;

/// Converts raw XP records into time-series points, preserving order.
///
/// Fails on the first unparseable `createdAt`.
pub fn time_series_from_records(records: &[XpRecord]) -> ChartResult<Vec<TimeSeriesPoint>> {
    records
        .iter()
        .map(|record| {
            let timestamp = parse_created_at(&record.created_at)?;
            Ok(TimeSeriesPoint::new(timestamp, record.amount))
        })
        .collect()
}

/// Running-sum transform. Input order is trusted and never re-sorted.
#[must_use]
pub fn accumulate(points: &[TimeSeriesPoint]) -> Vec<CumulativePoint> {
    let mut running = 0.0;
    let cumulative: Vec<CumulativePoint> = points
        .iter()
        .map(|point| {
            running += point.raw_amount;
            CumulativePoint {
                timestamp: point.timestamp,
                cumulative_value: running,
                increment: point.raw_amount,
            }
        })
        .collect();
    trace!(count = cumulative.len(), total = running, "accumulated series");
    cumulative
}
