use smallvec::SmallVec;

pub(super) type Ticks = SmallVec<[f64; 6]>;

/// Splits `range` into `intervals` equal steps and returns every boundary,
/// both ends included, so `intervals + 1` ticks.
///
/// A degenerate range collapses to a single tick at its start.
pub(super) fn axis_ticks(range: (f64, f64), intervals: usize) -> Ticks {
    if intervals == 0 || range.0 == range.1 {
        return SmallVec::from_slice(&[range.0]);
    }

    let span = range.1 - range.0;
    let denominator = intervals as f64;
    (0..=intervals)
        .map(|index| {
            let ratio = (index as f64) / denominator;
            range.0 + span * ratio
        })
        .collect()
}
