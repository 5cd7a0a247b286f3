use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One raw increment of the XP time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub raw_amount: f64,
}

impl TimeSeriesPoint {
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, raw_amount: f64) -> Self {
        Self {
            timestamp,
            raw_amount,
        }
    }
}

/// Running total at one timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CumulativePoint {
    pub timestamp: DateTime<Utc>,
    pub cumulative_value: f64,
    /// Increment that produced this point; kept for tooltips.
    pub increment: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradedOutcome {
    pub grade: Option<f64>,
}

impl GradedOutcome {
    #[must_use]
    pub fn new(grade: Option<f64>) -> Self {
        Self { grade }
    }
}

/// Pass/fail aggregate for the donut chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutcomeTally {
    pub pass_count: u32,
    pub fail_count: u32,
}

impl OutcomeTally {
    #[must_use]
    pub fn total(self) -> u32 {
        self.pass_count + self.fail_count
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.total() == 0
    }

    /// Pass share in `0.0..=1.0`; zero for an empty tally.
    #[must_use]
    pub fn pass_ratio(self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        f64::from(self.pass_count) / f64::from(self.total())
    }

    /// Rounded integer percentage shown in the donut center.
    #[must_use]
    pub fn pass_percentage(self) -> u32 {
        (self.pass_ratio() * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{CumulativePoint, OutcomeTally};

    #[test]
    fn cumulative_point_serializes_timestamp_as_rfc3339() {
        let point = CumulativePoint {
            timestamp: Utc
                .with_ymd_and_hms(2024, 1, 2, 0, 0, 0)
                .single()
                .expect("time"),
            cumulative_value: 15.0,
            increment: 5.0,
        };
        let json = serde_json::to_string(&point).expect("serialize");
        assert!(json.contains(r#""timestamp":"2024-01-02T00:00:00Z""#));
        let back: CumulativePoint = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, point);
    }

    #[test]
    fn percentage_rounds_half_up() {
        let tally = OutcomeTally {
            pass_count: 2,
            fail_count: 1,
        };
        assert_eq!(tally.pass_percentage(), 67);
        assert_eq!(OutcomeTally::default().pass_percentage(), 0);
    }
}
