pub mod arc;
pub mod cumulative;
pub mod outcome;
pub mod path;
pub mod primitives;
pub mod records;
pub mod scale;
pub mod types;

pub use arc::{ArcSweep, WedgeGeometry, donut_wedge_path, polar_to_cartesian};
pub use cumulative::{accumulate, time_series_from_records};
pub use outcome::{is_pass, tally_outcomes};
pub use path::{PathCommand, PathData, fmt_coord};
pub use primitives::{datetime_to_unix_seconds, parse_created_at};
pub use records::{ProjectObject, ProjectResult, XpRecord, graded_only};
pub use scale::{angle_for_share, time_scale, value_scale};
pub use types::{CumulativePoint, GradedOutcome, OutcomeTally, TimeSeriesPoint};
