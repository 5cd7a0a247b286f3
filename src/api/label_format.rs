use chrono::{DateTime, Utc};

pub(super) fn format_date_label(time: DateTime<Utc>, compact: bool) -> String {
    let pattern = if compact { "%-m/%-d" } else { "%b %-d" };
    time.format(pattern).to_string()
}

pub(super) fn format_tooltip_date(time: DateTime<Utc>) -> String {
    time.format("%b %-d, %Y").to_string()
}

/// Integer label; compact mode rounds thousands to whole `k` (1500 is `2k`).
pub(super) fn format_value_label(value: f64, compact: bool) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    if compact && value >= 1_000.0 {
        return format!("{}k", (value / 1_000.0).round() as i64);
    }
    format!("{}", value.round() as i64)
}

pub(super) fn format_xp(value: f64) -> String {
    format!("{} XP", value.round() as i64)
}

pub(super) fn format_increment(value: f64) -> String {
    let rounded = value.round() as i64;
    if rounded >= 0 {
        format!("+{rounded} XP")
    } else {
        format!("{rounded} XP")
    }
}
