use crate::error::{ChartError, ChartResult};

fn ensure_finite(values: &[(&str, f64)]) -> ChartResult<()> {
    for (name, value) in values {
        if !value.is_finite() {
            return Err(ChartError::InvalidDomain(format!("{name} must be finite")));
        }
    }
    Ok(())
}

/// Linear map of `value` from `[domain_min, domain_max]` onto `[0, range_max]`.
///
/// A zero-width domain maps every value to pixel 0.
pub fn time_scale(value: f64, domain_min: f64, domain_max: f64, range_max: f64) -> ChartResult<f64> {
    ensure_finite(&[
        ("value", value),
        ("domain min", domain_min),
        ("domain max", domain_max),
        ("range max", range_max),
    ])?;

    let span = domain_max - domain_min;
    if span == 0.0 {
        return Ok(0.0);
    }
    Ok((value - domain_min) / span * range_max)
}

/// Inverted linear map of `value` from `[0, domain_max]` onto `[range_max, 0]`.
///
/// Pixel y grows downward, so larger values land closer to 0. A zero
/// `domain_max` keeps every value on the baseline (`range_max`).
pub fn value_scale(value: f64, domain_max: f64, range_max: f64) -> ChartResult<f64> {
    ensure_finite(&[
        ("value", value),
        ("domain max", domain_max),
        ("range max", range_max),
    ])?;

    if domain_max == 0.0 {
        return Ok(range_max);
    }
    Ok(range_max - (value / domain_max * range_max))
}

/// Angular share in degrees of `part` out of `total`.
pub fn angle_for_share(part: u32, total: u32) -> ChartResult<f64> {
    if total == 0 {
        return Err(ChartError::InvalidDomain(
            "angle share needs a non-zero total".to_owned(),
        ));
    }
    Ok(f64::from(part) / f64::from(total) * 360.0)
}

#[cfg(test)]
mod tests {
    use super::{angle_for_share, time_scale, value_scale};

    #[test]
    fn time_scale_maps_domain_ends_to_range_ends() {
        assert_eq!(time_scale(10.0, 10.0, 20.0, 400.0).expect("min"), 0.0);
        assert_eq!(time_scale(20.0, 10.0, 20.0, 400.0).expect("max"), 400.0);
        assert_eq!(time_scale(15.0, 10.0, 20.0, 400.0).expect("mid"), 200.0);
    }

    #[test]
    fn value_scale_is_inverted() {
        assert_eq!(value_scale(0.0, 50.0, 200.0).expect("zero"), 200.0);
        assert_eq!(value_scale(50.0, 50.0, 200.0).expect("max"), 0.0);
    }

    #[test]
    fn zero_max_value_scale_stays_on_baseline() {
        assert_eq!(value_scale(0.0, 0.0, 120.0).expect("flat"), 120.0);
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        assert!(time_scale(f64::NAN, 0.0, 1.0, 10.0).is_err());
        assert!(time_scale(0.5, 0.0, f64::INFINITY, 10.0).is_err());
        assert!(value_scale(1.0, f64::NAN, 10.0).is_err());
    }

    #[test]
    fn share_angles() {
        assert_eq!(angle_for_share(2, 3).expect("share"), 240.0);
        assert!(angle_for_share(0, 0).is_err());
    }
}
