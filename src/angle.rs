/// Normalize an accumulated rotation to a heading in `[0, 360)`.
///
/// Uses a floored modulus so the result is never negative regardless of the
/// input's sign: `to_heading(-10.0)` is `350.0`, not `-10.0`. Revolution
/// count is discarded; only the facing direction remains.
///
/// `rotation` must be finite. A NaN or infinite value is an upstream sensor
/// fault this function cannot repair, so it is a contract violation here
/// rather than something to paper over.
pub fn to_heading(rotation: f64) -> f64 {
    debug_assert!(rotation.is_finite(), "non-finite rotation: {rotation}");
    ((rotation % 360.0) + 360.0) % 360.0
}

/// Normalize an accumulated rotation to a signed angle in `(-180, 180]`.
///
/// The sign picks the short way around: positive turns clockwise (right),
/// negative counter-clockwise (left). `to_angle(270.0)` is `-90.0`; the
/// half-turn boundary itself maps to `+180.0`.
pub fn to_angle(rotation: f64) -> f64 {
    let heading = to_heading(rotation);
    if heading > 180.0 {
        heading - 360.0
    } else {
        heading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_to_heading_wraparound() {
        assert_eq!(to_heading(0.0), 0.0);
        assert_eq!(to_heading(359.0), 359.0);
        assert_eq!(to_heading(360.0), 0.0);
        assert_eq!(to_heading(370.0), 10.0);
        assert_eq!(to_heading(-10.0), 350.0);
        assert_eq!(to_heading(-360.0), 0.0);
        assert_eq!(to_heading(720.0), 0.0);
        assert_eq!(to_heading(-725.0), 355.0);
    }

    #[test]
    fn test_to_heading_stays_in_range() {
        // Sweep a few revolutions either way with an awkward step
        let mut r = -1080.0;
        while r <= 1080.0 {
            let h = to_heading(r);
            assert!(
                (0.0..360.0).contains(&h),
                "to_heading({}) = {} out of range",
                r,
                h
            );
            r += 7.3;
        }
    }

    #[test]
    fn test_to_heading_periodicity() {
        for r in [-543.2, -10.0, 0.0, 10.3, 179.9, 270.0, 1234.5] {
            assert_relative_eq!(to_heading(r + 360.0), to_heading(r), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_to_angle_folds_long_way_round() {
        assert_eq!(to_angle(0.0), 0.0);
        assert_eq!(to_angle(90.0), 90.0);
        assert_eq!(to_angle(270.0), -90.0);
        assert_eq!(to_angle(-270.0), 90.0);
        assert_eq!(to_angle(-90.0), -90.0);
        assert_eq!(to_angle(359.0), -1.0);
    }

    #[test]
    fn test_to_angle_half_turn_is_positive() {
        // Both half-turn representations land on +180, never -180
        assert_eq!(to_angle(180.0), 180.0);
        assert_eq!(to_angle(-180.0), 180.0);
        assert_eq!(to_angle(540.0), 180.0);
        assert_eq!(to_angle(-540.0), 180.0);
    }

    #[test]
    fn test_to_angle_stays_in_range() {
        let mut r = -1080.0;
        while r <= 1080.0 {
            let a = to_angle(r);
            assert!(
                -180.0 < a && a <= 180.0,
                "to_angle({}) = {} out of range",
                r,
                a
            );
            r += 7.3;
        }
    }

    #[test]
    fn test_to_angle_periodicity() {
        for r in [-543.2, -180.0, 0.0, 10.3, 179.9, 270.0, 1234.5] {
            assert_relative_eq!(to_angle(r + 360.0), to_angle(r), epsilon = 1e-9);
        }
    }
}
