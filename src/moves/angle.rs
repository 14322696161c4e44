//! Circular angle helpers.
//!
//! Body-part rotations are plain degrees around a single axis. Inputs may be
//! any value (a blended pose can hold `360.0`, a library file can hold
//! anything); [`blend_angle`] wraps them into `[0, 360)` before choosing an
//! arc. Its output is stored raw and may leave that range again (e.g. `360.0`
//! when a blend walks through the wrap point). Consumers assign it as an
//! absolute angle, so the output is never re-wrapped here.

/// Wrap an angle into `[0, 360)`.
pub fn normalize(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if a >= 360.0 { 0.0 } else { a }
}

/// Returns true when 0° lies strictly inside the shorter arc between `a` and `b`.
///
/// The direct interval `[min, max]` never contains the wrap point, so the
/// shorter arc crosses it exactly when that interval is longer than 180°.
/// An endpoint sitting on 0° is not "strictly inside".
pub fn zero_in_smaller_arc(a: f32, b: f32) -> bool {
    let a = normalize(a);
    let b = normalize(b);
    if a == 0.0 || b == 0.0 {
        return false;
    }
    (a - b).abs() > 180.0
}

/// Blend `from` towards `to` along the shorter arc.
///
/// `percentage` runs from 0 (result is `from`) to 100 (result is `to`, or an
/// arc-equivalent value 360° away).
pub fn blend_angle(from: f32, to: f32, percentage: f32) -> f32 {
    let mut from = normalize(from);
    let mut to = normalize(to);
    if zero_in_smaller_arc(from, to) {
        // Lift the smaller endpoint so the lerp walks through 360 instead of 180.
        if from < to {
            from += 360.0;
        } else if from > to {
            to += 360.0;
        }
    } else if from == 0.0 && to > 180.0 {
        from = 360.0;
    } else if to == 0.0 && from > 180.0 {
        to = 360.0;
    }
    from + percentage / 100.0 * (to - from)
}

/// Angular distance between two angles, in `[0, 180]`.
pub fn arc_distance(a: f32, b: f32) -> f32 {
    let d = (normalize(a) - normalize(b)).abs();
    if d > 180.0 { 360.0 - d } else { d }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn arc_eq(a: f32, b: f32) -> bool {
        arc_distance(a, b) < EPSILON
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(370.0), 10.0);
        assert_eq!(normalize(-10.0), 350.0);
        assert_eq!(normalize(360.0), 0.0);
        assert_eq!(normalize(0.0), 0.0);
    }

    #[test]
    fn test_zero_in_smaller_arc() {
        assert!(zero_in_smaller_arc(350.0, 10.0));
        assert!(zero_in_smaller_arc(10.0, 350.0));
        assert!(!zero_in_smaller_arc(10.0, 170.0));
        assert!(!zero_in_smaller_arc(90.0, 270.0)); // exactly 180 apart
        assert!(!zero_in_smaller_arc(0.0, 270.0)); // endpoint on zero
    }

    #[test]
    fn test_wrap_forward_goes_through_zero() {
        let mid = blend_angle(350.0, 10.0, 50.0);
        assert!(arc_eq(mid, 0.0), "got {mid}");
        assert!((mid - 360.0).abs() < EPSILON);
    }

    #[test]
    fn test_wrap_backward_goes_through_zero() {
        let mid = blend_angle(10.0, 350.0, 50.0);
        assert!(arc_eq(mid, 0.0), "got {mid}");
    }

    #[test]
    fn test_from_zero_to_large_target() {
        // 0 -> 270 is 90 degrees going backwards, not 270 forwards
        let mid = blend_angle(0.0, 270.0, 50.0);
        assert!((mid - 315.0).abs() < EPSILON);
    }

    #[test]
    fn test_to_zero_from_large_source() {
        let mid = blend_angle(300.0, 0.0, 50.0);
        assert!((mid - 330.0).abs() < EPSILON);
    }

    #[test]
    fn test_inputs_outside_circle_take_short_arc() {
        // -10 is 350: 20 degrees through zero
        let mid = blend_angle(-10.0, 10.0, 50.0);
        assert!(arc_eq(mid, 0.0), "got {mid}");

        // 360 is 0: 10 degrees forward
        let mid = blend_angle(360.0, 10.0, 50.0);
        assert!(arc_eq(mid, 5.0), "got {mid}");

        let mid = blend_angle(370.0, 710.0, 50.0);
        assert!(arc_eq(mid, 0.0), "got {mid}");
    }

    #[test]
    fn test_same_angle_is_constant() {
        for t in [0.0, 13.0, 50.0, 99.0, 100.0] {
            assert_eq!(blend_angle(42.0, 42.0, t), 42.0);
            assert_eq!(blend_angle(0.0, 0.0, t), 0.0);
        }
    }

    #[test]
    fn test_endpoints_are_arc_equivalent() {
        let mut from = 0.0;
        while from < 360.0 {
            let mut to = 0.0;
            while to < 360.0 {
                assert!(arc_eq(blend_angle(from, to, 0.0), from), "{from} -> {to} at 0");
                assert!(arc_eq(blend_angle(from, to, 100.0), to), "{from} -> {to} at 100");
                to += 15.0;
            }
            from += 15.0;
        }
    }

    #[test]
    fn test_path_never_takes_the_long_way() {
        let mut from = 0.0;
        while from < 360.0 {
            let mut to = 0.0;
            while to < 360.0 {
                let start = blend_angle(from, to, 0.0);
                let end = blend_angle(from, to, 100.0);
                assert!((end - start).abs() <= 180.0 + EPSILON, "{from} -> {to}");
                for t in [10.0, 25.0, 50.0, 75.0, 90.0] {
                    let raw = blend_angle(from, to, t);
                    assert!((raw - start).abs() <= 180.0 + EPSILON, "{from} -> {to} at {t}");
                }
                to += 10.0;
            }
            from += 10.0;
        }
    }
}
