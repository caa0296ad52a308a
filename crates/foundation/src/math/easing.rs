//! Easing curves for reveal and camera interpolation.
//!
//! All functions map progress in `[0, 1]` to an eased value with exact
//! endpoints: `f(0) == 0` and `f(1) == 1`.

/// Back-overshoot coefficient for [`ease_out_back`].
pub const BACK_OVERSHOOT: f64 = 1.70158;

/// Overshoot-and-settle cubic.
///
/// Rises past 1.0 (peak bounded by `1.0 + BACK_OVERSHOOT`) before settling
/// back to exactly 1.0 at `t == 1`.
pub fn ease_out_back(t: f64) -> f64 {
    let c1 = BACK_OVERSHOOT;
    let c3 = c1 + 1.0;
    let u = t - 1.0;
    1.0 + c3 * u * u * u + c1 * u * u
}

/// Symmetric cubic: slow in, slow out.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Scalar linear interpolation; `t` is not clamped.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::{BACK_OVERSHOOT, ease_in_out_cubic, ease_out_back, lerp};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn ease_out_back_endpoints_are_exact() {
        assert_close(ease_out_back(0.0), 0.0, 1e-12);
        assert_close(ease_out_back(1.0), 1.0, 1e-12);
    }

    #[test]
    fn ease_out_back_overshoot_is_bounded() {
        let mut peak = f64::MIN;
        for i in 0..=1000 {
            let t = i as f64 / 1000.0;
            peak = peak.max(ease_out_back(t));
        }
        assert!(peak > 1.0, "curve must overshoot, peak was {peak}");
        assert!(
            peak <= 1.0 + BACK_OVERSHOOT,
            "peak {peak} exceeds overshoot bound"
        );
    }

    #[test]
    fn ease_in_out_cubic_endpoints_and_midpoint() {
        assert_close(ease_in_out_cubic(0.0), 0.0, 1e-12);
        assert_close(ease_in_out_cubic(0.5), 0.5, 1e-12);
        assert_close(ease_in_out_cubic(1.0), 1.0, 1e-12);
        assert!(ease_in_out_cubic(0.25) < 0.25);
        assert!(ease_in_out_cubic(0.75) > 0.75);
    }

    #[test]
    fn lerp_basics() {
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
    }
}
