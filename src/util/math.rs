//! Small numeric helpers for coordinate mapping.

/// Clamps `value` to the inclusive range `[lo, hi]`.
///
/// Implemented as `max(min(value, hi), lo)`; a NaN input therefore
/// resolves to a bound rather than propagating.
pub(crate) fn clip(value: f32, lo: f32, hi: f32) -> f32 {
    value.min(hi).max(lo)
}

#[cfg(test)]
mod tests {
    use super::clip;

    #[test]
    fn clip_keeps_in_range_values() {
        assert_eq!(clip(0.5, 0.0, 1.0), 0.5);
    }

    #[test]
    fn clip_saturates_at_bounds() {
        assert_eq!(clip(-3.0, 0.0, 639.0), 0.0);
        assert_eq!(clip(1e6, 0.0, 639.0), 639.0);
    }

    #[test]
    fn clip_resolves_nan_to_a_bound() {
        let clipped = clip(f32::NAN, 0.0, 10.0);
        assert!(clipped.is_finite());
        assert!((0.0..=10.0).contains(&clipped));
    }
}
