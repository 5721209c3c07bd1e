//! Range mapping shared by the tilt and parallax transforms.

/// Linearly map `value` from `input` onto `output`, clamping to the input range.
///
/// Either range may be descending (e.g. `[-0.5, 0.5] -> [8, -8]`). A degenerate
/// input range maps everything to `output[0]`.
pub fn map_range(value: f32, input: [f32; 2], output: [f32; 2]) -> f32 {
    let span = input[1] - input[0];
    if span == 0.0 || !span.is_finite() || !value.is_finite() {
        return output[0];
    }
    let t = ((value - input[0]) / span).clamp(0.0, 1.0);
    output[0] + (output[1] - output[0]) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_and_clamps() {
        assert_eq!(map_range(0.0, [-0.5, 0.5], [-8.0, 8.0]), 0.0);
        assert_eq!(map_range(0.5, [-0.5, 0.5], [8.0, -8.0]), -8.0);
        assert_eq!(map_range(2.0, [0.0, 1.0], [0.0, 30.0]), 30.0);
        assert_eq!(map_range(0.25, [0.0, 0.5], [1.0, 0.0]), 0.5);
    }

    #[test]
    fn degenerate_input_range() {
        assert_eq!(map_range(3.0, [1.0, 1.0], [4.0, 9.0]), 4.0);
        assert_eq!(map_range(f32::NAN, [0.0, 1.0], [4.0, 9.0]), 4.0);
    }
}
