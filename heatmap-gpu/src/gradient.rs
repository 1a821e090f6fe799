use glam::{vec3, Vec3, Vec4};

/// Stops of the heat palette, from coldest to hottest.
pub const HEAT_COLORS: [Vec3; 3] = [
    vec3(0.0, 0.0, 1.0),
    vec3(0.0, 1.0, 0.0),
    vec3(1.0, 0.0, 0.0),
];

/// Linearly interpolates between evenly spaced color stops.
///
/// `progress` is expected to be within `0.0..=1.0`; anything below returns the
/// first stop and anything above returns the last one.
///
/// There must be at least two stops, which is checked at compile time.
pub fn gradient<const N: usize>(colors: [Vec3; N], progress: f32) -> Vec3 {
    const { assert!(N >= 2, "gradient needs at least two stops") };

    if progress <= 0.0 {
        return colors[0];
    }

    let step = 1.0 / (N as f32 - 1.0);
    let mut i = 0;

    while i < (N - 1) {
        let min = step * (i as f32);
        let max = step * (i as f32 + 1.0);

        if progress >= min && progress <= max {
            let rhs = (progress - min) / step;
            let lhs = 1.0 - rhs;

            return lhs * colors[i] + rhs * colors[i + 1];
        }

        i += 1;
    }

    colors[N - 1]
}

/// Returns an opaque heat color for given normalized value.
pub fn heat(progress: f32) -> Vec4 {
    gradient(HEAT_COLORS, progress).extend(1.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::vec4;

    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(HEAT_COLORS[0], gradient(HEAT_COLORS, -1.0));
        assert_eq!(HEAT_COLORS[0], gradient(HEAT_COLORS, 0.0));
        assert_eq!(HEAT_COLORS[2], gradient(HEAT_COLORS, 1.0));
        assert_eq!(HEAT_COLORS[2], gradient(HEAT_COLORS, 5.0));
    }

    #[test]
    fn stops() {
        let actual = gradient(HEAT_COLORS, 0.5);

        assert_relative_eq!(actual.x, 0.0);
        assert_relative_eq!(actual.y, 1.0);
        assert_relative_eq!(actual.z, 0.0);
    }

    #[test]
    fn interpolation() {
        let actual = gradient(HEAT_COLORS, 0.25);

        assert_relative_eq!(actual.x, 0.0);
        assert_relative_eq!(actual.y, 0.5);
        assert_relative_eq!(actual.z, 0.5);

        let actual = gradient(HEAT_COLORS, 0.75);

        assert_relative_eq!(actual.x, 0.5);
        assert_relative_eq!(actual.y, 0.5);
        assert_relative_eq!(actual.z, 0.0);
    }

    #[test]
    fn two_stops() {
        let actual = gradient([Vec3::ZERO, Vec3::ONE], 0.3);

        assert_relative_eq!(actual.x, 0.3);
        assert_relative_eq!(actual.y, 0.3);
        assert_relative_eq!(actual.z, 0.3);
    }

    #[test]
    fn heat_is_opaque() {
        assert_eq!(vec4(0.0, 0.0, 1.0, 1.0), heat(0.0));
        assert_eq!(vec4(1.0, 0.0, 0.0, 1.0), heat(1.0));
    }
}
