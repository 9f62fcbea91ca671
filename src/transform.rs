/// 2D transformation applied at paint time, about the centre of the layer.
///
/// Transforms never affect layout or hit-testing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Scale in x and y (1.0 = no scale)
    pub scale: (f32, f32),
    /// Rotation in radians (positive is clockwise on a y-down screen)
    pub rotate: f32,
}

impl Transform {
    /// Identity transform (no transformation)
    pub const IDENTITY: Self = Self {
        scale: (1.0, 1.0),
        rotate: 0.0,
    };

    /// Create a scale transform
    pub fn scale(x: f32, y: f32) -> Self {
        Self {
            scale: (x, y),
            ..Self::IDENTITY
        }
    }

    /// Create a uniform scale transform
    pub fn scale_uniform(scale: f32) -> Self {
        Self::scale(scale, scale)
    }

    /// Create a rotation transform (in radians)
    pub fn rotate(radians: f32) -> Self {
        Self {
            rotate: radians,
            ..Self::IDENTITY
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_leave_other_parts_identity() {
        let scaled = Transform::scale_uniform(0.4);
        assert_eq!(scaled.scale, (0.4, 0.4));
        assert_eq!(scaled.rotate, 0.0);

        let rotated = Transform::rotate(-std::f32::consts::FRAC_PI_4);
        assert_eq!(rotated.scale, (1.0, 1.0));
        assert_eq!(rotated.rotate, -std::f32::consts::FRAC_PI_4);
    }
}
