use crate::animation::Animatable;

/// A 4x4 transformation matrix stored in row-major order.
///
/// Element transforms are 2D affine (translate, rotate, scale); layer effects
/// such as flips use the full 3D form with a perspective term.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Matrix data in row-major order: [row0, row1, row2, row3]
    pub data: [f32; 16],
}

impl Transform {
    /// Identity matrix (no transformation)
    pub const IDENTITY: Self = Self {
        data: [
            1.0, 0.0, 0.0, 0.0, // row 0
            0.0, 1.0, 0.0, 0.0, // row 1
            0.0, 0.0, 1.0, 0.0, // row 2
            0.0, 0.0, 0.0, 1.0, // row 3
        ],
    };

    /// Create a translation transform
    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, x, // row 0
                0.0, 1.0, 0.0, y, // row 1
                0.0, 0.0, 1.0, 0.0, // row 2
                0.0, 0.0, 0.0, 1.0, // row 3
            ],
        }
    }

    /// Create a rotation transform around the Z axis (2D rotation)
    pub fn rotate(angle_radians: f32) -> Self {
        let cos = angle_radians.cos();
        let sin = angle_radians.sin();
        Self {
            data: [
                cos, -sin, 0.0, 0.0, // row 0
                sin, cos, 0.0, 0.0, // row 1
                0.0, 0.0, 1.0, 0.0, // row 2
                0.0, 0.0, 0.0, 1.0, // row 3
            ],
        }
    }

    /// Create a rotation of `angle_radians` around the axis (x, y, z).
    ///
    /// A zero-length axis yields the identity.
    pub fn rotate_axis(angle_radians: f32, x: f32, y: f32, z: f32) -> Self {
        let len = (x * x + y * y + z * z).sqrt();
        if len < 1e-6 {
            return Self::IDENTITY;
        }
        let (x, y, z) = (x / len, y / len, z / len);
        let cos = angle_radians.cos();
        let sin = angle_radians.sin();
        let t = 1.0 - cos;

        // Rodrigues rotation formula
        Self {
            data: [
                t * x * x + cos,
                t * x * y - sin * z,
                t * x * z + sin * y,
                0.0, // row 0
                t * x * y + sin * z,
                t * y * y + cos,
                t * y * z - sin * x,
                0.0, // row 1
                t * x * z - sin * y,
                t * y * z + sin * x,
                t * z * z + cos,
                0.0, // row 2
                0.0,
                0.0,
                0.0,
                1.0, // row 3
            ],
        }
    }

    /// Identity with the perspective term set, so depth feeds into w.
    ///
    /// `m34` follows the usual layer convention: `-1 / eye_distance`.
    pub fn perspective(m34: f32) -> Self {
        let mut t = Self::IDENTITY;
        // Row-major storage: row 3, column 2 feeds z into w
        t.data[14] = m34;
        t
    }

    /// Create a non-uniform scale transform
    pub fn scale_xy(sx: f32, sy: f32) -> Self {
        Self {
            data: [
                sx, 0.0, 0.0, 0.0, // row 0
                0.0, sy, 0.0, 0.0, // row 1
                0.0, 0.0, 1.0, 0.0, // row 2
                0.0, 0.0, 0.0, 1.0, // row 3
            ],
        }
    }

    /// Build an element transform from preset geometry.
    ///
    /// The order is fixed: scale, then translation, then rotation
    /// (`rotate ∘ (translate ∘ scale)`). Swapping it changes the result for
    /// any nonzero rotation.
    pub fn compose(x: f32, y: f32, scale_x: f32, scale_y: f32, rotate: f32) -> Self {
        let translate_and_scale = Self::translate(x, y).then(&Self::scale_xy(scale_x, scale_y));
        Self::rotate(rotate).then(&translate_and_scale)
    }

    /// Compose this transform with another: self * other
    /// Applies `other` first, then `self`.
    pub fn then(&self, other: &Transform) -> Transform {
        let a = &self.data;
        let b = &other.data;

        // Row-major indexing: element at row i, col j is at index i*4 + j
        let mut result = [0.0f32; 16];

        for i in 0..4 {
            for j in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += a[i * 4 + k] * b[k * 4 + j];
                }
                result[i * 4 + j] = sum;
            }
        }

        Transform { data: result }
    }

    /// Transform a 2D point by this matrix
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        let new_x = self.data[0] * x + self.data[1] * y + self.data[3];
        let new_y = self.data[4] * x + self.data[5] * y + self.data[7];
        (new_x, new_y)
    }

    /// Translation component of a 2D affine transform
    pub fn translation(&self) -> (f32, f32) {
        (self.data[3], self.data[7])
    }

    /// Check if this is the identity transform
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

/// Free-function form of [`Transform::compose`].
pub fn compose(x: f32, y: f32, scale_x: f32, scale_y: f32, rotate: f32) -> Transform {
    Transform::compose(x, y, scale_x, scale_y, rotate)
}

impl Animatable for Transform {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let mut data = [0.0f32; 16];
        for (i, value) in data.iter_mut().enumerate() {
            *value = from.data[i] + (to.data[i] - from.data[i]) * t;
        }
        Transform { data }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
