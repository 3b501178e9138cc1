use super::scalar::Scalar;
use super::vec2::Vec2;
use super::vecn::VecN;

pub type Vec3<T> = VecN<T, 3>;
pub type Vec3i = Vec3<i32>;
pub type Vec3f = Vec3<f32>;

impl<T: Copy> VecN<T, 3> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
    }

    pub fn x(&self) -> T {
        self.0[0]
    }

    pub fn y(&self) -> T {
        self.0[1]
    }

    pub fn z(&self) -> T {
        self.0[2]
    }

    pub fn set_x(&mut self, x: T) {
        self.0[0] = x;
    }

    pub fn set_y(&mut self, y: T) {
        self.0[1] = y;
    }

    pub fn set_z(&mut self, z: T) {
        self.0[2] = z;
    }

    /// Drop the `z` component.
    pub fn truncate(self) -> Vec2<T> {
        Vec2::new(self.0[0], self.0[1])
    }
}

impl<T: Scalar> VecN<T, 3> {
    pub const ZERO: Self = Self([T::ZERO, T::ZERO, T::ZERO]);
    pub const ONE: Self = Self([T::ONE, T::ONE, T::ONE]);
    pub const RIGHT: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    pub const UP: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    pub const FORWARD: Self = Self([T::ZERO, T::ZERO, T::ONE]);

    /// Returns the cross product of two vectors.
    /// The resulting vector is perpendicular to both input vectors
    /// (right-hand rule).
    pub fn cross(&self, other: &Self) -> Self {
        let (a, b) = (self, other);
        Self([
            a.y() * b.z() - a.z() * b.y(),
            a.z() * b.x() - a.x() * b.z(),
            a.x() * b.y() - a.y() * b.x(),
        ])
    }
}
