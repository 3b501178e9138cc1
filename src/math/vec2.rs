use super::scalar::Scalar;
use super::vecn::VecN;

pub type Vec2<T> = VecN<T, 2>;
pub type Vec2i = Vec2<i32>;
pub type Vec2f = Vec2<f32>;

impl<T: Copy> VecN<T, 2> {
    pub const fn new(x: T, y: T) -> Self {
        Self([x, y])
    }

    pub fn x(&self) -> T {
        self.0[0]
    }

    pub fn y(&self) -> T {
        self.0[1]
    }

    pub fn set_x(&mut self, x: T) {
        self.0[0] = x;
    }

    pub fn set_y(&mut self, y: T) {
        self.0[1] = y;
    }
}

impl<T: Scalar> VecN<T, 2> {
    pub const ZERO: Self = Self([T::ZERO, T::ZERO]);
    pub const ONE: Self = Self([T::ONE, T::ONE]);
    pub const RIGHT: Self = Self([T::ONE, T::ZERO]);
    pub const UP: Self = Self([T::ZERO, T::ONE]);
}
