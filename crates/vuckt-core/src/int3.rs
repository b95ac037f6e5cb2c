//! Three-component integer vector

use bytemuck::{Pod, Zeroable};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A vector of three `i32`s laid out like a 128-bit SIMD register.
///
/// `x`, `y` and `z` sit in lanes 0 to 2. The fourth lane is padding: it is
/// carried through SIMD reinterpretation but is otherwise invisible, and never
/// takes part in equality, hashing or formatting.
#[repr(C, align(16))]
#[derive(Clone, Copy, Default)]
pub struct Int3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pad: i32,
}

// SAFETY: `repr(C)` with four `i32` fields fills all 16 bytes, so there is no
// implicit padding and every bit pattern is a valid `Int3`.
unsafe impl Zeroable for Int3 {}
unsafe impl Pod for Int3 {}

impl Int3 {
    pub const ZERO: Self = Self::splat(0);
    pub const ONE: Self = Self::splat(1);
    pub const NEG_ONE: Self = Self::splat(-1);
    pub const X: Self = Self::new(1, 0, 0);
    pub const Y: Self = Self::new(0, 1, 0);
    pub const Z: Self = Self::new(0, 0, 1);
    pub const NEG_X: Self = Self::new(-1, 0, 0);
    pub const NEG_Y: Self = Self::new(0, -1, 0);
    pub const NEG_Z: Self = Self::new(0, 0, -1);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z, pad: 0 }
    }

    /// All three components set to `v`
    pub const fn splat(v: i32) -> Self {
        Self::new(v, v, v)
    }

    pub const fn from_array(arr: [i32; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    pub const fn to_array(&self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    pub const fn with_x(mut self, x: i32) -> Self {
        self.x = x;
        self
    }

    pub const fn with_y(mut self, y: i32) -> Self {
        self.y = y;
        self
    }

    pub const fn with_z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }
}

impl PartialEq for Int3 {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl Eq for Int3 {}

impl Hash for Int3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_array().hash(state);
    }
}

impl fmt::Debug for Int3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Int3")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

impl fmt::Display for Int3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<[i32; 3]> for Int3 {
    fn from(arr: [i32; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Int3> for [i32; 3] {
    fn from(v: Int3) -> Self {
        v.to_array()
    }
}

impl From<(i32, i32, i32)> for Int3 {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Int3> for (i32, i32, i32) {
    fn from(v: Int3) -> Self {
        (v.x, v.y, v.z)
    }
}
