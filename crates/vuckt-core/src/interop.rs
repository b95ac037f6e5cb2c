//! Field-by-field conversions to `glam`, available on every target

use crate::Int3;
use glam::IVec3;

impl From<IVec3> for Int3 {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Int3> for IVec3 {
    fn from(v: Int3) -> Self {
        IVec3::new(v.x, v.y, v.z)
    }
}
