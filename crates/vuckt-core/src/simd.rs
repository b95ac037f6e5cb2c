//! Zero-copy reinterpretation between `Int3` and the native 128-bit integer vector.
//!
//! Only compiled on targets that have such a vector type. The assertions below
//! stop the build if its size or alignment ever disagrees with `Int3`.

use crate::Int3;
use std::mem;

/// The platform's 128-bit integer SIMD vector
#[cfg(target_arch = "x86_64")]
pub type SimdInt3 = std::arch::x86_64::__m128i;

#[cfg(target_arch = "x86")]
pub type SimdInt3 = std::arch::x86::__m128i;

#[cfg(target_arch = "aarch64")]
pub type SimdInt3 = std::arch::aarch64::int32x4_t;

const _: () = assert!(mem::size_of::<Int3>() == mem::size_of::<SimdInt3>());
const _: () = assert!(mem::align_of::<Int3>() == mem::align_of::<SimdInt3>());

impl Int3 {
    /// Reinterpret as a SIMD vector. `x`, `y`, `z` land in lanes 0 to 2.
    #[inline(always)]
    pub fn to_simd(self) -> SimdInt3 {
        bytemuck::cast(self)
    }

    /// Reinterpret a SIMD vector. Lanes 0 to 2 become `x`, `y`, `z`; lane 3 is dropped
    /// into padding.
    #[inline(always)]
    pub fn from_simd(v: SimdInt3) -> Self {
        bytemuck::cast(v)
    }
}

impl From<Int3> for SimdInt3 {
    #[inline(always)]
    fn from(v: Int3) -> Self {
        v.to_simd()
    }
}

impl From<SimdInt3> for Int3 {
    #[inline(always)]
    fn from(v: SimdInt3) -> Self {
        Int3::from_simd(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [[i32; 3]; 5] = [
        [0, 0, 0],
        [1, 2, 3],
        [i32::MIN, i32::MAX, i32::MIN],
        [i32::MIN, 0, i32::MAX],
        [-179_424_720, 2_038_074_496, -982_450_304],
    ];

    fn lanes(v: SimdInt3) -> [i32; 4] {
        bytemuck::cast(v)
    }

    #[test]
    fn test_layout_matches_simd() {
        assert_eq!(mem::size_of::<Int3>(), mem::size_of::<SimdInt3>());
        assert_eq!(mem::align_of::<Int3>(), mem::align_of::<SimdInt3>());
    }

    #[test]
    fn test_simd_roundtrip() {
        for arr in SAMPLES {
            let v = Int3::from_array(arr);
            assert_eq!(Int3::from_simd(v.to_simd()), v);
        }
    }

    #[test]
    fn test_lane_order() {
        for arr in SAMPLES {
            let l = lanes(Int3::from_array(arr).to_simd());
            assert_eq!([l[0], l[1], l[2]], arr);
        }
    }

    #[test]
    fn test_fourth_lane_ignored() {
        let simd: SimdInt3 = bytemuck::cast([7i32, 8, 9, 1234]);
        let v = Int3::from_simd(simd);
        assert_eq!(v, Int3::new(7, 8, 9));
    }

    #[test]
    fn test_from_impls() {
        let v = Int3::new(-3, 0, 3);
        let simd: SimdInt3 = v.into();
        assert_eq!(Int3::from(simd), v);
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn test_simd_add_wraps() {
        use std::arch::x86_64::_mm_add_epi32;

        let a = Int3::new(i32::MAX, 1, -1);
        let b = Int3::new(1, 2, i32::MIN);
        // SSE2 is part of the x86_64 baseline.
        #[allow(unused_unsafe)]
        let sum = Int3::from_simd(unsafe { _mm_add_epi32(a.to_simd(), b.to_simd()) });
        assert_eq!(
            sum,
            Int3::new(
                a.x.wrapping_add(b.x),
                a.y.wrapping_add(b.y),
                a.z.wrapping_add(b.z)
            )
        );
    }
}
