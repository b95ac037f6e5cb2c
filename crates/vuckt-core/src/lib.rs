//! Vuckt Core - SIMD-layout integer vectors
//!
//! This crate provides:
//! - `Int3` - Three `i32`s laid out like a 128-bit SIMD register
//! - `SimdInt3` - The native vector `Int3` reinterprets to (x86, x86_64, aarch64 only)
//! - Boxing of `Int3` into `vuckt_value::Value`
//! - `glam::IVec3` conversions (feature `glam`)

mod boxed;
mod int3;
#[cfg(feature = "glam")]
mod interop;
#[cfg(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64"))]
mod simd;

pub use int3::Int3;
#[cfg(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64"))]
pub use simd::SimdInt3;
pub use vuckt_value::{Value, ValueError};
