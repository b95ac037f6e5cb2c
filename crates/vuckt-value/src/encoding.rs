//! Type encodings for boxable plain-old-data types

use bytemuck::Pod;

/// A plain-old-data type that can be stored in a [`Value`](crate::Value).
///
/// The encoding string tags the bytes inside a box so that a getter can refuse
/// to read them back as a different shape. Two types must never share an
/// encoding unless they share a byte layout.
///
/// Scalars use single-character codes (`i` for `i32`, `q` for `i64`, ...).
/// Structs use `{Name=fields}`, e.g. `{Int3=iii}`.
pub trait ValueType: Pod {
    const ENCODING: &'static str;
}

macro_rules! impl_scalar_value_type {
    ($($ty:ty => $code:literal),* $(,)?) => {
        $(
            impl ValueType for $ty {
                const ENCODING: &'static str = $code;
            }
        )*
    };
}

impl_scalar_value_type!(
    i8 => "c",
    i16 => "s",
    i32 => "i",
    i64 => "q",
    u8 => "C",
    u16 => "S",
    u32 => "I",
    u64 => "Q",
    f32 => "f",
    f64 => "d",
);
