//! Vuckt Value - Boxes for plain-old-data values
//!
//! This crate provides a small reference-oriented container that other Vuckt
//! crates box their value types into:
//! - `Value` - Immutable, reference-counted, type-tagged byte payload
//! - `ValueType` - Trait implemented by boxable types
//! - Error types and Result alias

mod encoding;
mod error;
mod value;

pub use encoding::ValueType;
pub use error::{Result, ValueError};
pub use value::Value;
