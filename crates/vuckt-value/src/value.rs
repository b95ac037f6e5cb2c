//! Reference-counted value boxes

use crate::encoding::ValueType;
use crate::error::{Result, ValueError};
use std::fmt;
use std::mem;
use std::sync::Arc;

/// An immutable, reference-counted box holding a copy of a plain-old-data value.
///
/// The payload is stored as raw bytes next to the encoding of the type it was
/// built from. Cloning a `Value` shares the payload; nothing can mutate it
/// afterwards, so a `Value` can be read from any number of threads.
#[derive(Clone)]
pub struct Value {
    bytes: Arc<[u8]>,
    encoding: Arc<str>,
}

impl Value {
    /// Box a copy of `value`
    pub fn new<T: ValueType>(value: &T) -> Self {
        Self::from_bytes(bytemuck::bytes_of(value), T::ENCODING)
    }

    /// Box a copy of `bytes` tagged with an arbitrary encoding.
    ///
    /// Nothing checks that `bytes` matches `encoding` here; typed getters
    /// compare both the encoding and the length before reading.
    pub fn from_bytes(bytes: &[u8], encoding: impl Into<Arc<str>>) -> Self {
        Self {
            bytes: Arc::from(bytes),
            encoding: encoding.into(),
        }
    }

    /// The encoding the payload is tagged with
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// The raw payload bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Payload size in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the payload can be read back as a `T`
    pub fn is<T: ValueType>(&self) -> bool {
        self.encoding() == T::ENCODING && self.len() == mem::size_of::<T>()
    }

    /// Read a copy of the payload as a `T`.
    ///
    /// Fails with [`ValueError::TypeMismatch`] if the box was built from a
    /// different type or holds the wrong number of bytes.
    pub fn get<T: ValueType>(&self) -> Result<T> {
        if self.encoding() != T::ENCODING {
            return Err(ValueError::type_mismatch(T::ENCODING, self.encoding()));
        }
        bytemuck::try_pod_read_unaligned(&self.bytes).map_err(|_| {
            ValueError::type_mismatch(
                format!("{} ({} bytes)", T::ENCODING, mem::size_of::<T>()),
                format!("{} ({} bytes)", self.encoding(), self.len()),
            )
        })
    }

    /// Like [`Value::get`], but returns `None` instead of an error
    pub fn try_get<T: ValueType>(&self) -> Option<T> {
        self.get().ok()
    }

    /// Whether two boxes share the same payload allocation
    pub fn shares_storage(&self, other: &Value) -> bool {
        Arc::ptr_eq(&self.bytes, &other.bytes)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({}, {} bytes)", self.encoding, self.bytes.len())
    }
}
