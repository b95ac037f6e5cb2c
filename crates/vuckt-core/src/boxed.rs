//! Boxing `Int3` into a [`Value`]

use crate::Int3;
use vuckt_value::{Result, Value, ValueType};

impl ValueType for Int3 {
    const ENCODING: &'static str = "{Int3=iii}";
}

impl Int3 {
    /// Box a copy of this vector
    pub fn boxed(&self) -> Value {
        Value::new(self)
    }

    /// Read a copy back out of a box built from an `Int3`.
    ///
    /// Returns [`vuckt_value::ValueError::TypeMismatch`] for any other payload.
    pub fn unbox(value: &Value) -> Result<Self> {
        value.get()
    }

    /// Like [`Int3::unbox`], but `None` for a foreign payload
    pub fn try_unbox(value: &Value) -> Option<Self> {
        value.try_get()
    }
}

impl From<Int3> for Value {
    fn from(v: Int3) -> Self {
        v.boxed()
    }
}

impl TryFrom<&Value> for Int3 {
    type Error = vuckt_value::ValueError;

    fn try_from(value: &Value) -> Result<Self> {
        Int3::unbox(value)
    }
}
