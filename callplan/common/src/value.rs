use std::fmt;
use std::sync::Arc;

use arrow::array::{
    ArrayRef, BooleanArray, Float32Array, Float64Array, Int8Array, Int16Array, Int32Array,
    Int64Array, NullArray, StringArray, UInt8Array, UInt16Array, UInt32Array, UInt64Array,
};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::data_type::LogicalType;

pub type Nullable<T> = Option<T>;

/// A wrapper around floats providing implementations of `Eq` and `Hash`.
pub type F32 = OrderedFloat<f32>;
pub type F64 = OrderedFloat<f64>;

/// The runtime-internal representation of a single value.
///
/// Typed variants carry their own null (`None`), so a bound argument keeps the declared type of
/// its parameter even when it is null. [`ScalarValue::Null`] is reserved for untyped nulls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarValue {
    Null,
    Boolean(Nullable<bool>),
    Int8(Nullable<i8>),
    Int16(Nullable<i16>),
    Int32(Nullable<i32>),
    Int64(Nullable<i64>),
    UInt8(Nullable<u8>),
    UInt16(Nullable<u16>),
    UInt32(Nullable<u32>),
    UInt64(Nullable<u64>),
    Float32(Nullable<F32>),
    Float64(Nullable<F64>),
    String(Nullable<String>),
}

impl ScalarValue {
    /// Returns the declared type matching this value's representation.
    pub fn logical_type(&self) -> LogicalType {
        match self {
            ScalarValue::Null => LogicalType::Null,
            ScalarValue::Boolean(_) => LogicalType::Boolean,
            ScalarValue::Int8(_) => LogicalType::Int8,
            ScalarValue::Int16(_) => LogicalType::Int16,
            ScalarValue::Int32(_) => LogicalType::Int32,
            ScalarValue::Int64(_) => LogicalType::Int64,
            ScalarValue::UInt8(_) => LogicalType::UInt8,
            ScalarValue::UInt16(_) => LogicalType::UInt16,
            ScalarValue::UInt32(_) => LogicalType::UInt32,
            ScalarValue::UInt64(_) => LogicalType::UInt64,
            ScalarValue::Float32(_) => LogicalType::Float32,
            ScalarValue::Float64(_) => LogicalType::Float64,
            ScalarValue::String(_) => LogicalType::String,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        match self {
            ScalarValue::Null => true,
            ScalarValue::Boolean(value) => value.is_none(),
            ScalarValue::Int8(value) => value.is_none(),
            ScalarValue::Int16(value) => value.is_none(),
            ScalarValue::Int32(value) => value.is_none(),
            ScalarValue::Int64(value) => value.is_none(),
            ScalarValue::UInt8(value) => value.is_none(),
            ScalarValue::UInt16(value) => value.is_none(),
            ScalarValue::UInt32(value) => value.is_none(),
            ScalarValue::UInt64(value) => value.is_none(),
            ScalarValue::Float32(value) => value.is_none(),
            ScalarValue::Float64(value) => value.is_none(),
            ScalarValue::String(value) => value.is_none(),
        }
    }

    /// Converts the value into a single-row arrow array.
    pub fn to_scalar_array(&self) -> ArrayRef {
        match self {
            ScalarValue::Null => Arc::new(NullArray::new(1)),
            ScalarValue::Boolean(value) => Arc::new(BooleanArray::from_iter([*value])),
            ScalarValue::Int8(value) => Arc::new(Int8Array::from_iter([*value])),
            ScalarValue::Int16(value) => Arc::new(Int16Array::from_iter([*value])),
            ScalarValue::Int32(value) => Arc::new(Int32Array::from_iter([*value])),
            ScalarValue::Int64(value) => Arc::new(Int64Array::from_iter([*value])),
            ScalarValue::UInt8(value) => Arc::new(UInt8Array::from_iter([*value])),
            ScalarValue::UInt16(value) => Arc::new(UInt16Array::from_iter([*value])),
            ScalarValue::UInt32(value) => Arc::new(UInt32Array::from_iter([*value])),
            ScalarValue::UInt64(value) => Arc::new(UInt64Array::from_iter([*value])),
            ScalarValue::Float32(value) => {
                Arc::new(Float32Array::from_iter([value.map(OrderedFloat::into_inner)]))
            }
            ScalarValue::Float64(value) => {
                Arc::new(Float64Array::from_iter([value.map(OrderedFloat::into_inner)]))
            }
            ScalarValue::String(value) => Arc::new(StringArray::from_iter([value.as_deref()])),
        }
    }
}

fn fmt_nullable<T: fmt::Display>(f: &mut fmt::Formatter<'_>, value: &Nullable<T>) -> fmt::Result {
    match value {
        Some(value) => write!(f, "{value}"),
        None => write!(f, "NULL"),
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Null => write!(f, "NULL"),
            ScalarValue::Boolean(value) => fmt_nullable(f, value),
            ScalarValue::Int8(value) => fmt_nullable(f, value),
            ScalarValue::Int16(value) => fmt_nullable(f, value),
            ScalarValue::Int32(value) => fmt_nullable(f, value),
            ScalarValue::Int64(value) => fmt_nullable(f, value),
            ScalarValue::UInt8(value) => fmt_nullable(f, value),
            ScalarValue::UInt16(value) => fmt_nullable(f, value),
            ScalarValue::UInt32(value) => fmt_nullable(f, value),
            ScalarValue::UInt64(value) => fmt_nullable(f, value),
            ScalarValue::Float32(value) => fmt_nullable(f, value),
            ScalarValue::Float64(value) => fmt_nullable(f, value),
            ScalarValue::String(value) => fmt_nullable(f, value),
        }
    }
}

macro_rules! for_each_non_null_variant {
    ($m:ident) => {
        $m!(boolean, bool, Boolean);
        $m!(int8, i8, Int8);
        $m!(int16, i16, Int16);
        $m!(int32, i32, Int32);
        $m!(int64, i64, Int64);
        $m!(uint8, u8, UInt8);
        $m!(uint16, u16, UInt16);
        $m!(uint32, u32, UInt32);
        $m!(uint64, u64, UInt64);
        $m!(float32, F32, Float32);
        $m!(float64, F64, Float64);
        $m!(string, String, String);
    };
}

macro_rules! impl_from_for_variant {
    ($_:ident, $ty:ty, $variant:ident) => {
        impl From<$ty> for ScalarValue {
            #[inline]
            fn from(value: $ty) -> Self {
                ScalarValue::$variant(Some(value))
            }
        }
    };
}

for_each_non_null_variant!(impl_from_for_variant);

macro_rules! impl_from_nullable_for_variant {
    ($_:ident, $ty:ty, $variant:ident) => {
        impl From<Nullable<$ty>> for ScalarValue {
            #[inline]
            fn from(value: Nullable<$ty>) -> Self {
                ScalarValue::$variant(value)
            }
        }
    };
}

for_each_non_null_variant!(impl_from_nullable_for_variant);

impl From<&str> for ScalarValue {
    #[inline]
    fn from(value: &str) -> Self {
        ScalarValue::String(Some(value.to_string()))
    }
}

impl From<f32> for ScalarValue {
    #[inline]
    fn from(value: f32) -> Self {
        ScalarValue::Float32(Some(OrderedFloat(value)))
    }
}

impl From<f64> for ScalarValue {
    #[inline]
    fn from(value: f64) -> Self {
        ScalarValue::Float64(Some(OrderedFloat(value)))
    }
}

macro_rules! impl_as_for_variant {
    ($name:ident, $ty:ty, $variant:ident) => {
        impl ScalarValue {
            paste::paste! {
                #[doc = concat!(" Attempts to downcast `self` to borrowed `Nullable<", stringify!($ty), ">`, returning `None` if not possible.")]
                #[inline]
                pub fn [<try_as_ $name>](&self) -> Option<&Nullable<$ty>> {
                    match self {
                        ScalarValue::$variant(value) => Some(value),
                        _ => None
                    }
                }
            }
        }
    };
}

for_each_non_null_variant!(impl_as_for_variant);

#[cfg(test)]
mod tests {
    use arrow::array::{Array, AsArray};
    use arrow::datatypes::Int32Type;

    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ScalarValue::from(42i32).to_string(), "42");
        assert_eq!(ScalarValue::from("x").to_string(), "x");
        assert_eq!(ScalarValue::from(true).to_string(), "true");
        assert_eq!(ScalarValue::from(1.5f64).to_string(), "1.5");
        assert_eq!(ScalarValue::Int64(None).to_string(), "NULL");
        assert_eq!(ScalarValue::Null.to_string(), "NULL");
    }

    #[test]
    fn test_logical_type() {
        assert_eq!(ScalarValue::from(42i32).logical_type(), LogicalType::Int32);
        assert_eq!(ScalarValue::String(None).logical_type(), LogicalType::String);
        assert_eq!(ScalarValue::Null.logical_type(), LogicalType::Null);
        assert_eq!(ScalarValue::from(7u64).logical_type(), LogicalType::UInt64);
    }

    #[test]
    fn test_is_null() {
        assert!(ScalarValue::Null.is_null());
        assert!(ScalarValue::Boolean(None).is_null());
        assert!(!ScalarValue::from(0i8).is_null());
    }

    #[test]
    fn test_try_as() {
        let value = ScalarValue::from(42i32);
        assert_eq!(value.try_as_int32(), Some(&Some(42)));
        assert_eq!(value.try_as_string(), None);
        assert_eq!(ScalarValue::from("x").try_as_string(), Some(&Some("x".to_string())));
    }

    #[test]
    fn test_to_scalar_array() {
        let array = ScalarValue::from(42i32).to_scalar_array();
        assert_eq!(array.len(), 1);
        assert_eq!(array.as_primitive::<Int32Type>().value(0), 42);

        let array = ScalarValue::String(None).to_scalar_array();
        assert_eq!(array.len(), 1);
        assert!(array.is_null(0));

        let array = ScalarValue::Null.to_scalar_array();
        assert_eq!(array.data_type(), &arrow::datatypes::DataType::Null);
        assert_eq!(array.len(), 1);
    }
}
