use crate::{
	traits::ToValue,
	value::{
		Blob,
		Scalar,
		Value,
	},
};
use chrono::{
	DateTime,
	TimeZone,
	Utc,
};
use std::{
	borrow::Cow,
	collections::{
		BTreeMap,
		HashMap,
		VecDeque,
	},
	rc::Rc,
	sync::Arc,
};

/// Absent if `None`
impl<T: ToValue> ToValue for Option<T> {
	fn to_value(&self) -> Value<'_> {
		match self {
			Some(v) => v.to_value(),
			None => Value::Absent,
		}
	}
}

impl<T: ToValue + ?Sized> ToValue for &T {
	fn to_value(&self) -> Value<'_> {
		(**self).to_value()
	}
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
	fn to_value(&self) -> Value<'_> {
		(**self).to_value()
	}
}

impl<T: ToValue + ?Sized> ToValue for Rc<T> {
	fn to_value(&self) -> Value<'_> {
		(**self).to_value()
	}
}

impl<T: ToValue + ?Sized> ToValue for Arc<T> {
	fn to_value(&self) -> Value<'_> {
		(**self).to_value()
	}
}

impl<T: ToValue> ToValue for [T] {
	fn to_value(&self) -> Value<'_> {
		Value::List(self.iter().map(ToValue::to_value).collect())
	}
}

impl<T: ToValue> ToValue for Vec<T> {
	fn to_value(&self) -> Value<'_> {
		self.as_slice().to_value()
	}
}

impl<T: ToValue> ToValue for VecDeque<T> {
	fn to_value(&self) -> Value<'_> {
		Value::List(self.iter().map(ToValue::to_value).collect())
	}
}

impl<K, V, S> ToValue for HashMap<K, V, S> {
	fn to_value(&self) -> Value<'_> {
		Value::Map { entries: self.len() }
	}
}

impl<K, V> ToValue for BTreeMap<K, V> {
	fn to_value(&self) -> Value<'_> {
		Value::Map { entries: self.len() }
	}
}

impl ToValue for str {
	fn to_value(&self) -> Value<'_> {
		Value::Scalar(Scalar::Str(self))
	}
}

impl ToValue for String {
	fn to_value(&self) -> Value<'_> {
		Value::Scalar(Scalar::Str(self))
	}
}

impl ToValue for Cow<'_, str> {
	fn to_value(&self) -> Value<'_> {
		Value::Scalar(Scalar::Str(self))
	}
}

impl ToValue for Blob {
	fn to_value(&self) -> Value<'_> {
		Value::Scalar(Scalar::Bytes(&self.0))
	}
}

impl ToValue for bool {
	fn to_value(&self) -> Value<'_> {
		Value::Scalar(Scalar::Bool(*self))
	}
}

impl ToValue for f32 {
	fn to_value(&self) -> Value<'_> {
		Value::Scalar(Scalar::Float32(*self))
	}
}

impl ToValue for f64 {
	fn to_value(&self) -> Value<'_> {
		Value::Scalar(Scalar::Float64(*self))
	}
}

impl<Tz: TimeZone> ToValue for DateTime<Tz> {
	fn to_value(&self) -> Value<'_> {
		Value::Scalar(Scalar::Timestamp(self.with_timezone(&Utc)))
	}
}

macro_rules! signed_integers {
	($($t:ty),*) => {$(
		impl ToValue for $t {
			fn to_value(&self) -> Value<'_> {
				Value::Scalar(Scalar::Int(i128::from(*self)))
			}
		}
	)*};
}

signed_integers!(i8, i16, i32, i64, i128);

impl ToValue for isize {
	fn to_value(&self) -> Value<'_> {
		Value::Scalar(Scalar::Int(*self as i128))
	}
}

// No wire encoding is defined for these; building them fails with the type in the error.
// Raw bytes go through `Blob`: a `Vec<u8>` is a list of unsupported `u8` scalars.
macro_rules! unsupported_scalars {
	($($t:ty),*) => {$(
		impl ToValue for $t {
			fn to_value(&self) -> Value<'_> {
				Value::Scalar(Scalar::Unsupported {
					type_name: stringify!($t),
					value: self.to_string(),
				})
			}
		}
	)*};
}

unsupported_scalars!(u8, u16, u32, u64, u128, usize, char);
