use crate::function_id::FunctionId;
use crate::kinds::{Array, Closure, Dictionary, Str};
use crate::render::RenderGuard;
use karst_heap::Shared;
use std::fmt;

static_assertions::assert_eq_size!(Value, [u64; 2]);
static_assertions::assert_not_impl_any!(Value: Send, Sync);

/// A runtime value.
///
/// Scalars are stored inline and copied by content. The four aggregate kinds live on the heap
/// behind a `Shared` handle: cloning a value shares the object and registers one more holder,
/// dropping it releases that holder.
///
/// There is no alias variant. A binding that refers to another value goes through a `Slot`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The **null** value.
    #[default]
    Null,
    /// A boolean value (**true** or **false**).
    Boolean(bool),
    /// An unsigned integer value.
    Integer(u64),
    /// A floating-point value.
    FloatingPoint(f64),
    /// A shared string.
    String(Shared<Str>),
    /// A shared array of values.
    Array(Shared<Array>),
    /// A shared dictionary, keyed by strings.
    Dictionary(Shared<Dictionary>),
    /// A shared closure.
    Closure(Shared<Closure>),
}

/// The variant tag of a `Value`, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    FloatingPoint,
    String,
    Array,
    Dictionary,
    Closure,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::FloatingPoint => "floating point",
            Self::String => "string",
            Self::Array => "array",
            Self::Dictionary => "dictionary",
            Self::Closure => "closure",
        }
    }

    /// Whether values of this kind hold a shared heap object.
    pub fn is_aggregate(self) -> bool {
        matches!(self, Self::String | Self::Array | Self::Dictionary | Self::Closure)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generates the type test and both accessors of an aggregate variant.
macro_rules! aggregate_accessors {
    ($($variant:ident($kind:ty) => $is_fn:ident, $as_fn:ident, $get_fn:ident;)*) => {
        $(
            #[doc = concat!("Returns whether this value is a `", stringify!($variant), "`.")]
            #[inline(always)]
            pub fn $is_fn(&self) -> bool {
                matches!(self, Self::$variant(_))
            }

            #[doc = concat!("Returns this value's handle, if it is a `", stringify!($variant), "`.")]
            #[inline(always)]
            pub fn $as_fn(&self) -> Option<&Shared<$kind>> {
                match self {
                    Self::$variant(handle) => Some(handle),
                    _ => None,
                }
            }

            #[doc = concat!("Returns this value's handle. Panics if it isn't a `", stringify!($variant), "`.")]
            #[inline(always)]
            pub fn $get_fn(&self) -> &Shared<$kind> {
                match self {
                    Self::$variant(handle) => handle,
                    v => unreachable!("Attempting to read {} out of {}", ValueKind::$variant, v.kind()),
                }
            }
        )*
    };
}

impl Value {
    /// The `null` value.
    pub const NULL: Value = Value::Null;
    /// The boolean `true` value.
    pub const TRUE: Value = Value::Boolean(true);
    /// The boolean `false` value.
    pub const FALSE: Value = Value::Boolean(false);

    /// Allocates a new string.
    pub fn make_string(text: impl Into<String>) -> Self {
        Self::String(Shared::new(Str::new(text)))
    }

    /// Allocates a new array holding `elements`, in order.
    pub fn make_array(elements: impl IntoIterator<Item = Value>) -> Self {
        Self::Array(Shared::new(Array::new(elements)))
    }

    /// Allocates a new dictionary. Later entries win over earlier ones with the same key.
    pub fn make_dictionary<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Self::Dictionary(Shared::new(Dictionary::new(entries)))
    }

    /// Allocates a new closure over `function`, capturing `captures`.
    pub fn make_closure(function: FunctionId, captures: impl IntoIterator<Item = Value>) -> Self {
        Self::Closure(Shared::new(Closure::new(function, captures)))
    }

    /// Returns the variant tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::FloatingPoint(_) => ValueKind::FloatingPoint,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Dictionary(_) => ValueKind::Dictionary,
            Self::Closure(_) => ValueKind::Closure,
        }
    }

    /// Moves the contents out, leaving `null` behind.
    ///
    /// An aggregate changes hands without its holder count moving.
    #[inline(always)]
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Replaces this value with `other`, releasing whatever was held before.
    #[inline(always)]
    pub fn assign(&mut self, other: Value) {
        *self = other;
    }

    /// Replaces this value with a copy of `other`.
    ///
    /// Assigning an object to a value that already holds it changes nothing.
    pub fn assign_from(&mut self, other: &Value) {
        if !self.same_object(other) {
            *self = other.clone();
        }
    }

    /// Whether both values hold the very same heap object. Always false for scalars.
    pub fn same_object(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => Shared::ptr_eq(a, b),
            (Self::Array(a), Self::Array(b)) => Shared::ptr_eq(a, b),
            (Self::Dictionary(a), Self::Dictionary(b)) => Shared::ptr_eq(a, b),
            (Self::Closure(a), Self::Closure(b)) => Shared::ptr_eq(a, b),
            _ => false,
        }
    }

    /// How many values hold this value's heap object, or `None` for scalars.
    pub fn holders(&self) -> Option<usize> {
        match self {
            Self::Null | Self::Boolean(_) | Self::Integer(_) | Self::FloatingPoint(_) => None,
            Self::String(handle) => Some(handle.holders()),
            Self::Array(handle) => Some(handle.holders()),
            Self::Dictionary(handle) => Some(handle.holders()),
            Self::Closure(handle) => Some(handle.holders()),
        }
    }

    // ----------------

    /// Returns whether this value is `null`.
    #[inline(always)]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns whether this value is a boolean.
    #[inline(always)]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(_))
    }

    /// Returns whether this value is an integer.
    #[inline(always)]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Returns whether this value is a floating-point number.
    #[inline(always)]
    pub fn is_floating_point(&self) -> bool {
        matches!(self, Self::FloatingPoint(_))
    }

    aggregate_accessors! {
        String(Str) => is_string, as_string, get_string;
        Array(Array) => is_array, as_array, get_array;
        Dictionary(Dictionary) => is_dictionary, as_dictionary, get_dictionary;
        Closure(Closure) => is_closure, as_closure, get_closure;
    }

    // `as_*` for scalars

    /// Returns this value as a boolean, if such is its type.
    #[inline(always)]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns this value as an integer, if such is its type.
    #[inline(always)]
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns this value as a floating-point number, if such is its type.
    #[inline(always)]
    pub fn as_floating_point(&self) -> Option<f64> {
        match self {
            Self::FloatingPoint(value) => Some(*value),
            _ => None,
        }
    }

    // `get_*` for scalars: the caller has already checked the type, so a mismatch is a bug.

    #[inline(always)]
    pub fn get_boolean(&mut self) -> &mut bool {
        match self {
            Self::Boolean(value) => value,
            v => unreachable!("Attempting to read a boolean out of {}", v.kind()),
        }
    }

    #[inline(always)]
    pub fn get_integer(&mut self) -> &mut u64 {
        match self {
            Self::Integer(value) => value,
            v => unreachable!("Attempting to read an integer out of {}", v.kind()),
        }
    }

    #[inline(always)]
    pub fn get_floating_point(&mut self) -> &mut f64 {
        match self {
            Self::FloatingPoint(value) => value,
            v => unreachable!("Attempting to read a floating point out of {}", v.kind()),
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::FloatingPoint(value)
    }
}

impl From<Shared<Str>> for Value {
    fn from(handle: Shared<Str>) -> Self {
        Self::String(handle)
    }
}

impl From<Shared<Array>> for Value {
    fn from(handle: Shared<Array>) -> Self {
        Self::Array(handle)
    }
}

impl From<Shared<Dictionary>> for Value {
    fn from(handle: Shared<Dictionary>) -> Self {
        Self::Dictionary(handle)
    }
}

impl From<Shared<Closure>> for Value {
    fn from(handle: Shared<Closure>) -> Self {
        Self::Closure(handle)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(value) => write!(f, "{}", value),
            Self::Integer(value) => write!(f, "{}", value),
            Self::FloatingPoint(value) => write!(f, "{}", value),
            Self::String(value) => f.write_str(&value.text()),
            Self::Array(values) => {
                let Some(_guard) = RenderGuard::enter(Shared::as_ptr(values)) else {
                    return f.write_str("[...]");
                };
                f.write_str("[")?;
                for (idx, value) in values.elements().iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                f.write_str("]")
            }
            Self::Dictionary(dict) => {
                let Some(_guard) = RenderGuard::enter(Shared::as_ptr(dict)) else {
                    return f.write_str("{...}");
                };
                f.write_str("{")?;
                for (idx, (key, value)) in dict.entries().iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
            Self::Closure(closure) => write!(f, "closure {}", closure.function()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_distinct() {
        let kinds = [
            ValueKind::Null,
            ValueKind::Boolean,
            ValueKind::Integer,
            ValueKind::FloatingPoint,
            ValueKind::String,
            ValueKind::Array,
            ValueKind::Dictionary,
            ValueKind::Closure,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
        assert_eq!(kinds.iter().filter(|k| k.is_aggregate()).count(), 4);
    }

    #[test]
    fn display() {
        let arr = Value::make_array([Value::from(1u64), Value::NULL, Value::make_string("hi")]);
        assert_eq!(arr.to_string(), "[1, null, hi]");

        let dict = Value::make_dictionary([("a", Value::TRUE), ("b", Value::from(2.5))]);
        assert_eq!(dict.to_string(), "{a: true, b: 2.5}");

        let closure = Value::make_closure(FunctionId(3), []);
        assert_eq!(closure.to_string(), "closure #3");
    }
}
