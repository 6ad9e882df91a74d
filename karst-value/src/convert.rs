use std::cmp::Ordering;

use anyhow::Context;

use crate::value::Value;

impl TryFrom<&Value> for bool {
    type Error = anyhow::Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_boolean()
            .with_context(|| format!("value was not a boolean, but {}", value.kind()))
    }
}

impl TryFrom<&Value> for u64 {
    type Error = anyhow::Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_integer()
            .with_context(|| format!("value was not an integer, but {}", value.kind()))
    }
}

impl TryFrom<&Value> for f64 {
    type Error = anyhow::Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_floating_point()
            .with_context(|| format!("value was not a floating point, but {}", value.kind()))
    }
}

/// Copies the text out of a string value.
impl TryFrom<&Value> for String {
    type Error = anyhow::Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_string()
            .map(|string| string.text().to_string())
            .with_context(|| format!("value was not a string, but {}", value.kind()))
    }
}

/// Copies the elements out of an array value. Aggregate elements are shared, not duplicated.
impl TryFrom<&Value> for Vec<Value> {
    type Error = anyhow::Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_array()
            .map(|array| array.to_vec())
            .with_context(|| format!("value was not an array, but {}", value.kind()))
    }
}

/// Either kind of number, for code that accepts both.
#[derive(Debug, Clone, Copy)]
pub enum NumberLike {
    Integer(u64),
    FloatingPoint(f64),
}

impl TryFrom<&Value> for NumberLike {
    type Error = anyhow::Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_integer()
            .map(Self::Integer)
            .or_else(|| value.as_floating_point().map(Self::FloatingPoint))
            .with_context(|| format!("could not resolve {} as `Integer` or `FloatingPoint`", value.kind()))
    }
}

impl NumberLike {
    /// The value as a float. Integers above 2^53 are rounded, so don't compare through this.
    pub fn as_f64(self) -> f64 {
        match self {
            NumberLike::Integer(value) => value as f64,
            NumberLike::FloatingPoint(value) => value,
        }
    }

    /// Orders two numbers by their exact values. `None` if either is NaN.
    pub fn compare(&self, other: &NumberLike) -> Option<Ordering> {
        match (*self, *other) {
            (NumberLike::Integer(a), NumberLike::Integer(b)) => Some(a.cmp(&b)),
            (NumberLike::FloatingPoint(a), NumberLike::FloatingPoint(b)) => a.partial_cmp(&b),
            (NumberLike::Integer(a), NumberLike::FloatingPoint(b)) => cmp_integer_float(a, b),
            (NumberLike::FloatingPoint(a), NumberLike::Integer(b)) => cmp_integer_float(b, a).map(Ordering::reverse),
        }
    }

    #[inline(always)]
    pub fn lt(&self, other: &NumberLike) -> bool {
        matches!(self.compare(other), Some(Ordering::Less))
    }

    #[inline(always)]
    pub fn gt(&self, other: &NumberLike) -> bool {
        matches!(self.compare(other), Some(Ordering::Greater))
    }
}

// 2^64, the first float above every `u64`.
const U64_END: f64 = 18_446_744_073_709_551_616.0;

fn cmp_integer_float(int: u64, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= U64_END {
        return Some(Ordering::Less);
    }
    if float < 0.0 {
        return Some(Ordering::Greater);
    }
    // `float` is now in [0, 2^64), so its integral part converts exactly.
    let whole = float.trunc();
    match int.cmp(&(whole as u64)) {
        Ordering::Equal if float > whole => Some(Ordering::Less),
        ordering => Some(ordering),
    }
}

impl PartialEq for NumberLike {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl From<NumberLike> for Value {
    fn from(number: NumberLike) -> Self {
        match number {
            NumberLike::Integer(value) => Value::Integer(value),
            NumberLike::FloatingPoint(value) => Value::FloatingPoint(value),
        }
    }
}
