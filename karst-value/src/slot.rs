use crate::value::Value;

/// A place a value is read from or written to: either a value of its own, or an alias of a value
/// stored somewhere else.
///
/// Aliases let one binding observe and mutate another (pass-by-reference parameters, captured
/// variables) without holding the target. The borrow keeps the target alive for as long as the
/// alias exists, and an alias always points at a plain `Value`, so aliases can't chain:
///
/// ```compile_fail
/// use karst_value::{Slot, Value};
///
/// let mut target = Value::from(1u64);
/// let mut alias = Slot::alias(&mut target);
/// let chained = Slot::alias(&mut alias); // a `Slot` is not a `Value`
/// ```
///
/// Code that isn't concerned with aliasing never sees a `Slot`, only the `Value` it resolves to.
#[derive(Debug)]
pub enum Slot<'a> {
    /// The slot holds its own value.
    Direct(Value),
    /// The slot refers to a value owned by someone else.
    Indirect(&'a mut Value),
}

impl<'a> Slot<'a> {
    /// Makes a slot that aliases `target`.
    pub fn alias(target: &'a mut Value) -> Self {
        Self::Indirect(target)
    }

    pub fn is_alias(&self) -> bool {
        matches!(self, Self::Indirect(_))
    }

    /// The value to actually read: the target of an alias, or the held value otherwise.
    #[inline(always)]
    pub fn resolve(&self) -> &Value {
        match self {
            Self::Direct(value) => value,
            Self::Indirect(target) => &**target,
        }
    }

    /// The value to actually write to.
    #[inline(always)]
    pub fn resolve_mut(&mut self) -> &mut Value {
        match self {
            Self::Direct(value) => value,
            Self::Indirect(target) => &mut **target,
        }
    }

    /// Stores `value`, through the alias if there is one.
    pub fn assign(&mut self, value: Value) {
        self.resolve_mut().assign(value);
    }

    /// Turns the slot into a value it owns. An alias yields a copy of its target.
    pub fn into_value(self) -> Value {
        match self {
            Self::Direct(value) => value,
            Self::Indirect(target) => target.clone(),
        }
    }
}

impl Default for Slot<'_> {
    fn default() -> Self {
        Self::Direct(Value::Null)
    }
}

impl From<Value> for Slot<'_> {
    fn from(value: Value) -> Self {
        Self::Direct(value)
    }
}
