use crate::function_id::FunctionId;
use crate::render::RenderGuard;
use crate::value::Value;
use karst_heap::Shareable;
use std::cell::{Ref, RefCell};
use std::fmt;

/// A function body together with the values it captured.
pub struct Closure {
    function: FunctionId,
    captures: RefCell<Vec<Value>>,
}

impl Shareable for Closure {
    const KIND: &'static str = "closure";
}

impl Closure {
    pub fn new(function: FunctionId, captures: impl IntoIterator<Item = Value>) -> Self {
        Self {
            function,
            captures: RefCell::new(captures.into_iter().collect()),
        }
    }

    pub fn function(&self) -> FunctionId {
        self.function
    }

    pub fn nbr_captures(&self) -> usize {
        self.captures.borrow().len()
    }

    pub fn capture(&self, idx: usize) -> Option<Value> {
        self.captures.borrow().get(idx).cloned()
    }

    /// Overwrites a captured value, returning the old one. Panics if `idx` is out of bounds.
    pub fn set_capture(&self, idx: usize, value: Value) -> Value {
        let mut captures = self.captures.borrow_mut();
        let len = captures.len();
        match captures.get_mut(idx) {
            Some(slot) => std::mem::replace(slot, value),
            None => panic!("capture index {} out of bounds ({} captures)", idx, len),
        }
    }

    pub fn captures(&self) -> Ref<'_, [Value]> {
        Ref::map(self.captures.borrow(), Vec::as_slice)
    }
}

impl PartialEq for Closure {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || (self.function == other.function && *self.captures.borrow() == *other.captures.borrow())
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(_guard) = RenderGuard::enter(self as *const Self) else {
            return write!(f, "Closure {{ function: {:?}, .. }}", self.function);
        };
        f.debug_struct("Closure")
            .field("function", &self.function)
            .field("captures", &*self.captures.borrow())
            .finish()
    }
}
