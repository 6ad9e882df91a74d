use crate::render::RenderGuard;
use crate::value::Value;
use karst_heap::Shareable;
use std::cell::{Ref, RefCell};
use std::fmt;

/// A growable array of values.
///
/// Reading an element hands out a copy of it, which for aggregates means one more holder of the
/// element, never a copy of its contents.
pub struct Array {
    elements: RefCell<Vec<Value>>,
}

impl Shareable for Array {
    const KIND: &'static str = "array";
}

impl Array {
    pub fn new(elements: impl IntoIterator<Item = Value>) -> Self {
        Self {
            elements: RefCell::new(elements.into_iter().collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.borrow().is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<Value> {
        self.elements.borrow().get(idx).cloned()
    }

    /// Stores `value` at `idx` and returns what was there. Panics if `idx` is out of bounds.
    pub fn set(&self, idx: usize, value: Value) -> Value {
        let mut elements = self.elements.borrow_mut();
        let len = elements.len();
        match elements.get_mut(idx) {
            Some(slot) => std::mem::replace(slot, value),
            None => panic!("array index {} out of bounds (length {})", idx, len),
        }
    }

    pub fn push(&self, value: Value) {
        self.elements.borrow_mut().push(value);
    }

    pub fn pop(&self) -> Option<Value> {
        self.elements.borrow_mut().pop()
    }

    /// Borrows the elements in place. Don't mutate the array while holding on to this.
    pub fn elements(&self) -> Ref<'_, [Value]> {
        Ref::map(self.elements.borrow(), Vec::as_slice)
    }

    pub fn to_vec(&self) -> Vec<Value> {
        self.elements.borrow().clone()
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || *self.elements.borrow() == *other.elements.borrow()
    }
}

impl PartialEq<[Value]> for Array {
    fn eq(&self, other: &[Value]) -> bool {
        self.elements.borrow().as_slice() == other
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(_guard) = RenderGuard::enter(self as *const Self) else {
            return f.write_str("[...]");
        };
        f.debug_list().entries(self.elements.borrow().iter()).finish()
    }
}
