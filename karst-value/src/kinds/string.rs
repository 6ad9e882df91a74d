use karst_heap::Shareable;
use std::cell::{Ref, RefCell};
use std::fmt;

/// A mutable string, shared between every value holding it.
pub struct Str {
    text: RefCell<String>,
}

impl Shareable for Str {
    const KIND: &'static str = "string";
}

impl Str {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: RefCell::new(text.into()),
        }
    }

    pub fn text(&self) -> Ref<'_, str> {
        Ref::map(self.text.borrow(), String::as_str)
    }

    pub fn len(&self) -> usize {
        self.text.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.borrow().is_empty()
    }

    pub fn push_str(&self, suffix: &str) {
        self.text.borrow_mut().push_str(suffix);
    }

    pub fn set(&self, text: impl Into<String>) {
        *self.text.borrow_mut() = text.into();
    }
}

impl PartialEq for Str {
    fn eq(&self, other: &Self) -> bool {
        *self.text.borrow() == *other.text.borrow()
    }
}

impl PartialEq<str> for Str {
    fn eq(&self, other: &str) -> bool {
        *self.text.borrow() == *other
    }
}

impl fmt::Debug for Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.text.borrow(), f)
    }
}
