use crate::render::RenderGuard;
use crate::value::Value;
use indexmap::IndexMap;
use karst_heap::Shareable;
use std::cell::{Ref, RefCell};
use std::fmt;

/// A string-keyed dictionary that remembers insertion order.
pub struct Dictionary {
    entries: RefCell<IndexMap<String, Value>>,
}

impl Shareable for Dictionary {
    const KIND: &'static str = "dictionary";
}

impl Dictionary {
    pub fn new<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Self {
            entries: RefCell::new(entries.into_iter().map(|(key, value)| (key.into(), value)).collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    /// Inserts or overwrites `key`, returning the previous value. A new key goes last.
    pub fn insert(&self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.borrow_mut().insert(key.into(), value)
    }

    /// Removes `key`, keeping the order of the remaining entries.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.entries.borrow_mut().shift_remove(key)
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }

    /// Borrows the entries in place. Don't mutate the dictionary while holding on to this.
    pub fn entries(&self) -> Ref<'_, IndexMap<String, Value>> {
        self.entries.borrow()
    }
}

impl PartialEq for Dictionary {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || *self.entries.borrow() == *other.entries.borrow()
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(_guard) = RenderGuard::enter(self as *const Self) else {
            return f.write_str("{...}");
        };
        f.debug_map().entries(self.entries.borrow().iter()).finish()
    }
}
