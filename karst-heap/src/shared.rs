use std::cell::Cell;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ops::Deref;
use std::ptr::NonNull;

use log::trace;

use crate::stats;

/// Implemented by every kind of object a `Shared` handle can point to.
///
/// There is no separate teardown hook: a kind cleans up in its own `Drop`, which `Shared` runs
/// exactly once, on the release that finds no extra holders left.
pub trait Shareable {
    /// Name of the kind, used when tracing allocations.
    const KIND: &'static str;
}

/// What a `Shared` actually points to: the holder count, followed by the object itself.
struct SharedBox<T> {
    /// Holders beyond the first. Zero means the next release is the last one.
    extra_holders: Cell<usize>,
    value: T,
}

/// A handle to a heap object held by one or more values at once.
///
/// Duplicating the handle (`register_holder`, or `clone`) never copies the object: it bumps the
/// holder count and hands back a pointer to the same allocation. Dropping a handle (or calling
/// `release`) gives one holder back, and frees the object when it was the last one.
///
/// The count is a plain `Cell`, so a `Shared` is neither `Send` nor `Sync`.
pub struct Shared<T: Shareable> {
    ptr: NonNull<SharedBox<T>>,
    _phantom: PhantomData<SharedBox<T>>,
}

/// Stand-in kind for the compile-time checks below: they hold for every `T`.
#[allow(dead_code)]
struct AnyKind;

impl Shareable for AnyKind {
    const KIND: &'static str = "any";
}

static_assertions::assert_eq_size!(Shared<AnyKind>, *const ());
static_assertions::assert_not_impl_any!(Shared<AnyKind>: Send, Sync);

impl<T: Shareable> Shared<T> {
    /// Moves `value` to the heap. The returned handle is its only holder.
    pub fn new(value: T) -> Self {
        let boxed = Box::new(SharedBox {
            extra_holders: Cell::new(0),
            value,
        });
        let ptr = NonNull::from(Box::leak(boxed));

        stats::record_alloc();
        trace!("allocated {} at {:p}", T::KIND, ptr);

        Self {
            ptr,
            _phantom: PhantomData,
        }
    }

    #[inline(always)]
    fn inner(&self) -> &SharedBox<T> {
        // Safety: the allocation stays alive for as long as any handle to it exists.
        unsafe { self.ptr.as_ref() }
    }

    /// Registers one more holder of the object and returns the handle it should use.
    #[inline(always)]
    pub fn register_holder(&self) -> Self {
        let counter = &self.inner().extra_holders;
        let extra = counter
            .get()
            .checked_add(1)
            .unwrap_or_else(|| panic!("holder count overflow on {} at {:p}", T::KIND, self.ptr));
        counter.set(extra);

        #[cfg(feature = "holder-tracing")]
        trace!("registered holder of {} at {:p} ({} extra)", T::KIND, self.ptr, extra);

        Self {
            ptr: self.ptr,
            _phantom: PhantomData,
        }
    }

    /// Gives this holder back. Frees the object if nobody else holds it.
    ///
    /// Same as dropping the handle; exists so the call site can say what it means.
    #[inline(always)]
    pub fn release(self) {
        drop(self)
    }

    /// Number of holders beyond the first.
    #[inline(always)]
    pub fn extra_holders(&self) -> usize {
        self.inner().extra_holders.get()
    }

    /// Number of handles currently pointing to the object, this one included.
    #[inline(always)]
    pub fn holders(&self) -> usize {
        self.extra_holders() + 1
    }

    /// Whether this handle is the only holder.
    #[inline(always)]
    pub fn is_unique(&self) -> bool {
        self.extra_holders() == 0
    }

    /// Whether both handles point to the very same object.
    #[inline(always)]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        this.ptr == other.ptr
    }

    /// Get a const pointer to the underlying object.
    pub fn as_ptr(this: &Self) -> *const T {
        &this.inner().value
    }
}

impl<T: Shareable> Drop for Shared<T> {
    fn drop(&mut self) {
        let counter = &self.inner().extra_holders;
        match counter.get() {
            0 => {
                trace!("freeing {} at {:p}", T::KIND, self.ptr);
                // Safety: allocated through `Box` in `new`, and we were the last holder.
                unsafe { drop(Box::from_raw(self.ptr.as_ptr())) };
                stats::record_free();
            }
            extra => {
                counter.set(extra - 1);

                #[cfg(feature = "holder-tracing")]
                trace!("released holder of {} at {:p} ({} extra)", T::KIND, self.ptr, extra - 1);
            }
        }
    }
}

impl<T: Shareable> Clone for Shared<T> {
    fn clone(&self) -> Self {
        self.register_holder()
    }
}

impl<T: Shareable> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner().value
    }
}

impl<T: Shareable> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl<T: Shareable + Debug> Debug for Shared<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        (**self).fmt(f)
    }
}
