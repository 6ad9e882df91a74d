use std::cell::RefCell;

// Aggregates whose rendering is in progress on this thread, outermost first.
thread_local! {
    static IN_PROGRESS: RefCell<Vec<*const ()>> = const { RefCell::new(Vec::new()) };
}

/// Marks an aggregate as being rendered, until dropped.
///
/// `Display` and `Debug` recurse into elements, so an aggregate that (indirectly) contains itself
/// would recurse forever. Only ancestors count: the same object showing up twice side by side is
/// rendered twice.
pub(crate) struct RenderGuard(*const ());

impl RenderGuard {
    /// Returns `None` if `object` is already being rendered further up: the caller is in a cycle
    /// and should print a placeholder instead.
    pub(crate) fn enter<T>(object: *const T) -> Option<Self> {
        let ptr = object as *const ();
        IN_PROGRESS.with(|stack| {
            let mut stack = stack.borrow_mut();
            if stack.contains(&ptr) {
                None
            } else {
                stack.push(ptr);
                Some(RenderGuard(ptr))
            }
        })
    }
}

impl Drop for RenderGuard {
    fn drop(&mut self) {
        IN_PROGRESS.with(|stack| {
            let mut stack = stack.borrow_mut();
            if let Some(pos) = stack.iter().rposition(|ptr| *ptr == self.0) {
                stack.remove(pos);
            }
        });
    }
}
