use std::cell::Cell;

// `Shared` never leaves its thread, so neither do the counters.
thread_local! {
    static ALLOCATED: Cell<usize> = const { Cell::new(0) };
    static FREED: Cell<usize> = const { Cell::new(0) };
}

/// A snapshot of the shared objects allocated and freed on the current thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeapStats {
    pub allocated: usize,
    pub freed: usize,
}

impl HeapStats {
    pub fn current() -> Self {
        Self {
            allocated: ALLOCATED.with(Cell::get),
            freed: FREED.with(Cell::get),
        }
    }

    /// Objects allocated but not yet freed.
    pub fn live(&self) -> usize {
        self.allocated - self.freed
    }

    /// What happened between `earlier` and this snapshot.
    pub fn since(&self, earlier: HeapStats) -> HeapStats {
        HeapStats {
            allocated: self.allocated - earlier.allocated,
            freed: self.freed - earlier.freed,
        }
    }
}

/// Shared objects currently alive on this thread.
pub fn live_objects() -> usize {
    HeapStats::current().live()
}

pub(crate) fn record_alloc() {
    ALLOCATED.with(|n| n.set(n.get() + 1));
}

pub(crate) fn record_free() {
    FREED.with(|n| n.set(n.get() + 1));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn since_subtracts_both_counters() {
        let earlier = HeapStats { allocated: 3, freed: 1 };
        let later = HeapStats { allocated: 7, freed: 4 };

        assert_eq!(later.since(earlier), HeapStats { allocated: 4, freed: 3 });
        assert_eq!(later.live(), 3);
    }
}
