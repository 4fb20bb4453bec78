use std::cmp::Ordering;

/// Priority-queue entry ordered by cost alone.
///
/// Wrap in `std::cmp::Reverse` to get a min-heap out of `BinaryHeap`. Costs
/// compare with `f64::total_cmp`, so the ordering is total even for values a
/// caller inserted without validation.
#[derive(Debug, Clone)]
pub struct HeapEntry<T> {
    pub cost: f64,
    pub item: T,
}

impl<T> HeapEntry<T> {
    pub fn new(cost: f64, item: T) -> Self {
        Self { cost, item }
    }
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost.total_cmp(&other.cost)
    }
}
