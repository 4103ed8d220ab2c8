use crate::storage::{self, HeapError, HeapStorage};

/// Binary heap with the maximum value at the root. Growable by default;
/// `bounded` heaps keep the fixed-capacity behavior of dropping adds once
/// full.
pub struct MaxHeap<T: std::cmp::PartialOrd> {
    store: HeapStorage<T>,
}

impl<T> MaxHeap<T>
where
    T: std::cmp::PartialOrd,
{
    pub fn new() -> Self {
        Self {
            store: HeapStorage::new(),
        }
    }

    pub fn bounded(limit: usize) -> Self {
        Self {
            store: HeapStorage::bounded(limit),
        }
    }

    pub fn add(&mut self, item: T) {
        if self.store.try_append(item) {
            let last = self.store.count() - 1;
            Self::sift_up(self.store.slots_mut(), last, |a, b| a < b);
        }
    }

    pub fn remove(&mut self) {
        if let Some(last) = self.store.pop_last() {
            let slots = self.store.slots_mut();
            if let Some(root) = slots.first_mut() {
                *root = last;
                let size = slots.len();
                Self::sift_down(slots, size, 0, |a, b| a < b);
            }
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        // The root holds the maximum, so anything above it cannot appear.
        // Within that bound the scan is exhaustive, not order-guided.
        match self.store.peek() {
            Ok(root) if item <= root => self.store.slots().iter().any(|held| held == item),
            _ => false,
        }
    }

    pub fn peek(&self) -> Result<&T, HeapError> {
        self.store.peek()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn len(&self) -> usize {
        self.store.count()
    }

    pub fn height(&self) -> usize {
        self.store.height()
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    pub fn display_sideways(&self)
    where
        T: std::fmt::Debug,
    {
        print!("{}", self);
    }

    /// Sorts the slice ascending in place: heapify bottom-up, then repeatedly
    /// swap the maximum to the shrinking tail.
    pub fn heap_sort(data: &mut [T]) {
        let mut size = data.len();
        if size < 2 {
            return;
        }
        for node in (0..=size / 2).rev() {
            Self::sift_down(data, size, node, |a, b| a < b);
        }
        size -= 1;
        data.swap(0, size);
        while size > 1 {
            Self::sift_down(data, size, 0, |a, b| a < b);
            size -= 1;
            data.swap(0, size);
        }
    }

    fn heapify(&mut self) {
        let size = self.store.count();
        let slots = self.store.slots_mut();
        for node in (0..=size / 2).rev() {
            Self::sift_down(slots, size, node, |a, b| a < b);
        }
    }

    fn sift_up<F>(data: &mut [T], start: usize, before: F)
    where
        F: Fn(&T, &T) -> bool,
    {
        let mut node = start;
        while node > 0 {
            let parent = storage::parent(node);
            if !before(&data[parent], &data[node]) {
                break;
            }
            data.swap(node, parent);
            node = parent;
        }
    }

    // `size` is the logical heap size; slots past it are out of play.
    fn sift_down<F>(data: &mut [T], size: usize, start: usize, before: F)
    where
        F: Fn(&T, &T) -> bool,
    {
        let mut node = start;
        while !storage::is_leaf(node, size) {
            let child = storage::larger_child_by(data, size, node, &before);
            if before(&data[node], &data[child]) {
                data.swap(node, child);
                node = child;
            } else {
                break;
            }
        }
    }
}

impl<T> Default for MaxHeap<T>
where
    T: std::cmp::PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MaxHeap<T>
where
    T: std::cmp::PartialOrd + Clone,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<T> From<Vec<T>> for MaxHeap<T>
where
    T: std::cmp::PartialOrd,
{
    fn from(items: Vec<T>) -> Self {
        let mut heap = Self {
            store: HeapStorage::from(items),
        };
        heap.heapify();
        heap
    }
}

impl<T> From<&[T]> for MaxHeap<T>
where
    T: std::cmp::PartialOrd + Clone,
{
    fn from(items: &[T]) -> Self {
        let mut heap = Self {
            store: HeapStorage::with_items(items),
        };
        heap.heapify();
        heap
    }
}

impl<T> PartialEq for MaxHeap<T>
where
    T: std::cmp::PartialOrd,
{
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
    }
}

impl<T> std::fmt::Debug for MaxHeap<T>
where
    T: std::cmp::PartialOrd + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.store, f)
    }
}

impl<T> std::fmt::Display for MaxHeap<T>
where
    T: std::cmp::PartialOrd + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.store, f)
    }
}
