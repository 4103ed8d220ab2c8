use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("empty heap")]
    Empty,
}

// Occupied slots form a complete binary tree: parent of i (i > 0) is
// (i - 1) / 2, children of i are 2i + 1 and 2i + 2.

pub fn parent(node: usize) -> usize {
    debug_assert!(node > 0, "the root has no parent");
    (node - 1) / 2
}

pub fn left(node: usize) -> usize {
    2 * node + 1
}

pub fn right(node: usize) -> usize {
    2 * node + 2
}

pub fn is_leaf(node: usize, count: usize) -> bool {
    left(node) >= count
}

pub fn has_right(node: usize, count: usize) -> bool {
    right(node) < count
}

// Ties favor the left child.
pub fn larger_child_by<T, F>(data: &[T], count: usize, node: usize, before: F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    let mut larger = left(node);
    if has_right(node, count) {
        let right = right(node);
        if before(&data[larger], &data[right]) {
            larger = right;
        }
    }
    larger
}

pub fn larger_child<T>(data: &[T], count: usize, node: usize) -> usize
where
    T: std::cmp::PartialOrd,
{
    larger_child_by(data, count, node, |a, b| a < b)
}

pub struct HeapStorage<T> {
    data: Vec<T>,
    bound: Option<usize>,
}

impl<T> HeapStorage<T> {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            bound: None,
        }
    }

    /// Storage that refuses appends once `limit` slots are occupied.
    pub fn bounded(limit: usize) -> Self {
        Self {
            data: Vec::new(),
            bound: Some(limit),
        }
    }

    pub fn with_items(items: &[T]) -> Self
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(items.len() * 2);
        data.extend_from_slice(items);
        Self { data, bound: None }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn count(&self) -> usize {
        self.data.len()
    }

    /// Number of levels, following the leftmost-child chain from the root.
    pub fn height(&self) -> usize {
        let mut levels = 0;
        let mut node = 0;
        while node < self.data.len() {
            levels += 1;
            node = left(node);
        }
        levels
    }

    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Releases the backing storage. Idempotent.
    pub fn clear(&mut self) {
        self.data = Vec::new();
    }

    /// Places `item` in the next free slot. Returns false, without mutating,
    /// when bounded storage is full. Bounded storage allocates once, on the
    /// first append.
    pub fn try_append(&mut self, item: T) -> bool {
        if let Some(limit) = self.bound {
            if self.data.len() >= limit {
                return false;
            }
            if self.data.capacity() == 0 {
                self.data.reserve_exact(limit);
            }
        }
        self.data.push(item);
        true
    }

    pub fn pop_last(&mut self) -> Option<T> {
        self.data.pop()
    }

    pub fn slots(&self) -> &[T] {
        &self.data
    }

    pub fn slots_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    fn sideways(&self, node: usize, depth: usize, f: &mut std::fmt::Formatter) -> std::fmt::Result
    where
        T: std::fmt::Debug,
    {
        if node < self.data.len() {
            self.sideways(right(node), depth + 1, f)?;
            for _ in 0..depth {
                write!(f, "    ")?;
            }
            writeln!(f, "{:?}", self.data[node])?;
            self.sideways(left(node), depth + 1, f)?;
        }
        Ok(())
    }
}

impl<T> Default for HeapStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for HeapStorage<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            bound: self.bound,
        }
    }
}

impl<T> From<Vec<T>> for HeapStorage<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data, bound: None }
    }
}

// Equality is positional over the occupied slots; the bound is
// configuration, not content.
impl<T: std::cmp::PartialEq> PartialEq for HeapStorage<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for HeapStorage<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for item in &self.data {
            write!(f, "{:?} ", item)?;
        }
        Ok(())
    }
}

// Sideways tree rendering: right subtree above, left below, four spaces of
// indent per level.
impl<T: std::fmt::Debug> std::fmt::Display for HeapStorage<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.sideways(0, 0, f)
    }
}

#[cfg(test)]
mod test {
    mod test_index {
        use super::super::*;

        #[test]
        fn test_parent_child() {
            assert_eq!(1, left(0));
            assert_eq!(2, right(0));
            assert_eq!(3, left(1));
            assert_eq!(4, right(1));
            assert_eq!(0, parent(1));
            assert_eq!(0, parent(2));
            assert_eq!(1, parent(3));
            assert_eq!(2, parent(6));
        }

        #[test]
        fn test_leaves() {
            assert!(is_leaf(3, 7));
            assert!(!is_leaf(2, 7));
            assert!(has_right(2, 7));
            assert!(!has_right(3, 7));
            assert!(is_leaf(0, 0));
            assert!(is_leaf(0, 1));
        }

        #[test]
        fn test_larger_child() {
            assert_eq!(2, larger_child(&[5, 3, 4], 3, 0));
            assert_eq!(1, larger_child(&[5, 4, 3], 3, 0));
            // ties favor the left child
            assert_eq!(1, larger_child(&[5, 3, 3], 3, 0));
            // no right child within the count
            assert_eq!(1, larger_child(&[5, 3], 2, 0));
            assert_eq!(1, larger_child(&[5, 3, 4], 2, 0));
        }
    }

    mod test_storage {
        use super::super::{HeapError, HeapStorage};

        #[test]
        fn test_height() {
            assert_eq!(0, HeapStorage::<i32>::new().height());
            assert_eq!(1, HeapStorage::with_items(&[1]).height());
            assert_eq!(2, HeapStorage::with_items(&[3, 2, 1]).height());
            assert_eq!(3, HeapStorage::with_items(&[7, 6, 5, 4, 3, 2, 1]).height());
            assert_eq!(3, HeapStorage::with_items(&[5, 4, 3, 2, 1]).height());
        }

        #[test]
        fn test_peek() {
            let empty: HeapStorage<i32> = HeapStorage::new();
            assert_eq!(Err(HeapError::Empty), empty.peek());
            assert_eq!(Ok(&3), HeapStorage::with_items(&[3, 2, 1]).peek());
        }

        #[test]
        fn test_clear() {
            let mut storage = HeapStorage::with_items(&[3, 2, 1]);
            storage.clear();
            assert!(storage.is_empty());
            assert_eq!(0, storage.count());
            storage.clear();
            assert!(storage.is_empty());
        }

        #[test]
        fn test_bounded_append() {
            let mut storage = HeapStorage::bounded(2);
            assert!(storage.try_append(1));
            assert!(storage.try_append(2));
            assert!(!storage.try_append(3));
            assert_eq!(2, storage.count());
            assert_eq!("1 2 ", format!("{:?}", storage));
        }

        #[test]
        fn test_positional_equality() {
            let a = HeapStorage::with_items(&[3, 2, 1]);
            let b = HeapStorage::with_items(&[3, 2, 1]);
            let c = HeapStorage::with_items(&[3, 1, 2]);
            let d = HeapStorage::with_items(&[3, 2]);
            assert_eq!(a, b);
            assert_ne!(a, c);
            assert_ne!(a, d);

            // same occupied slots, different configuration
            let mut e = HeapStorage::bounded(8);
            for item in [3, 2, 1] {
                e.try_append(item);
            }
            assert_eq!(a, e);
        }

        #[test]
        fn test_debug_dump() {
            let storage = HeapStorage::with_items(&[4, 3, 2]);
            assert_eq!("4 3 2 ", format!("{:?}", storage));
        }
    }
}
