use std::fmt::{Debug, Formatter};

use crate::puzzle::Value;

/// A set of cell values `1..=MAX_VALUE`, stored as bits
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct ValueSet(u64);

impl Debug for ValueSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl ValueSet {
    pub const MAX_VALUE: Value = 63;

    pub fn new() -> Self {
        ValueSet(0)
    }

    /// A set of `1..=max`
    pub fn with_all(max: Value) -> ValueSet {
        assert!(max <= Self::MAX_VALUE);
        ValueSet(((1_u64 << max) - 1) << 1)
    }

    pub fn contains(self, n: Value) -> bool {
        n <= Self::MAX_VALUE && self.0 & (1 << n) != 0
    }

    pub fn insert(&mut self, n: Value) -> bool {
        assert!(n >= 1 && n <= Self::MAX_VALUE);
        let inserted = !self.contains(n);
        self.0 |= 1 << n;
        inserted
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Value> {
        (1..=Self::MAX_VALUE).filter(move |&n| self.contains(n))
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn remove(&mut self, n: Value) -> bool {
        if !self.contains(n) {
            return false;
        }
        self.0 &= !(1 << n);
        true
    }

    /// Keeps only the values for which `f` returns true. Returns true if anything was removed.
    pub fn retain(&mut self, mut f: impl FnMut(Value) -> bool) -> bool {
        let before = self.0;
        for n in self.iter() {
            if !f(n) {
                self.remove(n);
            }
        }
        self.0 != before
    }

    pub fn single_value(self) -> Option<Value> {
        match self.len() {
            1 => Some(self.0.trailing_zeros() as Value),
            _ => None,
        }
    }
}

impl Extend<Value> for ValueSet {
    fn extend<T: IntoIterator<Item = Value>>(&mut self, iter: T) {
        for i in iter {
            self.insert(i);
        }
    }
}

impl std::iter::FromIterator<Value> for ValueSet {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        let mut set = ValueSet::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::ValueSet;

    #[test]
    fn with_all() {
        let set = ValueSet::with_all(4);
        assert_eq!(vec![1, 2, 3, 4], set.iter().collect::<Vec<_>>());
        assert!(!set.contains(0));
        assert!(!set.contains(5));
    }

    #[test]
    fn insert_remove_result() {
        let mut set = ValueSet::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert!(set.remove(1));
        assert!(!set.remove(1));
        assert!(set.is_empty());
    }

    #[test]
    fn single_value() {
        let mut set = ValueSet::new();
        assert_eq!(None, set.single_value());
        set.insert(3);
        assert_eq!(Some(3), set.single_value());
        set.insert(2);
        assert_eq!(None, set.single_value());
        set.remove(3);
        assert_eq!(Some(2), set.single_value());
    }

    #[test]
    fn retain() {
        let mut set = ValueSet::with_all(5);
        assert!(set.retain(|n| n % 2 == 1));
        assert_eq!(vec![1, 3, 5], set.iter().collect::<Vec<_>>());
        assert!(!set.retain(|_| true));
    }

    #[test]
    fn largest_value() {
        let set = ValueSet::with_all(ValueSet::MAX_VALUE);
        assert_eq!(63, set.len());
        assert!(set.contains(63));
    }
}
