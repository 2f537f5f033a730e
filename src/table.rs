//! Hash-consing arena.
//!
//! Every implicant created during minimization lives here exactly once and is
//! referred to by its [`ImplicantId`] afterwards. Putting a value equal to a
//! stored one returns the existing id instead of allocating a new slot.

use std::ops::Index;

use crate::types::ImplicantId;
use crate::utils::MyHash;

#[derive(Debug, Clone)]
struct Entry<T> {
    value: T,
    /// Index of the next entry in the same bucket (0 terminates the chain).
    next: usize,
}

#[derive(Debug, Clone)]
pub struct Table<T> {
    data: Vec<Entry<T>>,
    buckets: Vec<usize>,
    bitmask: u64,
}

impl<T> Table<T>
where
    T: Default,
{
    /// Create a new table with `2^bits` buckets (at most `2^16`).
    pub fn new(bits: usize) -> Self {
        let buckets_bits = bits.min(16);
        let buckets_size = 1 << buckets_bits;

        // 0th cell is the sentry: ids start at 1 and `next == 0` ends a chain.
        let data = vec![Entry {
            value: T::default(),
            next: 0,
        }];

        Self {
            data,
            buckets: vec![0; buckets_size],
            bitmask: (buckets_size - 1) as u64,
        }
    }
}

impl<T> Table<T> {
    /// Get the number of stored values.
    pub fn len(&self) -> usize {
        self.data.len() - 1
    }

    /// Check whether the table holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the reference to the value with the given id.
    pub fn value(&self, id: ImplicantId) -> &T {
        &self.data[id.index()].value
    }

    /// Iterate over all `(id, value)` pairs in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (ImplicantId, &T)> {
        self.data
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, e)| (ImplicantId::new(i), &e.value))
    }

    fn add(&mut self, value: T) -> usize {
        self.data.push(Entry { value, next: 0 });
        self.data.len() - 1
    }
}

impl<T> Table<T>
where
    T: MyHash + Eq,
{
    fn bucket_index(&self, value: &T) -> usize {
        (value.hash() & self.bitmask) as usize
    }

    /// Look up the id of a stored value equal to `value`.
    pub fn get(&self, value: &T) -> Option<ImplicantId> {
        let mut index = self.buckets[self.bucket_index(value)];
        while index != 0 {
            if &self.data[index].value == value {
                return Some(ImplicantId::new(index));
            }
            index = self.data[index].next;
        }
        None
    }

    /// Put a value into the table and return its id.
    ///
    /// If an equal value is already stored, its id is returned and the table is unchanged.
    pub fn put(&mut self, value: T) -> ImplicantId {
        let bucket_index = self.bucket_index(&value);
        let mut index = self.buckets[bucket_index];

        if index == 0 {
            // Create new entry and put it into the bucket.
            let i = self.add(value);
            self.buckets[bucket_index] = i;
            return ImplicantId::new(i);
        }

        loop {
            if value == self.data[index].value {
                // The value already exists.
                return ImplicantId::new(index);
            }

            let next = self.data[index].next;
            if next == 0 {
                // Create new entry and append it to the bucket.
                let i = self.add(value);
                self.data[index].next = i;
                return ImplicantId::new(i);
            }
            index = next;
        }
    }
}

impl<T> Index<ImplicantId> for Table<T> {
    type Output = T;

    fn index(&self, id: ImplicantId) -> &Self::Output {
        self.value(id)
    }
}
