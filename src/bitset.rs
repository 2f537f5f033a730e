//! Word-backed bit set for coverage rows.
//!
//! A coverage row marks which minterms (by position in the sorted minterm
//! list) an implicant covers. The number of minterms can go up to `2^num_vars`,
//! so a single machine word is not enough; this set grows in 64-bit words.

use num_bigint::BigUint;

/// A bit set backed by a vector of u64 words.
///
/// Bit `j` corresponds to the `j`-th minterm. The set grows as needed when
/// setting bits beyond the current capacity; trailing zero words never affect
/// equality.
#[derive(Debug, Clone, Default)]
pub struct BitSet {
    /// Storage: each u64 holds 64 bits
    words: Vec<u64>,
    /// Number of set bits (cached for O(1) len())
    count: usize,
}

impl BitSet {
    /// Number of bits per word.
    const BITS_PER_WORD: usize = 64;

    /// Creates a new empty bit set with the given capacity (in bits).
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; Self::words_for(capacity)],
            count: 0,
        }
    }

    /// Creates a bit set with bits `0..n` set.
    pub fn full(n: usize) -> Self {
        let mut words = vec![u64::MAX; n / Self::BITS_PER_WORD];
        let rest = n % Self::BITS_PER_WORD;
        if rest != 0 {
            words.push((1u64 << rest) - 1);
        }
        Self { words, count: n }
    }

    fn words_for(bits: usize) -> usize {
        bits.div_ceil(Self::BITS_PER_WORD)
    }

    /// Returns the number of set bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no bits are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Gets the word index and bit position for a given bit index.
    #[inline]
    fn word_and_bit(index: usize) -> (usize, usize) {
        (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD)
    }

    fn word(&self, word_idx: usize) -> u64 {
        self.words.get(word_idx).copied().unwrap_or(0)
    }

    /// Returns true if the bit at the given index is set.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        (self.word(word_idx) & (1u64 << bit_idx)) != 0
    }

    /// Sets the bit at the given index. Returns true if the bit was not previously set.
    #[inline]
    pub fn insert(&mut self, index: usize) -> bool {
        let (word_idx, bit_idx) = Self::word_and_bit(index);

        // Grow if necessary
        if word_idx >= self.words.len() {
            self.words.resize(word_idx + 1, 0);
        }

        let mask = 1u64 << bit_idx;
        let was_clear = (self.words[word_idx] & mask) == 0;
        if was_clear {
            self.words[word_idx] |= mask;
            self.count += 1;
        }
        was_clear
    }

    /// Adds every bit of `other` to `self` (`self |= other`).
    pub fn union_with(&mut self, other: &BitSet) {
        if other.words.len() > self.words.len() {
            self.words.resize(other.words.len(), 0);
        }
        let mut count = 0;
        for (i, word) in self.words.iter_mut().enumerate() {
            *word |= other.word(i);
            count += word.count_ones() as usize;
        }
        self.count = count;
    }

    /// Number of bits set in `self` but not in `other` (`popcount(self & !other)`).
    pub fn count_difference(&self, other: &BitSet) -> usize {
        self.words
            .iter()
            .enumerate()
            .map(|(i, &word)| (word & !other.word(i)).count_ones() as usize)
            .sum()
    }

    /// Returns true if every bit of `self` is also set in `other`.
    pub fn is_subset(&self, other: &BitSet) -> bool {
        self.count_difference(other) == 0
    }

    /// Returns an iterator over all set bit indices, in ascending order.
    pub fn iter(&self) -> BitSetIter<'_> {
        BitSetIter {
            bitset: self,
            word_idx: 0,
            current_word: self.word(0),
        }
    }

    /// Returns the set as an integer bitmask (bit `j` of the result is bit `j` of the set).
    pub fn to_biguint(&self) -> BigUint {
        let digits: Vec<u32> = self
            .words
            .iter()
            .flat_map(|&w| [w as u32, (w >> 32) as u32])
            .collect();
        BigUint::new(digits)
    }
}

impl PartialEq for BitSet {
    fn eq(&self, other: &Self) -> bool {
        let n = self.words.len().max(other.words.len());
        self.count == other.count && (0..n).all(|i| self.word(i) == other.word(i))
    }
}

impl Eq for BitSet {}

impl FromIterator<usize> for BitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut bs = BitSet::default();
        for index in iter {
            bs.insert(index);
        }
        bs
    }
}

/// Iterator over set bits in a BitSet.
#[derive(Debug)]
pub struct BitSetIter<'a> {
    bitset: &'a BitSet,
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitSetIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let bit_idx = self.current_word.trailing_zeros() as usize;
                self.current_word &= self.current_word - 1; // Clear lowest set bit
                return Some(self.word_idx * BitSet::BITS_PER_WORD + bit_idx);
            }

            self.word_idx += 1;
            if self.word_idx >= self.bitset.words.len() {
                return None;
            }
            self.current_word = self.bitset.words[self.word_idx];
        }
    }
}
