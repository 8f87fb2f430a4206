use bitvec::prelude::*;
use core::mem;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::ops::Index;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct BitSet {
    cardinality: usize,
    bit_vec: BitVec,
}

impl Debug for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let values: Vec<_> = self.iter().map(|i| i.to_string()).collect();
        write!(
            f,
            "BitSet {{ cardinality: {}, bit_vec: [{}]}}",
            self.cardinality,
            values.join(", "),
        )
    }
}

const fn block_size() -> usize {
    mem::size_of::<usize>() * 8
}

impl BitSet {
    #[inline]
    pub fn new(size: usize) -> Self {
        Self {
            cardinality: 0,
            bit_vec: bitvec![0; size],
        }
    }

    #[inline]
    pub(crate) fn new_all_set(size: usize) -> Self {
        Self {
            cardinality: size,
            bit_vec: bitvec![1; size],
        }
    }

    #[inline]
    pub fn empty(&self) -> bool {
        self.cardinality == 0
    }

    #[inline]
    pub fn full(&self) -> bool {
        self.cardinality == self.bit_vec.len()
    }

    /// Sets `idx` and returns whether it was already set.
    #[inline]
    pub fn set_bit(&mut self, idx: usize) -> bool {
        if !self.bit_vec[idx] {
            self.bit_vec.set(idx, true);
            self.cardinality += 1;
            false
        } else {
            true
        }
    }

    /// Clears `idx` and returns whether it was set before.
    #[inline]
    pub fn unset_bit(&mut self, idx: usize) -> bool {
        if self.bit_vec[idx] {
            self.bit_vec.set(idx, false);
            self.cardinality -= 1;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bit_vec.len()
    }

    #[inline]
    pub fn unset_all(&mut self) {
        self.bit_vec.as_mut_slice().iter_mut().for_each(|x| *x = 0);
        self.cardinality = 0;
    }

    #[inline]
    pub fn iter(&self) -> BitSetIterator {
        BitSetIterator {
            iter: self.bit_vec.as_slice().iter(),
            block: 0,
            idx: 0,
            size: self.bit_vec.len(),
        }
    }
}

pub struct BitSetIterator<'a> {
    iter: ::std::slice::Iter<'a, usize>,
    block: usize,
    idx: usize,
    size: usize,
}

impl<'a> Iterator for BitSetIterator<'a> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.size {
            return None;
        }
        while self.block == 0 {
            self.block = if let Some(&i) = self.iter.next() {
                if i == 0 {
                    self.idx += block_size();
                    continue;
                } else {
                    self.idx = ((self.idx + block_size() - 1) / block_size()) * block_size();
                    i
                }
            } else {
                return None;
            }
        }
        let offset = self.block.trailing_zeros() as usize;
        self.block >>= offset;
        self.block >>= 1;
        self.idx += offset + 1;
        if self.idx - 1 >= self.size {
            return None;
        }
        Some(self.idx - 1)
    }
}

impl Index<usize> for BitSet {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        if self.bit_vec[index] {
            &true
        } else {
            &false
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::datastructures::BitSet;

    #[test]
    fn set_and_unset() {
        let mut bs = BitSet::new(130);
        assert!(bs.empty());
        assert!(!bs.set_bit(3));
        assert!(bs.set_bit(3));
        assert!(!bs.set_bit(129));
        assert_eq!(bs.cardinality(), 2);
        assert!(bs[129]);
        assert!(!bs[128]);

        assert!(bs.unset_bit(3));
        assert!(!bs.unset_bit(3));
        assert_eq!(bs.cardinality(), 1);
    }

    #[test]
    fn iter() {
        let mut bs = BitSet::new(200);
        for i in [0, 1, 63, 64, 65, 127, 199].iter() {
            bs.set_bit(*i);
        }
        let collected: Vec<_> = bs.iter().collect();
        assert_eq!(collected, vec![0, 1, 63, 64, 65, 127, 199]);
    }

    #[test]
    fn all_set() {
        let mut bs = BitSet::new_all_set(70);
        assert!(bs.full());
        assert_eq!(bs.iter().count(), 70);
        bs.unset_all();
        assert!(bs.empty());
        assert_eq!(bs.iter().next(), None);
    }
}
