//! Contiguous chunking of a Peano-ordered leaf sequence

use std::ops::Range;

use crate::io::error::{Result, invalid_parameter};

/// Assignment of `len` ordered items to `parts` contiguous groups
///
/// Every group except the last holds `floor(len / parts)` items; the last one
/// absorbs the remainder. When there are fewer items than groups each item
/// gets its own group and the trailing groups stay empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partitioning {
    len: usize,
    parts: usize,
    chunk: usize,
}

impl Partitioning {
    /// Create a partitioning of `len` items into `parts` groups
    ///
    /// # Errors
    ///
    /// Returns an error if `parts` is zero
    pub fn new(len: usize, parts: usize) -> Result<Self> {
        if parts == 0 {
            return Err(invalid_parameter(
                "partitions",
                &parts,
                &"at least one partition is required",
            ));
        }

        Ok(Self {
            len,
            parts,
            chunk: (len / parts).max(1),
        })
    }

    /// Number of items
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no items
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of groups
    pub const fn parts(&self) -> usize {
        self.parts
    }

    /// Group of the item at `index`
    pub fn partition_of(&self, index: usize) -> usize {
        (index / self.chunk).min(self.parts - 1)
    }

    /// Index range of every non-empty group, in curve order
    pub fn ranges(&self) -> Vec<Range<usize>> {
        let mut ranges = Vec::with_capacity(self.parts);
        let mut start = 0;
        for part in 0..self.parts {
            if start >= self.len {
                break;
            }
            let end = if part + 1 == self.parts {
                self.len
            } else {
                (start + self.chunk).min(self.len)
            };
            ranges.push(start..end);
            start = end;
        }
        ranges
    }

    /// Group of every item, in order
    pub fn assignments(&self) -> Vec<usize> {
        (0..self.len).map(|index| self.partition_of(index)).collect()
    }
}
