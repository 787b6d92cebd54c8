//! Position sets over the top-level input
//!
//! Sub-multisets are addressed by which input positions they contain, so two
//! equal values at different positions stay distinct and the cache key never
//! depends on how a slice was re-ordered.

/// A set of input positions as a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subset(u32);

impl Subset {
    /// Largest input the mask can address
    pub const CAPACITY: usize = 32;

    /// Every position of an input with `len` numbers
    ///
    /// # Panics
    /// Panics in debug mode if `len` exceeds `CAPACITY`
    #[must_use]
    pub fn full(len: usize) -> Self {
        debug_assert!(len <= Self::CAPACITY, "subset capacity exceeded");
        if len >= Self::CAPACITY {
            Self(u32::MAX)
        } else {
            Self((1 << len) - 1)
        }
    }

    /// Number of positions in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The position, if this set holds exactly one
    #[must_use]
    pub const fn single(self) -> Option<usize> {
        if self.0.is_power_of_two() {
            Some(self.0.trailing_zeros() as usize)
        } else {
            None
        }
    }

    /// Positions in this set that are not in `other`
    #[must_use]
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Positions in ascending order
    pub fn positions(self) -> impl Iterator<Item = usize> {
        (0..Self::CAPACITY).filter(move |&i| self.0 & (1 << i) != 0)
    }

    /// Values at this set's positions, in input order
    #[must_use]
    pub fn values(self, numbers: &[i64]) -> Vec<i64> {
        self.positions().map(|i| numbers[i]).collect()
    }

    /// Left halves of every split of this set
    ///
    /// Yields each nonempty proper subset holding at most `(len + 1) / 2`
    /// positions. The right half is the complement, see [`Subset::without`].
    /// When `len` is even, both orientations of an equal-size split appear.
    pub fn splits(self) -> Splits {
        Splits {
            mask: self.0,
            next: self.0,
            max_left: self.len().div_ceil(2),
        }
    }
}

/// Iterator over split left halves, walking submasks in descending order
#[derive(Debug, Clone)]
pub struct Splits {
    mask: u32,
    next: u32,
    max_left: usize,
}

impl Iterator for Splits {
    type Item = Subset;

    fn next(&mut self) -> Option<Subset> {
        while self.next != 0 {
            self.next = (self.next - 1) & self.mask;
            let candidate = self.next;
            if candidate != 0
                && candidate != self.mask
                && candidate.count_ones() as usize <= self.max_left
            {
                return Some(Subset(candidate));
            }
        }
        None
    }
}
