// Position-preserving subset enumeration.

use std::ops::RangeInclusive;

/// Enumerates every subset of positions `{i1 < i2 < ... < ir}` of a word
/// for each size `r` in a range.
///
/// Subsets are produced size by size, and within one size in lexicographic
/// order of their position lists. No position set is produced twice.
///
/// This is a lending enumerator: each call to [`next`](Self::next) returns a
/// view into an internal buffer that is overwritten by the following call.
pub struct SubsetEnumerator {
    word_len: usize,
    size: usize,
    max_size: usize,
    positions: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl SubsetEnumerator {
    /// Create an enumerator over a word of `word_len` slots.
    ///
    /// The size range is clamped to `1..=word_len`; if nothing remains the
    /// enumerator is exhausted from the start.
    pub fn new(word_len: usize, sizes: RangeInclusive<usize>) -> Self {
        let min_size = (*sizes.start()).max(1);
        let max_size = (*sizes.end()).min(word_len);
        Self {
            word_len,
            size: min_size,
            max_size,
            positions: Vec::with_capacity(max_size),
            started: false,
            exhausted: min_size > max_size,
        }
    }

    /// Yield the next subset, or `None` once every size has been covered.
    pub fn next(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            self.reset_positions();
            return Some(&self.positions);
        }
        if !self.advance() {
            if self.size >= self.max_size {
                self.exhausted = true;
                return None;
            }
            self.size += 1;
            self.reset_positions();
        }
        Some(&self.positions)
    }

    /// First subset of the current size: `[0, 1, ..., size - 1]`.
    fn reset_positions(&mut self) {
        self.positions.clear();
        self.positions.extend(0..self.size);
    }

    /// Step to the next position list of the same size.
    ///
    /// Returns `false` when the current list is the last one for this size.
    fn advance(&mut self) -> bool {
        let r = self.size;
        let n = self.word_len;
        let mut i = r;
        while i > 0 {
            i -= 1;
            if self.positions[i] < n - r + i {
                self.positions[i] += 1;
                for j in i + 1..r {
                    self.positions[j] = self.positions[j - 1] + 1;
                }
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(word_len: usize, sizes: RangeInclusive<usize>) -> Vec<Vec<usize>> {
        let mut e = SubsetEnumerator::new(word_len, sizes);
        let mut out = Vec::new();
        while let Some(p) = e.next() {
            out.push(p.to_vec());
        }
        out
    }

    #[test]
    fn single_size() {
        assert_eq!(
            collect(4, 2..=2),
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }

    #[test]
    fn size_range_goes_smallest_first() {
        let subsets = collect(3, 1..=3);
        assert_eq!(subsets.len(), 3 + 3 + 1);
        assert_eq!(subsets[0], vec![0]);
        assert_eq!(subsets[3], vec![0, 1]);
        assert_eq!(subsets[6], vec![0, 1, 2]);
    }

    #[test]
    fn full_word_only() {
        assert_eq!(collect(3, 3..=3), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn empty_range_yields_nothing() {
        assert!(collect(3, 5..=3).is_empty());
        assert!(collect(0, 1..=0).is_empty());
    }

    #[test]
    fn zero_lower_bound_is_clamped() {
        assert_eq!(collect(2, 0..=2).len(), 3);
    }

    #[test]
    fn no_position_set_repeats() {
        let subsets = collect(6, 1..=6);
        let unique: std::collections::HashSet<_> = subsets.iter().cloned().collect();
        assert_eq!(unique.len(), subsets.len());
        assert_eq!(subsets.len(), 63);
        for s in &subsets {
            assert!(s.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn exhausted_stays_exhausted() {
        let mut e = SubsetEnumerator::new(1, 1..=1);
        assert_eq!(e.next(), Some(&[0][..]));
        assert_eq!(e.next(), None);
        assert_eq!(e.next(), None);
    }
}
