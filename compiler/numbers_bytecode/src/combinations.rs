//! Fixed-size subsets of operand slots.

/// Every `k`-element subset of `0..n` as an ascending `Vec`, in
/// lexicographic order: `[0, 1], [0, 2], [1, 2]` for `n = 3, k = 2`.
///
/// `k = 0` yields the empty subset once; `k > n` yields nothing.
#[derive(Clone, Debug)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    exhausted: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Combinations {
            n,
            indices: (0..k).collect(),
            exhausted: k > n,
        }
    }

    /// Step `indices` to the next subset, or mark the sequence exhausted.
    fn advance(&mut self) {
        let k = self.indices.len();
        // Rightmost position that can still move right.
        let Some(position) = (0..k)
            .rev()
            .find(|&i| self.indices[i] < self.n - k + i)
        else {
            self.exhausted = true;
            return;
        };
        self.indices[position] += 1;
        for i in position + 1..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.exhausted {
            return None;
        }
        let current = self.indices.clone();
        self.advance();
        Some(current)
    }
}

/// Number of `k`-element subsets of an `n`-element set.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    // Each partial product is itself a binomial coefficient, so the
    // division is always exact.
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}
