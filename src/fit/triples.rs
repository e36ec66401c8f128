//! Lazy enumeration of index triples `i < j < k`.
//!
//! The three-point fit stops at the first non-degenerate triple, so the
//! triples are produced on demand in lexicographic order instead of being
//! collected up front. Cost is proportional to the position of the first hit.

/// Iterator over `(i, j, k)` with `i < j < k < n`, in nested-loop order.
#[derive(Debug, Clone)]
pub struct Triples {
    n: usize,
    next: Option<(usize, usize, usize)>,
}

impl Triples {
    pub fn new(n: usize) -> Self {
        let next = if n >= 3 { Some((0, 1, 2)) } else { None };
        Self { n, next }
    }

    /// Triples whose first index is fixed at `i`.
    pub fn starting_at(n: usize, i: usize) -> impl Iterator<Item = (usize, usize, usize)> {
        ((i + 1)..n).flat_map(move |j| ((j + 1)..n).map(move |k| (i, j, k)))
    }
}

impl Iterator for Triples {
    type Item = (usize, usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let (i, j, k) = current;
        let n = self.n;

        self.next = if k + 1 < n {
            Some((i, j, k + 1))
        } else if j + 2 < n {
            Some((i, j + 1, j + 2))
        } else if i + 3 < n {
            Some((i + 1, i + 2, i + 3))
        } else {
            None
        };

        Some(current)
    }
}

/// Lazy triple enumeration over `n` items.
pub fn triples(n: usize) -> Triples {
    Triples::new(n)
}
