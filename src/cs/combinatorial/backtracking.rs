/// Owned cursor over the size-`k` subsets of `0..n`, as sorted position
/// vectors in lexicographic order.
///
/// Subsets are produced one at a time, so exhaustive searches can stop at
/// the first hit without materialising all `C(n, k)` candidates. The cursor
/// holds no borrow, so a long-running search can keep it alongside the data
/// it indexes.
///
/// # Examples
/// ```
/// use vc_algos::combinatorial::backtracking::SubsetIndices;
///
/// let subsets: Vec<Vec<usize>> = SubsetIndices::new(4, 2).collect();
/// assert_eq!(subsets, vec![
///     vec![0, 1],
///     vec![0, 2],
///     vec![0, 3],
///     vec![1, 2],
///     vec![1, 3],
///     vec![2, 3],
/// ]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetIndices {
    n: usize,
    indices: Vec<usize>,
    first: bool,
    done: bool,
}

impl SubsetIndices {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            first: true,
            done: k > n,
        }
    }
}

impl Iterator for SubsetIndices {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.first {
            self.first = false;
            return Some(self.indices.clone());
        }

        let n = self.n;
        let k = self.indices.len();
        // Rightmost position that can still move right
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] != i + n - k) else {
            self.done = true;
            return None;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subset_indices() {
        let subsets: Vec<_> = SubsetIndices::new(3, 2).collect();
        assert_eq!(subsets, vec![vec![0, 1], vec![0, 2], vec![1, 2]]);
    }

    #[test]
    fn test_subset_indices_empty_k() {
        let subsets: Vec<_> = SubsetIndices::new(3, 0).collect();
        assert_eq!(subsets, vec![Vec::<usize>::new()]);
        assert_eq!(SubsetIndices::new(0, 0).count(), 1);
    }

    #[test]
    fn test_subset_indices_k_equals_n() {
        let subsets: Vec<_> = SubsetIndices::new(3, 3).collect();
        assert_eq!(subsets, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_subset_indices_k_greater_than_n() {
        assert_eq!(SubsetIndices::new(2, 3).count(), 0);
        assert_eq!(SubsetIndices::new(0, 1).count(), 0);
    }

    #[test]
    fn test_subset_indices_lexicographic_order() {
        let letters = ['a', 'b', 'c', 'd'];
        let words: Vec<String> = SubsetIndices::new(4, 3)
            .map(|subset| subset.into_iter().map(|i| letters[i]).collect())
            .collect();
        assert_eq!(words, vec!["abc", "abd", "acd", "bcd"]);
    }

    #[test]
    fn test_subset_indices_count() {
        assert_eq!(SubsetIndices::new(10, 4).count(), 210);
    }

    #[test]
    fn test_subset_indices_fused_after_exhaustion() {
        let mut subsets = SubsetIndices::new(1, 1);
        assert_eq!(subsets.next(), Some(vec![0]));
        assert_eq!(subsets.next(), None);
        assert_eq!(subsets.next(), None);
    }
}
