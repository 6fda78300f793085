//! Result-size formulas with checked `usize` arithmetic
//!
//! Every function returns `None` when the count does not fit in `usize`
//! (or an intermediate product overflows), and `Some(0)` when the selection
//! is impossible.

/// Number of ordered selections of `k` distinct positions out of `n`: `n! / (n - k)!`
pub fn permutation_count(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    (0..k).try_fold(1_usize, |count, i| count.checked_mul(n - i))
}

/// Number of subsets of size `k` out of `n`: `C(n, k)`
pub fn combination_count(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }

    // C(n, k) == C(n, n - k); the shorter loop overflows later
    let k = k.min(n - k);
    let mut count: usize = 1;
    for i in 0..k {
        // Exact: the product of i + 1 consecutive integers is divisible by (i + 1)!
        count = count.checked_mul(n - i)? / (i + 1);
    }
    Some(count)
}

/// Number of multisets of size `k` over `n` positions: `C(n + k - 1, k)`
pub fn replacement_count(n: usize, k: usize) -> Option<usize> {
    if k == 0 {
        return Some(1);
    }
    if n == 0 {
        return Some(0);
    }
    combination_count(n.checked_add(k)? - 1, k)
}

/// Number of tuples in the cartesian product of collections with the given lengths
pub fn product_count(lengths: &[usize]) -> Option<usize> {
    lengths.iter().try_fold(1_usize, |acc, &len| acc.checked_mul(len))
}
