//! Dynamic-programming string metrics for label matching.
//!
//! Two metrics drive the ranking: [`overlap`], the longest common contiguous
//! substring length, and [`distance`], the Levenshtein edit distance. Both
//! run in O(|a| * |b|) time over `char` sequences with rolling rows, so
//! memory stays linear in the second input. Both are deterministic and
//! symmetric, and both define the empty-string cases rather than treating
//! them as errors.

/// Length of the longest common contiguous substring of `a` and `b`.
///
/// Characters must be adjacent in both inputs: this is the classic
/// longest-common-substring recurrence, not longest common subsequence.
/// If either input is empty the overlap is 0.
pub fn overlap(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());
    if m == 0 || n == 0 {
        return 0;
    }

    // Two rolling rows track the length of the common suffix ending at
    // (i, j); the answer is the largest suffix seen anywhere.
    let mut rows = [vec![0usize; n + 1], vec![0usize; n + 1]];
    let mut best = 0;
    for i in 1..=m {
        for j in 1..=n {
            if a[i - 1] == b[j - 1] {
                let run = rows[(i - 1) % 2][j - 1] + 1;
                rows[i % 2][j] = run;
                if run > best {
                    best = run;
                }
            } else {
                rows[i % 2][j] = 0;
            }
        }
    }
    best
}

/// Levenshtein edit distance between `a` and `b` with unit-cost insert,
/// delete, and substitute.
///
/// If either input is empty the distance is the length of the other input
/// (the standard base case).
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());
    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];
    for i in 0..m {
        curr[0] = i + 1;
        for j in 0..n {
            let del_cost = prev[j + 1] + 1;
            let ins_cost = curr[j] + 1;
            let sub_cost = prev[j] + usize::from(a[i] != b[j]);
            curr[j + 1] = del_cost.min(ins_cost).min(sub_cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}
