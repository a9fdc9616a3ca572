// crates/aemet-core/src/similarity.rs

//! Matching-block similarity ratio.
//!
//! The score is `2 * M / (len(a) + len(b))`, where `M` is the total length
//! of the contiguous blocks found by repeatedly taking the longest common
//! substring and recursing on the pieces to its left and right. Unlike an
//! edit distance this rewards long shared runs, so `"sevila"` stays close
//! to `"sevilla"` while unrelated names of the same length do not.

/// Scores above this are treated as an approximate match.
pub const SIMILARITY_THRESHOLD: f64 = 0.75;

/// Similarity of two (already normalized) strings in `[0, 1]`.
///
/// Two empty strings are identical (`1.0`). The score is symmetric: when
/// several longest blocks tie, the choice can depend on argument order, so
/// both orders are evaluated and the larger total wins.
///
/// ```
/// use aemet_core::similarity::similarity;
///
/// assert_eq!(similarity("madrid", "madrid"), 1.0);
/// assert!(similarity("sevila", "sevilla") > 0.9);
/// assert_eq!(similarity("abc", "xyz"), 0.0);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matched = matched_len(&a, &b).max(matched_len(&b, &a));
    2.0 * matched as f64 / total as f64
}

/// `true` when `similarity(a, b)` exceeds [`SIMILARITY_THRESHOLD`].
#[inline]
pub fn is_similar(a: &str, b: &str) -> bool {
    similarity(a, b) > SIMILARITY_THRESHOLD
}

/// Sum of the lengths of all matching blocks of `a` against `b`.
fn matched_len(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    let mut queue = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        total += k;
        if alo < i && blo < j {
            queue.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            queue.push((i + k, ahi, j + k, bhi));
        }
    }
    total
}

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]` as `(i, j, len)`.
///
/// Ties resolve to the block starting earliest in `a`, then earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best = (alo, blo, 0);
    let width = bhi.saturating_sub(blo) + 1;
    // run[j - blo + 1] = length of the common run ending at a[i], b[j]
    let mut prev = vec![0usize; width];
    let mut run = vec![0usize; width];

    for i in alo..ahi {
        for j in blo..bhi {
            let slot = j - blo + 1;
            if a[i] == b[j] {
                let k = prev[slot - 1] + 1;
                run[slot] = k;
                if k > best.2 {
                    best = (i + 1 - k, j + 1 - k, k);
                }
            } else {
                run[slot] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut run);
    }
    best
}
