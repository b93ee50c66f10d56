//! Fuzzy matching algorithms.

/// Calculate Levenshtein edit distance between two strings.
///
/// Insertions, deletions and substitutions each cost 1; transpositions are
/// not special-cased. Distances are counted in `char`s.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
#[must_use]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Use two rows for space optimization
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Edit-distance similarity in `0.0..=1.0`
///
/// `(max_len - distance) / max_len`, and 0 when both strings are empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 0.0;
    }
    let distance = levenshtein_distance(a, b);
    (max_len - distance) as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_levenshtein_same() {
        assert_eq!(levenshtein_distance("ndolé", "ndolé"), 0);
    }

    #[test]
    fn test_levenshtein_one_edit() {
        assert_eq!(levenshtein_distance("poulet", "poulât"), 1);
    }

    #[test]
    fn test_levenshtein_insert_delete() {
        assert_eq!(levenshtein_distance("eru", "erru"), 1);
        assert_eq!(levenshtein_distance("erru", "eru"), 1);
    }

    #[test]
    fn test_levenshtein_empty() {
        assert_eq!(levenshtein_distance("", "riz"), 3);
        assert_eq!(levenshtein_distance("riz", ""), 3);
    }

    #[test]
    fn test_levenshtein_counts_chars_not_bytes() {
        assert_eq!(levenshtein_distance("braisé", "braise"), 1);
    }

    #[test]
    fn test_levenshtein_no_transposition_discount() {
        assert_eq!(levenshtein_distance("ab", "ba"), 2);
    }

    #[test]
    fn test_similarity() {
        assert!((similarity("kitten", "sitting") - 4.0 / 7.0).abs() < 1e-9);
        assert!((similarity("riz", "riz") - 1.0).abs() < f64::EPSILON);
        assert!(similarity("", "").abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn prop_levenshtein_symmetric(a in "\\PC{0,12}", b in "\\PC{0,12}") {
            prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
        }

        #[test]
        fn prop_levenshtein_identity(a in "\\PC{0,16}") {
            prop_assert_eq!(levenshtein_distance(&a, &a), 0);
        }

        #[test]
        fn prop_levenshtein_bounded_by_longer(a in "[a-z]{0,10}", b in "[a-z]{0,10}") {
            let d = levenshtein_distance(&a, &b);
            prop_assert!(d <= a.len().max(b.len()));
            prop_assert!(d >= a.len().abs_diff(b.len()));
        }

        #[test]
        fn prop_similarity_in_unit_range(a in "\\PC{0,10}", b in "\\PC{0,10}") {
            let s = similarity(&a, &b);
            prop_assert!((0.0..=1.0).contains(&s));
        }
    }
}
