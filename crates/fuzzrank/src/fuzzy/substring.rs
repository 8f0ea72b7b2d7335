//! Longest common substring
//!
//! Classic O(n·m) dynamic program: `sub[i][j]` is the length of the common
//! run ending at `first[i]` and `second[j]`. Only the previous row is needed,
//! so two rows are kept.
//!
//! Ties at the maximum length resolve to the last position reached in
//! row-major order, not the first. Callers only rely on the length.

/// Longest contiguous run of characters present in both strings
pub fn longest_common_substring(first: &str, second: &str) -> String {
    let first: Vec<char> = first.chars().collect();
    let second: Vec<char> = second.chars().collect();

    if first.is_empty() || second.is_empty() {
        return String::new();
    }

    let mut prev = vec![0usize; second.len()];
    let mut curr = vec![0usize; second.len()];
    let mut size = 0;
    let mut end = 0;

    for (i, a) in first.iter().enumerate() {
        for (j, b) in second.iter().enumerate() {
            if a != b {
                curr[j] = 0;
                continue;
            }
            curr[j] = if i == 0 || j == 0 { 1 } else { prev[j - 1] + 1 };
            if curr[j] >= size {
                size = curr[j];
                end = i + 1;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    first[end - size..end].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs() {
        assert_eq!(longest_common_substring("", "abc"), "");
        assert_eq!(longest_common_substring("abc", ""), "");
    }

    #[test]
    fn test_self() {
        assert_eq!(longest_common_substring("levenshtein", "levenshtein"), "levenshtein");
    }

    #[test]
    fn test_disjoint() {
        assert_eq!(longest_common_substring("abc", "xyz"), "");
    }

    #[test]
    fn test_basic() {
        assert_eq!(longest_common_substring("xabcdy", "zzabcdzz"), "abcd");
        assert_eq!(longest_common_substring("jhon", "jon"), "on");
    }

    #[test]
    fn test_tie_resolves_to_last_found() {
        // "ab" is found first (i = 1), "cd" later (i = 4); both length 2
        assert_eq!(longest_common_substring("abxcd", "cdxab"), "cd");
    }

    #[test]
    fn test_multibyte() {
        assert_eq!(longest_common_substring("crème brûlée", "brûlé"), "brûlé");
    }
}
