use std::collections::HashMap;

/// Byte offset one past the character at `position`, for slicing the window
/// out of the original string.
fn window_end(haystack: &str, chars: &[(usize, char)], position: usize) -> usize {
    match chars.get(position + 1) {
        Some(&(offset, _)) => offset,
        None => haystack.len(),
    }
}

/// Shortest substring of `haystack` covering the character multiset of
/// `target`.
///
/// Classic two-pointer sliding window: the right edge extends until the
/// window contains every target character with at least the required
/// multiplicity, then the left edge shrinks while coverage holds. Returns
/// `None` when no substring covers `target`. An empty `target` is covered
/// by the empty window. Ties go to the earliest window.
///
/// # Examples
///
/// ```
/// use katas::cs::string::minimum_window::minimum_window;
///
/// assert_eq!(minimum_window("ADOBECODEBANC", "ABC"), Some("BANC"));
/// assert_eq!(minimum_window("a", "aa"), None);
/// ```
pub fn minimum_window<'a>(haystack: &'a str, target: &str) -> Option<&'a str> {
    if target.is_empty() {
        return Some(&haystack[..0]);
    }

    // Positive counts are characters the window still owes; they go negative
    // once the window holds surplus copies.
    let mut owed: HashMap<char, isize> = HashMap::new();
    let mut missing = 0_isize;
    for ch in target.chars() {
        *owed.entry(ch).or_insert(0) += 1;
        missing += 1;
    }

    let chars: Vec<(usize, char)> = haystack.char_indices().collect();
    let mut best: Option<(usize, usize)> = None;
    let mut left = 0;

    for right in 0..chars.len() {
        if let Some(count) = owed.get_mut(&chars[right].1) {
            if *count > 0 {
                missing -= 1;
            }
            *count -= 1;
        }

        // Window covers the target: shrink from the left while it still does.
        while missing == 0 {
            let start = chars[left].0;
            let end = window_end(haystack, &chars, right);
            if best.map_or(true, |(b_start, b_end)| end - start < b_end - b_start) {
                best = Some((start, end));
                log::debug!("minimum window narrowed to bytes {}..{}", start, end);
            }

            if let Some(count) = owed.get_mut(&chars[left].1) {
                *count += 1;
                if *count > 0 {
                    missing += 1;
                }
            }
            left += 1;
        }
    }

    best.map(|(start, end)| &haystack[start..end])
}

/// Quadratic draft of the same exercise: grows a window from every start
/// position until it covers `target`, keeping the shortest. The tests check
/// the sliding window against it.
///
/// # Examples
///
/// ```
/// use katas::cs::string::minimum_window::minimum_window_brute;
///
/// assert_eq!(minimum_window_brute("ADOBECODEBANC", "ABC"), Some("BANC"));
/// ```
pub fn minimum_window_brute<'a>(haystack: &'a str, target: &str) -> Option<&'a str> {
    if target.is_empty() {
        return Some(&haystack[..0]);
    }

    let mut required: HashMap<char, usize> = HashMap::new();
    for ch in target.chars() {
        *required.entry(ch).or_insert(0) += 1;
    }
    let total = target.chars().count();

    let chars: Vec<(usize, char)> = haystack.char_indices().collect();
    let mut best: Option<(usize, usize)> = None;

    for start in 0..chars.len() {
        let mut held: HashMap<char, usize> = HashMap::new();
        let mut covered = 0;

        for right in start..chars.len() {
            let ch = chars[right].1;
            if let Some(&need) = required.get(&ch) {
                let have = held.entry(ch).or_insert(0);
                *have += 1;
                if *have <= need {
                    covered += 1;
                }
            }
            if covered == total {
                let s = chars[start].0;
                let e = window_end(haystack, &chars, right);
                if best.map_or(true, |(b_start, b_end)| e - s < b_end - b_start) {
                    best = Some((s, e));
                }
                // Growing further from this start can only lengthen the window
                break;
            }
        }
    }

    best.map(|(start, end)| &haystack[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    /// True when every character of `target` appears in `window` with at
    /// least the same multiplicity.
    fn covers(window: &str, target: &str) -> bool {
        let mut counts: HashMap<char, isize> = HashMap::new();
        for ch in window.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        for ch in target.chars() {
            let count = counts.entry(ch).or_insert(0);
            *count -= 1;
            if *count < 0 {
                return false;
            }
        }
        true
    }

    #[test]
    fn test_classic_example() {
        assert_eq!(minimum_window("ADOBECODEBANC", "ABC"), Some("BANC"));
    }

    #[test]
    fn test_whole_haystack_is_the_window() {
        assert_eq!(minimum_window("a", "a"), Some("a"));
        assert_eq!(minimum_window("ab", "ba"), Some("ab"));
    }

    #[test]
    fn test_no_window_exists() {
        assert_eq!(minimum_window("a", "aa"), None);
        assert_eq!(minimum_window("xyz", "q"), None);
        assert_eq!(minimum_window("", "a"), None);
    }

    #[test]
    fn test_empty_target() {
        assert_eq!(minimum_window("anything", ""), Some(""));
        assert_eq!(minimum_window("", ""), Some(""));
    }

    #[test]
    fn test_multiplicity_is_respected() {
        // Needs two 'a's, so "aa" not "a"
        assert_eq!(minimum_window("abcaa", "aa"), Some("aa"));
        assert_eq!(minimum_window("aabbcc", "abc"), Some("abbc"));
    }

    #[test]
    fn test_earliest_window_wins_ties() {
        // "ab" appears twice; the first occurrence is reported
        let haystack = "abxxab";
        let found = minimum_window(haystack, "ab").unwrap();
        assert_eq!(found, "ab");
        assert_eq!(found.as_ptr(), haystack.as_ptr());
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(minimum_window("héllo wörld", "öl"), Some("örl"));
        assert_eq!(minimum_window("grüße", "üe"), Some("üße"));
    }

    #[test]
    fn test_window_covers_target_multiset() {
        let window = minimum_window("ADOBECODEBANC", "AABC");
        assert_eq!(window, Some("ADOBECODEBA"));
        assert!(covers(window.unwrap(), "AABC"));
    }

    #[test]
    fn test_drafts_agree_on_random_inputs() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let haystack: String = (0..rng.gen_range(0..=30))
                .map(|_| (b'a' + rng.gen_range(0..4)) as char)
                .collect();
            let target: String = (0..rng.gen_range(1..=4))
                .map(|_| (b'a' + rng.gen_range(0..4)) as char)
                .collect();

            let fast = minimum_window(&haystack, &target);
            let brute = minimum_window_brute(&haystack, &target);
            assert_eq!(
                fast, brute,
                "drafts disagree on haystack {:?}, target {:?}",
                haystack, target
            );
            if let Some(window) = fast {
                assert!(covers(window, &target));
            }
        }
    }
}
