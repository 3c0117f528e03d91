use std::collections::HashMap;

/// Canonical grouping key for a word: its characters in sorted order.
fn anagram_key(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// Groups words into anagram equivalence classes.
///
/// Two words belong to the same class when sorting their characters yields
/// the same canonical key. Classes appear in order of first occurrence and
/// members keep their input order, so the output partitions the input
/// exactly.
///
/// # Examples
///
/// ```
/// use katas::cs::string::anagram_groups::group_anagrams;
///
/// let groups = group_anagrams(&["eat", "tea", "tan", "ate", "nat", "bat"]);
/// assert_eq!(groups, vec![
///     vec!["eat".to_string(), "tea".to_string(), "ate".to_string()],
///     vec!["tan".to_string(), "nat".to_string()],
///     vec!["bat".to_string()],
/// ]);
/// ```
pub fn group_anagrams(words: &[&str]) -> Vec<Vec<String>> {
    let mut groups: Vec<Vec<String>> = Vec::new();
    let mut group_by_key: HashMap<String, usize> = HashMap::new();

    for &word in words {
        let key = anagram_key(word);
        match group_by_key.get(&key) {
            Some(&index) => groups[index].push(word.to_string()),
            None => {
                group_by_key.insert(key, groups.len());
                groups.push(vec![word.to_string()]);
            }
        }
    }

    groups
}

/// Brute-force draft of the same exercise: compares each unvisited word
/// against every later word, sorting characters on each comparison, O(n^2)
/// sorts. Produces the same classes in the same order as [`group_anagrams`].
///
/// # Examples
///
/// ```
/// use katas::cs::string::anagram_groups::group_anagrams_pairwise;
///
/// let groups = group_anagrams_pairwise(&["abc", "bca", "xyz"]);
/// assert_eq!(groups.len(), 2);
/// ```
pub fn group_anagrams_pairwise(words: &[&str]) -> Vec<Vec<String>> {
    let mut grouped = vec![false; words.len()];
    let mut groups = Vec::new();

    for i in 0..words.len() {
        if grouped[i] {
            continue;
        }
        grouped[i] = true;

        let key = anagram_key(words[i]);
        let mut class = vec![words[i].to_string()];
        for j in i + 1..words.len() {
            if !grouped[j] && anagram_key(words[j]) == key {
                grouped[j] = true;
                class.push(words[j].to_string());
            }
        }
        groups.push(class);
    }

    groups
}
