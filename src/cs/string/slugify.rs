use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Converts `text` into a URL-friendly slug separated by `'-'`.
///
/// # Examples
///
/// ```
/// use katas::cs::string::slugify::slugify;
///
/// assert_eq!(slugify("Hello, World! This is a test."), "hello-world-this-is-a-test");
/// assert_eq!(slugify("ÄÖÜ Some German Characters"), "aou-some-german-characters");
/// ```
pub fn slugify(text: &str) -> String {
    slugify_with_separator(text, '-')
}

/// Converts `text` into a slug using `separator` between words.
///
/// The text is NFKD-normalized so accented characters decompose into their
/// base letter plus combining marks, everything non-ASCII is dropped, and
/// the remainder is lowercased. Non-word characters and whitespace runs are
/// then substituted with the separator, repeated separators collapse into
/// one, and leading and trailing separators are stripped.
///
/// # Examples
///
/// ```
/// use katas::cs::string::slugify::slugify_with_separator;
///
/// assert_eq!(
///     slugify_with_separator("My Article Title with special chars & numbers 123", '_'),
///     "my_article_title_with_special_chars_numbers_123",
/// );
/// ```
pub fn slugify_with_separator(text: &str, separator: char) -> String {
    // Decompose, keep the ASCII skeleton, lowercase.
    let ascii: String = text.nfkd().filter(char::is_ascii).collect();
    let lowered = ascii.to_lowercase();

    let sep = separator.to_string();
    let sep_escaped = regex::escape(&sep);

    // The patterns are built from an escaped single character and cannot
    // fail to parse.
    let non_word = Regex::new(&format!(r"[^\w\s{}]", sep_escaped)).unwrap();
    let replaced = non_word.replace_all(&lowered, sep.as_str());

    let whitespace = Regex::new(r"\s+").unwrap();
    let replaced = whitespace.replace_all(&replaced, sep.as_str());

    let separator_runs = Regex::new(&format!(r"{}+", sep_escaped)).unwrap();
    let collapsed = separator_runs.replace_all(&replaced, sep.as_str());

    collapsed.trim_matches(separator).to_string()
}
