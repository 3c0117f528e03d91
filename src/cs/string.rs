pub mod anagram_groups;
pub mod minimum_window;
pub mod slugify;

// Re-export string exercises with descriptive names
pub use anagram_groups::{group_anagrams, group_anagrams_pairwise};
pub use minimum_window::{minimum_window, minimum_window_brute};
pub use slugify::{slugify, slugify_with_separator};
