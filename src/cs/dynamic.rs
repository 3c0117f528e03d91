pub mod kadane;
pub mod unique_paths;

// Re-export dynamic programming exercises with descriptive names
pub use kadane::{max_subarray_sum, max_subarray_sum_brute};
pub use unique_paths::unique_paths;
