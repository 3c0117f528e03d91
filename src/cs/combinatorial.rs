pub mod maximum_gold;

// Re-export combinatorial search exercises with descriptive names
pub use maximum_gold::maximum_gold;
