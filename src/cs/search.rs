pub mod longest_consecutive;
pub mod rotated_minimum;

// Re-export search exercises with descriptive names
pub use longest_consecutive::longest_consecutive_run;
pub use rotated_minimum::rotated_minimum;
