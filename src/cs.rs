pub mod combinatorial;
pub mod dynamic;
pub mod error;
pub mod search;
pub mod string;

// Re-export all modules
pub use combinatorial::*;
pub use dynamic::*;
pub use search::*;
pub use string::*;
