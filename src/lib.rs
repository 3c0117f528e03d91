pub mod cs;

pub use cs::{combinatorial, dynamic, search, string};
pub use cs::error::{Error, Result};
