// Types representing the directives found in a source file

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
