// Diagnostics for problems encountered while scanning

mod format;
mod messages;
mod report;

// Re-export all public symbols
pub use format::*;
pub use messages::*;
pub use report::*;
