pub mod language;
pub mod output;
pub mod parsing;
pub mod problem;
pub mod rendering;
