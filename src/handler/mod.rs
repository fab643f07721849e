pub mod completions;
pub mod tools;
