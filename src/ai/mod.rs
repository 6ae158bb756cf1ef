pub mod interview;
pub mod prompt;
