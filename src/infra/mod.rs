pub mod clipboard;
pub mod git;
