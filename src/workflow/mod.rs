pub mod commit_message;
pub mod session;
