pub mod branch;
pub mod message;
