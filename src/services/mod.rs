pub mod clipboard;
#[cfg(test)]
pub mod fakes;
pub mod version_control;

pub use clipboard::ClipboardService;
pub use version_control::VersionControlService;
