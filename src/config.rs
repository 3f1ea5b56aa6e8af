use std::env;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const CLIPBOARD_ENV: &str = "BRANCHMSG_CLIPBOARD";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub clipboard: ClipboardBackend,
    pub workspace_root: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipboardBackend {
    #[default]
    System,
    /// Print copied text instead, for terminals without a clipboard.
    Stdout,
}

impl ClipboardBackend {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "system" => Some(ClipboardBackend::System),
            "stdout" => Some(ClipboardBackend::Stdout),
            _ => None,
        }
    }
}

impl AppConfig {
    pub fn load(workspace_hint: &Path) -> AppResult<Self> {
        let clipboard = match env::var(CLIPBOARD_ENV) {
            Ok(value) => ClipboardBackend::from_str(&value).ok_or_else(|| {
                AppError::Configuration(format!(
                    "{CLIPBOARD_ENV} must be 'system' or 'stdout', got '{value}'"
                ))
            })?,
            Err(_) => ClipboardBackend::default(),
        };

        Ok(Self {
            clipboard,
            workspace_root: workspace_hint.to_path_buf(),
        })
    }
}
