use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::{AppConfig, ClipboardBackend};
use crate::context::AppContext;
use crate::domain::branch::BranchName;
use crate::error::{AppError, AppResult};
use crate::services::{ClipboardService, VersionControlService};

/// Reports a fixed branch, or fails like a directory outside a repository.
pub struct FixedBranch(pub Option<&'static str>);

#[async_trait]
impl VersionControlService for FixedBranch {
    async fn current_branch(&self) -> AppResult<BranchName> {
        self.0
            .map(BranchName::from)
            .ok_or_else(|| AppError::VersionControl("not a git repository".to_string()))
    }
}

#[derive(Default)]
pub struct RecordingClipboard(Mutex<Vec<String>>);

impl RecordingClipboard {
    pub fn copied(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClipboardService for RecordingClipboard {
    async fn copy(&self, text: &str) -> AppResult<()> {
        self.0.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

pub struct BrokenClipboard;

#[async_trait]
impl ClipboardService for BrokenClipboard {
    async fn copy(&self, _text: &str) -> AppResult<()> {
        Err(AppError::Clipboard("no display".to_string()))
    }
}

pub fn test_context(current_branch: Option<&'static str>) -> (AppContext, Arc<RecordingClipboard>) {
    let clipboard = Arc::new(RecordingClipboard::default());
    let config = AppConfig {
        clipboard: ClipboardBackend::Stdout,
        workspace_root: PathBuf::from("."),
    };
    let ctx = AppContext::new(
        config,
        Arc::new(FixedBranch(current_branch)),
        clipboard.clone(),
    );
    (ctx, clipboard)
}
