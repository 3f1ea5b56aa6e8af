use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;

use crate::domain::branch::BranchName;
use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

pub struct GitCli {
    workspace_root: PathBuf,
}

impl GitCli {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { workspace_root }
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn current_branch(&self) -> AppResult<BranchName> {
        let output = Command::new("git")
            .args(["rev-parse", "--abbrev-ref", "HEAD"])
            .current_dir(&self.workspace_root)
            .output()
            .await
            .map_err(|err| AppError::VersionControl(format!("failed to run git: {err}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::VersionControl(format!(
                "git rev-parse failed in {}: {}",
                self.workspace_root.display(),
                stderr.trim()
            )));
        }

        branch_from_output(&String::from_utf8_lossy(&output.stdout))
    }
}

fn branch_from_output(stdout: &str) -> AppResult<BranchName> {
    match stdout.trim() {
        "" => Err(AppError::VersionControl(
            "git returned an empty branch name".to_string(),
        )),
        "HEAD" => Err(AppError::VersionControl(
            "HEAD is detached; no branch is checked out".to_string(),
        )),
        name => Ok(BranchName(name.to_string())),
    }
}
