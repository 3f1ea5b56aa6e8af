use async_trait::async_trait;

use crate::domain::branch::BranchName;
use crate::error::AppResult;

#[async_trait]
pub trait VersionControlService: Send + Sync {
    /// Name of the branch checked out in the workspace.
    async fn current_branch(&self) -> AppResult<BranchName>;
}
