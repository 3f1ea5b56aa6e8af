use tracing::{debug, info};

use crate::context::AppContext;
use crate::domain::branch::{BranchName, ParsedBranch};
use crate::domain::message::{self, CommitStyle, FormattedResult};
use crate::error::{AppError, AppResult};

/// Where a one-shot command reads its branch name from.
#[derive(Debug, Clone)]
pub enum BranchSource {
    Literal(BranchName),
    CurrentBranch,
}

pub async fn resolve_branch(ctx: &AppContext, source: BranchSource) -> AppResult<BranchName> {
    match source {
        BranchSource::Literal(name) => Ok(name),
        BranchSource::CurrentBranch => {
            let name = ctx.version_control.current_branch().await?;
            debug!(branch = name.as_str(), "read current branch");
            Ok(name)
        }
    }
}

/// All renderings for a branch name; empty when the name is empty.
pub fn commit_messages(branch: &BranchName) -> AppResult<Vec<FormattedResult>> {
    Ok(ParsedBranch::parse(branch)?
        .map(|parsed| message::format(&parsed).to_vec())
        .unwrap_or_default())
}

pub async fn copy_commit_message(
    ctx: &AppContext,
    branch: &BranchName,
    style: CommitStyle,
) -> AppResult<FormattedResult> {
    let parsed = ParsedBranch::parse(branch)?.ok_or(AppError::EmptyBranch)?;
    let result = FormattedResult::new(style, &parsed);
    ctx.clipboard.copy(&result.text).await?;
    info!(?style, "commit message copied");
    Ok(result)
}
