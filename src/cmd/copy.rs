use clap::Args;

use crate::cmd::BranchArgs;
use crate::context::AppContext;
use crate::domain::message::{CommitStyle, FormattedResult};
use crate::error::AppResult;
use crate::workflow::commit_message::{copy_commit_message, resolve_branch};

#[derive(Args, Debug, Clone)]
pub struct CopyArgs {
    #[command(flatten)]
    pub branch: BranchArgs,
    /// Which commit message to copy.
    #[arg(long, value_enum, default_value_t = CommitStyle::Conventional)]
    pub style: CommitStyle,
}

pub async fn run(ctx: &AppContext, args: CopyArgs) -> AppResult<FormattedResult> {
    let branch = resolve_branch(ctx, args.branch.source()).await?;
    copy_commit_message(ctx, &branch, args.style).await
}
