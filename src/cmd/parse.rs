use std::io::Write;

use clap::Args;

use crate::cmd::BranchArgs;
use crate::cmd::view::{render_results, render_state};
use crate::context::AppContext;
use crate::error::AppResult;
use crate::workflow::commit_message::{commit_messages, resolve_branch};
use crate::workflow::session::SessionState;

#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    #[command(flatten)]
    pub branch: BranchArgs,
    /// Print the results as JSON.
    #[arg(long)]
    pub json: bool,
}

pub async fn run(ctx: &AppContext, args: ParseArgs, out: &mut impl Write) -> AppResult<()> {
    let branch = resolve_branch(ctx, args.branch.source()).await?;
    let results = commit_messages(&branch)?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &results)?;
        writeln!(out)?;
    } else if results.is_empty() {
        render_state(out, &SessionState::default())?;
    } else {
        render_results(out, &results, false)?;
    }
    Ok(())
}
