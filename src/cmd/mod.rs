pub mod copy;
pub mod interactive;
pub mod parse;
pub mod view;

use clap::Args;

use crate::domain::branch::BranchName;
use crate::workflow::commit_message::BranchSource;

#[derive(Args, Debug, Clone)]
pub struct BranchArgs {
    /// Branch name, e.g. feature/TICKET-123-feature-description.
    #[arg(conflicts_with = "current", required_unless_present = "current")]
    pub branch: Option<String>,
    /// Use the branch checked out in the current directory.
    #[arg(long)]
    pub current: bool,
}

impl BranchArgs {
    pub fn source(self) -> BranchSource {
        match self.branch {
            Some(branch) if !self.current => BranchSource::Literal(BranchName(branch)),
            _ => BranchSource::CurrentBranch,
        }
    }
}
