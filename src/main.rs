mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod logging;
mod services;
mod workflow;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::cmd::copy::{self as copy_cmd, CopyArgs};
use crate::cmd::parse::{self as parse_cmd, ParseArgs};
use crate::config::{AppConfig, ClipboardBackend};
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::clipboard::{StdoutClipboard, SystemClipboard};
use crate::infra::git::GitCli;
use crate::services::ClipboardService;

#[derive(Parser)]
#[command(
    name = "branchmsg",
    author,
    version,
    about = "Turn a branch name into commit messages"
)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Type branch names and copy the generated messages (default).
    Interactive,
    /// Print the commit messages for one branch name.
    Parse(ParseArgs),
    /// Copy one commit message for a branch name to the clipboard.
    ///
    /// On Linux the command keeps running until the text has been pasted or
    /// picked up by a clipboard manager.
    Copy(CopyArgs),
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let cwd = std::env::current_dir()?;
    let config = AppConfig::load(&cwd)?;

    let command = cli.command.unwrap_or(Commands::Interactive);
    let clipboard = clipboard_for(config.clipboard, &command);
    let git = Arc::new(GitCli::new(config.workspace_root.clone()));
    let context = AppContext::new(config, git, clipboard);

    match command {
        Commands::Interactive => cmd::interactive::run(&context).await,
        Commands::Parse(args) => {
            let mut stdout = std::io::stdout();
            parse_cmd::run(&context, args, &mut stdout).await
        }
        Commands::Copy(args) => {
            let result = copy_cmd::run(&context, args).await?;
            eprintln!("Copied: {}", result.text);
            Ok(())
        }
    }
}

/// A one-shot `copy` exits right away, so it has to wait until the text is
/// pasted somewhere; the interactive session keeps its handle open instead.
fn clipboard_for(backend: ClipboardBackend, command: &Commands) -> Arc<dyn ClipboardService> {
    match (backend, command) {
        (ClipboardBackend::Stdout, _) => Arc::new(StdoutClipboard),
        (ClipboardBackend::System, Commands::Copy(_)) => Arc::new(SystemClipboard::one_shot()),
        (ClipboardBackend::System, _) => Arc::new(SystemClipboard::for_session()),
    }
}
