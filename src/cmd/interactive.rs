use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::cmd::view::render_state;
use crate::context::AppContext;
use crate::domain::branch::BranchName;
use crate::error::AppResult;
use crate::services::ClipboardService;
use crate::workflow::session::SessionState;

const HELP: &str = "\
Type a branch name to see commit messages. An empty line clears the input.
  :c, :copy N     copy result N
  :d, :details    show or hide details
  :h, :help       show this help
  :q, :quit       exit
  ::text          use text starting with ':' as the branch name";

#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    Input(BranchName),
    Copy(Option<usize>),
    ToggleDetails,
    Help,
    Quit,
    Unknown(String),
}

impl SessionCommand {
    fn from_line(line: &str) -> Self {
        if let Some(escaped) = line.strip_prefix("::") {
            return SessionCommand::Input(BranchName(format!(":{escaped}")));
        }
        let Some(command) = line.strip_prefix(':') else {
            return SessionCommand::Input(BranchName::from(line));
        };

        let mut parts = command.split_whitespace();
        match parts.next() {
            Some("c" | "copy") => {
                SessionCommand::Copy(parts.next().and_then(|n| n.parse().ok()))
            }
            Some("d" | "details") => SessionCommand::ToggleDetails,
            Some("h" | "help") => SessionCommand::Help,
            Some("q" | "quit") => SessionCommand::Quit,
            _ => SessionCommand::Unknown(command.to_string()),
        }
    }
}

pub async fn run(ctx: &AppContext) -> AppResult<()> {
    debug!(clipboard = ?ctx.config.clipboard, "starting interactive session");
    let input = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();
    run_session(ctx.clipboard.as_ref(), input, &mut stdout).await?;
    Ok(())
}

/// Reads one event per line until `:quit` or end of input and returns the
/// final state.
pub async fn run_session<R, W>(
    clipboard: &dyn ClipboardService,
    input: R,
    out: &mut W,
) -> AppResult<SessionState>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut state = SessionState::default();
    writeln!(out, "Enter branch name (:help for commands)")?;
    render_state(out, &state)?;
    out.flush()?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match SessionCommand::from_line(&line) {
            SessionCommand::Input(branch_name) => {
                state = state.with_input(branch_name);
                debug!(
                    branch = state.branch_name.as_str(),
                    status = ?state.status(),
                    "input changed"
                );
                render_state(out, &state)?;
            }
            SessionCommand::ToggleDetails => {
                state = state.toggle_details();
                render_state(out, &state)?;
            }
            SessionCommand::Copy(Some(position)) => match state.result(position) {
                Some(result) => match clipboard.copy(&result.text).await {
                    Ok(()) => {
                        info!(position, "result copied");
                        writeln!(out, "Copied: {}", result.text)?;
                    }
                    Err(err) => {
                        warn!(error = %err, "copy failed");
                        writeln!(out, "Copy failed: {err}")?;
                    }
                },
                None => writeln!(out, "No result at position {position}")?,
            },
            SessionCommand::Copy(None) => writeln!(out, "Usage: :copy N")?,
            SessionCommand::Help => writeln!(out, "{HELP}")?,
            SessionCommand::Quit => break,
            SessionCommand::Unknown(command) => {
                writeln!(out, "Unknown command ':{command}' (:help for commands)")?
            }
        }
        out.flush()?;
    }

    Ok(state)
}
