use std::io::{self, Write};

use crate::domain::message::FormattedResult;
use crate::workflow::session::{EmptyView, SessionState};

const ALERT_ICON: char = '!';

pub fn render_state(out: &mut impl Write, state: &SessionState) -> io::Result<()> {
    match state.empty_view() {
        Some(view) => render_empty(out, &view),
        None => render_results(out, &state.results, state.show_details),
    }
}

pub fn render_empty(out: &mut impl Write, view: &EmptyView) -> io::Result<()> {
    if view.alert {
        writeln!(out, "{ALERT_ICON} {}", view.title)?;
    } else {
        writeln!(out, "{}", view.title)?;
    }
    writeln!(out, "{}", view.description)
}

pub fn render_results(
    out: &mut impl Write,
    results: &[FormattedResult],
    show_details: bool,
) -> io::Result<()> {
    for (index, result) in results.iter().enumerate() {
        let position = index + 1;
        match result.icon {
            Some(icon) => writeln!(out, "{position:>2}. {icon} {}", result.text)?,
            None => writeln!(out, "{position:>2}. {}", result.text)?,
        }
        if show_details {
            render_detail(out, result)?;
        }
    }
    Ok(())
}

fn render_detail(out: &mut impl Write, result: &FormattedResult) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "    {}", result.text)?;
    writeln!(out)?;
    writeln!(out, "    {:<14} {}", "Branch Type:", result.change_type)?;
    writeln!(out, "    {:<14} {}", "Ticket Number:", result.ticket_no)?;
    writeln!(out, "    {:<14} {}", "Message:", result.message)?;
    writeln!(out)
}
