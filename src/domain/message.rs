use clap::ValueEnum;
use serde::Serialize;

use crate::domain::branch::ParsedBranch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CommitStyle {
    /// `type(TICKET-1): message`
    Conventional,
    /// `TICKET-1 - message`
    #[value(name = "ticket")]
    TicketPrefixed,
    /// `[TICKET-1] message`
    Bracketed,
}

impl CommitStyle {
    /// Rendering order of the result list.
    pub const ALL: [CommitStyle; 3] = [
        CommitStyle::Conventional,
        CommitStyle::TicketPrefixed,
        CommitStyle::Bracketed,
    ];

    pub fn render(&self, parsed: &ParsedBranch) -> String {
        let ParsedBranch {
            change_type,
            ticket_no,
            message,
        } = parsed;
        match self {
            CommitStyle::Conventional => format!("{change_type}({ticket_no}): {message}"),
            CommitStyle::TicketPrefixed => format!("{ticket_no} - {message}"),
            CommitStyle::Bracketed => format!("[{ticket_no}] {message}"),
        }
    }
}

/// One copyable commit message, plus the fields it was built from for the
/// detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedResult {
    pub text: String,
    #[serde(rename = "type")]
    pub change_type: String,
    pub ticket_no: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<char>,
}

impl FormattedResult {
    pub fn new(style: CommitStyle, parsed: &ParsedBranch) -> Self {
        Self {
            text: style.render(parsed),
            change_type: parsed.change_type.clone(),
            ticket_no: parsed.ticket_no.clone(),
            message: parsed.message.clone(),
            icon: None,
        }
    }
}

pub fn format(parsed: &ParsedBranch) -> [FormattedResult; 3] {
    CommitStyle::ALL.map(|style| FormattedResult::new(style, parsed))
}
