use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;

/// `<type>/<TICKET>-<suffix>-<message>`, anchored at the start only. The
/// message group runs to the end of the input, newlines included.
static BRANCH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>[^/]+)/(?P<ticket>[A-Z]{2,}-[^-]+)-(?P<message>(?s:.*))")
        .expect("Invalid branch pattern")
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchName(pub String);

impl BranchName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for BranchName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Fields extracted from a well-formed branch name.
///
/// `message` is stored with every `-` already turned into a space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBranch {
    pub change_type: String,
    pub ticket_no: String,
    pub message: String,
}

impl ParsedBranch {
    /// Returns `Ok(None)` for an empty branch name: nothing typed yet is not
    /// an error.
    pub fn parse(raw: &BranchName) -> Result<Option<Self>, ParseError> {
        if raw.is_empty() {
            return Ok(None);
        }
        Self::parse_str(raw.as_str()).map(Some)
    }

    pub fn parse_str(raw: &str) -> Result<Self, ParseError> {
        let captures = BRANCH_PATTERN
            .captures(raw)
            .ok_or(ParseError::InvalidFormat)?;

        let group = |name: &str| {
            captures
                .name(name)
                .map(|m| m.as_str())
                .filter(|value| !value.is_empty())
                .ok_or(ParseError::InvalidFormat)
        };

        let change_type = group("type")?;
        let ticket_no = group("ticket")?;
        let message = group("message")?;

        Ok(Self {
            change_type: change_type.to_string(),
            ticket_no: ticket_no.to_string(),
            message: message.replace('-', " "),
        })
    }
}
