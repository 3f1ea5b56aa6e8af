use crate::domain::branch::{BranchName, ParsedBranch};
use crate::domain::message::{self, FormattedResult};
use crate::error::ParseError;

pub const PROMPT_TEXT: &str = "Please enter the branch name";
pub const FORMAT_HINT: &str = "Format: feature/TICKET-123-feature-description";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStatus {
    Empty,
    Invalid,
    Valid,
}

/// What the list shows when there is nothing to copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyView {
    pub alert: bool,
    pub title: String,
    pub description: &'static str,
}

/// Display state of one interactive session. Every event produces a whole
/// new value; nothing is merged into the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub branch_name: BranchName,
    pub results: Vec<FormattedResult>,
    pub error: Option<ParseError>,
    pub show_details: bool,
}

impl SessionState {
    /// Recomputes results and error for new input. The detail toggle carries
    /// over.
    pub fn with_input(&self, branch_name: BranchName) -> Self {
        let (results, error) = match ParsedBranch::parse(&branch_name) {
            Ok(Some(parsed)) => (message::format(&parsed).to_vec(), None),
            Ok(None) => (Vec::new(), None),
            Err(err) => (Vec::new(), Some(err)),
        };
        Self {
            branch_name,
            results,
            error,
            show_details: self.show_details,
        }
    }

    pub fn toggle_details(&self) -> Self {
        Self {
            show_details: !self.show_details,
            ..self.clone()
        }
    }

    pub fn status(&self) -> ParseStatus {
        if !self.results.is_empty() {
            ParseStatus::Valid
        } else if self.error.is_some() {
            ParseStatus::Invalid
        } else {
            ParseStatus::Empty
        }
    }

    /// Result at a 1-based list position.
    pub fn result(&self, position: usize) -> Option<&FormattedResult> {
        position
            .checked_sub(1)
            .and_then(|index| self.results.get(index))
    }

    pub fn empty_view(&self) -> Option<EmptyView> {
        if !self.results.is_empty() {
            return None;
        }
        let (alert, title) = match &self.error {
            Some(err) => (true, err.to_string()),
            None => (false, PROMPT_TEXT.to_string()),
        };
        Some(EmptyView {
            alert,
            title,
            description: FORMAT_HINT,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(raw: &str) -> SessionState {
        SessionState::default().with_input(BranchName::from(raw))
    }

    #[test]
    fn starts_empty() {
        let state = SessionState::default();
        assert_eq!(state.status(), ParseStatus::Empty);
        assert!(!state.show_details);
    }

    #[test]
    fn valid_input_produces_three_results() {
        let state = typed("feature/AB-123-add-login-page");
        assert_eq!(state.status(), ParseStatus::Valid);
        assert_eq!(state.error, None);
        let texts: Vec<_> = state.results.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "feature(AB-123): add login page",
                "AB-123 - add login page",
                "[AB-123] add login page",
            ]
        );
        assert_eq!(state.empty_view(), None);
    }

    #[test]
    fn invalid_input_sets_error_and_clears_results() {
        let state = typed("feature/AB-1-ok").with_input(BranchName::from("no-ticket-branch"));
        assert_eq!(state.status(), ParseStatus::Invalid);
        assert!(state.results.is_empty());
        assert_eq!(state.error, Some(ParseError::InvalidFormat));
        assert_eq!(
            state.empty_view(),
            Some(EmptyView {
                alert: true,
                title: "Please use correct branch format".to_string(),
                description: FORMAT_HINT,
            })
        );
    }

    #[test]
    fn clearing_input_clears_error() {
        let state = typed("feature/ab-1-lower").with_input(BranchName::default());
        assert_eq!(state.status(), ParseStatus::Empty);
        assert_eq!(state.error, None);
        assert_eq!(
            state.empty_view(),
            Some(EmptyView {
                alert: false,
                title: PROMPT_TEXT.to_string(),
                description: FORMAT_HINT,
            })
        );
    }

    #[test]
    fn empty_message_is_invalid() {
        assert_eq!(typed("chore/AB-1-").status(), ParseStatus::Invalid);
    }

    #[test]
    fn invalid_then_valid_clears_error() {
        let state = typed("nope").with_input(BranchName::from("fix/XYZ-9-typo"));
        assert_eq!(state.status(), ParseStatus::Valid);
        assert_eq!(state.error, None);
    }

    #[test]
    fn detail_toggle_survives_input_changes() {
        let state = SessionState::default().toggle_details();
        assert!(state.show_details);

        let state = state
            .with_input(BranchName::from("fix/XYZ-9-typo"))
            .with_input(BranchName::from("bad"))
            .with_input(BranchName::default());
        assert!(state.show_details);
        assert!(!state.toggle_details().show_details);
    }

    #[test]
    fn same_input_gives_same_state() {
        let first = typed("feature/AB-123-add-login-page");
        let second = first.with_input(BranchName::from("feature/AB-123-add-login-page"));
        assert_eq!(first, second);
    }

    #[test]
    fn looks_up_results_by_position() {
        let state = typed("fix/XYZ-9-typo");
        assert_eq!(state.result(1).map(|r| r.text.as_str()), Some("fix(XYZ-9): typo"));
        assert_eq!(state.result(3).map(|r| r.text.as_str()), Some("[XYZ-9] typo"));
        assert_eq!(state.result(0), None);
        assert_eq!(state.result(4), None);
    }
}
