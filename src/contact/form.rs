use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::relay::{RelayError, SendRequest};

/// How long the success confirmation stays on screen before reverting to idle.
pub const SUCCESS_MESSAGE_MS: f64 = 5000.0;

// Deliberately looser than RFC 5322: some local part, some domain, one dot.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

/// The three free-text fields of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all fields.")]
    EmptyField,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Failed to send message. Please try again or email me directly.")]
    Dispatch,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(FormError),
}

impl SubmitStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }

    pub fn error(&self) -> Option<FormError> {
        match self {
            Self::Failed(err) => Some(*err),
            _ => None,
        }
    }
}

pub fn validate(draft: &MessageDraft) -> Result<(), FormError> {
    if draft.name.is_empty() || draft.email.is_empty() || draft.message.is_empty() {
        return Err(FormError::EmptyField);
    }
    if !EMAIL_PATTERN.is_match(&draft.email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

/// Submission state machine for the contact form.
///
/// `begin` validates the draft and, when it passes, hands back the relay
/// request to dispatch; `finish` settles the in-flight attempt. Scheduling of
/// `dismiss_sent` (the timed auto-hide of the confirmation) belongs to the
/// view layer, which must also cancel it on teardown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitFlow {
    pub draft: MessageDraft,
    pub status: SubmitStatus,
}

impl SubmitFlow {
    /// Apply a field edit. A displayed error is stale once the user starts
    /// typing again, so it resets to idle; an in-flight send is untouched.
    pub fn edit(&mut self, apply: impl FnOnce(&mut MessageDraft)) {
        apply(&mut self.draft);
        if matches!(self.status, SubmitStatus::Failed(_)) {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Start a submission attempt. Returns the request to dispatch, or `None`
    /// when validation failed or another attempt is still in flight.
    pub fn begin(&mut self) -> Option<SendRequest> {
        if self.status.is_sending() {
            return None;
        }
        if let Err(err) = validate(&self.draft) {
            self.status = SubmitStatus::Failed(err);
            return None;
        }
        self.status = SubmitStatus::Sending;
        Some(SendRequest::from_draft(&self.draft))
    }

    /// Settle the attempt `begin` started. Success clears the draft; failure
    /// keeps it so the user can resubmit as-is.
    pub fn finish(&mut self, result: Result<(), RelayError>) {
        match result {
            Ok(()) => {
                self.draft = MessageDraft::default();
                self.status = SubmitStatus::Sent;
            }
            Err(_) => self.status = SubmitStatus::Failed(FormError::Dispatch),
        }
    }

    /// Hide the success confirmation. No-op in any other state, so a timer
    /// firing late (e.g. after the user already resubmitted) is harmless.
    pub fn dismiss_sent(&mut self) {
        if self.status.is_sent() {
            self.status = SubmitStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SubmitFlow {
        SubmitFlow {
            draft: MessageDraft {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "Hello".to_string(),
            },
            status: SubmitStatus::Idle,
        }
    }

    #[test]
    fn empty_field_fails_validation_without_a_request() {
        let clears: [fn(&mut MessageDraft); 3] = [
            |d| d.name.clear(),
            |d| d.email.clear(),
            |d| d.message.clear(),
        ];
        for clear in clears {
            let mut flow = filled();
            clear(&mut flow.draft);
            assert!(flow.begin().is_none());
            assert_eq!(flow.status, SubmitStatus::Failed(FormError::EmptyField));
        }
    }

    #[test]
    fn malformed_email_fails_validation_without_a_request() {
        for email in ["not-an-email", "missing-domain@", "@missing-local.com", "no-tld@host"] {
            let mut flow = filled();
            flow.draft.email = email.to_string();
            assert!(flow.begin().is_none());
            assert_eq!(flow.status, SubmitStatus::Failed(FormError::InvalidEmail));
        }
    }

    #[test]
    fn email_pattern_accepts_plain_addresses() {
        assert!(validate(&filled().draft).is_ok());
        let mut draft = filled().draft;
        draft.email = "first.last+tag@sub.domain.io".to_string();
        assert!(validate(&draft).is_ok());
    }

    #[test]
    fn valid_submit_yields_one_request_and_success_clears_the_draft() {
        let mut flow = filled();
        let request = flow.begin().expect("valid draft should yield a request");
        assert_eq!(request.template_params.from_name, "Ada");
        assert_eq!(request.template_params.from_email, "ada@example.com");
        assert_eq!(request.template_params.message, "Hello");
        assert!(flow.status.is_sending());

        flow.finish(Ok(()));
        assert_eq!(flow.draft, MessageDraft::default());
        assert!(flow.status.is_sent());
    }

    #[test]
    fn dispatch_failure_keeps_the_draft_for_resubmission() {
        let mut flow = filled();
        let draft_before = flow.draft.clone();
        flow.begin().expect("valid draft should yield a request");

        flow.finish(Err(RelayError::Rejected(500)));
        assert_eq!(flow.draft, draft_before);
        assert_eq!(flow.status, SubmitStatus::Failed(FormError::Dispatch));

        // and the retained draft can go right back out
        assert!(flow.begin().is_some());
    }

    #[test]
    fn submitting_while_in_flight_is_a_no_op() {
        let mut flow = filled();
        assert!(flow.begin().is_some());
        assert!(flow.begin().is_none());
        assert!(flow.status.is_sending());
    }

    #[test]
    fn dismiss_reverts_sent_to_idle_and_nothing_else() {
        let mut flow = filled();
        flow.begin().expect("valid draft should yield a request");
        flow.finish(Ok(()));
        flow.dismiss_sent();
        assert_eq!(flow.status, SubmitStatus::Idle);

        // a late timer must not clobber a newer state
        let mut flow = filled();
        flow.begin().expect("valid draft should yield a request");
        flow.dismiss_sent();
        assert!(flow.status.is_sending());
    }

    #[test]
    fn editing_clears_a_displayed_error_but_not_an_in_flight_send() {
        let mut flow = filled();
        flow.draft.email = "not-an-email".to_string();
        assert!(flow.begin().is_none());
        assert!(flow.status.error().is_some());

        flow.edit(|d| d.email = "ada@example.com".to_string());
        assert_eq!(flow.status, SubmitStatus::Idle);

        flow.begin().expect("valid draft should yield a request");
        flow.edit(|d| d.name.push('!'));
        assert!(flow.status.is_sending());
    }
}
