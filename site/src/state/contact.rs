//! Contact form validation and simulated submission.
//!
//! Phases: `Idle` → (`Submitting` → `Sent` → `Idle`). Validation happens
//! inside the submit transition; an invalid submit never leaves the current
//! phase. The send never touches the network and always succeeds.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex_lite::Regex;

use crate::consts::{
    CONTACT_SEND_DELAY_MS, CONTACT_STATUS_CLEAR_MS, ERR_EMAIL, ERR_MESSAGE, ERR_NAME, MESSAGE_MIN_CHARS,
    NAME_MIN_CHARS, STATUS_SENDING, STATUS_SENT,
};
use crate::state::effect::{Effect, TimerSlot};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Form control name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Id of the element that shows this field's error.
    pub fn error_id(self) -> &'static str {
        match self {
            Self::Name => "err-name",
            Self::Email => "err-email",
            Self::Message => "err-message",
        }
    }
}

/// Raw field text as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }
}

pub type FieldErrors = BTreeMap<ContactField, &'static str>;

/// Check every rule independently against the trimmed values.
pub fn validate(draft: &ContactDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if draft.name.trim().chars().count() < NAME_MIN_CHARS {
        errors.insert(ContactField::Name, ERR_NAME);
    }
    if !EMAIL_PATTERN.is_match(draft.email.trim()) {
        errors.insert(ContactField::Email, ERR_EMAIL);
    }
    if draft.message.trim().chars().count() < MESSAGE_MIN_CHARS {
        errors.insert(ContactField::Message, ERR_MESSAGE);
    }
    errors
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusTone {
    #[default]
    Muted,
    Accent,
}

impl StatusTone {
    /// CSS color for the status line.
    pub fn color(self) -> &'static str {
        match self {
            Self::Muted => "var(--muted)",
            Self::Accent => "var(--accent)",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: StatusTone,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactPhase {
    #[default]
    Idle,
    /// Simulated latency window; the submit control is disabled.
    Submitting,
    /// Thank-you status visible until the clear timer fires.
    Sent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactEvent {
    FieldEdited { field: ContactField, value: String },
    Submitted,
    SendFinished,
    StatusExpired,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub draft: ContactDraft,
    pub errors: FieldErrors,
    pub status: StatusLine,
    pub phase: ContactPhase,
}

impl ContactState {
    /// Whether the submit control is disabled.
    pub fn is_busy(&self) -> bool {
        self.phase == ContactPhase::Submitting
    }

    pub fn error(&self, field: ContactField) -> &'static str {
        self.errors.get(&field).copied().unwrap_or_default()
    }

    pub fn handle(&mut self, event: ContactEvent) -> Vec<Effect> {
        match event {
            ContactEvent::FieldEdited { field, value } => {
                self.draft.set(field, value);
                Vec::new()
            }
            ContactEvent::Submitted => self.submit(),
            ContactEvent::SendFinished => self.finish_send(),
            ContactEvent::StatusExpired => {
                if self.phase == ContactPhase::Sent {
                    self.status.text.clear();
                    self.phase = ContactPhase::Idle;
                }
                Vec::new()
            }
        }
    }

    fn submit(&mut self) -> Vec<Effect> {
        if self.is_busy() {
            return Vec::new();
        }
        self.errors.clear();
        let errors = validate(&self.draft);
        if !errors.is_empty() {
            self.errors = errors;
            return Vec::new();
        }

        let mut effects = Vec::with_capacity(2);
        if self.phase == ContactPhase::Sent {
            effects.push(Effect::Cancel(TimerSlot::ContactStatusClear));
        }
        self.phase = ContactPhase::Submitting;
        self.status = StatusLine { text: STATUS_SENDING.to_owned(), tone: StatusTone::Muted };
        effects.push(Effect::Schedule { slot: TimerSlot::ContactSend, delay_ms: CONTACT_SEND_DELAY_MS });
        effects
    }

    fn finish_send(&mut self) -> Vec<Effect> {
        if self.phase != ContactPhase::Submitting {
            return Vec::new();
        }
        self.phase = ContactPhase::Sent;
        self.draft = ContactDraft::default();
        self.status = StatusLine { text: STATUS_SENT.to_owned(), tone: StatusTone::Accent };
        vec![Effect::Schedule { slot: TimerSlot::ContactStatusClear, delay_ms: CONTACT_STATUS_CLEAR_MS }]
    }
}
