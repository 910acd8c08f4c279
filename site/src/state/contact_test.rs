use super::*;

fn draft(name: &str, email: &str, message: &str) -> ContactDraft {
    ContactDraft { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() }
}

fn filled(name: &str, email: &str, message: &str) -> ContactState {
    let mut state = ContactState::default();
    for (field, value) in [(ContactField::Name, name), (ContactField::Email, email), (ContactField::Message, message)] {
        state.handle(ContactEvent::FieldEdited { field, value: value.to_owned() });
    }
    state
}

fn valid() -> ContactState {
    filled("Ada Lovelace", "ada@example.com", "Hello, this is long enough.")
}

// =============================================================
// Validation rules
// =============================================================

#[test]
fn validate_accepts_well_formed_input() {
    assert!(validate(&draft("Ada Lovelace", "ada@example.com", "Hello, this is long enough.")).is_empty());
}

#[test]
fn validate_reports_every_failure_together() {
    let errors = validate(&draft("A", "bad", "short"));
    assert_eq!(errors.get(&ContactField::Name), Some(&"Please enter your name (2+ characters)"));
    assert_eq!(errors.get(&ContactField::Email), Some(&"Enter a valid email address"));
    assert_eq!(errors.get(&ContactField::Message), Some(&"Message must be at least 10 characters"));
}

#[test]
fn validate_trims_before_measuring() {
    let errors = validate(&draft("  A  ", "  ada@example.com  ", "   123456789   "));
    assert!(errors.contains_key(&ContactField::Name));
    assert!(!errors.contains_key(&ContactField::Email));
    assert!(errors.contains_key(&ContactField::Message));
}

#[test]
fn validate_counts_characters_not_bytes() {
    assert!(!validate(&draft("Zoë", "z@e.io", "ünïcödé ok")).contains_key(&ContactField::Name));
    assert!(validate(&draft("é", "z@e.io", "0123456789")).contains_key(&ContactField::Name));
}

#[test]
fn email_pattern_requires_at_and_dotted_domain() {
    for ok in ["a@b.co", "first.last@sub.example.org", "x+tag@d.io"] {
        assert!(!validate(&draft("Ada", ok, "long enough text")).contains_key(&ContactField::Email), "{ok}");
    }
    for bad in ["", "bad", "a@b", "@b.co", "a@.co", "a@b.", "a b@c.de", "a@@b.co", "a@b@c.de"] {
        assert!(validate(&draft("Ada", bad, "long enough text")).contains_key(&ContactField::Email), "{bad}");
    }
}

// =============================================================
// Submit sequencing
// =============================================================

#[test]
fn invalid_submit_shows_errors_without_status_change() {
    let mut state = filled("A", "bad", "short");
    let effects = state.handle(ContactEvent::Submitted);
    assert!(effects.is_empty());
    assert_eq!(state.errors.len(), 3);
    assert_eq!(state.status, StatusLine::default());
    assert_eq!(state.phase, ContactPhase::Idle);
    assert!(!state.is_busy());
}

#[test]
fn errors_are_cleared_before_revalidation() {
    let mut state = filled("A", "ada@example.com", "short");
    state.handle(ContactEvent::Submitted);
    assert_eq!(state.error(ContactField::Name), ERR_NAME);

    state.handle(ContactEvent::FieldEdited { field: ContactField::Name, value: "Ada".to_owned() });
    state.handle(ContactEvent::Submitted);
    assert_eq!(state.error(ContactField::Name), "");
    assert_eq!(state.error(ContactField::Message), ERR_MESSAGE);
}

#[test]
fn valid_submit_enters_sending_window() {
    let mut state = valid();
    let effects = state.handle(ContactEvent::Submitted);
    assert_eq!(state.status.text, "Sending message...");
    assert_eq!(state.status.tone, StatusTone::Muted);
    assert!(state.is_busy());
    assert_eq!(effects, vec![Effect::Schedule { slot: TimerSlot::ContactSend, delay_ms: 1100 }]);
}

#[test]
fn send_finished_resets_fields_and_thanks() {
    let mut state = valid();
    state.handle(ContactEvent::Submitted);
    let effects = state.handle(ContactEvent::SendFinished);

    assert!(!state.is_busy());
    assert_eq!(state.draft, ContactDraft::default());
    assert_eq!(state.status.text, STATUS_SENT);
    assert_eq!(state.status.tone, StatusTone::Accent);
    assert_eq!(effects, vec![Effect::Schedule { slot: TimerSlot::ContactStatusClear, delay_ms: 7000 }]);
}

#[test]
fn status_expiry_clears_text() {
    let mut state = valid();
    state.handle(ContactEvent::Submitted);
    state.handle(ContactEvent::SendFinished);
    state.handle(ContactEvent::StatusExpired);
    assert!(state.status.text.is_empty());
    assert_eq!(state.phase, ContactPhase::Idle);
}

#[test]
fn submit_while_sending_is_ignored() {
    let mut state = valid();
    state.handle(ContactEvent::Submitted);
    let effects = state.handle(ContactEvent::Submitted);
    assert!(effects.is_empty());
    assert!(state.is_busy());
}

#[test]
fn resubmit_during_thank_you_cancels_pending_clear() {
    let mut state = valid();
    state.handle(ContactEvent::Submitted);
    state.handle(ContactEvent::SendFinished);

    state.handle(ContactEvent::FieldEdited { field: ContactField::Name, value: "Grace Hopper".to_owned() });
    state.handle(ContactEvent::FieldEdited { field: ContactField::Email, value: "grace@navy.mil".to_owned() });
    state.handle(ContactEvent::FieldEdited { field: ContactField::Message, value: "Another message body".to_owned() });
    let effects = state.handle(ContactEvent::Submitted);

    assert_eq!(
        effects,
        vec![
            Effect::Cancel(TimerSlot::ContactStatusClear),
            Effect::Schedule { slot: TimerSlot::ContactSend, delay_ms: 1100 },
        ]
    );
    assert_eq!(state.status.text, STATUS_SENDING);
}

#[test]
fn stale_timer_events_are_ignored() {
    let mut state = ContactState::default();
    assert!(state.handle(ContactEvent::SendFinished).is_empty());
    assert!(state.handle(ContactEvent::StatusExpired).is_empty());
    assert_eq!(state, ContactState::default());

    let mut state = valid();
    state.handle(ContactEvent::Submitted);
    state.handle(ContactEvent::StatusExpired);
    assert_eq!(state.status.text, STATUS_SENDING);
}

#[test]
fn field_metadata_matches_markup() {
    let names: Vec<_> = ContactField::ALL.iter().map(|f| f.name()).collect();
    assert_eq!(names, ["name", "email", "message"]);
    let ids: Vec<_> = ContactField::ALL.iter().map(|f| f.error_id()).collect();
    assert_eq!(ids, ["err-name", "err-email", "err-message"]);
}
