use super::*;
use crate::consts::STATUS_SENT;
use crate::state::contact::{ContactDraft, ContactField};
use crate::state::theme::Theme;

/// Deliver every scheduled timer in order, as the browser would.
fn fire_scheduled(state: &mut SiteState, effects: Vec<Effect>) -> Vec<(TimerSlot, u32)> {
    let mut fired = Vec::new();
    let mut queue = effects;
    while let Some(effect) = queue.pop() {
        if let Effect::Schedule { slot, delay_ms } = effect {
            fired.push((slot, delay_ms));
            queue.extend(state.dispatch(slot.fired_event()));
        }
    }
    fired
}

fn load(stored: Option<&str>, prefers_light: Option<bool>) -> SiteState {
    let mut state = SiteState::default();
    state.dispatch(SiteEvent::PageLoaded(PageLoad {
        stored_theme: stored.map(str::to_owned),
        prefers_light,
        year: 2026,
    }));
    state
}

// =============================================================
// Page load
// =============================================================

#[test]
fn page_load_resolves_theme_for_each_stored_value() {
    assert_eq!(load(None, Some(true)).theme.theme, Theme::Light);
    assert_eq!(load(None, None).theme.theme, Theme::Dark);
    assert_eq!(load(Some("light"), Some(false)).theme.theme, Theme::Light);
    assert_eq!(load(Some("dark"), Some(true)).theme.theme, Theme::Dark);
}

#[test]
fn page_load_sets_footer_year() {
    assert_eq!(SiteState::default().year, None);
    assert_eq!(load(None, None).year, Some(2026));
}

// =============================================================
// Anchor routing
// =============================================================

#[test]
fn anchor_with_target_scrolls_and_closes_nav() {
    let mut state = SiteState::default();
    state.dispatch(SiteEvent::Nav(NavEvent::ToggleClicked));
    let effects = state.dispatch(SiteEvent::Scroll(ScrollEvent::AnchorClicked {
        href: "#gallery".to_owned(),
        target_found: true,
    }));
    assert_eq!(effects, vec![Effect::ScrollTo { selector: "#gallery".to_owned() }]);
    assert!(!state.nav.open);
}

#[test]
fn anchor_without_target_leaves_everything_alone() {
    let mut state = SiteState::default();
    state.dispatch(SiteEvent::Nav(NavEvent::ToggleClicked));
    let effects = state.dispatch(SiteEvent::Scroll(ScrollEvent::AnchorClicked {
        href: "#missing".to_owned(),
        target_found: false,
    }));
    assert!(effects.is_empty());
    assert!(state.nav.open);
}

// =============================================================
// Timers
// =============================================================

#[test]
fn fired_events_map_to_their_controllers() {
    assert_eq!(TimerSlot::ThemeSpin.fired_event(), SiteEvent::Theme(ThemeEvent::SpinFinished));
    assert_eq!(TimerSlot::ContactSend.fired_event(), SiteEvent::Contact(ContactEvent::SendFinished));
    assert_eq!(TimerSlot::ContactStatusClear.fired_event(), SiteEvent::Contact(ContactEvent::StatusExpired));
}

#[test]
fn valid_submission_runs_full_timer_chain() {
    let mut state = SiteState::default();
    for (field, value) in [
        (ContactField::Name, "Ada Lovelace"),
        (ContactField::Email, "ada@example.com"),
        (ContactField::Message, "Hello, this is long enough."),
    ] {
        state.dispatch(SiteEvent::Contact(ContactEvent::FieldEdited { field, value: value.to_owned() }));
    }

    let effects = state.dispatch(SiteEvent::Contact(ContactEvent::Submitted));
    assert_eq!(state.contact.status.text, "Sending message...");
    assert!(state.contact.is_busy());

    // Step the first timer by hand to observe the intermediate state.
    let Some(Effect::Schedule { slot, delay_ms: 1100 }) = effects.first().cloned() else {
        panic!("expected send timer, got {effects:?}");
    };
    let after_send = state.dispatch(slot.fired_event());
    assert_eq!(state.contact.draft, ContactDraft::default());
    assert_eq!(state.contact.status.text, STATUS_SENT);
    assert!(!state.contact.is_busy());

    let fired = fire_scheduled(&mut state, after_send);
    assert_eq!(fired, vec![(TimerSlot::ContactStatusClear, 7000)]);
    assert!(state.contact.status.text.is_empty());
}

#[test]
fn theme_toggle_spin_completes_after_timer() {
    let mut state = SiteState::default();
    let effects = state.dispatch(SiteEvent::Theme(ThemeEvent::ToggleClicked));
    assert!(state.theme.spinning);
    let fired = fire_scheduled(&mut state, effects);
    assert_eq!(fired, vec![(TimerSlot::ThemeSpin, 420)]);
    assert!(!state.theme.spinning);
    assert_eq!(state.theme.theme, Theme::Light);
}

#[test]
fn escape_closes_lightbox_regardless_of_other_state() {
    let mut state = SiteState::default();
    state.dispatch(SiteEvent::Lightbox(LightboxEvent::ItemClicked {
        src: "img/a.jpg".to_owned(),
        alt: String::new(),
    }));
    state.dispatch(SiteEvent::Nav(NavEvent::ToggleClicked));
    state.dispatch(SiteEvent::Lightbox(LightboxEvent::EscapePressed));
    assert!(!state.lightbox.open);
    assert!(state.lightbox.src.is_empty());
    assert!(state.nav.open);
}
