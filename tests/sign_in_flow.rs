//! End-to-end exercises of the sign-in flow against the session store
//! and the menu, without a terminal.

use std::rc::Rc;
use std::time::{Duration, Instant};

use folio_tui::auth::flow::{CHECK_DELAY, REDIRECT_DELAY};
use folio_tui::auth::{
    CredentialDecision, Field, FlowEvent, ScriptedVerifier, SignInFlow, SubmitOutcome,
};
use folio_tui::menu::{drawer_items, Drawer, DrawerEvent, DrawerItem, EXIT_DELAY};
use folio_tui::session::{MemorySessionStore, SessionStore};

const PASSWORD: &str = "Str0ng!Pass";

fn filled_flow(
    store: Rc<MemorySessionStore>,
    decisions: impl IntoIterator<Item = CredentialDecision>,
) -> SignInFlow<ScriptedVerifier> {
    let mut flow = SignInFlow::new(store, ScriptedVerifier::new(decisions));
    flow.prefill_email("a@b.com");
    for c in PASSWORD.chars() {
        flow.input_char(Field::Password, c);
    }
    flow
}

#[test]
fn successful_sign_in_persists_and_flips_the_menu() {
    let store = MemorySessionStore::new();
    let mut flow = filled_flow(store.clone(), [CredentialDecision::Accept]);

    assert_eq!(drawer_items(false).last(), Some(&DrawerItem::Work));
    assert!(drawer_items(false).contains(&DrawerItem::SignIn));

    let t0 = Instant::now();
    assert_eq!(flow.submit(t0), SubmitOutcome::Pending);
    let event = flow.tick(t0 + CHECK_DELAY);
    let Some(FlowEvent::SignedIn { record, .. }) = event else {
        panic!("expected SignedIn, got {event:?}");
    };
    assert_eq!(record.name, "a");
    assert_eq!(store.read().map(|r| r.email), Some("a@b.com".to_string()));

    // The redirect follows after its own pause.
    assert_eq!(
        flow.tick(t0 + CHECK_DELAY + REDIRECT_DELAY),
        Some(FlowEvent::RedirectHome)
    );

    let items = drawer_items(store.read().is_some());
    assert!(items.contains(&DrawerItem::SignOut));
    assert!(!items.contains(&DrawerItem::SignIn));
}

#[test]
fn five_failures_lock_and_the_sixth_submit_is_refused() {
    let store = MemorySessionStore::new();
    let mut flow = filled_flow(store, vec![CredentialDecision::Reject; 5]);
    let mut now = Instant::now();

    for n in 1..=4u32 {
        flow.submit(now);
        assert_eq!(
            flow.tick(now + CHECK_DELAY),
            Some(FlowEvent::Failed {
                attempts_remaining: 5 - n
            })
        );
        now += CHECK_DELAY + Duration::from_millis(10);
    }

    flow.submit(now);
    assert_eq!(
        flow.tick(now + CHECK_DELAY),
        Some(FlowEvent::LockedOut { lockout_secs: 300 })
    );
    now += CHECK_DELAY;

    // The sixth attempt is refused up front; the verifier queue is
    // already drained, so reaching it would panic the arithmetic below.
    let outcome = flow.submit(now);
    let SubmitOutcome::Locked { remaining_secs } = outcome else {
        panic!("expected Locked, got {outcome:?}");
    };
    assert_eq!(remaining_secs, 300);

    // Cooldown elapses and the counter resets.
    assert_eq!(
        flow.tick(now + Duration::from_secs(300)),
        Some(FlowEvent::LockoutExpired)
    );
    assert_eq!(flow.failed_attempts(), 0);
}

#[test]
fn sign_out_clears_the_store_while_the_drawer_closes() {
    let store = MemorySessionStore::new();
    let mut flow = filled_flow(store.clone(), [CredentialDecision::Accept]);

    let t0 = Instant::now();
    flow.submit(t0);
    assert!(matches!(
        flow.tick(t0 + CHECK_DELAY),
        Some(FlowEvent::SignedIn { .. })
    ));

    let mut drawer = Drawer::new();
    let t1 = t0 + Duration::from_secs(2);
    drawer.request_open(t1);
    drawer.tick(t1 + Duration::from_millis(10));
    assert!(drawer.is_visible());

    // Sign out activates from the drawer, then the drawer exits.
    store.clear().unwrap();
    let t2 = t1 + Duration::from_secs(1);
    drawer.request_close(t2);
    assert!(drawer.is_visible());
    assert_eq!(drawer.tick(t2 + EXIT_DELAY), Some(DrawerEvent::Closed));
    assert!(!drawer.is_visible());

    assert_eq!(store.read(), None);
    assert!(drawer_items(store.read().is_some()).contains(&DrawerItem::SignIn));
}

#[test]
fn second_factor_round_trip_signs_in() {
    let store = MemorySessionStore::new();
    let mut flow = filled_flow(
        store.clone(),
        [
            CredentialDecision::RequireSecondFactor,
            CredentialDecision::Accept,
        ],
    );

    let t0 = Instant::now();
    flow.submit(t0);
    assert_eq!(
        flow.tick(t0 + CHECK_DELAY),
        Some(FlowEvent::SecondFactorRequired)
    );
    assert!(flow.requires_second_factor());
    assert_eq!(store.read(), None);

    for c in "123456".chars() {
        flow.input_char(Field::SecondFactor, c);
    }
    let t1 = t0 + CHECK_DELAY + Duration::from_millis(10);
    flow.submit(t1);
    assert!(matches!(
        flow.tick(t1 + CHECK_DELAY),
        Some(FlowEvent::SignedIn { .. })
    ));
    assert!(store.read().is_some());
}
