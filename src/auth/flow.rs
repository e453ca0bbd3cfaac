//! Sign-in state machine
//!
//! Drives the simulated authentication flow: field validation, the
//! failed-attempt counter and its lockout cooldown, the optional
//! second-factor challenge, and the pending credential check. All
//! timing derives from the `now` instants the caller passes in; the
//! flow never schedules real timers, so tearing it down cannot leave
//! a stale callback behind.
//!
//! Phases: Idle -> (validate) -> Submitting -> one of
//! second-factor-required / succeeded / failed, with the lockout
//! intercepting submissions once the failure threshold is reached.

use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::session::{SessionRecord, SessionStore};

use super::lockout::LockoutPolicy;
use super::validation::{validate_email, validate_password, validate_required};
use super::verifier::{CredentialDecision, CredentialVerifier};

/// Simulated round-trip latency of the credential check.
pub const CHECK_DELAY: Duration = Duration::from_millis(1500);

/// Pause between a successful sign-in and leaving the screen.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1000);

/// Maximum length of the one-time code input.
pub const SECOND_FACTOR_LEN: usize = 6;

/// Editable text fields of the sign-in form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
    SecondFactor,
}

/// Raw form values.
#[derive(Clone, Debug, Default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    pub second_factor: String,
    pub remember_me: bool,
}

/// One optional error per input, kept as named fields so validation
/// stays exhaustive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
    pub second_factor: Option<String>,
}

impl FieldErrors {
    pub fn is_clear(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.second_factor.is_none()
    }
}

#[derive(Clone, Copy, Debug)]
enum Phase {
    Idle,
    Submitting { resolve_at: Instant },
    Locked { until: Instant },
    Succeeded { redirect_at: Instant },
    Done,
}

/// Immediate outcome of a submit request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; `errors()` is populated.
    Rejected,
    /// Lockout active; the credential check was not consulted.
    Locked { remaining_secs: u64 },
    /// Credential check started (or already in flight).
    Pending,
}

/// Deferred outcomes, produced by [`SignInFlow::tick`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowEvent {
    /// A one-time code is now required; resubmit with the code field set.
    SecondFactorRequired,
    /// Full authentication succeeded and the session record was stored.
    SignedIn {
        record: SessionRecord,
        remember_me: bool,
    },
    /// Credentials rejected below the lockout threshold.
    Failed { attempts_remaining: u32 },
    /// The failure threshold was reached; submissions are suspended.
    LockedOut { lockout_secs: u64 },
    /// The cooldown elapsed; the counter is reset and input re-enabled.
    LockoutExpired,
    /// The post-success confirmation pause elapsed.
    RedirectHome,
}

/// Outcome of the forgot-password stub.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForgotPasswordOutcome {
    EmailMissing,
    EmailInvalid,
    LinkSent,
}

pub struct SignInFlow<V> {
    form: SignInForm,
    errors: FieldErrors,
    failed_attempts: u32,
    requires_second_factor: bool,
    phase: Phase,
    policy: LockoutPolicy,
    store: Rc<dyn SessionStore>,
    verifier: V,
}

impl<V: CredentialVerifier> SignInFlow<V> {
    pub fn new(store: Rc<dyn SessionStore>, verifier: V) -> Self {
        Self::with_policy(store, verifier, LockoutPolicy::default())
    }

    pub fn with_policy(store: Rc<dyn SessionStore>, verifier: V, policy: LockoutPolicy) -> Self {
        Self {
            form: SignInForm::default(),
            errors: FieldErrors::default(),
            failed_attempts: 0,
            requires_second_factor: false,
            phase: Phase::Idle,
            policy,
            store,
            verifier,
        }
    }

    pub fn form(&self) -> &SignInForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    pub fn requires_second_factor(&self) -> bool {
        self.requires_second_factor
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.phase, Phase::Locked { .. })
    }

    pub fn lockout_remaining_secs(&self, now: Instant) -> u64 {
        match self.phase {
            Phase::Locked { until } => until.saturating_duration_since(now).as_secs(),
            _ => 0,
        }
    }

    pub fn lockout_total_secs(&self) -> u64 {
        self.policy.cooldown.as_secs()
    }

    /// Seed the email field (remembered address from a previous run).
    pub fn prefill_email(&mut self, email: &str) {
        self.form.email = email.to_string();
    }

    pub fn set_remember_me(&mut self, remember: bool) {
        self.form.remember_me = remember;
    }

    pub fn toggle_remember_me(&mut self) {
        self.form.remember_me = !self.form.remember_me;
    }

    /// Append a character to a field. Editing is suspended while
    /// locked; typing clears the field's error.
    pub fn input_char(&mut self, field: Field, c: char) {
        if self.is_locked() {
            return;
        }
        match field {
            Field::Email => {
                self.form.email.push(c);
                self.errors.email = None;
            }
            Field::Password => {
                self.form.password.push(c);
                self.errors.password = None;
            }
            Field::SecondFactor => {
                if self.form.second_factor.len() < SECOND_FACTOR_LEN {
                    self.form.second_factor.push(c);
                }
                self.errors.second_factor = None;
            }
        }
    }

    pub fn backspace(&mut self, field: Field) {
        if self.is_locked() {
            return;
        }
        match field {
            Field::Email => {
                self.form.email.pop();
                self.errors.email = None;
            }
            Field::Password => {
                self.form.password.pop();
                self.errors.password = None;
            }
            Field::SecondFactor => {
                self.form.second_factor.pop();
                self.errors.second_factor = None;
            }
        }
    }

    /// Attempt a submission.
    ///
    /// A lockout rejects immediately with the remaining countdown,
    /// before any field is validated. Valid fields start the pending
    /// credential check, which [`tick`](Self::tick) resolves.
    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        match self.phase {
            Phase::Locked { until } => {
                return SubmitOutcome::Locked {
                    remaining_secs: until.saturating_duration_since(now).as_secs(),
                };
            }
            // Already in flight, or past the point of resubmission.
            Phase::Submitting { .. } | Phase::Succeeded { .. } | Phase::Done => {
                return SubmitOutcome::Pending;
            }
            Phase::Idle => {}
        }

        self.errors = FieldErrors {
            email: validate_email(&self.form.email).into_error(),
            password: validate_password(&self.form.password).into_error(),
            second_factor: if self.requires_second_factor {
                validate_required(&self.form.second_factor, "2FA code").into_error()
            } else {
                None
            },
        };
        if !self.errors.is_clear() {
            return SubmitOutcome::Rejected;
        }

        self.phase = Phase::Submitting {
            resolve_at: now + CHECK_DELAY,
        };
        SubmitOutcome::Pending
    }

    /// Advance the machine to `now`, resolving at most one deferred
    /// outcome per call.
    pub fn tick(&mut self, now: Instant) -> Option<FlowEvent> {
        match self.phase {
            Phase::Submitting { resolve_at } if now >= resolve_at => Some(self.resolve(now)),
            Phase::Locked { until } if now >= until => {
                self.phase = Phase::Idle;
                self.failed_attempts = 0;
                tracing::debug!("lockout expired, attempt counter reset");
                Some(FlowEvent::LockoutExpired)
            }
            Phase::Succeeded { redirect_at } if now >= redirect_at => {
                self.phase = Phase::Done;
                Some(FlowEvent::RedirectHome)
            }
            _ => None,
        }
    }

    fn resolve(&mut self, now: Instant) -> FlowEvent {
        let code = self
            .requires_second_factor
            .then(|| self.form.second_factor.clone());
        let decision = self
            .verifier
            .verify(&self.form.email, &self.form.password, code.as_deref());

        match decision {
            CredentialDecision::RequireSecondFactor => {
                // Not a failed attempt: the counter is untouched, and
                // the requirement sticks for the rest of this sequence.
                self.phase = Phase::Idle;
                self.requires_second_factor = true;
                FlowEvent::SecondFactorRequired
            }
            CredentialDecision::Accept => {
                let record = SessionRecord::for_email(&self.form.email);
                if let Err(e) = self.store.write(&record) {
                    tracing::warn!("failed to persist session: {e}");
                }
                self.failed_attempts = 0;
                self.requires_second_factor = false;
                self.phase = Phase::Succeeded {
                    redirect_at: now + REDIRECT_DELAY,
                };
                FlowEvent::SignedIn {
                    record,
                    remember_me: self.form.remember_me,
                }
            }
            CredentialDecision::Reject => {
                self.failed_attempts += 1;
                if self.policy.reaches_threshold(self.failed_attempts) {
                    self.phase = Phase::Locked {
                        until: now + self.policy.cooldown,
                    };
                    tracing::info!(
                        attempts = self.failed_attempts,
                        "sign-in locked out after repeated failures"
                    );
                    FlowEvent::LockedOut {
                        lockout_secs: self.policy.cooldown.as_secs(),
                    }
                } else {
                    self.phase = Phase::Idle;
                    FlowEvent::Failed {
                        attempts_remaining: self.policy.attempts_remaining(self.failed_attempts),
                    }
                }
            }
        }
    }

    /// Forgot-password stub: validates the email, mutates nothing.
    pub fn forgot_password(&self) -> ForgotPasswordOutcome {
        if self.form.email.is_empty() {
            return ForgotPasswordOutcome::EmailMissing;
        }
        if !validate_email(&self.form.email).is_valid() {
            return ForgotPasswordOutcome::EmailInvalid;
        }
        ForgotPasswordOutcome::LinkSent
    }

    /// Social sign-in stub: produces the confirmation message only.
    pub fn social_login(&self, provider: &str) -> String {
        format!("{provider} authentication would redirect here")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    const PASSWORD: &str = "Str0ng!Pass";

    fn flow_with(
        decisions: impl IntoIterator<Item = CredentialDecision>,
    ) -> SignInFlow<crate::auth::verifier::ScriptedVerifier> {
        let store = MemorySessionStore::new();
        let mut flow = SignInFlow::new(
            store,
            crate::auth::verifier::ScriptedVerifier::new(decisions),
        );
        flow.prefill_email("a@b.com");
        for c in PASSWORD.chars() {
            flow.input_char(Field::Password, c);
        }
        flow
    }

    fn submit_and_resolve(
        flow: &mut SignInFlow<crate::auth::verifier::ScriptedVerifier>,
        now: Instant,
    ) -> Option<FlowEvent> {
        assert_eq!(flow.submit(now), SubmitOutcome::Pending);
        flow.tick(now + CHECK_DELAY)
    }

    #[test]
    fn invalid_form_is_rejected_without_backend_contact() {
        let store = MemorySessionStore::new();
        let mut flow = SignInFlow::new(
            store,
            crate::auth::verifier::ScriptedVerifier::new([CredentialDecision::Accept]),
        );
        let now = Instant::now();

        assert_eq!(flow.submit(now), SubmitOutcome::Rejected);
        assert_eq!(flow.errors().email.as_deref(), Some("Email is required"));
        assert_eq!(
            flow.errors().password.as_deref(),
            Some("Password is required")
        );
        assert!(!flow.is_submitting());
    }

    #[test]
    fn typing_clears_the_field_error() {
        let store = MemorySessionStore::new();
        let mut flow = SignInFlow::new(
            store,
            crate::auth::verifier::ScriptedVerifier::new([]),
        );
        flow.submit(Instant::now());
        assert!(flow.errors().email.is_some());
        flow.input_char(Field::Email, 'a');
        assert!(flow.errors().email.is_none());
    }

    #[test]
    fn success_writes_session_and_redirects_after_delay() {
        let store = MemorySessionStore::new();
        let mut flow = SignInFlow::new(
            store.clone() as Rc<dyn SessionStore>,
            crate::auth::verifier::ScriptedVerifier::new([CredentialDecision::Accept]),
        );
        flow.prefill_email("a@b.com");
        for c in PASSWORD.chars() {
            flow.input_char(Field::Password, c);
        }

        let t0 = Instant::now();
        assert_eq!(flow.submit(t0), SubmitOutcome::Pending);
        assert!(flow.is_submitting());
        assert!(flow.tick(t0 + CHECK_DELAY - Duration::from_millis(1)).is_none());

        let event = flow.tick(t0 + CHECK_DELAY);
        let Some(FlowEvent::SignedIn { record, .. }) = event else {
            panic!("expected SignedIn, got {event:?}");
        };
        assert_eq!(record.name, "a");
        assert_eq!(record.email, "a@b.com");
        assert_eq!(store.read().map(|r| r.email), Some("a@b.com".to_string()));
        assert_eq!(flow.failed_attempts(), 0);

        let redirect = flow.tick(t0 + CHECK_DELAY + REDIRECT_DELAY);
        assert_eq!(redirect, Some(FlowEvent::RedirectHome));
    }

    #[test]
    fn attempt_counter_is_monotonic_below_threshold() {
        let mut flow = flow_with(vec![CredentialDecision::Reject; 4]);
        let mut now = Instant::now();

        for n in 1..=4u32 {
            let event = submit_and_resolve(&mut flow, now);
            assert_eq!(
                event,
                Some(FlowEvent::Failed {
                    attempts_remaining: 5 - n
                })
            );
            assert!(!flow.is_locked());
            assert_eq!(flow.failed_attempts(), n);
            now += CHECK_DELAY + Duration::from_millis(10);
        }
    }

    #[test]
    fn fifth_failure_locks_for_five_minutes() {
        let mut flow = flow_with(vec![CredentialDecision::Reject; 5]);
        let mut now = Instant::now();

        for _ in 0..4 {
            submit_and_resolve(&mut flow, now);
            now += CHECK_DELAY + Duration::from_millis(10);
        }
        let event = submit_and_resolve(&mut flow, now);
        assert_eq!(event, Some(FlowEvent::LockedOut { lockout_secs: 300 }));
        assert!(flow.is_locked());
        assert_eq!(flow.lockout_remaining_secs(now + CHECK_DELAY), 300);
    }

    #[test]
    fn locked_submission_never_reaches_the_verifier() {
        let mut flow = flow_with(vec![CredentialDecision::Reject; 5]);
        let mut now = Instant::now();

        for _ in 0..5 {
            submit_and_resolve(&mut flow, now);
            now += CHECK_DELAY + Duration::from_millis(10);
        }
        let calls_after_lockout = 5;

        let outcome = flow.submit(now);
        let SubmitOutcome::Locked { remaining_secs } = outcome else {
            panic!("expected Locked, got {outcome:?}");
        };
        assert!(remaining_secs > 0 && remaining_secs <= 300);
        // No sixth verifier consultation happened; resolving the
        // scripted queue further would have incremented `calls`.
        assert_eq!(flow.verifier.calls, calls_after_lockout);
    }

    #[test]
    fn lockout_self_heals() {
        let mut flow = flow_with(vec![CredentialDecision::Reject; 5]);
        let mut now = Instant::now();

        for _ in 0..5 {
            submit_and_resolve(&mut flow, now);
            now += CHECK_DELAY + Duration::from_millis(10);
        }
        assert!(flow.is_locked());

        let event = flow.tick(now + Duration::from_secs(300));
        assert_eq!(event, Some(FlowEvent::LockoutExpired));
        assert!(!flow.is_locked());
        assert_eq!(flow.failed_attempts(), 0);
    }

    #[test]
    fn editing_is_suspended_while_locked() {
        let mut flow = flow_with(vec![CredentialDecision::Reject; 5]);
        let mut now = Instant::now();
        for _ in 0..5 {
            submit_and_resolve(&mut flow, now);
            now += CHECK_DELAY + Duration::from_millis(10);
        }

        let before = flow.form().email.clone();
        flow.input_char(Field::Email, 'x');
        flow.backspace(Field::Password);
        assert_eq!(flow.form().email, before);
        assert_eq!(flow.form().password, PASSWORD);
    }

    #[test]
    fn second_factor_does_not_count_as_a_failure() {
        let mut flow = flow_with([
            CredentialDecision::RequireSecondFactor,
            CredentialDecision::Accept,
        ]);
        let t0 = Instant::now();

        let event = submit_and_resolve(&mut flow, t0);
        assert_eq!(event, Some(FlowEvent::SecondFactorRequired));
        assert_eq!(flow.failed_attempts(), 0);
        assert!(flow.requires_second_factor());

        // Resubmitting without the code now fails validation.
        let t1 = t0 + CHECK_DELAY + Duration::from_millis(10);
        assert_eq!(flow.submit(t1), SubmitOutcome::Rejected);
        assert_eq!(
            flow.errors().second_factor.as_deref(),
            Some("2FA code is required")
        );

        for c in "123456".chars() {
            flow.input_char(Field::SecondFactor, c);
        }
        let event = submit_and_resolve(&mut flow, t1);
        assert!(matches!(event, Some(FlowEvent::SignedIn { .. })));
        assert!(!flow.requires_second_factor());
    }

    #[test]
    fn second_factor_input_caps_at_six_chars() {
        let mut flow = flow_with([]);
        for c in "12345678".chars() {
            flow.input_char(Field::SecondFactor, c);
        }
        assert_eq!(flow.form().second_factor, "123456");
    }

    #[test]
    fn forgot_password_validates_the_email_only() {
        let store = MemorySessionStore::new();
        let mut flow = SignInFlow::new(
            store,
            crate::auth::verifier::ScriptedVerifier::new([]),
        );
        assert_eq!(flow.forgot_password(), ForgotPasswordOutcome::EmailMissing);
        flow.prefill_email("nope");
        assert_eq!(flow.forgot_password(), ForgotPasswordOutcome::EmailInvalid);
        flow.prefill_email("a@b.com");
        assert_eq!(flow.forgot_password(), ForgotPasswordOutcome::LinkSent);
        assert_eq!(flow.failed_attempts(), 0);
    }

    #[test]
    fn custom_policy_cooldown_is_honored() {
        let store = MemorySessionStore::new();
        let mut flow = SignInFlow::with_policy(
            store,
            crate::auth::verifier::ScriptedVerifier::new(vec![CredentialDecision::Reject; 2]),
            LockoutPolicy::custom(2, Duration::from_secs(30)),
        );
        flow.prefill_email("a@b.com");
        for c in PASSWORD.chars() {
            flow.input_char(Field::Password, c);
        }

        let t0 = Instant::now();
        flow.submit(t0);
        flow.tick(t0 + CHECK_DELAY);
        let t1 = t0 + CHECK_DELAY + Duration::from_millis(10);
        flow.submit(t1);
        let event = flow.tick(t1 + CHECK_DELAY);
        assert_eq!(event, Some(FlowEvent::LockedOut { lockout_secs: 30 }));
    }
}
