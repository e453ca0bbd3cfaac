//! Pluggable decision function for the simulated credential check
//!
//! The demo backend's behavior is arbitrary by design, so the flow
//! takes the decision function as a capability instead of calling the
//! RNG directly; tests inject a scripted verifier.

use std::collections::VecDeque;

use rand::Rng;

/// What the simulated backend decided about a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialDecision {
    Accept,
    Reject,
    /// Primary credentials passed but a one-time code is newly required.
    RequireSecondFactor,
}

/// Capability consulted once per resolved submission.
pub trait CredentialVerifier {
    /// `second_factor` is `Some` only once the flow has demanded a code.
    fn verify(
        &mut self,
        email: &str,
        password: &str,
        second_factor: Option<&str>,
    ) -> CredentialDecision;
}

/// Verifier with the odds of the original demo: 70% of checks pass,
/// and 30% of first-time passes demand a second factor.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoVerifier;

impl CredentialVerifier for DemoVerifier {
    fn verify(
        &mut self,
        _email: &str,
        _password: &str,
        second_factor: Option<&str>,
    ) -> CredentialDecision {
        let mut rng = rand::thread_rng();
        if rng.gen::<f64>() <= 0.3 {
            return CredentialDecision::Reject;
        }
        if second_factor.is_none() && rng.gen::<f64>() > 0.7 {
            return CredentialDecision::RequireSecondFactor;
        }
        CredentialDecision::Accept
    }
}

/// Deterministic verifier driven by a queue of decisions.
///
/// Once the queue is drained every check is rejected. `calls` counts
/// how many times the backend was actually consulted, which is how
/// tests prove a locked submission never reaches it.
#[derive(Debug, Default)]
pub struct ScriptedVerifier {
    decisions: VecDeque<CredentialDecision>,
    pub calls: u32,
}

impl ScriptedVerifier {
    pub fn new(decisions: impl IntoIterator<Item = CredentialDecision>) -> Self {
        Self {
            decisions: decisions.into_iter().collect(),
            calls: 0,
        }
    }
}

impl CredentialVerifier for ScriptedVerifier {
    fn verify(
        &mut self,
        _email: &str,
        _password: &str,
        _second_factor: Option<&str>,
    ) -> CredentialDecision {
        self.calls += 1;
        self.decisions
            .pop_front()
            .unwrap_or(CredentialDecision::Reject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_verifier_replays_in_order() {
        let mut verifier = ScriptedVerifier::new([
            CredentialDecision::Reject,
            CredentialDecision::Accept,
        ]);
        assert_eq!(
            verifier.verify("a@b.com", "pw", None),
            CredentialDecision::Reject
        );
        assert_eq!(
            verifier.verify("a@b.com", "pw", None),
            CredentialDecision::Accept
        );
        // Drained queue rejects.
        assert_eq!(
            verifier.verify("a@b.com", "pw", None),
            CredentialDecision::Reject
        );
        assert_eq!(verifier.calls, 3);
    }

    #[test]
    fn demo_verifier_returns_a_decision() {
        let mut verifier = DemoVerifier;
        // Smoke test only; the demo odds are not a contract.
        let _ = verifier.verify("a@b.com", "pw", None);
    }
}
