//! Simulated authentication: validation, lockout, and the sign-in flow

pub mod flow;
pub mod lockout;
pub mod validation;
pub mod verifier;

pub use flow::{
    Field, FieldErrors, FlowEvent, ForgotPasswordOutcome, SignInFlow, SignInForm, SubmitOutcome,
};
pub use lockout::LockoutPolicy;
pub use validation::{password_strength, PasswordStrength};
pub use verifier::{CredentialDecision, CredentialVerifier, DemoVerifier, ScriptedVerifier};
