//! Form field validation
//!
//! Pure checks over raw field values. A malformed value is an
//! `Invalid` result with a user-facing reason, never an error.

/// Outcome of validating a single field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(reason) => Some(reason),
        }
    }

    pub fn into_error(self) -> Option<String> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(reason) => Some(reason),
        }
    }
}

fn invalid(reason: &str) -> ValidationResult {
    ValidationResult::Invalid(reason.to_string())
}

/// Punctuation accepted as a password "special character".
const PASSWORD_SYMBOLS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Validate an email address against a `local@domain.tld` shape.
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return invalid("Email is required");
    }
    if !is_email_shaped(email) {
        return invalid("Invalid email format");
    }
    ValidationResult::Valid
}

/// `local@domain.tld`: exactly one `@`, a dot in the domain, no
/// whitespace, and no empty segments.
fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validate a password against the submission gate.
///
/// Conditions are checked in order and the first failure is returned.
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return invalid("Password is required");
    }
    if password.len() < 8 {
        return invalid("Password must be at least 8 characters");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return invalid("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return invalid("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return invalid("Password must contain at least one number");
    }
    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        return invalid("Password must contain at least one special character");
    }
    ValidationResult::Valid
}

/// Generic non-blank check with the field name in the message.
pub fn validate_required(value: &str, field_name: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::Invalid(format!("{field_name} is required"));
    }
    ValidationResult::Valid
}

/// Advisory strength rating; never blocks submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
            PasswordStrength::VeryStrong => "very strong",
        }
    }
}

/// Score a password 0..=6 and map the score to a strength level.
pub fn password_strength(password: &str) -> (PasswordStrength, u8) {
    let mut score = 0u8;
    if password.len() >= 8 {
        score += 1;
    }
    if password.len() >= 12 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
    {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        score += 1;
    }
    if password.len() >= 16 {
        score += 1;
    }

    let strength = match score {
        0..=2 => PasswordStrength::Weak,
        3 => PasswordStrength::Medium,
        4 => PasswordStrength::Strong,
        _ => PasswordStrength::VeryStrong,
    };
    (strength, score)
}
