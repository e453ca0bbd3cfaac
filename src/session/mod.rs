//! Session record and persistence

mod store;

pub use store::{FileSessionStore, MemorySessionStore, SessionStore, StoreError, Subscription};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// The persisted representation of a signed-in user.
///
/// Its presence in the store is the sole source of truth for "is a
/// user signed in"; at most one record exists at a time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Display name, derived from the email local-part.
    pub name: String,
    /// Email the user signed in with.
    pub email: String,
    /// Sign-in timestamp as an ISO-8601 string.
    #[serde(rename = "loginTime")]
    pub login_time: String,
}

impl SessionRecord {
    /// Build a record for an email address, stamped with the current time.
    pub fn for_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_string();
        Self {
            name,
            email: email.to_string(),
            login_time: Utc::now().to_rfc3339(),
        }
    }

    /// Uppercased first letter of the display name, for the avatar badge.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_derives_from_local_part() {
        let record = SessionRecord::for_email("a@b.com");
        assert_eq!(record.name, "a");
        assert_eq!(record.email, "a@b.com");
    }

    #[test]
    fn login_time_is_rfc3339() {
        let record = SessionRecord::for_email("dev@example.com");
        assert!(chrono::DateTime::parse_from_rfc3339(&record.login_time).is_ok());
    }

    #[test]
    fn initial_is_uppercased() {
        let record = SessionRecord::for_email("nagur@example.com");
        assert_eq!(record.initial(), "N");
    }

    #[test]
    fn serializes_with_original_key_names() {
        let record = SessionRecord::for_email("a@b.com");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"loginTime\""));
    }
}
