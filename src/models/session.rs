//! Session model for the logged-in user.

use serde::{Deserialize, Serialize};

/// In-memory record of the currently authenticated user, mirrored to the
/// durable store under the `user` key while logged in.
///
/// `last_workout` and `streak` are a snapshot of the durable counters taken
/// at login and re-synced on every workout log. The counters themselves are
/// the source of truth and survive logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Email address the user logged in with (trimmed, non-empty)
    pub email: String,
    /// Most recent workout timestamp (epoch ms), if any
    #[serde(default)]
    pub last_workout: Option<i64>,
    /// Consecutive qualifying days with a logged workout
    #[serde(default)]
    pub streak: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_uses_camel_case() {
        let session = Session {
            email: "a@b.com".to_string(),
            last_workout: Some(1_700_000_000_000),
            streak: 3,
        };

        let raw = serde_json::to_string(&session).unwrap();
        assert!(raw.contains("\"lastWorkout\":1700000000000"));
        assert!(raw.contains("\"streak\":3"));
    }

    #[test]
    fn test_missing_counters_default() {
        let session: Session = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();
        assert_eq!(session.last_workout, None);
        assert_eq!(session.streak, 0);
    }
}
