//! Homework review API types.

use serde::{Deserialize, Serialize};

/// Review status of a homework, as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    pub const ALL: [ReviewStatus; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    /// Look up a status by its API key. `None` for anything outside the table.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Key used by the API.
    pub fn key(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict sent to the student.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_keys() {
        assert_eq!(ReviewStatus::from_key("approved"), Some(ReviewStatus::Approved));
        assert_eq!(ReviewStatus::from_key("reviewing"), Some(ReviewStatus::Reviewing));
        assert_eq!(ReviewStatus::from_key("rejected"), Some(ReviewStatus::Rejected));
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(ReviewStatus::from_key("Approved"), None);
        assert_eq!(ReviewStatus::from_key(""), None);
        assert_eq!(ReviewStatus::from_key("unknown"), None);
    }

    #[test]
    fn test_serde_keys_match_table() {
        for status in ReviewStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.key()));
        }
    }
}
