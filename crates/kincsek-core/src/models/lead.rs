use super::LeadStatus;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// An inquiry submitted through the public registration form.
/// `program_title` is a free-text snapshot, not a reference to a Program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub program_title: String,
    pub phone: String,
    pub email: String,
    pub timestamp: String,
    pub status: LeadStatus,
}

impl Lead {
    /// Build a fresh inquiry as the intake form would record it
    pub fn new_inquiry(
        name: String,
        program_title: String,
        phone: String,
        email: String,
        now: DateTime<Local>,
    ) -> Self {
        Self {
            id: now.timestamp_millis().to_string(),
            name,
            program_title,
            phone,
            email,
            timestamp: now.format("%Y. %m. %d. %H:%M").to_string(),
            status: LeadStatus::New,
        }
    }

    /// Case-insensitive substring match on name or program title
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.program_title.to_lowercase().contains(&term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_reads_stored_camel_case_json() {
        let raw = r#"{
            "id": "1717171717171",
            "name": "Anna Kovács",
            "programTitle": "Kerámia szakkör",
            "phone": "+36 30 123 4567",
            "email": "anna@example.com",
            "timestamp": "2024. 05. 31. 18:08",
            "status": "new"
        }"#;
        let lead: Lead = serde_json::from_str(raw).unwrap();
        assert_eq!(lead.program_title, "Kerámia szakkör");
        assert_eq!(lead.status, LeadStatus::New);
    }

    #[test]
    fn test_new_inquiry_starts_as_new() {
        let now = Local.with_ymd_and_hms(2024, 9, 1, 10, 30, 0).unwrap();
        let lead = Lead::new_inquiry(
            "Béla".to_string(),
            "Festés".to_string(),
            "123".to_string(),
            "bela@example.com".to_string(),
            now,
        );
        assert_eq!(lead.status, LeadStatus::New);
        assert_eq!(lead.id, now.timestamp_millis().to_string());
        assert_eq!(lead.timestamp, "2024. 09. 01. 10:30");
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let now = Local.with_ymd_and_hms(2024, 9, 1, 10, 30, 0).unwrap();
        let lead = Lead::new_inquiry(
            "Anna Kovács".to_string(),
            "Festés".to_string(),
            "".to_string(),
            "".to_string(),
            now,
        );
        assert!(lead.matches("ANNA"));
        assert!(lead.matches("festés"));
        assert!(lead.matches(""));
        assert!(!lead.matches("zita"));
    }
}
