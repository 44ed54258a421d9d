use serde::{Deserialize, Serialize};

mod lead;
mod program;
mod site;

pub use lead::Lead;
pub use program::{Program, ProgramDraft, ProgramField};
pub use site::{Announcement, AnnouncementType, Founder, FounderId, Founders};

/// Where a lead sits in the club's follow-up process. Serialized in lowercase
/// to match the stored lead list.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Enrolled,
}

impl LeadStatus {
    /// Human readable label used in the leads table
    pub fn label(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Enrolled => "Enrolled",
        }
    }

    /// The status that follows this one when cycling through them
    pub fn next(&self) -> Self {
        match self {
            LeadStatus::New => LeadStatus::Contacted,
            LeadStatus::Contacted => LeadStatus::Enrolled,
            LeadStatus::Enrolled => LeadStatus::New,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_status_cycles_back_to_new() {
        let status = LeadStatus::New.next().next().next();
        assert_eq!(status, LeadStatus::New);
    }

    #[test]
    fn test_lead_status_serializes_lowercase() {
        let json = serde_json::to_string(&LeadStatus::Contacted).unwrap();
        assert_eq!(json, "\"contacted\"");
        let parsed: LeadStatus = serde_json::from_str("\"enrolled\"").unwrap();
        assert_eq!(parsed, LeadStatus::Enrolled);
        assert!(serde_json::from_str::<LeadStatus>("\"archived\"").is_err());
    }
}
