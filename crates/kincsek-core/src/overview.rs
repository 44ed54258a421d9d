use crate::leads::count_by_status;
use crate::macros::internal_get_kincsek_setting;
use crate::models::{Lead, LeadStatus, Program};

/// Headline counts shown on the overview tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverviewStats {
    pub total_leads: usize,
    pub new_leads: usize,
    pub program_count: usize,
}

impl OverviewStats {
    pub fn compute(leads: &[Lead], programs: &[Program]) -> Self {
        Self {
            total_leads: leads.len(),
            new_leads: count_by_status(leads, LeadStatus::New),
            program_count: programs.len(),
        }
    }
}

/// The first `limit` leads in stored order
pub fn recent_leads(leads: &[Lead], limit: usize) -> &[Lead] {
    &leads[..limit.min(leads.len())]
}

pub fn recent_leads_limit() -> usize {
    internal_get_kincsek_setting!(KINCSEK_RECENT_LEADS_LIMIT, usize)
}

/// Badge shown next to a previewed lead
pub fn lead_badge(lead: &Lead) -> &'static str {
    match lead.status {
        LeadStatus::New => "New",
        _ => "Handled",
    }
}
