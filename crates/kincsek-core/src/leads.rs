/// Reducer-style operations over the lead list. Each returns the full new list
/// so callers can persist it in one write.
use crate::models::{Lead, LeadStatus};

/// Leads whose name or program title contain `term`, ignoring case
pub fn filter_leads<'a>(leads: &'a [Lead], term: &str) -> Vec<&'a Lead> {
    leads.iter().filter(|l| l.matches(term)).collect()
}

/// Set the status of the lead with `id`. Unknown ids leave the list as is.
pub fn set_status(leads: &[Lead], id: &str, status: LeadStatus) -> Vec<Lead> {
    leads
        .iter()
        .map(|l| {
            if l.id == id {
                Lead {
                    status,
                    ..l.clone()
                }
            } else {
                l.clone()
            }
        })
        .collect()
}

/// Put a freshly received lead at the front so previews show the newest first.
/// A lead whose id is already present replaces nothing and is dropped.
pub fn add_lead(leads: &[Lead], lead: Lead) -> Vec<Lead> {
    if leads.iter().any(|l| l.id == lead.id) {
        return leads.to_vec();
    }
    let mut out = Vec::with_capacity(leads.len() + 1);
    out.push(lead);
    out.extend_from_slice(leads);
    out
}

pub fn remove_lead(leads: &[Lead], id: &str) -> Vec<Lead> {
    leads.iter().filter(|l| l.id != id).cloned().collect()
}

pub fn count_by_status(leads: &[Lead], status: LeadStatus) -> usize {
    leads.iter().filter(|l| l.status == status).count()
}
