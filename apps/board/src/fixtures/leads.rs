use crate::models::{Agent, Lead, LeadStatus, Priority};

/// Small demo pipeline, also the fallback when the bundled dataset cannot be
/// parsed, so the boards still render something meaningful offline.
pub fn sample_leads() -> Vec<Lead> {
    vec![
        lead("fx-1001", "Acme Robotics", LeadStatus::New, Priority::High, Some("Aisha Verma"), Some(21)),
        lead("fx-1002", "Borealis Labs", LeadStatus::Contacted, Priority::Medium, Some("Marcus Chen"), Some(34)),
        lead("fx-1003", "Cobalt Freight", LeadStatus::Qualified, Priority::High, Some("Aisha Verma"), Some(12)),
        lead("fx-1004", "Dunmore & Co", LeadStatus::ProposalSent, Priority::Low, Some("Sofia Reyes"), Some(45)),
        lead("fx-1005", "Everglade Media", LeadStatus::Closed, Priority::Medium, Some("Marcus Chen"), Some(5)),
        lead("fx-1006", "Foxhill Dental", LeadStatus::New, Priority::Low, Some("Sofia Reyes"), Some(60)),
        lead("fx-1007", "Granite Partners", LeadStatus::Contacted, Priority::High, Some("Aisha Verma"), Some(18)),
        lead("fx-1008", "Harbor Analytics", LeadStatus::New, Priority::Medium, None, None),
    ]
}

/// Shorthand builder used across the test modules.
pub fn lead(
    id: &str,
    name: &str,
    status: LeadStatus,
    priority: Priority,
    agent_name: Option<&str>,
    time_to_close: Option<u32>,
) -> Lead {
    Lead {
        id: id.to_string(),
        lead_name: name.to_string(),
        lead_status: status,
        priority,
        agent: agent_name.map(|name| Agent {
            agent_id: None,
            agent_name: name.to_string(),
        }),
        time_to_close,
        lead_source: Some("Website".to_string()),
        company: None,
    }
}
