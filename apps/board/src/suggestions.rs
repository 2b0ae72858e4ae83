use crate::models::{Lead, LeadStatus};

// Activity-log copy, three per stage. Placeholder tokens are filled from the
// lead record with fixed fallbacks when a field is missing.
const NEW_SUGGESTIONS: [&str; 3] = [
    "Reviewing {priority} priority inquiry from {source}.",
    "Sent introductory email to {client} regarding their {source} request.",
    "Assigning {agent} to handle this {priority} priority lead.",
];

const CONTACTED_SUGGESTIONS: [&str; 3] = [
    "Spoke with {client}. Aiming to close in {days} days.",
    "Discussed requirements. {client} is a {priority} priority prospect.",
    "Follow-up scheduled. Source: {source} lead.",
];

const QUALIFIED_SUGGESTIONS: [&str; 3] = [
    "{client} meets criteria. Estimated close: {days} days.",
    "Marked {client} as a {priority} value opportunity.",
    "confirmed budget and timeline with {client}.",
];

const PROPOSAL_SENT_SUGGESTIONS: [&str; 3] = [
    "Proposal sent to {client}. Target close: {days} days.",
    "Followed up on the proposal sent to {client}.",
    "Negotiating terms for this {priority} priority deal.",
];

const CLOSED_SUGGESTIONS: [&str; 3] = [
    "Deal closed! {client} originating from {source} is onboard.",
    "Final contract signed by {client}.",
    "Handover completed for {client} (Agent: {agent}).",
];

/// Template set for a pipeline stage. Unknown stages fall back to the New
/// set so a malformed record still yields usable suggestions.
pub fn templates_for(status: LeadStatus) -> &'static [&'static str; 3] {
    match status {
        LeadStatus::New | LeadStatus::Unknown => &NEW_SUGGESTIONS,
        LeadStatus::Contacted => &CONTACTED_SUGGESTIONS,
        LeadStatus::Qualified => &QUALIFIED_SUGGESTIONS,
        LeadStatus::ProposalSent => &PROPOSAL_SENT_SUGGESTIONS,
        LeadStatus::Closed => &CLOSED_SUGGESTIONS,
    }
}

/// Formats the suggestion chips for one lead. Pure; the caller presents the
/// strings and stores whichever one the user picks.
pub fn suggestions_for(lead: &Lead) -> Vec<String> {
    templates_for(lead.lead_status)
        .iter()
        .map(|template| fill_template(template, lead))
        .collect()
}

fn fill_template(template: &str, lead: &Lead) -> String {
    let name = lead.lead_name.trim();
    let client = if name.is_empty() { "the client" } else { name };
    let agent = lead.agent_name().unwrap_or("me");
    let days = lead
        .time_to_close
        .map(|days| days.to_string())
        .unwrap_or_else(|| "?".to_string());
    let source = lead.lead_source.as_deref().unwrap_or("inquiry");

    template
        .replace("{client}", client)
        .replace("{agent}", agent)
        .replace("{priority}", lead.priority.label())
        .replace("{days}", &days)
        .replace("{source}", source)
}
