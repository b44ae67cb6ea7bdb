use super::fixtures::{find_member, NAME_PLACEHOLDER, QUERY_TEMPLATES};
use crate::shared::logging::log_queries_generated;

/// Search queries for a member; unknown identifiers get the raw templates
pub fn generate_queries(nm_id: &str) -> Vec<String> {
    let member = find_member(nm_id);
    let name = member.map(|m| m.name.as_str()).unwrap_or(NAME_PLACEHOLDER);

    let queries: Vec<String> = QUERY_TEMPLATES
        .iter()
        .map(|template| template.replacen(NAME_PLACEHOLDER, name, 1))
        .collect();

    log_queries_generated(nm_id, member.is_some(), queries.len());
    queries
}
