use serde::{Deserialize, Serialize};

/// One position in a Network Member's work history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkHistoryEntry {
    pub company: String,
    pub title: String,
    /// Free-form period, e.g. "2018-2020" or "2020-Present"
    pub period: String,
}

/// Subject of a compliance screening, as returned by `GET /api/get_nm_info/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkMember {
    #[serde(default)]
    pub nm_id: String,
    pub name: String,
    pub biography: String,
    pub practice_area: String,
    pub council_name: String,
    pub country: String,
    pub linkedin_url: String,
    #[serde(default)]
    pub work_history: Vec<WorkHistoryEntry>,
}
