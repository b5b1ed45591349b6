use uuid::Uuid;

pub struct ResourceCreate {
    pub title: String,
    pub description: String,
    pub level: String,
    pub subject: String,
    pub file_url: String,
    pub file_type: String,
    pub is_premium: bool,
    pub created_by: Option<Uuid>,
}

/// Partial update; `None` fields keep their stored value.
#[derive(Default)]
pub struct ResourceUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub level: Option<String>,
    pub subject: Option<String>,
    pub file_url: Option<String>,
    pub file_type: Option<String>,
    pub is_premium: Option<bool>,
}

/// Public catalog filter: exact level match, case-insensitive subject
/// substring match.
#[derive(Default)]
pub struct ResourceFilter {
    pub level: Option<String>,
    pub subject: Option<String>,
}
