use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub id: String,
    pub handler: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyMetrics {
    pub videos_uploaded: String,
    pub videos_ready: String,
    pub ideas_ready: String,
    pub visits: String,
    pub profile_clicks: String,
    pub link_clicks: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculations {
    pub visit_to_profile_conversion: f64,
    pub profile_to_link_conversion: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comments {
    pub bien: String,
    pub mejorar: String,
    pub bloqueos: String,
}

#[derive(Debug, Deserialize)]
pub struct AccountRequest {
    #[serde(default)]
    pub handler: String,
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Deserialize)]
pub struct ValidateLinkRequest {
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsResponse {
    pub accounts: Vec<AccountProfile>,
    pub active_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUpdate {
    pub report_date: Option<String>,
    pub metrics: Option<DailyMetrics>,
    pub comments: Option<Comments>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub report_date: String,
    pub metrics: DailyMetrics,
    pub comments: Comments,
    pub calculations: Calculations,
    pub include_comments: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}
