use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::model::categories::FALLBACK_CATEGORY;

pub const AWARD_UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub folder_path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scan_date: String,
    #[serde(default = "fallback_category", deserialize_with = "category_or_fallback")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub github_url: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_live: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub response_code: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quality_score: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub estimated_quality: String,
    #[serde(default = "unknown_award", deserialize_with = "award_or_unknown")]
    pub award_status: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub has_readme: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_proposal: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_website_folder: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_mobile_responsive: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_title: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_css: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_js: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_responsive: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content_length: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub document_files: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub html_files: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contest_info: BTreeMap<String, serde_json::Value>,
}

impl Project {
    /// True when the record carries real award information.
    pub fn has_award(&self) -> bool {
        !self.award_status.is_empty() && self.award_status != AWARD_UNKNOWN
    }

    /// Feature flags that are set, in display order.
    pub fn features(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.has_readme {
            out.push("README");
        }
        if self.has_css {
            out.push("CSS");
        }
        if self.has_js {
            out.push("JS");
        }
        if self.has_responsive {
            out.push("Responsive");
        }
        if self.has_mobile_responsive {
            out.push("Mobile");
        }
        out
    }
}

impl Default for Project {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            folder_path: String::new(),
            scan_date: String::new(),
            category: fallback_category(),
            status: String::new(),
            title: String::new(),
            description: String::new(),
            github_url: String::new(),
            is_live: false,
            response_code: 0,
            quality_score: 0,
            estimated_quality: String::new(),
            award_status: unknown_award(),
            has_readme: false,
            has_proposal: false,
            has_website_folder: false,
            has_mobile_responsive: false,
            has_title: false,
            has_css: false,
            has_js: false,
            has_responsive: false,
            content_length: 0,
            document_files: Vec::new(),
            html_files: Vec::new(),
            contest_info: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub scan_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_projects: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scanner_version: String,
}

/// Totals precomputed by the scanner. Displayed as-is, never reconciled
/// against the on-demand aggregates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetStatistics {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_projects: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub live_sites: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_readme: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub awarded_projects: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: BTreeMap<String, u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avg_quality_score: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectsData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub scan_info: ScanInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub statistics: DatasetStatistics,
}

fn fallback_category() -> String {
    FALLBACK_CATEGORY.to_string()
}

fn unknown_award() -> String {
    AWARD_UNKNOWN.to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn category_or_fallback<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    if raw.trim().is_empty() {
        Ok(fallback_category())
    } else {
        Ok(raw)
    }
}

fn award_or_unknown<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(unknown_award))
}
